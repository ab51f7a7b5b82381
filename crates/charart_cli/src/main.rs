use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use charart_render::{
    ArtRenderer, Calibration, CanvasSpec, FontFace, PageStyle, GLYPH_INK_BUDGET,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render images as character art matched by glyph darkness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render character art to stdout for a quick preview
    Preview(PreviewArgs),
    /// Convert an image and write the result to disk
    Convert(ConvertArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input image path; prompted for interactively when omitted
    input: Option<PathBuf>,
    /// Target grid width in characters
    #[arg(long, default_value_t = 200)]
    width: u32,
    #[command(flatten)]
    settings: FontSettings,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image path; prompted for interactively when omitted
    input: Option<PathBuf>,
    /// Output file path
    #[arg(short, long, default_value = "character_image.html")]
    output: PathBuf,
    /// Target grid width in characters
    #[arg(long, default_value_t = 200)]
    width: u32,
    /// Write the bare character grid instead of an HTML page
    #[arg(long, default_value_t = false)]
    text: bool,
    /// Page font size in points
    #[arg(long, default_value_t = 8.0)]
    font_size: f32,
    /// Page line height
    #[arg(long, default_value_t = 0.6)]
    line_height: f32,
    #[command(flatten)]
    settings: FontSettings,
}

#[derive(Parser, Debug, Clone)]
struct FontSettings {
    /// Font file used for glyph calibration (defaults to a system font)
    #[arg(long)]
    font: Option<PathBuf>,
    /// Glyph pixel scale used during calibration
    #[arg(long, default_value_t = 48.0)]
    font_scale: f32,
    /// Glyph stroke thickness used during calibration
    #[arg(long, default_value_t = 1)]
    thickness: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
        Commands::Convert(args) => convert(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let input = resolve_input(args.input)?;
    let renderer = build_renderer(&args.settings)?;
    let grid = renderer
        .render_path(&input, args.width)
        .with_context(|| format!("failed to render {:?}", input))?;

    let stdout = io::stdout();
    charart_render::write_text(&grid, &mut stdout.lock())?;
    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let input = resolve_input(args.input)?;
    let renderer = build_renderer(&args.settings)?;
    let grid = renderer
        .render_path(&input, args.width)
        .with_context(|| format!("failed to render {:?}", input))?;

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {:?}", args.output))?;
    let mut out = BufWriter::new(file);
    if args.text {
        charart_render::write_text(&grid, &mut out)?;
    } else {
        let style = PageStyle { font_size_pt: args.font_size, line_height: args.line_height };
        charart_render::write_html(&grid, &style, &mut out)?;
    }
    out.flush()?;

    println!("Wrote a {}x{} grid to {:?}", grid.width(), grid.height(), args.output);
    Ok(())
}

/// The path is validated before any loading or calibration starts, so
/// an invalid path produces a single diagnostic and no output file.
fn resolve_input(input: Option<PathBuf>) -> Result<PathBuf> {
    let path = match input {
        Some(path) => path,
        None => prompt_for_path()?,
    };
    if !path.is_file() {
        bail!("no image file at {:?}", path);
    }
    Ok(path)
}

fn prompt_for_path() -> Result<PathBuf> {
    print!("Please input a path to an image: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).context("failed to read path from stdin")?;
    Ok(PathBuf::from(line.trim()))
}

fn build_renderer(settings: &FontSettings) -> Result<ArtRenderer> {
    let face = match &settings.font {
        Some(path) => FontFace::from_path(path)
            .with_context(|| format!("failed to load font {:?}", path))?,
        None => FontFace::load_default().context("failed to load a calibration font")?,
    };
    let spec = CanvasSpec {
        px_scale: settings.font_scale.max(1.0),
        thickness: settings.thickness.max(1),
        ..CanvasSpec::default()
    };
    let calibration = Calibration::measure(&face, &spec, GLYPH_INK_BUDGET);
    Ok(ArtRenderer::new(calibration))
}
