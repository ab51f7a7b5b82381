use std::io::{self, Write};

use super::grid::CharGrid;

/// Presentation knobs for the HTML page. The compressed line height
/// keeps the character cells close to square on screen.
#[derive(Clone, Copy, Debug)]
pub struct PageStyle {
    pub font_size_pt: f32,
    pub line_height: f32,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self { font_size_pt: 8.0, line_height: 0.6 }
    }
}

/// One line per image row, no separators between characters.
pub fn write_text<W: Write>(grid: &CharGrid, out: &mut W) -> io::Result<()> {
    for row in grid.rows() {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

/// A minimal monospace page wrapping the grid in a `<pre>` block.
pub fn write_html<W: Write>(grid: &CharGrid, style: &PageStyle, out: &mut W) -> io::Result<()> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "  <meta charset=\"UTF-8\">")?;
    writeln!(out, "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
    writeln!(out, "  <title>Character Image</title>")?;
    writeln!(out, "  <style>")?;
    writeln!(out, "    pre {{")?;
    writeln!(out, "      font-size: {}pt;", style.font_size_pt)?;
    writeln!(out, "      font-family: monospace;")?;
    writeln!(out, "      line-height: {};", style.line_height)?;
    writeln!(out, "    }}")?;
    writeln!(out, "  </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<pre>")?;
    for row in grid.rows() {
        write_escaped_row(&row, out)?;
    }
    writeln!(out, "</pre>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

// The charset includes markup-significant punctuation, which must not
// terminate the pre block early.
fn write_escaped_row<W: Write>(row: &str, out: &mut W) -> io::Result<()> {
    for ch in row.chars() {
        match ch {
            '&' => out.write_all(b"&amp;")?,
            '<' => out.write_all(b"&lt;")?,
            '>' => out.write_all(b"&gt;")?,
            _ => write!(out, "{}", ch)?,
        }
    }
    out.write_all(b"\n")
}
