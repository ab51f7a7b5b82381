mod art;
mod glyph;
mod image_pipeline;

use std::path::{Path, PathBuf};

use image::GrayImage;

pub use art::{
    grid::CharGrid,
    html::{write_html, write_text, PageStyle},
    map::{pixel_darkness, DarknessMapper},
};
pub use glyph::{
    calibrate::{charset, Calibration, CharDarkness},
    darkness::{ink_percentage, BINARY_THRESHOLD, GLYPH_INK_BUDGET},
    raster::{rasterize_glyph, CanvasSpec, FontFace},
};
pub use image_pipeline::{
    loader::load_grayscale,
    resize::{resize_to_width, target_height},
};

#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    #[error("no image file at {0}")]
    Path(PathBuf),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to read font file: {0}")]
    FontIo(#[from] std::io::Error),
    #[error("font data could not be parsed")]
    FontData,
    #[error("no usable font found in the default locations")]
    FontNotFound,
    #[error("target width must be at least 1")]
    InvalidWidth,
}

/// Walks a grayscale pixel grid and matches every pixel to the
/// calibrated character nearest in darkness.
///
/// The calibration is injected at construction, so tests can swap in
/// hand-picked tables and a pre-computed table can replace live
/// glyph measurement.
pub struct ArtRenderer {
    calibration: Calibration,
}

impl ArtRenderer {
    pub fn new(calibration: Calibration) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Load, resize and map an image file in one pass. Load and
    /// decode failures abort before any rendering starts.
    pub fn render_path<P: AsRef<Path>>(
        &self,
        path: P,
        target_width: u32,
    ) -> Result<CharGrid, ArtError> {
        let gray = load_grayscale(path)?;
        let resized = resize_to_width(&gray, target_width)?;
        Ok(self.render_image(&resized))
    }

    /// Map an already-resized grayscale image cell for cell.
    pub fn render_image(&self, pixels: &GrayImage) -> CharGrid {
        let mapper = DarknessMapper::new(&self.calibration);
        let (width, height) = pixels.dimensions();
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(mapper.map(pixels.get_pixel(x, y).0[0]));
            }
        }
        CharGrid::new(width, height, cells)
    }
}

#[cfg(test)]
mod tests {
    use image::Luma;

    use super::*;

    fn test_calibration() -> Calibration {
        Calibration::from_entries(vec![(' ', 0.0), ('.', 12.0), ('+', 47.0), ('#', 92.0)])
    }

    #[test]
    fn checkerboard_maps_to_extreme_characters() {
        let renderer = ArtRenderer::new(test_calibration());
        let pixels = GrayImage::from_fn(2, 2, |x, y| Luma([if x == y { 0 } else { 255 }]));
        let resized = resize_to_width(&pixels, 2).unwrap();
        let grid = renderer.render_image(&resized);

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(0, 0), '#');
        assert_eq!(grid.get(1, 1), '#');
        assert_eq!(grid.get(1, 0), ' ');
        assert_eq!(grid.get(0, 1), ' ');
    }

    #[test]
    fn all_white_maps_to_the_lightest_character() {
        let renderer = ArtRenderer::new(test_calibration());
        let pixels = GrayImage::from_pixel(3, 2, Luma([255]));
        let grid = renderer.render_image(&pixels);
        let lightest = renderer.calibration().lightest();
        let rendered: Vec<String> = grid.rows().collect();
        assert!(rendered.iter().all(|row| row.chars().all(|ch| ch == lightest)));
    }

    #[test]
    fn all_black_maps_to_the_darkest_character() {
        let renderer = ArtRenderer::new(test_calibration());
        let pixels = GrayImage::from_pixel(3, 2, Luma([0]));
        let grid = renderer.render_image(&pixels);
        let darkest = renderer.calibration().darkest();
        let rendered: Vec<String> = grid.rows().collect();
        assert!(rendered.iter().all(|row| row.chars().all(|ch| ch == darkest)));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = ArtRenderer::new(test_calibration());
        let pixels = GrayImage::from_fn(5, 4, |x, y| Luma([(x * 50 + y * 13) as u8]));

        let first = renderer.render_image(&pixels);
        let second = renderer.render_image(&pixels);
        assert_eq!(first, second);

        let mut a = Vec::new();
        let mut b = Vec::new();
        write_html(&first, &PageStyle::default(), &mut a).unwrap();
        write_html(&second, &PageStyle::default(), &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn render_path_aborts_on_missing_file() {
        let renderer = ArtRenderer::new(test_calibration());
        let result = renderer.render_path("/nowhere/missing.png", 10);
        assert!(matches!(result, Err(ArtError::Path(_))));
    }

    #[test]
    fn render_path_resizes_before_mapping() {
        let path = std::env::temp_dir().join("charart_lib_gradient.png");
        let source = GrayImage::from_pixel(100, 50, Luma([255]));
        source.save(&path).unwrap();

        let renderer = ArtRenderer::new(test_calibration());
        let grid = renderer.render_path(&path, 20).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.get(0, 0), ' ');
    }
}
