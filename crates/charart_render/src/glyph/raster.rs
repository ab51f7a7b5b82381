use std::path::Path;

use ab_glyph::{point, Font, FontVec, PxScale};
use image::{GrayImage, Luma};

use crate::ArtError;

const WHITE: Luma<u8> = Luma([255]);

/// Well-known font locations probed by [`FontFace::load_default`].
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/gnu-free/FreeMono.otf",
];

/// Canvas size and font configuration a glyph is rasterized with.
#[derive(Clone, Copy, Debug)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    /// Pixel scale the glyph outline is rasterized at.
    pub px_scale: f32,
    /// Stroke thickness; values above 1 dilate the ink.
    pub thickness: u32,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self { width: 300, height: 300, px_scale: 48.0, thickness: 1 }
    }
}

/// A loaded font used for glyph calibration.
pub struct FontFace {
    font: FontVec,
}

impl FontFace {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ArtError> {
        let font = FontVec::try_from_vec(data).map_err(|_| ArtError::FontData)?;
        Ok(Self { font })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ArtError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Probe the candidate list for an installed font.
    pub fn load_default() -> Result<Self, ArtError> {
        for candidate in FONT_CANDIDATES {
            let path = Path::new(candidate);
            if path.is_file() {
                return Self::from_path(path);
            }
        }
        Err(ArtError::FontNotFound)
    }
}

/// Draw `ch` centered on a white canvas with black strokes.
///
/// The draw origin comes from the measured pixel bounding box:
/// `x = (canvas_w - text_w) / 2` with truncating division, and the
/// baseline sits at `y = (canvas_h + text_h) / 2`, so the ink box is
/// centered both ways. Characters without an outline (the space, or
/// anything the font does not cover) leave the canvas blank.
pub fn rasterize_glyph(face: &FontFace, ch: char, spec: &CanvasSpec) -> GrayImage {
    let mut canvas = GrayImage::from_pixel(spec.width, spec.height, WHITE);

    let scale = PxScale::from(spec.px_scale);
    let glyph = face.font.glyph_id(ch).with_scale_and_position(scale, point(0.0, 0.0));
    let Some(outlined) = face.font.outline_glyph(glyph) else {
        return canvas;
    };

    let bounds = outlined.px_bounds();
    let text_w = bounds.width() as i32;
    let text_h = bounds.height() as i32;
    let text_x = (spec.width as i32 - text_w) / 2;
    let top = (spec.height as i32 + text_h) / 2 - text_h;

    outlined.draw(|x, y, coverage| {
        let px = text_x + x as i32;
        let py = top + y as i32;
        if px < 0 || py < 0 || px >= spec.width as i32 || py >= spec.height as i32 {
            return;
        }
        let ink = 255 - (coverage.clamp(0.0, 1.0) * 255.0) as u8;
        let cell = canvas.get_pixel_mut(px as u32, py as u32);
        cell.0[0] = cell.0[0].min(ink);
    });

    for _ in 1..spec.thickness {
        canvas = dilate_ink(&canvas);
    }

    canvas
}

/// One round of 4-neighbour minimum filtering. Ink is dark, so taking
/// the minimum spreads every stroke outward by a pixel.
fn dilate_ink(bitmap: &GrayImage) -> GrayImage {
    let (w, h) = bitmap.dimensions();
    let mut out = bitmap.clone();
    for y in 0..h {
        for x in 0..w {
            let mut v = bitmap.get_pixel(x, y).0[0];
            if x > 0 {
                v = v.min(bitmap.get_pixel(x - 1, y).0[0]);
            }
            if x + 1 < w {
                v = v.min(bitmap.get_pixel(x + 1, y).0[0]);
            }
            if y > 0 {
                v = v.min(bitmap.get_pixel(x, y - 1).0[0]);
            }
            if y + 1 < h {
                v = v.min(bitmap.get_pixel(x, y + 1).0[0]);
            }
            out.put_pixel(x, y, Luma([v]));
        }
    }
    out
}
