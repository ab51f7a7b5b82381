use crate::glyph::calibrate::Calibration;

/// Linear inverse-intensity darkness of one pixel, 0 (white) to 100
/// (black). Kept independent from the glyph ink percentage, which is
/// normalized against a canvas ink budget instead.
pub fn pixel_darkness(intensity: u8) -> f32 {
    f32::from(255 - intensity) / 255.0 * 100.0
}

/// Matches pixel intensities against a calibration table.
pub struct DarknessMapper<'a> {
    calibration: &'a Calibration,
}

impl<'a> DarknessMapper<'a> {
    pub fn new(calibration: &'a Calibration) -> Self {
        Self { calibration }
    }

    pub fn map(&self, intensity: u8) -> char {
        self.calibration.nearest(pixel_darkness(intensity))
    }
}
