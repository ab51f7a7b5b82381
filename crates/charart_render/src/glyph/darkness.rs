use image::GrayImage;

/// Intensities above this count as paper, everything else as ink.
/// Thresholding folds antialiasing grays into a binary decision.
pub const BINARY_THRESHOLD: u8 = 127;

/// Fixed percentage denominator for glyph ink, calibrated to the
/// densest glyph at the default canvas and font configuration. The
/// divisor stays constant rather than tracking the bitmap's pixel
/// count, so calibration values keep one comparable scale.
pub const GLYPH_INK_BUDGET: f32 = 641.0;

/// Share of the ink budget covered by black pixels, as a percentage
/// clamped to [0, 100].
pub fn ink_percentage(bitmap: &GrayImage, ink_budget: f32) -> f32 {
    let ink = bitmap.pixels().filter(|p| p.0[0] <= BINARY_THRESHOLD).count();
    (ink as f32 / ink_budget * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn blank_canvas_is_zero() {
        let bitmap = GrayImage::from_pixel(300, 300, Luma([255]));
        assert_eq!(ink_percentage(&bitmap, GLYPH_INK_BUDGET), 0.0);
    }

    #[test]
    fn counts_pixels_at_or_below_threshold() {
        let mut bitmap = GrayImage::from_pixel(10, 10, Luma([255]));
        bitmap.put_pixel(0, 0, Luma([0]));
        bitmap.put_pixel(1, 0, Luma([127]));
        bitmap.put_pixel(2, 0, Luma([128]));
        let got = ink_percentage(&bitmap, 200.0);
        assert!((got - 1.0).abs() < 1e-6);
    }

    #[test]
    fn percentage_is_clamped_to_hundred() {
        let bitmap = GrayImage::from_pixel(10, 10, Luma([0]));
        assert_eq!(ink_percentage(&bitmap, 50.0), 100.0);
    }
}
