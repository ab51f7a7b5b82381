use image::{imageops, GrayImage};

use crate::ArtError;

/// Output height preserving the source aspect ratio at `target_width`,
/// rounded to the nearest integer.
pub fn target_height(width: u32, height: u32, target_width: u32) -> u32 {
    (f64::from(height) * f64::from(target_width) / f64::from(width)).round() as u32
}

/// Scale a grayscale image to `target_width` columns.
///
/// Uses triangle filtering, the area-style choice for downsampling.
/// Resizing to the image's own dimensions is an exact no-op.
pub fn resize_to_width(image: &GrayImage, target_width: u32) -> Result<GrayImage, ArtError> {
    if target_width == 0 {
        return Err(ArtError::InvalidWidth);
    }

    let (width, height) = image.dimensions();
    let new_height = target_height(width, height, target_width).max(1);
    if (target_width, new_height) == (width, height) {
        return Ok(image.clone());
    }

    Ok(imageops::resize(image, target_width, new_height, imageops::FilterType::Triangle))
}
