use std::path::Path;

use image::GrayImage;

use crate::ArtError;

/// Load an image file as 8-bit grayscale.
///
/// Validation happens in two stages: the path must name an existing
/// file before decoding is attempted, so a missing file and an
/// undecodable file surface as distinct errors.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<GrayImage, ArtError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ArtError::Path(path.to_path_buf()));
    }
    let image = image::open(path)?;
    Ok(image.to_luma8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_a_path_error() {
        let result = load_grayscale("/definitely/not/here.png");
        assert!(matches!(result, Err(ArtError::Path(_))));
    }

    #[test]
    fn non_image_file_is_a_decode_error() {
        let path = std::env::temp_dir().join("charart_loader_not_an_image.png");
        std::fs::write(&path, b"this is not a png").unwrap();
        let result = load_grayscale(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ArtError::Decode(_))));
    }

    #[test]
    fn png_round_trips_to_grayscale() {
        let path = std::env::temp_dir().join("charart_loader_tiny.png");
        let source = GrayImage::from_fn(4, 3, |x, _| image::Luma([(x * 60) as u8]));
        source.save(&path).unwrap();
        let loaded = load_grayscale(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.get_pixel(0, 0).0[0], 0);
        assert_eq!(loaded.get_pixel(3, 0).0[0], 180);
    }
}
