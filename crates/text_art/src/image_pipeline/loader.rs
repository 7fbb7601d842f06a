use std::path::Path;

use image::GenericImageView;
use log::debug;

use super::buffer::PixelBuffer;
use crate::TextArtError;

/// Decode an image file into a pixel buffer.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<PixelBuffer, TextArtError> {
    let path = path.as_ref();
    let image = image::open(path)?;
    let (width, height) = image.dimensions();
    debug!("decoded {}x{} image from {}", width, height, path.display());
    Ok(PixelBuffer::from(image))
}

/// Decode an in-memory encoded image, guessing the format from its header.
pub fn load_bytes(bytes: &[u8]) -> Result<PixelBuffer, TextArtError> {
    let image = image::load_from_memory(bytes)?;
    let (width, height) = image.dimensions();
    debug!("decoded {}x{} image from {} bytes", width, height, bytes.len());
    Ok(PixelBuffer::from(image))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageOutputFormat, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn decodes_png_bytes() {
        let source = RgbaImage::from_pixel(5, 3, Rgba([10, 20, 30, 40]));
        let mut encoded = Cursor::new(Vec::new());
        source.write_to(&mut encoded, ImageOutputFormat::Png).unwrap();

        let buffer = load_bytes(encoded.get_ref()).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (5, 3));
        assert_eq!(buffer.pixel(4, 2), [10, 20, 30, 40]);
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        let err = load_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, TextArtError::Image(_)));
    }
}
