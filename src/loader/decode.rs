//! Image decoding for avatars.

use image::imageops::FilterType;
use image::GenericImageView;

use crate::error::LoadError;

/// Avatars larger than this on either side are scaled down before upload
pub const MAX_AVATAR_DIMENSION: u32 = 256;

/// Decoded RGBA8 pixels, row-major
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Decode PNG, JPEG or GIF bytes. Anything else is a `LoadError::Decode`.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, LoadError> {
    if bytes.is_empty() {
        return Err(LoadError::Decode("empty response body".to_string()));
    }

    let decoded = image::load_from_memory(bytes)?;

    let (w, h) = decoded.dimensions();
    let scale = (MAX_AVATAR_DIMENSION as f32 / w.max(h) as f32).min(1.0);
    let resized = if scale < 1.0 {
        decoded.resize(
            (w as f32 * scale).max(1.0) as u32,
            (h as f32 * scale).max(1.0) as u32,
            FilterType::Triangle,
        )
    } else {
        decoded
    };

    let rgba = resized.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
pub(crate) fn encode_test_png(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    use std::io::Cursor;

    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(pixel));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("png encoding into memory");
    out.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_png() {
        let bytes = encode_test_png(3, 2, [10, 20, 30, 255]);
        let img = decode_image(&bytes).unwrap();
        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(img.rgba.len(), 3 * 2 * 4);
        assert_eq!(&img.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_malformed_bytes_are_decode_errors() {
        assert!(matches!(
            decode_image(b"<html>not found</html>"),
            Err(LoadError::Decode(_))
        ));
        assert!(matches!(decode_image(&[]), Err(LoadError::Decode(_))));

        // Valid PNG signature followed by garbage
        let mut truncated = encode_test_png(4, 4, [0, 0, 0, 255]);
        truncated.truncate(20);
        assert!(matches!(decode_image(&truncated), Err(LoadError::Decode(_))));
    }

    #[test]
    fn test_large_avatar_is_scaled_down() {
        let bytes = encode_test_png(MAX_AVATAR_DIMENSION * 2, MAX_AVATAR_DIMENSION, [1, 2, 3, 255]);
        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.width, MAX_AVATAR_DIMENSION);
        assert_eq!(img.height, MAX_AVATAR_DIMENSION / 2);
    }
}
