//! Saving rendered frames as images.

use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::error::{Error, Result};

/// Convert an ARGB u32 buffer to an RGBA image.
///
/// Fails with [`Error::FrameSize`] if `pixels.len()` is not `width * height`.
pub fn to_rgba_image(pixels: &[u32], width: u32, height: u32) -> Result<RgbaImage> {
    let frame_size = || Error::FrameSize {
        len: pixels.len(),
        width,
        height,
    };
    if pixels.len() as u64 != u64::from(width) * u64::from(height) {
        return Err(frame_size());
    }
    let bytes: Vec<u8> = pixels
        .iter()
        .flat_map(|&p| {
            let a = (p >> 24) as u8;
            let r = (p >> 16) as u8;
            let g = (p >> 8) as u8;
            let b = p as u8;
            [r, g, b, a]
        })
        .collect();
    RgbaImage::from_raw(width, height, bytes).ok_or_else(frame_size)
}

/// Write the frame to `path`; the format follows the file extension.
pub fn save_png<P: AsRef<Path>>(path: P, pixels: &[u32], width: u32, height: u32) -> Result<()> {
    let path = path.as_ref();
    to_rgba_image(pixels, width, height)?.save(path)?;
    info!(path = %path.display(), width, height, "saved screenshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_argb_to_rgba() {
        let img = to_rgba_image(&[0xFF10B981, 0x80FF0000], 2, 1).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0x10, 0xB9, 0x81, 0xFF]);
        assert_eq!(img.get_pixel(1, 0).0, [0xFF, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn mismatched_buffer_is_an_error() {
        let err = to_rgba_image(&[0xFF000000; 5], 3, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::FrameSize {
                len: 5,
                width: 3,
                height: 2
            }
        ));

        let path = std::env::temp_dir().join(format!("sortviz-bad-{}.png", std::process::id()));
        assert!(save_png(&path, &[0; 4], 3, 2).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn writes_png_file() {
        let path = std::env::temp_dir().join(format!("sortviz-shot-{}.png", std::process::id()));
        save_png(&path, &[0xFF000000; 6], 3, 2).unwrap();
        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (3, 2));
        let _ = std::fs::remove_file(&path);
    }
}
