//! Conversion from the RGB raster to the RGBA layout window surfaces expect.

use crate::core::data::pixel_buffer::PixelBuffer;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("surface holds {actual} bytes, a {width}x{height} RGBA frame needs {expected}")]
pub struct SurfaceSizeMismatch {
    pub width: u32,
    pub height: u32,
    pub expected: usize,
    pub actual: usize,
}

/// Copies `buffer` into an RGBA surface of the same dimensions, fully opaque.
pub fn copy_rgb_to_rgba(buffer: &PixelBuffer, dst: &mut [u8]) -> Result<(), SurfaceSizeMismatch> {
    let expected = buffer.width() as usize * buffer.height() as usize * 4;

    if dst.len() != expected {
        return Err(SurfaceSizeMismatch {
            width: buffer.width(),
            height: buffer.height(),
            expected,
            actual: dst.len(),
        });
    }

    dst.par_chunks_exact_mut(4)
        .zip(buffer.buffer().par_chunks_exact(3))
        .for_each(|(dst_pixel, src_pixel)| {
            dst_pixel[..3].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_known_values() {
        let buffer = PixelBuffer::from_data(
            2,
            2,
            vec![
                255, 0, 0, // red
                0, 255, 0, // green
                0, 0, 255, // blue
                255, 255, 255, // white
            ],
        )
        .unwrap();
        let mut dst = vec![0; 16];

        copy_rgb_to_rgba(&buffer, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn rejects_surface_of_wrong_size() {
        let buffer = PixelBuffer::new(3, 2).unwrap();
        let mut dst = vec![0; 3 * 2 * 3];

        let err = copy_rgb_to_rgba(&buffer, &mut dst).unwrap_err();

        assert_eq!(err.expected, 24);
        assert_eq!(err.actual, 18);
        assert!(dst.iter().all(|&byte| byte == 0));
    }
}
