use crate::core::data::colour::{Colour, Rgba};
use rayon::prelude::*;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn dimensions_to_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel buffer size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("pixel at x:{x}, y:{y} outside of {width}x{height} buffer")]
    PixelOutsideBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
    #[error("expected buffer size {expected} does not match buffer size {buffer_size}")]
    BoundsMismatch { expected: usize, buffer_size: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Tightly packed RGB image, row-major with the origin at the top left.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            buffer: vec![0; dimensions_to_buffer_size(width, height)],
        })
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        let expected = dimensions_to_buffer_size(width, height);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    pub fn fill(&mut self, colour: Colour) {
        self.buffer
            .par_chunks_exact_mut(BYTES_PER_PIXEL)
            .for_each(|pixel| {
                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            });
    }

    #[must_use]
    pub fn pixel(&self, x: i64, y: i64) -> Option<Colour> {
        let index = self.index_of(x, y)?;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.checked_index_of(x, y)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Composites `colour` over the pixel currently stored at (x, y).
    pub fn blend_pixel(&mut self, x: i64, y: i64, colour: Rgba) -> Result<(), PixelBufferError> {
        let index = self.checked_index_of(x, y)?;
        self.blend_at(index, colour);

        Ok(())
    }

    /// Like [`Self::blend_pixel`], but pixels outside the buffer are skipped.
    /// Returns whether (x, y) was inside.
    pub fn blend_pixel_clipped(&mut self, x: i64, y: i64, colour: Rgba) -> bool {
        match self.index_of(x, y) {
            Some(index) => {
                self.blend_at(index, colour);
                true
            }
            None => false,
        }
    }

    fn blend_at(&mut self, index: usize, colour: Rgba) {
        let base = Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        };
        let blended = colour.blend_over(base);

        self.buffer[index] = blended.r;
        self.buffer[index + 1] = blended.g;
        self.buffer[index + 2] = blended.b;
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }

        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    fn checked_index_of(&self, x: i64, y: i64) -> Result<usize, PixelBufferError> {
        self.index_of(x, y)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
    }
}
