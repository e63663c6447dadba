use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Size of the surface a frame is produced for, in render-target units.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
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
    pub fn center(&self) -> Point {
        Point {
            x: f64::from(self.width) / 2.0,
            y: f64::from(self.height) / 2.0,
        }
    }

    #[must_use]
    pub fn min_dimension(&self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}
