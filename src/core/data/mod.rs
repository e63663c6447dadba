pub mod colour;
pub mod orientation;
pub mod pixel_buffer;
pub mod point;
pub mod viewport;

pub use colour::{Colour, Rgba};
pub use orientation::Orientation;
pub use pixel_buffer::{PixelBuffer, PixelBufferError};
pub use point::Point;
pub use viewport::{Viewport, ViewportError};
