use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a finished frame to a file in some image format.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;
}
