use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) writer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
        // P6 means binary RGB, then width, height and max colour value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
        writeln!(writer, "255")?;
        writer.write_all(buffer.buffer())?;

        Ok(())
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(filepath)?);
        self.write_to(buffer, &mut writer)?;
        writer.flush()
    }
}
