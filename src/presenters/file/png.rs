use crate::core::data::pixel_buffer::PixelBuffer;
use crate::surfaces::ports::file_presenter::FilePresenterPort;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Writes snapshots as 8-bit RGB PNG.
#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
        let filepath = filepath.as_ref();
        let width = buffer.pixel_rect().width();
        let height = buffer.pixel_rect().height();

        let file = BufWriter::new(File::create(filepath)?);
        let mut encoder = png::Encoder::new(file, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().map_err(encoding_error)?;
        writer.write_image_data(buffer.buffer()).map_err(encoding_error)?;
        writer.finish().map_err(encoding_error)?;

        info!("wrote {}x{} snapshot to {}", width, height, filepath.display());
        Ok(())
    }
}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

fn encoding_error(err: png::EncodingError) -> io::Error {
    match err {
        png::EncodingError::IoError(err) => err,
        other => io::Error::other(other.to_string()),
    }
}
