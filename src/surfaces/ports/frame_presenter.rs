use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum PresentError {
    Io(std::io::Error),
    Surface(String),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::Surface(message) => write!(f, "presentation surface error: {}", message),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Surface(_) => None,
        }
    }
}

impl From<std::io::Error> for PresentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Receives every flushed frame of a render surface, e.g. an on-screen window.
pub trait FramePresenterPort {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), PresentError>;

    fn set_title(&mut self, _title: &str) {}

    fn close(&mut self) -> Result<(), PresentError> {
        Ok(())
    }
}
