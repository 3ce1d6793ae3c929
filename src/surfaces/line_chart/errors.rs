use crate::core::data::data_rect::DataRectError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::raster::draw_text::TextError;
use crate::surfaces::ports::frame_presenter::PresentError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum LineChartError {
    SeriesLengthMismatch { expected: usize, actual: usize },
    UnknownSeries { index: usize },
    InvalidDpi(u32),
    View(DataRectError),
    Canvas(PixelRectError),
    Font(TextError),
    Present(PresentError),
    Io(std::io::Error),
}

impl fmt::Display for LineChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeriesLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "series data has {} values but the series has {} x values",
                    actual, expected
                )
            }
            Self::UnknownSeries { index } => write!(f, "no line series with index {}", index),
            Self::InvalidDpi(dpi) => write!(f, "dpi must be greater than zero, got {}", dpi),
            Self::View(err) => write!(f, "view limits error: {}", err),
            Self::Canvas(err) => write!(f, "canvas error: {}", err),
            Self::Font(err) => write!(f, "font error: {}", err),
            Self::Present(err) => write!(f, "present error: {}", err),
            Self::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl Error for LineChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::Canvas(err) => Some(err),
            Self::Font(err) => Some(err),
            Self::Present(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DataRectError> for LineChartError {
    fn from(err: DataRectError) -> Self {
        Self::View(err)
    }
}

impl From<PixelRectError> for LineChartError {
    fn from(err: PixelRectError) -> Self {
        Self::Canvas(err)
    }
}

impl From<TextError> for LineChartError {
    fn from(err: TextError) -> Self {
        Self::Font(err)
    }
}

impl From<PresentError> for LineChartError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}

impl From<std::io::Error> for LineChartError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
