use crate::core::data::pixel_rect::PixelRectError;
use crate::core::raster::draw_text::TextError;
use crate::surfaces::ports::frame_presenter::PresentError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    PointCountMismatch { expected: usize, actual: usize },
    TriangleIndexOutOfRange { triangle: usize, index: u32, point_count: usize },
    InvalidResolution { u: u32, v: u32 },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointCountMismatch { expected, actual } => {
                write!(f, "mesh has {} points, got {}", expected, actual)
            }
            Self::TriangleIndexOutOfRange {
                triangle,
                index,
                point_count,
            } => {
                write!(
                    f,
                    "triangle {} references point {} but the mesh has {} points",
                    triangle, index, point_count
                )
            }
            Self::InvalidResolution { u, v } => {
                write!(f, "surface resolution must be at least 3x2, got {}x{}", u, v)
            }
        }
    }
}

impl Error for MeshError {}

#[derive(Debug)]
pub enum MeshPlotterError {
    NoMesh,
    Mesh(MeshError),
    Canvas(PixelRectError),
    Font(TextError),
    Present(PresentError),
    Io(std::io::Error),
}

impl fmt::Display for MeshPlotterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMesh => write!(f, "no mesh has been added to the plotter"),
            Self::Mesh(err) => write!(f, "mesh error: {}", err),
            Self::Canvas(err) => write!(f, "canvas error: {}", err),
            Self::Font(err) => write!(f, "font error: {}", err),
            Self::Present(err) => write!(f, "presentation error: {}", err),
            Self::Io(err) => write!(f, "screenshot error: {}", err),
        }
    }
}

impl Error for MeshPlotterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoMesh => None,
            Self::Mesh(err) => Some(err),
            Self::Canvas(err) => Some(err),
            Self::Font(err) => Some(err),
            Self::Present(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<MeshError> for MeshPlotterError {
    fn from(err: MeshError) -> Self {
        Self::Mesh(err)
    }
}

impl From<PixelRectError> for MeshPlotterError {
    fn from(err: PixelRectError) -> Self {
        Self::Canvas(err)
    }
}

impl From<TextError> for MeshPlotterError {
    fn from(err: TextError) -> Self {
        Self::Font(err)
    }
}

impl From<PresentError> for MeshPlotterError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}

impl From<std::io::Error> for MeshPlotterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
