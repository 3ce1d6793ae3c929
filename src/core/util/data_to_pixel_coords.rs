use crate::core::data::data_rect::DataRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DataToPixelCoordsError {
    NonFiniteValue { x: f64, y: f64 },
}

impl fmt::Display for DataToPixelCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteValue { x, y } => {
                write!(f, "data point (x: {}, y: {}) is not finite", x, y)
            }
        }
    }
}

impl Error for DataToPixelCoordsError {}

/// Maps a data-space point into `pixel_rect`, flipping y so larger values sit
/// higher on screen. Points outside `data_rect` land outside `pixel_rect`;
/// the rasterizer clips them.
pub fn data_to_pixel_coords(
    x: f64,
    y: f64,
    data_rect: DataRect,
    pixel_rect: PixelRect,
) -> Result<Point, DataToPixelCoordsError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(DataToPixelCoordsError::NonFiniteValue { x, y });
    }

    let span_x = f64::from(pixel_rect.width() - 1);
    let span_y = f64::from(pixel_rect.height() - 1);
    let relative_x = (x - data_rect.x_min()) / data_rect.width();
    let relative_y = (y - data_rect.y_min()) / data_rect.height();

    let pixel_x = f64::from(pixel_rect.top_left().x) + relative_x * span_x;
    let pixel_y = f64::from(pixel_rect.bottom_right().y) - relative_y * span_y;

    Ok(Point {
        x: pixel_x.round() as i32,
        y: pixel_y.round() as i32,
    })
}
