use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DataRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for DataRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "data rect size must be positive and finite: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for DataRectError {}

/// Axis-aligned region in data coordinates, y growing upwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DataRect {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl DataRect {
    pub const UNIT: DataRect = DataRect {
        x_min: 0.0,
        y_min: 0.0,
        x_max: 1.0,
        y_max: 1.0,
    };

    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self, DataRectError> {
        let width = x_max - x_min;
        let height = y_max - y_min;

        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(DataRectError::InvalidSize { width, height });
        }

        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_rect_dimensions() {
        let rect = DataRect::new(-1.0, 20.0, 199.0, 30.0).unwrap();

        assert_eq!(rect.width(), 200.0);
        assert_eq!(rect.height(), 10.0);
    }

    #[test]
    fn test_data_rect_rejects_empty_extent() {
        assert_eq!(
            DataRect::new(0.0, 5.0, 10.0, 5.0),
            Err(DataRectError::InvalidSize { width: 10.0, height: 0.0 })
        );
    }

    #[test]
    fn test_data_rect_rejects_non_finite_extent() {
        assert!(DataRect::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
        assert!(DataRect::new(0.0, f64::NAN, 1.0, 1.0).is_err());
    }
}
