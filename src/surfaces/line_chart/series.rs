use crate::core::data::colour::Colour;
use crate::surfaces::line_chart::errors::LineChartError;

/// Handle returned by [`Axes::add_series`](super::axes::Axes::add_series).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SeriesId(pub(crate) usize);

/// Finite extent of some data, used by `relim`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    #[must_use]
    pub fn union(self, other: DataBounds) -> DataBounds {
        DataBounds {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    label: String,
    colour: Colour,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LineSeries {
    pub fn new(
        label: impl Into<String>,
        colour: Colour,
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> Result<Self, LineChartError> {
        if x.len() != y.len() {
            return Err(LineChartError::SeriesLengthMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }

        Ok(Self {
            label: label.into(),
            colour,
            x,
            y,
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Overwrites the y values in place. The x values stay fixed, so the new
    /// data must have the same length.
    pub fn set_y_data(&mut self, y: &[f64]) -> Result<(), LineChartError> {
        if y.len() != self.y.len() {
            return Err(LineChartError::SeriesLengthMismatch {
                expected: self.y.len(),
                actual: y.len(),
            });
        }

        self.y.copy_from_slice(y);
        Ok(())
    }

    /// Extent of the finite points, or `None` if there are none.
    #[must_use]
    pub fn finite_bounds(&self) -> Option<DataBounds> {
        self.x
            .iter()
            .zip(&self.y)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| DataBounds {
                x_min: x,
                x_max: x,
                y_min: y,
                y_max: y,
            })
            .reduce(DataBounds::union)
    }
}
