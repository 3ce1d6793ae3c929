use crate::core::data::data_rect::DataRect;
use crate::surfaces::line_chart::errors::LineChartError;
use crate::surfaces::line_chart::series::{DataBounds, LineSeries, SeriesId};

/// Fraction of the data span added on each side by `autoscale_view`.
const DEFAULT_MARGIN: f64 = 0.05;
/// Padding used when all data on an axis sits on one value.
const SINGULAR_EXPANDER: f64 = 0.05;

/// One plotting area: its line series, the data limits from the last
/// `relim`, and the view limits the series are drawn against.
#[derive(Debug, Clone)]
pub struct Axes {
    series: Vec<LineSeries>,
    data_limits: Option<DataBounds>,
    view: DataRect,
    margin: f64,
    legend: bool,
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

impl Axes {
    #[must_use]
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            data_limits: None,
            view: DataRect::UNIT,
            margin: DEFAULT_MARGIN,
            legend: false,
        }
    }

    pub fn add_series(&mut self, series: LineSeries) -> SeriesId {
        self.series.push(series);
        SeriesId(self.series.len() - 1)
    }

    #[must_use]
    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    pub fn set_y_data(&mut self, id: SeriesId, y: &[f64]) -> Result<(), LineChartError> {
        self.series
            .get_mut(id.0)
            .ok_or(LineChartError::UnknownSeries { index: id.0 })?
            .set_y_data(y)
    }

    pub fn show_legend(&mut self) {
        self.legend = true;
    }

    #[must_use]
    pub fn legend_visible(&self) -> bool {
        self.legend
    }

    #[must_use]
    pub fn data_limits(&self) -> Option<DataBounds> {
        self.data_limits
    }

    #[must_use]
    pub fn view(&self) -> DataRect {
        self.view
    }

    /// Recomputes data limits from the current series values.
    pub fn relim(&mut self) {
        self.data_limits = self
            .series
            .iter()
            .filter_map(LineSeries::finite_bounds)
            .reduce(DataBounds::union);
    }

    /// Fits the view limits to the data limits plus margins. Without data
    /// limits the view is left untouched.
    pub fn autoscale_view(&mut self) -> Result<(), LineChartError> {
        let Some(limits) = self.data_limits else {
            return Ok(());
        };

        let (x_min, x_max) = expand_axis(limits.x_min, limits.x_max, self.margin);
        let (y_min, y_max) = expand_axis(limits.y_min, limits.y_max, self.margin);

        self.view = DataRect::new(x_min, y_min, x_max, y_max)?;
        Ok(())
    }
}

fn expand_axis(min: f64, max: f64, margin: f64) -> (f64, f64) {
    let (min, max) = if max > min {
        (min, max)
    } else if min == 0.0 && max == 0.0 {
        (-SINGULAR_EXPANDER, SINGULAR_EXPANDER)
    } else {
        (
            min - SINGULAR_EXPANDER * min.abs(),
            max + SINGULAR_EXPANDER * max.abs(),
        )
    };

    let pad = (max - min) * margin;
    (min - pad, max + pad)
}

/// Evenly spaced tick positions on a 1/2/2.5/5 x 10^n step inside
/// `min..=max`, at most roughly `max_ticks` of them.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, max_ticks: u32) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min || max_ticks == 0 {
        return Vec::new();
    }

    let raw_step = (max - min) / f64::from(max_ticks);
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&nice| nice >= residual)
        .unwrap_or(10.0)
        * magnitude;

    let tolerance = step * 1e-9;
    let first = (min / step).ceil();

    (0_u32..)
        .map(|k| (first + f64::from(k)) * step)
        .take_while(|&tick| tick <= max + tolerance)
        .collect()
}

/// Formats a tick value with just enough decimals to tell ticks `step`
/// apart.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = (0..=6)
        .find(|&d| {
            let scaled = step.abs() * 10_f64.powi(d);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0)
        })
        .unwrap_or(6) as usize;
    let label = format!("{:.*}", decimals, value);

    // -0 and -0.00 read as noise on an axis
    if label.starts_with('-') && label[1..].chars().all(|c| c == '0' || c == '.') {
        label[1..].to_string()
    } else {
        label
    }
}
