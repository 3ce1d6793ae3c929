use crate::core::actions::run_benchmark::ports::frame_workload::FrameWorkload;
use crate::core::data::colour::Colour;
use crate::core::signals::sensor_signals::{SensorFrame, SensorSignals};
use crate::surfaces::line_chart::chart::LineChart;
use crate::surfaces::line_chart::errors::LineChartError;
use crate::surfaces::line_chart::series::{LineSeries, SeriesId};
use crate::surfaces::ports::file_presenter::FilePresenterPort;
use log::debug;
use std::path::PathBuf;

pub const LIBRARY: &str = "LineChart";

pub const STRAIN_COLOUR: Colour = Colour { r: 31, g: 119, b: 180 };
pub const TEMPERATURE_COLOUR: Colour = Colour { r: 255, g: 127, b: 14 };

/// Streams [`SensorSignals`] into a two-series [`LineChart`].
///
/// Signal generation happens in `prepare_frame`. `render_frame` covers the
/// in-place data update, relim, autoscale, draw and flush.
pub struct LineChartWorkload<F: FilePresenterPort> {
    chart: LineChart,
    signals: SensorSignals,
    strain: SeriesId,
    temperature: SeriesId,
    pending: Option<SensorFrame>,
    snapshot_path: PathBuf,
    snapshot_dpi: u32,
    files: F,
}

impl<F: FilePresenterPort> LineChartWorkload<F> {
    /// Adds both series at zero, enables the legend and performs one
    /// untimed draw and flush.
    pub fn new(
        mut chart: LineChart,
        signals: SensorSignals,
        snapshot_path: impl Into<PathBuf>,
        snapshot_dpi: u32,
        files: F,
    ) -> Result<Self, LineChartError> {
        let x = signals.x().to_vec();
        let zeros = vec![0.0; x.len()];

        let axes = chart.axes_mut();
        let strain = axes.add_series(LineSeries::new("Strain", STRAIN_COLOUR, x.clone(), zeros.clone())?);
        let temperature = axes.add_series(LineSeries::new("Temperature", TEMPERATURE_COLOUR, x, zeros)?);
        axes.show_legend();
        axes.relim();
        axes.autoscale_view()?;

        chart.draw()?;
        chart.flush_events()?;
        debug!("{}: figure ready", LIBRARY);

        Ok(Self {
            chart,
            signals,
            strain,
            temperature,
            pending: None,
            snapshot_path: snapshot_path.into(),
            snapshot_dpi,
            files,
        })
    }

    #[must_use]
    pub fn chart(&self) -> &LineChart {
        &self.chart
    }
}

impl<F: FilePresenterPort> FrameWorkload for LineChartWorkload<F> {
    type Failure = LineChartError;

    fn library(&self) -> &str {
        LIBRARY
    }

    fn prepare_frame(&mut self, frame_index: u32) -> Result<(), LineChartError> {
        self.pending = Some(self.signals.generate(frame_index));
        Ok(())
    }

    fn render_frame(&mut self) -> Result<(), LineChartError> {
        if let Some(frame) = self.pending.take() {
            let axes = self.chart.axes_mut();
            axes.set_y_data(self.strain, &frame.strain)?;
            axes.set_y_data(self.temperature, &frame.temperature)?;
        }

        let axes = self.chart.axes_mut();
        axes.relim();
        axes.autoscale_view()?;

        self.chart.draw()?;
        self.chart.flush_events()
    }

    fn save_snapshot(&mut self) -> Result<(), LineChartError> {
        self.chart
            .save_figure(&self.snapshot_path, self.snapshot_dpi, &self.files)
    }

    fn close(self) -> Result<(), LineChartError> {
        debug!("{}: closing figure", LIBRARY);
        self.chart.close()
    }
}
