use crate::controllers::bench::bench_config::{BenchConfig, BenchConfigError};
use crate::controllers::bench::ports::presenter_factory::FramePresenterFactoryPort;
use crate::controllers::bench::summary::write_summary;
use crate::core::actions::run_benchmark::run_benchmark::{RunBenchmarkError, run_benchmark};
use crate::core::data::benchmark_result::BenchmarkResult;
use crate::core::pacing::clock::{Clock, SystemClock};
use crate::core::pacing::pacer::{Pacer, PacerError};
use crate::core::signals::ripple::RippleDeformer;
use crate::core::signals::sensor_signals::{SensorSignals, SensorSignalsError};
use crate::presenters::file::png::PngFilePresenter;
use crate::storage::write_results_csv::{WriteResultsCsvError, write_results_csv};
use crate::surfaces::line_chart::chart::LineChart;
use crate::surfaces::line_chart::errors::LineChartError;
use crate::surfaces::mesh::ellipsoid::{
    DEFAULT_U_RESOLUTION, DEFAULT_V_RESOLUTION, parametric_ellipsoid,
};
use crate::surfaces::mesh::errors::{MeshError, MeshPlotterError};
use crate::surfaces::mesh::plotter::MeshPlotter;
use crate::surfaces::ports::frame_presenter::PresentError;
use crate::workloads::line_chart::{self, LineChartWorkload};
use crate::workloads::mesh_deformation::{self, MeshDeformationWorkload};
use log::debug;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

pub const MESH_WINDOW_WIDTH: u32 = 800;
pub const MESH_WINDOW_HEIGHT: u32 = 600;

const ELLIPSOID_RADII: (f64, f64, f64) = (1.0, 0.35, 0.18);

#[derive(Debug)]
pub enum BenchError {
    Config(BenchConfigError),
    Pacer(PacerError),
    Signals(SensorSignalsError),
    Present(PresentError),
    LineChart(RunBenchmarkError<LineChartError>),
    Mesh(RunBenchmarkError<MeshPlotterError>),
    Results(WriteResultsCsvError),
    Io(std::io::Error),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::Pacer(err) => write!(f, "pacer error: {}", err),
            Self::Signals(err) => write!(f, "signal generator error: {}", err),
            Self::Present(err) => write!(f, "failed to open presenter: {}", err),
            Self::LineChart(err) => write!(f, "{} benchmark failed: {}", line_chart::LIBRARY, err),
            Self::Mesh(err) => write!(f, "{} benchmark failed: {}", mesh_deformation::LIBRARY, err),
            Self::Results(err) => write!(f, "{}", err),
            Self::Io(err) => write!(f, "console error: {}", err),
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Pacer(err) => Some(err),
            Self::Signals(err) => Some(err),
            Self::Present(err) => Some(err),
            Self::LineChart(err) => Some(err),
            Self::Mesh(err) => Some(err),
            Self::Results(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<BenchConfigError> for BenchError {
    fn from(err: BenchConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<PacerError> for BenchError {
    fn from(err: PacerError) -> Self {
        Self::Pacer(err)
    }
}

impl From<SensorSignalsError> for BenchError {
    fn from(err: SensorSignalsError) -> Self {
        Self::Signals(err)
    }
}

impl From<PresentError> for BenchError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}

impl From<RunBenchmarkError<LineChartError>> for BenchError {
    fn from(err: RunBenchmarkError<LineChartError>) -> Self {
        Self::LineChart(err)
    }
}

impl From<LineChartError> for BenchError {
    fn from(err: LineChartError) -> Self {
        Self::LineChart(RunBenchmarkError::Workload(err))
    }
}

impl From<RunBenchmarkError<MeshPlotterError>> for BenchError {
    fn from(err: RunBenchmarkError<MeshPlotterError>) -> Self {
        Self::Mesh(err)
    }
}

impl From<MeshPlotterError> for BenchError {
    fn from(err: MeshPlotterError) -> Self {
        Self::Mesh(RunBenchmarkError::Workload(err))
    }
}

impl From<MeshError> for BenchError {
    fn from(err: MeshError) -> Self {
        Self::from(MeshPlotterError::from(err))
    }
}

impl From<WriteResultsCsvError> for BenchError {
    fn from(err: WriteResultsCsvError) -> Self {
        Self::Results(err)
    }
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Both benchmark records and where they were written.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub results: Vec<BenchmarkResult>,
    pub csv_path: PathBuf,
}

/// Runs the line chart benchmark, then the mesh benchmark, writes the CSV
/// and prints the summary.
pub struct BenchDriver<C: Clock> {
    config: BenchConfig,
    clock: C,
    presenter_factory: Option<Box<dyn FramePresenterFactoryPort>>,
}

impl BenchDriver<SystemClock> {
    #[must_use]
    pub fn new(config: BenchConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> BenchDriver<C> {
    #[must_use]
    pub fn with_clock(config: BenchConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            presenter_factory: None,
        }
    }

    /// Mirrors every frame of both back-ends into presenters built by `factory`.
    #[must_use]
    pub fn with_presenter_factory(mut self, factory: Box<dyn FramePresenterFactoryPort>) -> Self {
        self.presenter_factory = Some(factory);
        self
    }

    #[must_use]
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn run(&mut self) -> Result<BenchReport, BenchError> {
        self.config.validate()?;
        let pacer = Pacer::from_hz(self.config.target_hz)?;

        println!("Running {} benchmark...", line_chart::LIBRARY);
        let line_chart = self.run_line_chart_benchmark(&pacer)?;
        println!("{}", line_chart);

        println!("Running {} benchmark...", mesh_deformation::LIBRARY);
        let mesh = self.run_mesh_benchmark(&pacer)?;
        println!("{}", mesh);

        let results = vec![line_chart, mesh];
        let csv_path = write_results_csv(&results, &self.config.output_path)?;
        write_summary(&mut std::io::stdout().lock(), &results, &csv_path)?;

        Ok(BenchReport { results, csv_path })
    }

    pub fn run_line_chart_benchmark(&mut self, pacer: &Pacer) -> Result<BenchmarkResult, BenchError> {
        let mut chart = LineChart::new()?;
        if let Some(factory) = self.presenter_factory.as_mut() {
            let canvas = chart.canvas().pixel_rect();
            chart = chart.with_presenter(factory.build(
                line_chart::LIBRARY,
                canvas.width(),
                canvas.height(),
            )?);
        }

        let workload = LineChartWorkload::new(
            chart,
            SensorSignals::new()?,
            self.config.line_chart_snapshot_path.clone(),
            self.config.snapshot_dpi,
            PngFilePresenter::new(),
        )?;

        debug!("{}: setup complete", line_chart::LIBRARY);
        Ok(run_benchmark(workload, self.config.frame_count, pacer, &self.clock)?)
    }

    pub fn run_mesh_benchmark(&mut self, pacer: &Pacer) -> Result<BenchmarkResult, BenchError> {
        let mut plotter = MeshPlotter::new(MESH_WINDOW_WIDTH, MESH_WINDOW_HEIGHT)?;
        if let Some(factory) = self.presenter_factory.as_mut() {
            plotter = plotter.with_presenter(factory.build(
                mesh_deformation::LIBRARY,
                MESH_WINDOW_WIDTH,
                MESH_WINDOW_HEIGHT,
            )?);
        }

        let (x_radius, y_radius, z_radius) = ELLIPSOID_RADII;
        let mesh = parametric_ellipsoid(
            x_radius,
            y_radius,
            z_radius,
            DEFAULT_U_RESOLUTION,
            DEFAULT_V_RESOLUTION,
        )?;

        let workload = MeshDeformationWorkload::new(
            plotter,
            mesh,
            RippleDeformer::default(),
            self.config.mesh_snapshot_path.clone(),
            PngFilePresenter::new(),
        )?;

        debug!("{}: setup complete", mesh_deformation::LIBRARY);
        Ok(run_benchmark(workload, self.config.frame_count, pacer, &self.clock)?)
    }
}
