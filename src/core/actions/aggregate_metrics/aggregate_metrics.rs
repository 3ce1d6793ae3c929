use crate::core::data::benchmark_result::BenchmarkResult;
use crate::core::data::frame_timing::FrameTiming;
use crate::core::util::round_metric::round_metric;
use std::error::Error;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AggregateMetricsError {
    NoSamples,
}

impl fmt::Display for AggregateMetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSamples => write!(f, "cannot aggregate a benchmark run with no frames"),
        }
    }
}

impl Error for AggregateMetricsError {}

/// Ordered per-frame samples for one benchmark run.
#[derive(Debug, Default)]
pub struct MetricsAggregator {
    samples: Vec<FrameTiming>,
}

impl MetricsAggregator {
    #[must_use]
    pub fn with_capacity(frames: usize) -> Self {
        Self {
            samples: Vec::with_capacity(frames),
        }
    }

    pub fn record(&mut self, timing: FrameTiming) {
        self.samples.push(timing);
    }

    #[must_use]
    pub fn samples(&self) -> &[FrameTiming] {
        &self.samples
    }

    pub fn summarize(&self, library: &str) -> Result<BenchmarkResult, AggregateMetricsError> {
        aggregate_metrics(library, &self.samples)
    }
}

/// Reduces frame timings to mean render time, derived FPS and mean latency,
/// each rounded to two decimals. FPS comes from the unrounded mean and is
/// infinite when the mean render time is zero.
pub fn aggregate_metrics(
    library: &str,
    samples: &[FrameTiming],
) -> Result<BenchmarkResult, AggregateMetricsError> {
    if samples.is_empty() {
        return Err(AggregateMetricsError::NoSamples);
    }

    let avg_render_ms = mean_ms(samples.iter().map(|timing| timing.render));
    let avg_latency_ms = mean_ms(samples.iter().map(|timing| timing.latency));
    let fps = if avg_render_ms > 0.0 {
        1000.0 / avg_render_ms
    } else {
        f64::INFINITY
    };

    Ok(BenchmarkResult::new(
        library,
        round_metric(avg_render_ms),
        round_metric(fps),
        round_metric(avg_latency_ms),
    ))
}

fn mean_ms(durations: impl ExactSizeIterator<Item = Duration>) -> f64 {
    let count = durations.len() as f64;
    let total_ms: f64 = durations.map(|d| d.as_secs_f64() * 1000.0).sum();

    total_ms / count
}
