use std::fmt;

use crate::core::util::round_metric::format_metric;

/// Aggregated metrics for one benchmark routine, written as one CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    library: String,
    avg_render_ms: f64,
    fps: f64,
    lag_ms: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn new(library: impl Into<String>, avg_render_ms: f64, fps: f64, lag_ms: f64) -> Self {
        Self {
            library: library.into(),
            avg_render_ms,
            fps,
            lag_ms,
        }
    }

    #[must_use]
    pub fn library(&self) -> &str {
        &self.library
    }

    #[must_use]
    pub fn avg_render_ms(&self) -> f64 {
        self.avg_render_ms
    }

    /// `f64::INFINITY` when the average render time was zero.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    #[must_use]
    pub fn lag_ms(&self) -> f64 {
        self.lag_ms
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Library: {}, Avg Render (ms): {}, FPS: {}, Lag (ms): {}}}",
            self.library,
            format_metric(self.avg_render_ms),
            format_metric(self.fps),
            format_metric(self.lag_ms)
        )
    }
}
