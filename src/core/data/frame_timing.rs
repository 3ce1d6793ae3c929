use std::time::Duration;

/// Timings captured for one simulated frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameTiming {
    /// Draw/flush or render-pass step only.
    pub render: Duration,
    /// Frame start to end of render, including data generation.
    pub latency: Duration,
}
