use crate::core::actions::aggregate_metrics::aggregate_metrics::{
    AggregateMetricsError, MetricsAggregator,
};
use crate::core::actions::run_benchmark::ports::frame_workload::FrameWorkload;
use crate::core::data::benchmark_result::BenchmarkResult;
use crate::core::data::frame_timing::FrameTiming;
use crate::core::pacing::clock::Clock;
use crate::core::pacing::pacer::{PaceOutcome, Pacer};
use log::debug;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RunBenchmarkError<E> {
    Workload(E),
    Metrics(AggregateMetricsError),
}

impl<E: fmt::Display> fmt::Display for RunBenchmarkError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workload(err) => write!(f, "workload error: {}", err),
            Self::Metrics(err) => write!(f, "metrics error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for RunBenchmarkError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Workload(err) => Some(err),
            Self::Metrics(err) => Some(err),
        }
    }
}

impl<E> From<AggregateMetricsError> for RunBenchmarkError<E> {
    fn from(err: AggregateMetricsError) -> Self {
        Self::Metrics(err)
    }
}

/// Drives `frame_count` frames through `workload`, pacing each to the
/// pacer's period, then snapshots and closes the surface.
///
/// A failing frame returns immediately; the snapshot and close steps are
/// skipped and the workload is dropped as-is.
pub fn run_benchmark<W, C>(
    mut workload: W,
    frame_count: u32,
    pacer: &Pacer,
    clock: &C,
) -> Result<BenchmarkResult, RunBenchmarkError<W::Failure>>
where
    W: FrameWorkload,
    C: Clock,
{
    let mut aggregator = MetricsAggregator::with_capacity(frame_count as usize);
    let mut overruns: u32 = 0;

    debug!(
        "{}: running {} frames at {:?} per frame",
        workload.library(),
        frame_count,
        pacer.period()
    );

    for frame_index in 0..frame_count {
        let frame_start = clock.now();

        workload
            .prepare_frame(frame_index)
            .map_err(RunBenchmarkError::Workload)?;

        let render_start = clock.now();
        workload.render_frame().map_err(RunBenchmarkError::Workload)?;
        let render_end = clock.now();

        aggregator.record(FrameTiming {
            render: render_end.saturating_duration_since(render_start),
            latency: render_end.saturating_duration_since(frame_start),
        });

        if let PaceOutcome::Overran(_) = pacer.pace(clock, frame_start) {
            overruns += 1;
        }
    }

    debug!(
        "{}: {} of {} frames overran the period",
        workload.library(),
        overruns,
        frame_count
    );

    workload.save_snapshot().map_err(RunBenchmarkError::Workload)?;

    let library = workload.library().to_string();
    workload.close().map_err(RunBenchmarkError::Workload)?;

    Ok(aggregator.summarize(&library)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pacing::clock::SystemClock;
    use crate::core::pacing::pacer::test_clock::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    /// Advances a manual clock by fixed amounts and logs lifecycle calls.
    struct StubWorkload<'a> {
        clock: &'a ManualClock,
        prepare: Duration,
        render: Duration,
        fail_on_frame: Option<u32>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl<'a> StubWorkload<'a> {
        fn new(clock: &'a ManualClock, prepare_ms: u64, render_ms: u64) -> Self {
            Self {
                clock,
                prepare: Duration::from_millis(prepare_ms),
                render: Duration::from_millis(render_ms),
                fail_on_frame: None,
                calls: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl FrameWorkload for StubWorkload<'_> {
        type Failure = StubError;

        fn library(&self) -> &str {
            "Stub"
        }

        fn prepare_frame(&mut self, frame_index: u32) -> Result<(), Self::Failure> {
            self.calls.borrow_mut().push(format!("prepare {}", frame_index));
            self.clock.advance(self.prepare);
            Ok(())
        }

        fn render_frame(&mut self) -> Result<(), Self::Failure> {
            let frame_index = self.calls.borrow().len() as u32 / 2;
            self.calls.borrow_mut().push("render".to_string());
            if self.fail_on_frame == Some(frame_index) {
                return Err(StubError {});
            }
            self.clock.advance(self.render);
            Ok(())
        }

        fn save_snapshot(&mut self) -> Result<(), Self::Failure> {
            self.calls.borrow_mut().push("snapshot".to_string());
            Ok(())
        }

        fn close(self) -> Result<(), Self::Failure> {
            self.calls.borrow_mut().push("close".to_string());
            Ok(())
        }
    }

    #[test]
    fn test_five_frames_at_ten_hz_with_five_ms_render() {
        let clock = ManualClock::new();
        let pacer = Pacer::from_hz(10.0).unwrap();
        let workload = StubWorkload::new(&clock, 0, 5);

        let result = run_benchmark(workload, 5, &pacer, &clock).unwrap();

        assert_eq!(result.library(), "Stub");
        assert_eq!(result.avg_render_ms(), 5.0);
        assert_eq!(result.fps(), 200.0);
        assert_eq!(result.lag_ms(), 5.0);
        assert_eq!(clock.elapsed(), Duration::from_millis(500));
        assert_eq!(clock.total_slept(), Duration::from_millis(475));
    }

    #[test]
    fn test_latency_includes_data_generation() {
        let clock = ManualClock::new();
        let pacer = Pacer::from_hz(20.0).unwrap();
        let workload = StubWorkload::new(&clock, 3, 4);

        let result = run_benchmark(workload, 3, &pacer, &clock).unwrap();

        assert_eq!(result.avg_render_ms(), 4.0);
        assert_eq!(result.lag_ms(), 7.0);
    }

    #[test]
    fn test_slow_frames_are_not_paced_and_drift() {
        let clock = ManualClock::new();
        let pacer = Pacer::from_hz(10.0).unwrap();
        let workload = StubWorkload::new(&clock, 20, 100);

        let result = run_benchmark(workload, 4, &pacer, &clock).unwrap();

        assert_eq!(clock.sleep_calls(), 0);
        assert_eq!(clock.elapsed(), Duration::from_millis(480));
        assert_eq!(result.fps(), 10.0);
    }

    #[test]
    fn test_zero_render_time_reports_infinite_fps() {
        let clock = ManualClock::new();
        let pacer = Pacer::from_hz(10.0).unwrap();
        let workload = StubWorkload::new(&clock, 1, 0);

        let result = run_benchmark(workload, 2, &pacer, &clock).unwrap();

        assert!(result.fps().is_infinite());
    }

    #[test]
    fn test_snapshot_then_close_after_all_frames() {
        let clock = ManualClock::new();
        let pacer = Pacer::from_hz(100.0).unwrap();
        let workload = StubWorkload::new(&clock, 0, 1);
        let calls = Rc::clone(&workload.calls);

        run_benchmark(workload, 2, &pacer, &clock).unwrap();

        assert_eq!(
            *calls.borrow(),
            vec!["prepare 0", "render", "prepare 1", "render", "snapshot", "close"]
        );
    }

    #[test]
    fn test_render_failure_propagates_and_skips_close() {
        let clock = ManualClock::new();
        let pacer = Pacer::from_hz(100.0).unwrap();
        let mut workload = StubWorkload::new(&clock, 0, 1);
        workload.fail_on_frame = Some(1);
        let calls = Rc::clone(&workload.calls);

        let result = run_benchmark(workload, 5, &pacer, &clock);

        assert!(matches!(result, Err(RunBenchmarkError::Workload(StubError {}))));
        assert_eq!(*calls.borrow(), vec!["prepare 0", "render", "prepare 1", "render"]);
    }

    #[test]
    fn test_zero_frames_is_a_metrics_error() {
        let clock = ManualClock::new();
        let pacer = Pacer::from_hz(10.0).unwrap();
        let workload = StubWorkload::new(&clock, 0, 1);

        let result = run_benchmark(workload, 0, &pacer, &clock);

        assert!(matches!(
            result,
            Err(RunBenchmarkError::Metrics(AggregateMetricsError::NoSamples))
        ));
    }

    struct SleepingWorkload {
        render: Duration,
    }

    impl FrameWorkload for SleepingWorkload {
        type Failure = StubError;

        fn library(&self) -> &str {
            "Sleeping"
        }

        fn prepare_frame(&mut self, _: u32) -> Result<(), Self::Failure> {
            Ok(())
        }

        fn render_frame(&mut self) -> Result<(), Self::Failure> {
            std::thread::sleep(self.render);
            Ok(())
        }

        fn save_snapshot(&mut self) -> Result<(), Self::Failure> {
            Ok(())
        }

        fn close(self) -> Result<(), Self::Failure> {
            Ok(())
        }
    }

    #[test]
    fn test_wall_clock_run_holds_cadence() {
        let pacer = Pacer::from_hz(10.0).unwrap();
        let workload = SleepingWorkload {
            render: Duration::from_millis(5),
        };
        let start = Instant::now();

        let result = run_benchmark(workload, 5, &pacer, &SystemClock).unwrap();
        let total = start.elapsed();

        assert!(result.avg_render_ms() >= 5.0);
        assert!(result.avg_render_ms() < 50.0);
        assert!(result.fps() <= 200.0);
        assert!(total >= Duration::from_millis(500));
        assert!(total < Duration::from_millis(1500));
    }
}
