use crate::core::pacing::clock::Clock;
use log::trace;
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PacerError {
    InvalidTargetHz(f64),
}

impl fmt::Display for PacerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTargetHz(hz) => {
                write!(f, "target frequency must be positive and finite, got {} Hz", hz)
            }
        }
    }
}

impl Error for PacerError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaceOutcome {
    /// The frame finished early and the pacer slept for the remainder.
    Slept(Duration),
    /// The frame used its whole budget; carries the overrun.
    Overran(Duration),
}

/// Sleep-the-remainder frame pacer.
///
/// Each frame is measured on its own: an overrun is never paid back by later
/// frames, so drift accumulates across consecutive slow frames.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pacer {
    period: Duration,
}

impl Pacer {
    pub fn from_hz(target_hz: f64) -> Result<Self, PacerError> {
        if !target_hz.is_finite() || target_hz <= 0.0 {
            return Err(PacerError::InvalidTargetHz(target_hz));
        }

        let period = Duration::try_from_secs_f64(1.0 / target_hz)
            .map_err(|_| PacerError::InvalidTargetHz(target_hz))?;

        Ok(Self { period })
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the period after `elapsed`, if any.
    #[must_use]
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        if elapsed < self.period {
            Some(self.period - elapsed)
        } else {
            None
        }
    }

    pub fn pace<C: Clock>(&self, clock: &C, frame_start: Instant) -> PaceOutcome {
        let elapsed = clock.now().saturating_duration_since(frame_start);

        match self.remaining(elapsed) {
            Some(remaining) => {
                clock.sleep(remaining);
                PaceOutcome::Slept(remaining)
            }
            None => {
                let overrun = elapsed - self.period;
                trace!("frame overran its {:?} budget by {:?}", self.period, overrun);
                PaceOutcome::Overran(overrun)
            }
        }
    }
}
