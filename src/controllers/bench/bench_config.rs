use std::error::Error;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum BenchConfigError {
    NoFrames,
    InvalidTargetHz(f64),
    InvalidSnapshotDpi(u32),
}

impl fmt::Display for BenchConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFrames => write!(f, "frame count must be at least 1"),
            Self::InvalidTargetHz(hz) => {
                write!(f, "target frequency must be finite and positive, got {}", hz)
            }
            Self::InvalidSnapshotDpi(dpi) => {
                write!(f, "snapshot dpi must be greater than zero, got {}", dpi)
            }
        }
    }
}

impl Error for BenchConfigError {}

/// Parameters of one benchmark run. `Default` gives the standard run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub frame_count: u32,
    pub target_hz: f64,
    pub output_path: PathBuf,
    pub line_chart_snapshot_path: PathBuf,
    pub mesh_snapshot_path: PathBuf,
    pub snapshot_dpi: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            frame_count: 300,
            target_hz: 20.0,
            output_path: PathBuf::from("viz_results.csv"),
            line_chart_snapshot_path: PathBuf::from("line_chart_plot.png"),
            mesh_snapshot_path: PathBuf::from("mesh_deformation.png"),
            snapshot_dpi: 300,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), BenchConfigError> {
        if self.frame_count == 0 {
            return Err(BenchConfigError::NoFrames);
        }

        if !self.target_hz.is_finite() || self.target_hz <= 0.0 {
            return Err(BenchConfigError::InvalidTargetHz(self.target_hz));
        }

        if self.snapshot_dpi == 0 {
            return Err(BenchConfigError::InvalidSnapshotDpi(self.snapshot_dpi));
        }

        Ok(())
    }
}
