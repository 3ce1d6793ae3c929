use crate::core::data::benchmark_result::BenchmarkResult;
use crate::core::util::round_metric::format_metric;
use log::info;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 4] = ["Library", "Avg Render (ms)", "FPS", "Lag (ms)"];

#[derive(Debug)]
pub enum WriteResultsCsvError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl fmt::Display for WriteResultsCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to write results file: {}", err),
            Self::Csv(err) => write!(f, "failed to encode results: {}", err),
        }
    }
}

impl Error for WriteResultsCsvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for WriteResultsCsvError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for WriteResultsCsvError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Creates or truncates `filepath` and writes one row per result after the
/// header, in the order given. Returns the path written.
pub fn write_results_csv(
    results: &[BenchmarkResult],
    filepath: impl AsRef<Path>,
) -> Result<PathBuf, WriteResultsCsvError> {
    let filepath = filepath.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(filepath)?;

    writer.write_record(HEADER)?;
    for result in results {
        writer.write_record([
            result.library().to_string(),
            format_metric(result.avg_render_ms()),
            format_metric(result.fps()),
            format_metric(result.lag_ms()),
        ])?;
    }
    writer.flush()?;

    info!("wrote {} results to {}", results.len(), filepath.display());
    Ok(filepath.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("viz_bench_{}_{}.csv", name, std::process::id()))
    }

    #[test]
    fn test_two_record_scenario_exact_text() {
        let path = temp_path("scenario");
        let results = [
            BenchmarkResult::new("Matplotlib", 3.21, 311.53, 4.10),
            BenchmarkResult::new("PyVista", 15.0, 66.67, 16.2),
        ];

        let written = write_results_csv(&results, &path).unwrap();

        let text = std::fs::read_to_string(&written).unwrap();
        std::fs::remove_file(&written).unwrap();
        assert_eq!(written, path);
        assert_eq!(
            text,
            "Library,Avg Render (ms),FPS,Lag (ms)\n\
             Matplotlib,3.21,311.53,4.1\n\
             PyVista,15.0,66.67,16.2\n"
        );
    }

    #[test]
    fn test_values_rounded_and_infinity_written() {
        let path = temp_path("rounding");
        let results = [BenchmarkResult::new("LineChart", 12.34567, f64::INFINITY, 0.0)];

        write_results_csv(&results, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text.lines().nth(1), Some("LineChart,12.35,inf,0.0"));
    }

    #[test]
    fn test_existing_file_is_truncated() {
        let path = temp_path("truncate");
        std::fs::write(&path, "stale\nstale\nstale\nstale\nstale\n").unwrap();

        write_results_csv(&[BenchmarkResult::new("MeshView", 1.0, 1000.0, 2.0)], &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let path = std::env::temp_dir().join("viz_bench_no_such_dir").join("out.csv");

        assert!(write_results_csv(&[], path).is_err());
    }
}
