use crate::core::data::benchmark_result::BenchmarkResult;
use crate::core::util::round_metric::format_metric;
use std::io::Write;
use std::path::Path;

/// Summary block printed after both benchmarks have run.
pub fn write_summary<W: Write>(
    out: &mut W,
    results: &[BenchmarkResult],
    csv_path: &Path,
) -> std::io::Result<()> {
    writeln!(out, "\n=== SUMMARY ===")?;

    for result in results {
        writeln!(
            out,
            "{}: Avg Render={} ms | FPS={} | Lag={} ms",
            result.library(),
            format_metric(result.avg_render_ms()),
            format_metric(result.fps()),
            format_metric(result.lag_ms())
        )?;
    }

    writeln!(out, "\nSaved CSV -> {}", csv_path.display())
}
