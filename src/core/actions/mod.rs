pub mod aggregate_metrics;
pub mod run_benchmark;
