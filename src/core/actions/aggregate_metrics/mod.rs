pub mod aggregate_metrics;
