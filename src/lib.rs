pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;
pub mod surfaces;
pub mod workloads;
#[cfg(feature = "gui")]
mod adapters;

pub use controllers::bench::bench_config::BenchConfig;
pub use controllers::bench::driver::{BenchDriver, BenchError, BenchReport};
pub use crate::core::data::benchmark_result::BenchmarkResult;
pub use presenters::file::png::PngFilePresenter;
pub use storage::write_results_csv::write_results_csv;

#[cfg(feature = "gui")]
pub use presenters::window::factory::WindowPresenterFactory;
