pub mod bench_config;
pub mod driver;
pub mod ports;
pub mod summary;
