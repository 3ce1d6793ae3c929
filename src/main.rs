use viz_bench::{BenchConfig, BenchDriver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    BenchDriver::new(BenchConfig::default()).run()?;

    Ok(())
}
