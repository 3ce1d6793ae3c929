use viz_bench::{BenchConfig, BenchDriver, WindowPresenterFactory};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let factory = WindowPresenterFactory::new()?;
    BenchDriver::new(BenchConfig::default())
        .with_presenter_factory(Box::new(factory))
        .run()?;

    Ok(())
}
