use candle_core::Tensor;
use evalkit_core::config::Config;
use evalkit_device::choose_device_with;
use evalkit_metrics::evaluate;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load()?;
    let device = choose_device_with(&config.device()?);
    let actual = Tensor::new(&[[1.0f32, 2.0], [3.0, 4.0]], &device)?;
    let predicted = Tensor::new(&[[1.5f32, 1.5], [3.0, 5.0]], &device)?;
    let report = evaluate(&actual, &predicted)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
