use anyhow::Result;
use candle_core::Tensor;
use evalkit_core::types::MetricReport;
use evalkit_device::describe_device;

pub trait Metric: Send + Sync {
    fn name(&self) -> &'static str;
    fn compute(&self, actual: &Tensor, predicted: &Tensor) -> Result<f64>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Mape;

#[derive(Debug, Clone, Copy, Default)]
pub struct Mae;

impl Metric for Mape {
    fn name(&self) -> &'static str { "mape" }
    fn compute(&self, actual: &Tensor, predicted: &Tensor) -> Result<f64> { crate::compute_mape(actual, predicted) }
}

impl Metric for Mae {
    fn name(&self) -> &'static str { "mae" }
    fn compute(&self, actual: &Tensor, predicted: &Tensor) -> Result<f64> { crate::compute_mae(actual, predicted) }
}

/// Computes both metrics for one pair and records where they ran.
pub fn evaluate(actual: &Tensor, predicted: &Tensor) -> Result<MetricReport> {
    let mae = Mae.compute(actual, predicted)?;
    let mape = Mape.compute(actual, predicted)?;
    Ok(MetricReport {
        mae,
        mape,
        shape: actual.dims().to_vec(),
        device: describe_device(actual.device()),
    })
}
