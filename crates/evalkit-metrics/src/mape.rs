use anyhow::Result;
use candle_core::Tensor;
use tracing::debug;

use crate::{aligned, scalar_f64};

/// Mean absolute percentage error, in percent.
///
/// `mean(|(actual - predicted) / actual|) * 100`. Only `actual` is used as the
/// divisor, so swapping the operands changes the result. A zero in `actual`
/// makes the result inf or NaN, and so does an empty input.
///
/// `predicted` is cast to the dtype of `actual`.
pub fn compute_mape(actual: &Tensor, predicted: &Tensor) -> Result<f64> {
    debug!(actual = ?actual.dims(), predicted = ?predicted.dims(), "computing mape");
    let (actual, predicted) = aligned(actual, predicted)?;
    let relative = actual.sub(&predicted)?.div(&actual)?.abs()?;
    let mean = scalar_f64(&relative.mean_all()?)?;
    Ok(mean * 100.0)
}
