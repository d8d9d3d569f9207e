use anyhow::Result;
use candle_core::Tensor;
use evalkit_core::Error;
use tracing::debug;

use crate::{aligned, scalar_f64};

/// Mean absolute error over a `[rows, cols, ..]` tensor.
///
/// The absolute differences are summed over every element but divided by
/// `rows * cols` only. For 2-D inputs that is the plain mean; for higher ranks
/// the trailing dimensions are not part of the divisor. A zero-sized `rows`
/// or `cols` gives NaN. `predicted` is cast to the dtype of `actual`.
pub fn compute_mae(actual: &Tensor, predicted: &Tensor) -> Result<f64> {
    let dims = actual.dims();
    debug!(actual = ?dims, predicted = ?predicted.dims(), "computing mae");
    if dims.len() < 2 {
        return Err(Error::Shape(format!("mae needs at least 2 dimensions, got {dims:?}")).into());
    }
    let (rows, cols) = (dims[0], dims[1]);
    let (actual, predicted) = aligned(actual, predicted)?;
    let total = scalar_f64(&predicted.sub(&actual)?.abs()?.sum_all()?)?;
    // zero rows or cols give inf/NaN here
    Ok(total / rows as f64 / cols as f64)
}
