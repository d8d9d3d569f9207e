//! Error metrics over candle tensors.
//!
//! Each metric reduces a pair of same-shaped tensors to one `f64`. Arithmetic
//! faults are left to the tensor layer: shape mismatches surface as candle
//! errors and zero divisors surface as inf/NaN in the result.

pub mod mae;
pub mod mape;
pub mod metric;

pub use mae::compute_mae;
pub use mape::compute_mape;
pub use metric::{evaluate, Mae, Mape, Metric};

use anyhow::Result;
use candle_core::{DType, Tensor};

/// Integer tensors are promoted so differences can go negative.
pub(crate) fn as_float(t: &Tensor) -> Result<Tensor> {
    if t.dtype().is_float() { Ok(t.clone()) } else { Ok(t.to_dtype(DType::F32)?) }
}

/// Brings `predicted` to the dtype of `actual` after promotion.
pub(crate) fn aligned(actual: &Tensor, predicted: &Tensor) -> Result<(Tensor, Tensor)> {
    let actual = as_float(actual)?;
    let predicted = if predicted.dtype() == actual.dtype() { predicted.clone() } else { predicted.to_dtype(actual.dtype())? };
    Ok((actual, predicted))
}

pub(crate) fn scalar_f64(t: &Tensor) -> Result<f64> {
    Ok(t.to_dtype(DType::F64)?.to_scalar::<f64>()?)
}
