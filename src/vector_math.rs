use crate::error::{OptimumError, Result};
use faer::Col;

/// Inner product of two vectors of equal length
pub fn inner_product(left: &[f64], right: &[f64]) -> Result<f64> {
    if left.len() != right.len() {
        return Err(OptimumError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let left = Col::from_fn(left.len(), |i| left[i]);
    let right = Col::from_fn(right.len(), |i| right[i]);

    Ok((0..left.nrows()).fold(0.0, |acc, i| acc + left[i] * right[i]))
}
