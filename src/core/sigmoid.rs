use anyhow::Result;
use num_traits::{FromPrimitive, ToPrimitive};

use crate::core::{
    utils::{cast_from_f64, cast_to_f64},
    Matrix,
};

/// Elementwise `1 / (1 + e^(-x))`, shape-preserving.
///
/// Evaluated in `f64` and converted back to `T`, the same double
/// precision bound as the rest of the module.
pub fn sigmoid<T>(matrix: &[Vec<T>]) -> Result<Matrix<T>>
where
    T: Copy + FromPrimitive + ToPrimitive,
{
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|&elem| {
                    let value = 1.0 / (1.0 + (-cast_to_f64(elem)?).exp());
                    Ok(cast_from_f64(value)?)
                })
                .collect()
        })
        .collect()
}
