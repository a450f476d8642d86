use anyhow::{bail, Result};
use num_traits::{FromPrimitive, ToPrimitive};

use crate::core::{
    errors::{DimensionMismatchError, EmptyInputError, ShapeMismatchError, SliceRangeError},
    utils::{cast_from_f64, cast_to_f64},
    Matrix,
};

// --- Multiply ---

/// `C[i][j] = Σ_k A[i][k] * B[k][j]`, O(m·n·l).
///
/// The product is accumulated in `f64` and converted back to `T`
/// afterwards, so results carry double precision at most.
pub fn multiply<T>(lhs: &[Vec<T>], rhs: &[Vec<T>]) -> Result<Matrix<T>>
where
    T: Copy + FromPrimitive + ToPrimitive,
{
    let (m, n1) = valid_rect(lhs, EmptyInputError::Multiply)?;
    let (n2, l) = valid_rect(rhs, EmptyInputError::Multiply)?;

    if n1 != n2 {
        bail!(DimensionMismatchError::Multiply { n1, n2 });
    }

    let lhs = flatten_f64(lhs)?;
    let rhs = flatten_f64(rhs)?;
    let mut data = vec![0.0; m * l];

    for i in 0..m {
        for k in 0..n1 {
            let scale = lhs[i * n1 + k];

            for j in 0..l {
                data[i * l + j] += scale * rhs[k * l + j];
            }
        }
    }

    data.chunks(l)
        .map(|row| row.iter().map(|&elem| Ok(cast_from_f64(elem)?)).collect())
        .collect()
}

// --- Transpose ---

pub fn transpose<T: Copy>(matrix: &[Vec<T>]) -> Result<Matrix<T>> {
    let (rows, cols) = valid_rect(matrix, EmptyInputError::Transpose)?;

    Ok((0..cols)
        .map(|j| (0..rows).map(|i| matrix[i][j]).collect())
        .collect())
}

// --- Reshape ---

/// Contiguous row-major reinterpretation: `M[i][j] = flat[i*cols + j]`.
pub fn reshape_to_matrix<T: Copy>(flat: &[T], rows: usize, cols: usize) -> Result<Matrix<T>> {
    if rows == 0 || cols == 0 {
        bail!(EmptyInputError::Reshape(rows, cols));
    }

    if flat.len() != rows * cols {
        bail!(ShapeMismatchError::Reshape {
            length: flat.len(),
            rows,
            cols,
        });
    }

    Ok(flat.chunks(cols).map(<[T]>::to_vec).collect())
}

/// Rank-3 to rank-2: each outer slice collapses into a single row.
/// Outer slices may flatten to rows of differing lengths.
pub fn reshape_array<T: Copy>(array: &[Vec<Vec<T>>]) -> Matrix<T> {
    array
        .iter()
        .map(|outer| outer.iter().flatten().copied().collect())
        .collect()
}

// --- Slice ---

/// Takes columns `[start, end)` of every row.
pub fn slice<T: Copy>(matrix: &[Vec<T>], start: usize, end: usize) -> Result<Matrix<T>> {
    if start > end {
        bail!(SliceRangeError::GreaterStart(start, end));
    }

    matrix
        .iter()
        .enumerate()
        .map(|(row, elements)| {
            let length = elements.len();

            if end > length {
                bail!(SliceRangeError::OutOfRange {
                    start,
                    end,
                    row,
                    length,
                });
            }

            Ok(elements[start..end].to_vec())
        })
        .collect()
}

// --- Combine ---

/// Row-wise concatenation: `M[i] = boxes[i] ++ masks[i]`. Differing row
/// counts are an error, never truncated to the shorter input.
pub fn combine<T: Copy>(boxes: &[Vec<T>], masks: &[Vec<T>]) -> Result<Matrix<T>> {
    let (lhs_rows, rhs_rows) = (boxes.len(), masks.len());

    if lhs_rows != rhs_rows {
        bail!(DimensionMismatchError::Combine { lhs_rows, rhs_rows });
    }

    Ok(boxes
        .iter()
        .zip(masks)
        .map(|(head, tail)| head.iter().chain(tail).copied().collect())
        .collect())
}

// --- Validation ---

fn valid_rect<T>(matrix: &[Vec<T>], empty: EmptyInputError) -> Result<(usize, usize)> {
    let rows = matrix.len();
    let cols = matrix.first().map(Vec::len).unwrap_or(0);

    if rows == 0 || cols == 0 {
        bail!(empty);
    }

    for (row, elements) in matrix.iter().enumerate() {
        if elements.len() != cols {
            bail!(ShapeMismatchError::Ragged {
                row,
                expected: cols,
                actual: elements.len(),
            });
        }
    }

    Ok((rows, cols))
}

fn flatten_f64<T>(matrix: &[Vec<T>]) -> Result<Vec<f64>>
where
    T: Copy + ToPrimitive,
{
    matrix
        .iter()
        .flatten()
        .map(|&elem| Ok(cast_to_f64(elem)?))
        .collect()
}
