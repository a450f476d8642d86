use anyhow::{bail, Result};
use num_traits::FromPrimitive;

use crate::core::{
    errors::{EmptyInputError, ShapeMismatchError},
    indexer::Odometer,
    source::TensorSource,
    utils::cast_from_f64,
    Array3, Array4,
};

/// Decodes a rank-3 source into a nested array matching its shape.
///
/// Elements are read through the accessor's `f64` value, so precision
/// beyond double is lost by design.
pub fn decode_3d<T, S>(source: &S) -> Result<Array3<T>>
where
    T: FromPrimitive,
    S: TensorSource + ?Sized,
{
    let sizes = valid_sizes(source, 3)?;
    let rows = decode_rows(source, sizes)?;

    Ok(group(rows, sizes[1]))
}

/// Rank-4 counterpart of [`decode_3d`], with the same `f64` precision
/// bound.
pub fn decode_4d<T, S>(source: &S) -> Result<Array4<T>>
where
    T: FromPrimitive,
    S: TensorSource + ?Sized,
{
    let sizes = valid_sizes(source, 4)?;
    let rows = decode_rows(source, sizes)?;

    Ok(group(group(rows, sizes[2]), sizes[1]))
}

fn valid_sizes<S>(source: &S, rank: usize) -> Result<&[usize]>
where
    S: TensorSource + ?Sized,
{
    let sizes = source.sizes();

    if sizes.len() != rank {
        bail!(ShapeMismatchError::Rank {
            expected: rank,
            actual: sizes.len(),
        });
    }

    if sizes.contains(&0) {
        bail!(EmptyInputError::Decode(sizes.to_vec()));
    }

    let expected = sizes.iter().product::<usize>();
    let actual = source.count();

    if expected != actual {
        bail!(ShapeMismatchError::SourceCount {
            sizes: sizes.to_vec(),
            expected,
            actual,
        });
    }

    Ok(sizes)
}

// Visits every multi-index exactly once in row-major order, regardless
// of the source's native memory layout.
fn decode_rows<T, S>(source: &S, sizes: &[usize]) -> Result<Vec<Vec<T>>>
where
    T: FromPrimitive,
    S: TensorSource + ?Sized,
{
    let flat = Odometer::new(sizes)
        .map(|index| Ok(cast_from_f64(source.value(&index))?))
        .collect::<Result<Vec<T>>>()?;

    Ok(group(flat, sizes[sizes.len() - 1]))
}

// Contiguous row-major regrouping. `items.len()` is always a multiple
// of `size` here, since the shape product was validated.
fn group<U>(items: Vec<U>, size: usize) -> Vec<Vec<U>> {
    let groups = items.len() / size;
    let mut items = items.into_iter();

    (0..groups)
        .map(|_| items.by_ref().take(size).collect())
        .collect()
}
