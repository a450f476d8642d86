use thiserror::Error;

// --- Shape ---

#[derive(Error, Debug)]
pub(crate) enum ShapeMismatchError {
    #[error("Declared shape {sizes:?} holds {expected} elements, but the source exposes {actual}.")]
    SourceCount {
        sizes: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("Flat array of length {length} cannot be reshaped to {rows} x {cols}.")]
    Reshape {
        length: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Source of rank {actual} cannot be decoded as rank {expected}.")]
    Rank { expected: usize, actual: usize },

    #[error("Row {row} has {actual} elements, but row 0 has {expected}. Matrix is not rectangular.")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

// --- Dimensions ---

#[derive(Error, Debug)]
pub(crate) enum DimensionMismatchError {
    #[error("Cannot be matrix multiplied. [m x n1] @ [n2 x l], n1 ({n1}) != n2 ({n2}).")]
    Multiply { n1: usize, n2: usize },

    #[error("Cannot combine row-wise. Left has {lhs_rows} rows, right has {rhs_rows}.")]
    Combine { lhs_rows: usize, rhs_rows: usize },
}

// --- Ranges ---

#[derive(Error, Debug)]
pub(crate) enum SliceRangeError {
    #[error("Columns [{start}, {end}) are out of range for row {row}, of length {length}.")]
    OutOfRange {
        start: usize,
        end: usize,
        row: usize,
        length: usize,
    },

    #[error("Slice start index {0} is greater than slice end index {1}.")]
    GreaterStart(usize, usize),
}

// --- Empty inputs ---

#[derive(Error, Debug)]
pub(crate) enum EmptyInputError {
    #[error("Empty matrix. Unable to transpose.")]
    Transpose,

    #[error("Empty matrix. Unable to multiply.")]
    Multiply,

    #[error("Reshape target {0} x {1} has no elements.")]
    Reshape(usize, usize),

    #[error("Shape {0:?} has a zero axis. Nothing to decode.")]
    Decode(Vec<usize>),
}

// --- Misc ---

#[derive(Error, Debug)]
pub(crate) enum DtypeCastError {
    #[error("Cannot convert {value} from `f64` to dtype {dtype}.")]
    FromF64 { value: f64, dtype: &'static str },

    #[error("Cannot convert dtype {dtype} value to `f64`.")]
    ToF64 { dtype: &'static str },
}
