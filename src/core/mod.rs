mod algebra;
mod decode;
mod display;
mod errors;
mod indexer;
mod sigmoid;
mod source;
mod utils;

pub use algebra::{combine, multiply, reshape_array, reshape_to_matrix, slice, transpose};
pub use decode::{decode_3d, decode_4d};
pub use display::table;
pub use sigmoid::sigmoid;
pub use source::{BufferSource, TensorSource};

/// Rank-2 nested array: an ordered sequence of rows.
pub type Matrix<T> = Vec<Vec<T>>;

/// Rank-3 nested array, as produced by [`decode_3d`].
pub type Array3<T> = Vec<Vec<Vec<T>>>;

/// Rank-4 nested array, as produced by [`decode_4d`].
pub type Array4<T> = Vec<Vec<Vec<Vec<T>>>>;
