/// An opaque tensor produced by an inference engine: a shape descriptor
/// plus a by-multi-index element accessor.
///
/// The accessor must be consistent with the declared shape (each index
/// in `0..extent` per axis); `count` reports how many elements the
/// source actually exposes, which the decoder checks against the shape.
pub trait TensorSource {
    fn sizes(&self) -> &[usize];

    fn count(&self) -> usize;

    fn value(&self, index: &[usize]) -> f64;
}

/// A flat row-major `f64` buffer with explicit strides and a
/// closed-form index-to-offset mapping.
pub struct BufferSource {
    data: Vec<f64>,
    sizes: Vec<usize>,
    strides: Vec<usize>,
}

impl BufferSource {
    pub fn new(data: Vec<f64>, sizes: &[usize]) -> BufferSource {
        let mut current = 1;
        let mut strides: Vec<usize> = sizes
            .iter()
            .rev()
            .map(|size| {
                let stride = current;
                current *= size;
                stride
            })
            .collect();
        strides.reverse();

        BufferSource {
            data,
            sizes: sizes.to_vec(),
            strides,
        }
    }

    fn offset(&self, index: &[usize]) -> usize {
        index
            .iter()
            .zip(self.strides.iter())
            .map(|(&index, &stride)| index * stride)
            .sum()
    }
}

impl TensorSource for BufferSource {
    fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    fn count(&self) -> usize {
        self.data.len()
    }

    fn value(&self, index: &[usize]) -> f64 {
        self.data[self.offset(index)]
    }
}
