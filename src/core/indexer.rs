// Row-major multi-index odometer: the last axis varies fastest, and an
// axis that reaches its extent resets to zero and carries into the next
// less-significant axis.

pub(crate) struct Odometer<'a> {
    sizes: &'a [usize],
    indices: Vec<usize>,
    remaining: usize,
}

impl<'a> Odometer<'a> {
    pub(crate) fn new(sizes: &'a [usize]) -> Self {
        Odometer {
            sizes,
            indices: vec![0; sizes.len()],
            remaining: sizes.iter().product(),
        }
    }
}

impl<'a> Iterator for Odometer<'a> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let next = self.indices.clone();

        for (index, &size) in self.indices.iter_mut().zip(self.sizes).rev() {
            *index += 1;

            if *index < size {
                break;
            }

            *index = 0;
        }

        self.remaining -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
