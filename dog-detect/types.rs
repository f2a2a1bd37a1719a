use dog_core::ImageF32;

/// A stack of same-sized float slices, one per scale level.
///
/// Backs the Gaussian pyramid, the DoG stack and the curvature map.
/// Slices are stored as independent contiguous row-major buffers; the
/// `levels` vector carries the scale exponent paired with each slice
/// (for the DoG stack that is `levels[1..]` of the pyramid it was
/// built from).
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleStack {
    slices: Vec<ImageF32>,
    width: usize,
    height: usize,
    levels: Vec<i32>,
}

impl ScaleStack {
    pub fn new(slices: Vec<ImageF32>, width: usize, height: usize, levels: Vec<i32>) -> Self {
        debug_assert_eq!(slices.len(), levels.len());
        debug_assert!(slices.iter().all(|s| s.len() == width * height));
        Self { slices, width, height, levels }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of slices along the scale axis
    pub fn depth(&self) -> usize {
        self.slices.len()
    }

    /// Scale exponents paired with the slices, in slice order
    pub fn levels(&self) -> &[i32] {
        &self.levels
    }

    pub fn slice(&self, level: usize) -> &[f32] {
        &self.slices[level]
    }

    pub fn slices(&self) -> &[ImageF32] {
        &self.slices
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize, level: usize) -> f32 {
        self.slices[level][row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_indexes_row_major() {
        let slice = vec![
            0.0, 1.0, 2.0, //
            3.0, 4.0, 5.0,
        ];
        let stack = ScaleStack::new(vec![slice], 3, 2, vec![0]);
        assert_eq!(stack.at(0, 2, 0), 2.0);
        assert_eq!(stack.at(1, 0, 0), 3.0);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.width(), 3);
        assert_eq!(stack.height(), 2);
    }
}
