use crate::error::{DetectError, DetectResult};
use crate::types::ScaleStack;
use dog_core::ImageF32;

/// Difference-of-Gaussians stack construction
pub struct DogStackBuilder;

impl DogStackBuilder {
    /// Difference adjacent pyramid levels: `dog[i] = pyr[i+1] - pyr[i]`.
    ///
    /// Slice i approximates the scale-normalized Laplacian for the
    /// transition between pyramid levels i and i+1 and is paired with
    /// exponent `levels[i+1]`. Purely elementwise; the pyramid is not
    /// touched. A pyramid with fewer than two levels cannot produce a
    /// DoG slice and is rejected.
    pub fn build(pyramid: &ScaleStack) -> DetectResult<ScaleStack> {
        if pyramid.depth() < 2 {
            return Err(DetectError::NotEnoughLevels { got: pyramid.depth() });
        }

        let slices: Vec<ImageF32> = pyramid
            .slices()
            .windows(2)
            .map(|pair| {
                pair[1]
                    .iter()
                    .zip(pair[0].iter())
                    .map(|(next, prev)| next - prev)
                    .collect()
            })
            .collect();
        let dog_levels = pyramid.levels()[1..].to_vec();

        Ok(ScaleStack::new(slices, pyramid.width(), pyramid.height(), dog_levels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pyramid::PyramidBuilder;

    #[test]
    fn dog_has_one_slice_fewer_and_tail_levels() {
        let mut img = vec![0.0f32; 49];
        img[24] = 1.0;
        let pyr = PyramidBuilder::build(&img, 7, 7, 1.0, 2f32.sqrt(), &[-1, 0, 1, 2]);
        let dog = DogStackBuilder::build(&pyr).unwrap();
        assert_eq!(dog.depth(), pyr.depth() - 1);
        assert_eq!(dog.levels(), &[0, 1, 2]);
        assert_eq!(dog.width(), 7);
        assert_eq!(dog.height(), 7);
    }

    #[test]
    fn dog_is_adjacent_difference() {
        let mut img = vec![0.1f32; 36];
        img[14] = 0.9;
        let pyr = PyramidBuilder::build(&img, 6, 6, 1.0, 2f32.sqrt(), &[0, 1, 2]);
        let dog = DogStackBuilder::build(&pyr).unwrap();
        for level in 0..dog.depth() {
            for idx in 0..36 {
                let expected = pyr.slice(level + 1)[idx] - pyr.slice(level)[idx];
                assert_eq!(dog.slice(level)[idx], expected);
            }
        }
    }

    #[test]
    fn single_level_pyramid_is_rejected() {
        let img = vec![0.5f32; 16];
        let pyr = PyramidBuilder::build(&img, 4, 4, 1.0, 2f32.sqrt(), &[0]);
        let result = DogStackBuilder::build(&pyr);
        assert!(matches!(
            result,
            Err(crate::error::DetectError::NotEnoughLevels { got: 1 })
        ));
    }

    #[test]
    fn dog_of_constant_image_is_zero() {
        let img = vec![0.5f32; 64];
        let pyr = PyramidBuilder::build(&img, 8, 8, 1.0, 2f32.sqrt(), &[-1, 0, 1]);
        let dog = DogStackBuilder::build(&pyr).unwrap();
        for level in 0..dog.depth() {
            for &v in dog.slice(level) {
                assert!(v.abs() < 1e-6);
            }
        }
    }
}
