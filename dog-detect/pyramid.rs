use crate::filter;
use crate::types::ScaleStack;
use dog_core::ImageF32;
use log::debug;
use rayon::prelude::*;

/// Gaussian pyramid construction for scale-space detection
pub struct PyramidBuilder;

impl PyramidBuilder {
    /// Blur standard deviation for a scale exponent: `sigma0 * k^i`.
    pub fn sigma_for_level(sigma0: f32, k: f32, level: i32) -> f32 {
        sigma0 * k.powi(level)
    }

    /// Build the Gaussian pyramid of `img`.
    ///
    /// Each slice is an independent blur of the *original* image at
    /// `sigma0 * k^level` (not cascaded from the previous slice), so
    /// slice order matches the order of `levels`. Levels are blurred
    /// in parallel; each owns a disjoint output slice.
    pub fn build(
        img: &ImageF32,
        width: usize,
        height: usize,
        sigma0: f32,
        k: f32,
        levels: &[i32],
    ) -> ScaleStack {
        debug_assert_eq!(img.len(), width * height);

        let slices: Vec<ImageF32> = levels
            .par_iter()
            .map(|&level| {
                let sigma = Self::sigma_for_level(sigma0, k, level);
                filter::gaussian_blur(img, width, height, sigma)
            })
            .collect();

        debug!("built gaussian pyramid: {}x{}x{}", height, width, slices.len());

        ScaleStack::new(slices, width, height, levels.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse_image(size: usize) -> ImageF32 {
        let mut img = vec![0.0f32; size * size];
        img[(size / 2) * size + size / 2] = 1.0;
        img
    }

    #[test]
    fn pyramid_shape_matches_levels() {
        let img = impulse_image(9);
        let levels = [-1, 0, 1, 2, 3, 4];
        let pyr = PyramidBuilder::build(&img, 9, 9, 1.0, 2f32.sqrt(), &levels);
        assert_eq!(pyr.depth(), levels.len());
        assert_eq!(pyr.width(), 9);
        assert_eq!(pyr.height(), 9);
        assert_eq!(pyr.levels(), &levels);
        for level in 0..pyr.depth() {
            assert_eq!(pyr.slice(level).len(), 81);
        }
    }

    #[test]
    fn adjacent_levels_differ_for_non_constant_input() {
        let img = impulse_image(11);
        let pyr = PyramidBuilder::build(&img, 11, 11, 1.0, 2f32.sqrt(), &[-1, 0, 1]);
        for level in 0..pyr.depth() - 1 {
            let max_diff = pyr
                .slice(level)
                .iter()
                .zip(pyr.slice(level + 1))
                .map(|(a, b)| (a - b).abs())
                .fold(0.0f32, f32::max);
            assert!(max_diff > 1e-4, "levels {} and {} identical", level, level + 1);
        }
    }

    #[test]
    fn wider_blur_lowers_the_impulse_peak() {
        let img = impulse_image(15);
        let pyr = PyramidBuilder::build(&img, 15, 15, 1.0, 2f32.sqrt(), &[-1, 0, 1, 2]);
        let center = 7 * 15 + 7;
        for level in 0..pyr.depth() - 1 {
            assert!(pyr.slice(level)[center] > pyr.slice(level + 1)[center]);
        }
    }

    #[test]
    fn sigma_schedule_is_geometric() {
        let k = 2f32.sqrt();
        let s0 = PyramidBuilder::sigma_for_level(1.0, k, 0);
        let s1 = PyramidBuilder::sigma_for_level(1.0, k, 1);
        let s_neg = PyramidBuilder::sigma_for_level(1.0, k, -1);
        assert!((s0 - 1.0).abs() < 1e-6);
        assert!((s1 / s0 - k).abs() < 1e-6);
        assert!((s0 / s_neg - k).abs() < 1e-6);
    }
}
