use crate::filter;
use crate::types::ScaleStack;
use dog_core::ImageF32;
use log::debug;
use rayon::prelude::*;

/// Determinant clamp: degenerate Hessians yield a finite, huge ratio
/// (rejected as edge-like) instead of Inf/NaN.
pub const DET_EPSILON: f32 = 1e-20;

/// Principal-curvature (Hessian-ratio) evaluation over a DoG stack
pub struct CurvatureEvaluator;

impl CurvatureEvaluator {
    /// Compute the curvature ratio `R = trace(H)^2 / det(H)` per
    /// pixel, one independent pass per DoG slice (parallel across
    /// slices). Output shape matches the input stack.
    pub fn evaluate(dog: &ScaleStack) -> ScaleStack {
        let width = dog.width();
        let height = dog.height();
        let slices: Vec<ImageF32> = dog
            .slices()
            .par_iter()
            .map(|slice| Self::evaluate_slice(slice, width, height))
            .collect();
        debug!("evaluated curvature for {} DoG slices", slices.len());
        ScaleStack::new(slices, width, height, dog.levels().to_vec())
    }

    /// Six derivative filters and the elementwise ratio for one slice.
    ///
    /// The mixed derivative is computed once (d/drow of Gx) and used
    /// for both off-diagonal Hessian entries, so H is symmetric by
    /// construction and `det = Gxx*Gyy - Gxy^2`.
    fn evaluate_slice(slice: &[f32], width: usize, height: usize) -> ImageF32 {
        let gx = filter::sobel_cols(slice, width, height);
        let gy = filter::sobel_rows(slice, width, height);
        let gxx = filter::sobel_cols(&gx, width, height);
        let gxy = filter::sobel_rows(&gx, width, height);
        let gyy = filter::sobel_rows(&gy, width, height);

        gxx.iter()
            .zip(gyy.iter())
            .zip(gxy.iter())
            .map(|((&xx, &yy), &xy)| {
                let trace = xx + yy;
                let det = xx * yy - xy * xy;
                trace * trace / det.max(DET_EPSILON)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_slice_stack(slice: Vec<f32>, width: usize, height: usize) -> ScaleStack {
        ScaleStack::new(vec![slice], width, height, vec![0])
    }

    #[test]
    fn curvature_shape_matches_dog_shape() {
        let stack = single_slice_stack(vec![0.0; 8 * 6], 8, 6);
        let curvature = CurvatureEvaluator::evaluate(&stack);
        assert_eq!(curvature.width(), 8);
        assert_eq!(curvature.height(), 6);
        assert_eq!(curvature.depth(), 1);
        assert_eq!(curvature.levels(), stack.levels());
    }

    #[test]
    fn curvature_is_finite_and_non_negative_everywhere() {
        // step edge: det(H) collapses near the edge, exercising the clamp
        let width = 9;
        let height = 9;
        let slice: Vec<f32> = (0..width * height)
            .map(|i| if i % width < 4 { 0.0 } else { 1.0 })
            .collect();
        let curvature = CurvatureEvaluator::evaluate(&single_slice_stack(slice, width, height));
        for &r in curvature.slice(0) {
            assert!(r.is_finite());
            assert!(r >= 0.0);
        }
    }

    #[test]
    fn edge_response_is_rejecting() {
        let width = 11;
        let height = 11;
        let slice: Vec<f32> = (0..width * height)
            .map(|i| if i % width < 5 { 0.0 } else { 0.5 })
            .collect();
        let curvature = CurvatureEvaluator::evaluate(&single_slice_stack(slice, width, height));
        let max_r = curvature.slice(0).iter().fold(0.0f32, |a, &b| a.max(b));
        // a straight edge must produce a huge ratio somewhere along it
        assert!(max_r > 1e6, "max R = {}", max_r);
    }

    #[test]
    fn isotropic_blob_scores_near_four() {
        // R = (xx + yy)^2 / (xx * yy) = 4 when both curvatures match
        let width = 15;
        let height = 15;
        let mut impulse = vec![0.0f32; width * height];
        impulse[7 * width + 7] = 1.0;
        let blob = filter::gaussian_blur(&impulse, width, height, 1.5);
        let curvature = CurvatureEvaluator::evaluate(&single_slice_stack(blob, width, height));
        let r = curvature.at(7, 7, 0);
        assert!((r - 4.0).abs() < 0.5, "center R = {}", r);
    }

    #[test]
    fn flat_slice_scores_zero() {
        // trace is zero too, so the clamped ratio is exactly 0
        // (0.25 keeps every kernel accumulation exact in f32)
        let curvature = CurvatureEvaluator::evaluate(&single_slice_stack(vec![0.25; 49], 7, 7));
        for &r in curvature.slice(0) {
            assert_eq!(r, 0.0);
        }
    }
}
