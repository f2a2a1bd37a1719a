use crate::types::ScaleStack;
use dog_core::Keypoint;
use log::debug;
use rayon::prelude::*;

/// Scale-space extrema selection over a DoG stack
///
/// A single fused scan tests the contrast and curvature thresholds
/// and the neighborhood conditions per position; no candidate sets
/// are materialized.
pub struct ExtremaSelector;

impl ExtremaSelector {
    /// Find all (row, col, level) positions that pass both thresholds
    /// and are strict local extrema jointly over space and scale.
    ///
    /// Strictness: the center is excluded from its own 3x3 window and
    /// must be strictly greater (maxima) or strictly less (minima)
    /// than every in-bounds spatial neighbor, and than the same pixel
    /// at levels c-1 and c+1 where those levels exist. Windows are
    /// clipped at the image border, never wrapped. A stack with one
    /// slice has no scale neighbors and degrades to pure spatial
    /// extrema.
    ///
    /// Output is sorted by (row, col, level) and duplicate-free.
    pub fn select(
        dog: &ScaleStack,
        curvature: &ScaleStack,
        th_contrast: f32,
        th_r: f32,
    ) -> Vec<Keypoint> {
        debug_assert_eq!(dog.depth(), curvature.depth());
        debug_assert_eq!(dog.width(), curvature.width());
        debug_assert_eq!(dog.height(), curvature.height());

        let per_level: Vec<Vec<Keypoint>> = (0..dog.depth())
            .into_par_iter()
            .map(|level| Self::scan_level(dog, curvature, level, th_contrast, th_r))
            .collect();

        for (level, found) in per_level.iter().enumerate() {
            debug!("level {}: {} extrema", level, found.len());
        }

        let mut keypoints: Vec<Keypoint> = per_level.into_iter().flatten().collect();
        keypoints.sort_unstable();
        keypoints
    }

    fn scan_level(
        dog: &ScaleStack,
        curvature: &ScaleStack,
        level: usize,
        th_contrast: f32,
        th_r: f32,
    ) -> Vec<Keypoint> {
        let mut found = Vec::new();
        for row in 0..dog.height() {
            for col in 0..dog.width() {
                if dog.at(row, col, level).abs() <= th_contrast {
                    continue;
                }
                if curvature.at(row, col, level) >= th_r {
                    continue;
                }
                if Self::is_extremum(dog, row, col, level) {
                    found.push(Keypoint { row, col, level });
                }
            }
        }
        found
    }

    fn is_extremum(dog: &ScaleStack, row: usize, col: usize, level: usize) -> bool {
        let value = dog.at(row, col, level);
        let mut is_max = true;
        let mut is_min = true;

        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = row as i64 + dr;
                let c = col as i64 + dc;
                if r < 0 || c < 0 || r >= dog.height() as i64 || c >= dog.width() as i64 {
                    continue;
                }
                let neighbor = dog.at(r as usize, c as usize, level);
                is_max &= value > neighbor;
                is_min &= value < neighbor;
                if !is_max && !is_min {
                    return false;
                }
            }
        }

        if level > 0 {
            let below = dog.at(row, col, level - 1);
            is_max &= value > below;
            is_min &= value < below;
        }
        if level + 1 < dog.depth() {
            let above = dog.at(row, col, level + 1);
            is_max &= value > above;
            is_min &= value < above;
        }

        is_max || is_min
    }
}
