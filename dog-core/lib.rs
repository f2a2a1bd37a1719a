/// Row-major single-channel intensity image, values in [0, 1]
pub type ImageF32 = Vec<f32>;

/// Key-point ≙ scale-space extremum of the DoG stack
///
/// `row`/`col` index into the image, `level` indexes into the DoG
/// stack (not the Gaussian pyramid: DoG slice i sits between pyramid
/// levels i and i+1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keypoint {
    pub row: usize,
    pub col: usize,
    pub level: usize,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DogConfig {
    /// Blur of pyramid level 0; level i is blurred at `sigma0 * k^i`.
    pub sigma0: f32,
    /// Scale multiplier between adjacent pyramid levels.
    pub k: f32,
    /// Scale exponents, ascending. Needs at least two entries to
    /// produce a DoG slice.
    pub levels: Vec<i32>,
    /// Minimum |DoG| response for a candidate keypoint.
    pub th_contrast: f32,
    /// Maximum principal curvature ratio trace²/det before a
    /// candidate is rejected as edge-like.
    pub th_r: f32,
    pub n_threads: usize,
}

impl Default for DogConfig {
    fn default() -> Self {
        Self {
            sigma0: 1.0,
            k: std::f32::consts::SQRT_2,
            levels: vec![-1, 0, 1, 2, 3, 4],
            th_contrast: 0.03,
            th_r: 12.0,
            n_threads: num_cpus::get().max(1),
        }
    }
}

/// Initialize Rayon thread pool with the specified number of threads
pub fn init_thread_pool(n_threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
}
