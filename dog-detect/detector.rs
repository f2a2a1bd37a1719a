use crate::curvature::CurvatureEvaluator;
use crate::dog::DogStackBuilder;
use crate::error::{DetectError, DetectResult};
use crate::extrema::ExtremaSelector;
use crate::pyramid::PyramidBuilder;
use crate::types::ScaleStack;
use dog_core::{DogConfig, ImageF32, Keypoint};

/// Main DoG scale-space keypoint detector
///
/// Pure sequencing over the pipeline stages; every call is
/// referentially transparent given identical inputs.
pub struct DogDetector {
    cfg: DogConfig,
    w: usize,
    h: usize,
}

impl DogDetector {
    /// Creates a new detector with validation
    ///
    /// All configuration errors surface here, before any pyramid
    /// work; the pipeline stages assume validated inputs. Besides the
    /// raw parameters this covers every derived blur
    /// `sigma0 * k^level`, which can leave the finite positive range
    /// for extreme exponents even when `sigma0` and `k` are valid.
    pub fn new(cfg: DogConfig, width: usize, height: usize) -> DetectResult<Self> {
        if width == 0 || height == 0 {
            return Err(DetectError::InvalidImageSize { width, height });
        }
        if cfg.levels.len() < 2 {
            return Err(DetectError::NotEnoughLevels { got: cfg.levels.len() });
        }
        if !cfg.sigma0.is_finite() || cfg.sigma0 <= 0.0 {
            return Err(DetectError::InvalidSigma(cfg.sigma0));
        }
        if !cfg.k.is_finite() || cfg.k <= 0.0 {
            return Err(DetectError::InvalidScaleFactor(cfg.k));
        }
        for &level in &cfg.levels {
            let sigma = PyramidBuilder::sigma_for_level(cfg.sigma0, cfg.k, level);
            if !sigma.is_finite() || sigma <= 0.0 {
                return Err(DetectError::InvalidSigma(sigma));
            }
        }
        if !cfg.th_contrast.is_finite() || cfg.th_contrast < 0.0 {
            return Err(DetectError::InvalidThreshold {
                name: "th_contrast",
                value: cfg.th_contrast,
            });
        }
        if !cfg.th_r.is_finite() || cfg.th_r < 0.0 {
            return Err(DetectError::InvalidThreshold { name: "th_r", value: cfg.th_r });
        }

        Ok(Self { cfg, w: width, h: height })
    }

    /// Validates image data before processing
    fn validate_image(&self, img: &ImageF32) -> DetectResult<()> {
        let expected_len = self.w * self.h;
        if img.len() != expected_len {
            return Err(DetectError::InvalidImageData {
                expected_len,
                actual_len: img.len(),
            });
        }
        Ok(())
    }

    /// Run the full pipeline: pyramid, DoG stack, curvature map,
    /// extrema selection.
    ///
    /// Returns the keypoint list and the Gaussian pyramid (kept for
    /// diagnostics/visualization). An empty list is a valid result.
    pub fn detect(&self, img: &ImageF32) -> DetectResult<(Vec<Keypoint>, ScaleStack)> {
        self.validate_image(img)?;

        let pyramid = self.build_pyramid_unchecked(img);
        let dog = DogStackBuilder::build(&pyramid)?;
        let curvature = CurvatureEvaluator::evaluate(&dog);
        let keypoints =
            ExtremaSelector::select(&dog, &curvature, self.cfg.th_contrast, self.cfg.th_r);

        Ok((keypoints, pyramid))
    }

    /// Build just the Gaussian pyramid for the given image.
    pub fn build_pyramid(&self, img: &ImageF32) -> DetectResult<ScaleStack> {
        self.validate_image(img)?;
        Ok(self.build_pyramid_unchecked(img))
    }

    fn build_pyramid_unchecked(&self, img: &ImageF32) -> ScaleStack {
        PyramidBuilder::build(img, self.w, self.h, self.cfg.sigma0, self.cfg.k, &self.cfg.levels)
    }

    /// Get detector configuration
    pub fn config(&self) -> &DogConfig {
        &self.cfg
    }

    /// Get image dimensions
    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }
}
