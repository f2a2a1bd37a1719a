//! Difference-of-Gaussians scale-space keypoint detection.
//!
//! The pipeline runs strictly forward over immutable buffers:
//! intensity image -> Gaussian pyramid -> DoG stack -> curvature map,
//! with extrema selection consuming the DoG stack and the curvature
//! map. [`DogDetector`] composes the stages; the stage types are
//! exported for callers that want individual arrays.

pub mod config;
pub mod curvature;
pub mod detector;
pub mod dog;
pub mod error;
pub mod extrema;
pub mod filter;
pub mod pyramid;
pub mod types;

pub use config::{DetectorBuilder, DetectorConfig};
pub use curvature::CurvatureEvaluator;
pub use detector::DogDetector;
pub use dog::DogStackBuilder;
pub use error::{DetectError, DetectResult};
pub use extrema::ExtremaSelector;
pub use pyramid::PyramidBuilder;
pub use types::ScaleStack;
