#[derive(Debug, Clone, PartialEq)]
pub enum DetectError {
    InvalidImageSize { width: usize, height: usize },
    InvalidImageData { expected_len: usize, actual_len: usize },
    NotEnoughLevels { got: usize },
    InvalidSigma(f32),
    InvalidScaleFactor(f32),
    InvalidThreshold { name: &'static str, value: f32 },
}

impl std::fmt::Display for DetectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectError::InvalidImageSize { width, height } => {
                write!(f, "Invalid image dimensions: {}x{} (must be > 0)", width, height)
            }
            DetectError::InvalidImageData { expected_len, actual_len } => {
                write!(f, "Image data length mismatch: expected {}, got {}", expected_len, actual_len)
            }
            DetectError::NotEnoughLevels { got } => {
                write!(f, "Need at least 2 pyramid levels to form a DoG slice, got {}", got)
            }
            DetectError::InvalidSigma(s) => {
                write!(f, "Invalid base scale sigma0: {} (must be finite and > 0)", s)
            }
            DetectError::InvalidScaleFactor(k) => {
                write!(f, "Invalid scale factor k: {} (must be finite and > 0)", k)
            }
            DetectError::InvalidThreshold { name, value } => {
                write!(f, "Invalid threshold {}: {} (must be finite and >= 0)", name, value)
            }
        }
    }
}

impl std::error::Error for DetectError {}

pub type DetectResult<T> = Result<T, DetectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offending_values() {
        let e = DetectError::InvalidImageSize { width: 0, height: 12 };
        assert!(e.to_string().contains("0x12"));

        let e = DetectError::NotEnoughLevels { got: 1 };
        assert!(e.to_string().contains("got 1"));

        let e = DetectError::InvalidThreshold { name: "th_contrast", value: -0.5 };
        assert!(e.to_string().contains("th_contrast"));
    }
}
