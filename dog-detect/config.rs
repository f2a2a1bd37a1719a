use crate::detector::DogDetector;
use crate::error::DetectResult;
use dog_core::DogConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete detector configuration with all settings
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DetectorConfig {
    /// Core DoG configuration
    pub core: DogConfig,
    /// Image dimensions
    pub width: usize,
    pub height: usize,
    /// Metadata
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub version: Option<String>,
}

impl DetectorConfig {
    /// Create new configuration with default settings
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            core: DogConfig::default(),
            width,
            height,
            name: None,
            description: None,
            version: None,
        }
    }

    /// Dense preset: more permissive thresholds, more keypoints
    pub fn dense_preset(width: usize, height: usize) -> Self {
        Self {
            core: DogConfig {
                th_contrast: 0.015,
                th_r: 16.0,
                ..DogConfig::default()
            },
            width,
            height,
            name: Some("Dense".to_string()),
            description: Some("Permissive thresholds for maximum keypoint yield".to_string()),
            version: Some("1.0".to_string()),
        }
    }

    /// Strict preset: higher contrast bar and tighter curvature
    /// ratio, fewer but better-localized keypoints
    pub fn strict_preset(width: usize, height: usize) -> Self {
        Self {
            core: DogConfig {
                th_contrast: 0.06,
                th_r: 8.0,
                ..DogConfig::default()
            },
            width,
            height,
            name: Some("Strict".to_string()),
            description: Some("Tight thresholds for well-localized keypoints only".to_string()),
            version: Some("1.0".to_string()),
        }
    }

    /// Add metadata to configuration
    pub fn with_metadata(mut self, name: &str, description: &str) -> Self {
        self.name = Some(name.to_string());
        self.description = Some(description.to_string());
        self.version = Some("1.0".to_string());
        self
    }

    /// Convert to DetectorBuilder for further customization
    pub fn to_builder(self) -> DetectorBuilder {
        DetectorBuilder::from_config(self)
    }

    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "DetectorConfig: {}x{}, sigma0={}, k={:.3}, levels={:?}, th_contrast={}, th_r={}",
            self.width,
            self.height,
            self.core.sigma0,
            self.core.k,
            self.core.levels,
            self.core.th_contrast,
            self.core.th_r
        )
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> DetectResult<()> {
        DogDetector::new(self.core.clone(), self.width, self.height).map(|_| ())
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    #[cfg(feature = "serde")]
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Load configuration from TOML file
    #[cfg(feature = "serde")]
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    #[cfg(feature = "serde")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserialize from TOML string
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

/// Fluent API builder for detector configuration
pub struct DetectorBuilder {
    core: DogConfig,
    width: usize,
    height: usize,
}

impl DetectorBuilder {
    /// Create new builder with default settings
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            core: DogConfig::default(),
            width,
            height,
        }
    }

    /// Set base scale sigma0
    pub fn sigma0(mut self, sigma0: f32) -> Self {
        self.core.sigma0 = sigma0;
        self
    }

    /// Set scale multiplier k
    pub fn k(mut self, k: f32) -> Self {
        self.core.k = k;
        self
    }

    /// Set pyramid scale exponents
    pub fn levels(mut self, levels: Vec<i32>) -> Self {
        self.core.levels = levels;
        self
    }

    /// Set DoG contrast threshold
    pub fn th_contrast(mut self, th_contrast: f32) -> Self {
        self.core.th_contrast = th_contrast;
        self
    }

    /// Set principal curvature ratio threshold
    pub fn th_r(mut self, th_r: f32) -> Self {
        self.core.th_r = th_r;
        self
    }

    /// Set number of threads for parallel processing
    pub fn threads(mut self, n_threads: usize) -> Self {
        self.core.n_threads = n_threads;
        self
    }

    /// Apply dense preset (more keypoints)
    pub fn preset_dense(mut self) -> Self {
        self.core.th_contrast = 0.015;
        self.core.th_r = 16.0;
        self
    }

    /// Apply strict preset (well-localized keypoints only)
    pub fn preset_strict(mut self) -> Self {
        self.core.th_contrast = 0.06;
        self.core.th_r = 8.0;
        self
    }

    /// Build validated detector
    pub fn build(self) -> DetectResult<DogDetector> {
        DogDetector::new(self.core, self.width, self.height)
    }

    /// Generate summary of current configuration
    pub fn summary(&self) -> String {
        format!(
            "DetectorBuilder: {}x{}, sigma0={}, k={:.3}, levels={:?}, th_contrast={}, th_r={}, threads={}",
            self.width,
            self.height,
            self.core.sigma0,
            self.core.k,
            self.core.levels,
            self.core.th_contrast,
            self.core.th_r,
            self.core.n_threads
        )
    }

    /// Create builder from existing configuration
    pub fn from_config(config: DetectorConfig) -> Self {
        Self {
            core: config.core,
            width: config.width,
            height: config.height,
        }
    }

    /// Convert to DetectorConfig
    pub fn to_config(self) -> DetectorConfig {
        DetectorConfig {
            core: self.core,
            width: self.width,
            height: self.height,
            name: None,
            description: None,
            version: None,
        }
    }
}
