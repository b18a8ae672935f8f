//! Configuration management for the laser eye application

use crate::constants::{
    DEFAULT_ASPECT, DEFAULT_DETECTION_CONFIDENCE, DEFAULT_FOV_Y_DEGREES, DEFAULT_FRAME_HEIGHT,
    DEFAULT_FRAME_WIDTH, DEFAULT_MAX_FACES, DEFAULT_REFERENCE_DEPTH, DEFAULT_SMOOTHING_ALPHA,
    DEFAULT_TRACKING_CONFIDENCE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render camera configuration
    pub camera: CameraConfig,

    /// Landmark tracking configuration
    pub tracking: TrackingConfig,

    /// Effect configuration
    pub effect: EffectConfig,

    /// Frame capture configuration
    pub capture: CaptureConfig,
}

/// Render camera parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f64,

    /// Aspect ratio (width / height)
    pub aspect: f64,

    /// Fixed reference depth matching the static camera distance
    pub reference_depth: f64,

    /// Viewport width in pixels
    pub width: u32,

    /// Viewport height in pixels
    pub height: u32,
}

/// Landmark detector parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Maximum number of faces to track
    pub max_faces: usize,

    /// Enable landmark refinement (required for iris landmarks)
    pub refine_landmarks: bool,

    /// Detection confidence threshold (0.0-1.0)
    pub min_detection_confidence: f32,

    /// Tracking confidence threshold (0.0-1.0)
    pub min_tracking_confidence: f32,
}

/// Effect parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Start with the debug overlay visible
    pub debug_visible: bool,

    /// Start with the laser effect enabled
    pub laser_enabled: bool,

    /// Marker position filter ("none" or "exponential")
    pub smoothing: String,

    /// Exponential smoothing alpha
    pub smoothing_alpha: f64,
}

/// Frame capture parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Output path for captured frames
    pub output: PathBuf,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
            aspect: DEFAULT_ASPECT,
            reference_depth: DEFAULT_REFERENCE_DEPTH,
            width: DEFAULT_FRAME_WIDTH,
            height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            max_faces: DEFAULT_MAX_FACES,
            refine_landmarks: true,
            min_detection_confidence: DEFAULT_DETECTION_CONFIDENCE,
            min_tracking_confidence: DEFAULT_TRACKING_CONFIDENCE,
        }
    }
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            debug_visible: false,
            laser_enabled: true,
            smoothing: "none".to_string(),
            smoothing_alpha: DEFAULT_SMOOTHING_ALPHA,
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("capture.png"),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..180.0).contains(&self.camera.fov_y_degrees) || self.camera.fov_y_degrees <= 0.0 {
            return Err(Error::ConfigError(
                "Field of view must be between 0 and 180 degrees".to_string(),
            ));
        }
        if self.camera.aspect <= 0.0 {
            return Err(Error::ConfigError(
                "Aspect ratio must be greater than 0".to_string(),
            ));
        }
        if self.camera.reference_depth <= 0.0 {
            return Err(Error::ConfigError(
                "Reference depth must be greater than 0".to_string(),
            ));
        }
        if self.camera.width == 0 || self.camera.height == 0 {
            return Err(Error::ConfigError(
                "Viewport dimensions must be greater than 0".to_string(),
            ));
        }

        if self.tracking.max_faces == 0 {
            return Err(Error::ConfigError(
                "Max faces must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.tracking.min_detection_confidence) {
            return Err(Error::ConfigError(
                "Detection confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.tracking.min_tracking_confidence) {
            return Err(Error::ConfigError(
                "Tracking confidence must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.effect.smoothing_alpha <= 0.0 || self.effect.smoothing_alpha > 1.0 {
            return Err(Error::ConfigError(
                "Smoothing alpha must be in (0, 1]".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Laser Eyes Configuration

# Render camera
camera:
  fov_y_degrees: 75.0
  aspect: 1.7777777777777777
  reference_depth: 5.0
  width: 1280
  height: 720

# Landmark tracking
tracking:
  max_faces: 1
  refine_landmarks: true
  min_detection_confidence: 0.5
  min_tracking_confidence: 0.5

# Effect settings
effect:
  debug_visible: false
  laser_enabled: true
  smoothing: "none"
  smoothing_alpha: 0.5

# Frame capture
capture:
  output: "capture.png"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.tracking.max_faces, 1);
        assert!(config.effect.laser_enabled);
        assert!(!config.effect.debug_visible);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.camera.fov_y_degrees = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.camera.reference_depth = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.tracking.min_detection_confidence = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.tracking.max_faces = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.effect.smoothing_alpha = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.camera.width, config.camera.width);
        assert_eq!(parsed.effect.smoothing, config.effect.smoothing);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("camera:\n  fov_y_degrees: 50.0\n").unwrap();
        assert_eq!(config.camera.fov_y_degrees, 50.0);
        assert_eq!(config.tracking.max_faces, DEFAULT_MAX_FACES);
    }
}
