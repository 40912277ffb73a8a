//! Configuration system
//!
//! Settings shared by every primitive an application creates, loadable from
//! `.toml` or `.ron` files.

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec4;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Format is chosen by extension
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Settings applied to primitives created from one [`PrimitiveResources`]
///
/// [`PrimitiveResources`]: crate::render::PrimitiveResources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimitiveSettings {
    /// RGBA color for primitives created without an explicit color
    pub default_color: [f32; 4],
    /// Generate the shared unit cube when the resources are created
    pub preload_unit_cube: bool,
}

impl Default for PrimitiveSettings {
    fn default() -> Self {
        Self {
            default_color: [1.0, 1.0, 1.0, 1.0],
            preload_unit_cube: false,
        }
    }
}

impl Config for PrimitiveSettings {}

impl PrimitiveSettings {
    /// Default color as a vector
    pub fn default_color(&self) -> Vec4 {
        Vec4::from(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> PrimitiveSettings {
        PrimitiveSettings {
            default_color: [0.0, 1.0, 0.0, 0.5],
            preload_unit_cube: true,
        }
    }

    #[test]
    fn test_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primitives.toml");
        let path = path.to_str().unwrap();

        sample().save_to_file(path).unwrap();
        let loaded = PrimitiveSettings::load_from_file(path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_ron_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primitives.ron");
        let path = path.to_str().unwrap();

        sample().save_to_file(path).unwrap();
        let loaded = PrimitiveSettings::load_from_file(path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "preload_unit_cube = true\n").unwrap();
        file.flush().unwrap();

        let loaded = PrimitiveSettings::load_from_file(file.path().to_str().unwrap()).unwrap();
        assert!(loaded.preload_unit_cube);
        assert_eq!(loaded.default_color(), Vec4::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_unsupported_format() {
        let err = sample().save_to_file("primitives.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));

        let err = PrimitiveSettings::load_from_file("/nonexistent/primitives.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        write!(file, "(default_color: oops)").unwrap();
        file.flush().unwrap();

        let err = PrimitiveSettings::load_from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
