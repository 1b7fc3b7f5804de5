//! Configuration for implore-display
//!
//! Holds the 3D capability flag, surface naming, and the switches for the
//! strict-axis and duplicate-reference policies.

use serde::{Deserialize, Serialize};

/// Display layer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Whether the 3D rendering engine is available in this runtime
    pub three_d_available: bool,
    /// Name given to new 3D surfaces (flattened ones included)
    pub surface_name_3d: String,
    /// Name given to new native 2D surfaces
    pub surface_name_2d: String,
    /// Reference name used when drawing primitives
    pub primitive_reference_name: String,
    /// Fail axis inference when a display maps some axes but not a needed one
    pub strict_axes: bool,
    /// Fail when a reference name is already used on the target display
    pub reject_duplicate_references: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            three_d_available: true,
            surface_name_3d: "Display3D".to_string(),
            surface_name_2d: "Display2D".to_string(),
            primitive_reference_name: "linesegment".to_string(),
            strict_axes: false,
            reject_duplicate_references: false,
        }
    }
}

impl DisplayConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for a runtime without a 3D engine
    pub fn without_3d() -> Self {
        Self {
            three_d_available: false,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surface_name_3d.trim().is_empty() {
            return Err(ConfigError::MissingField("surface_name_3d".to_string()));
        }
        if self.surface_name_2d.trim().is_empty() {
            return Err(ConfigError::MissingField("surface_name_2d".to_string()));
        }
        if self.primitive_reference_name.trim().is_empty() {
            return Err(ConfigError::MissingField(
                "primitive_reference_name".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Required field is missing or blank
    #[error("Missing field: {0}")]
    MissingField(String),
}
