//! Skyline configuration
//!
//! Tunables for the split tolerance and for the debug rendering. Loaded
//! from JSON or YAML; every field has a default so partial documents work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::SkylineError;
use crate::skyline::SPLIT_EPSILON;

/// Stroke colour of north lines (light green)
pub const DEFAULT_NORTH_COLOR: &str = "#90ee90";

/// Stroke colour of south lines (light blue)
pub const DEFAULT_SOUTH_COLOR: &str = "#9090ee";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SkylineConfig {
    /// Stroke width for debug rendering
    pub line_width: f64,

    /// Stroke colour of the north line (any CSS/SVG colour string)
    pub north_color: String,

    /// Stroke colour of the south line
    pub south_color: String,

    /// Widths at or below this are treated as zero when splitting segments
    pub split_epsilon: f64,
}

impl Default for SkylineConfig {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            north_color: DEFAULT_NORTH_COLOR.to_string(),
            south_color: DEFAULT_SOUTH_COLOR.to_string(),
            split_epsilon: SPLIT_EPSILON,
        }
    }
}

impl SkylineConfig {
    pub fn from_json_str(text: &str) -> Result<Self, SkylineError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, SkylineError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, choosing the format from its extension
    /// (`.json`, `.yaml` or `.yml`)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SkylineError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            other => Err(SkylineError::InvalidConfig(format!(
                "unsupported config extension {:?} for {}",
                other,
                path.display()
            ))),
        }
    }

    /// Same config with a different stroke width
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn validate(&self) -> Result<(), SkylineError> {
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(SkylineError::InvalidConfig(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }
        if !(self.split_epsilon.is_finite() && self.split_epsilon >= 0.0) {
            return Err(SkylineError::InvalidConfig(format!(
                "split_epsilon must be non-negative, got {}",
                self.split_epsilon
            )));
        }
        if self.north_color.trim().is_empty() || self.south_color.trim().is_empty() {
            return Err(SkylineError::InvalidConfig("stroke colours must not be empty".to_string()));
        }
        Ok(())
    }
}
