//! Error types for the skyline module
//!
//! The engine itself never fails: degenerate insertions are absorbed.
//! Errors only arise at the boundary, when loading configuration or
//! accepting values from JavaScript.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkylineError {
    /// Config text is not valid JSON
    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config text is not valid YAML
    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Rectangle with NaN or infinite coordinates
    #[error("Invalid rectangle: {0}")]
    InvalidRect(String),
}
