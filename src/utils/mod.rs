//! Utility modules

pub mod float;

// Re-export commonly used types
pub use float::*;
