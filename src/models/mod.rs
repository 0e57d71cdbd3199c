//! Models module
//!
//! Geometry supplied by the layout engine.

pub mod geometry;

// Re-export commonly used types
pub use geometry::{Rect, Shape};
