//! Renderers module
//!
//! Debug rendering of skylines: a serializable display list for the editor
//! overlay and a standalone SVG export.

pub mod display_list;
pub mod svg;

// Re-export commonly used types
pub use display_list::{RenderPath, RenderStroke, SkylineDisplayList};
pub use svg::SVGRenderer;
