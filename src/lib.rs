//! Skyline WASM Module
//!
//! Collision envelopes for the notation layout engine. A skyline records
//! the top and bottom extent of everything placed along a system so the
//! layout engine can ask how far apart two blocks must be stacked.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod renderers;
pub mod skyline;
pub mod utils;

// Re-export commonly used types
pub use config::SkylineConfig;
pub use errors::SkylineError;
pub use models::{Rect, Shape};
pub use skyline::{Side, Skyline, SkylineLine, SkylineSegment, MAXIMUM_Y, MINIMUM_Y};

use wasm_bindgen::prelude::*;

// Runs once when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    init_logger();

    log::info!("Skyline WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"[WASM] logger already initialized".into());
    }
}
