//! Skyline WASM API
//!
//! JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: logging, serialization and error conversion
//! - `config`: the shared `SkylineConfig`
//! - `skyline`: the `WasmSkyline` class

pub mod helpers;
pub mod config;
pub mod skyline;

pub use config::{active_config, get_skyline_config, load_skyline_config_yaml, reset_skyline_config, set_skyline_config};
pub use skyline::WasmSkyline;
