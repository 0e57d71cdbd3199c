//! Skyline configuration API
//!
//! The active configuration is shared by every `WasmSkyline` created
//! afterwards. It styles debug rendering and sets the split tolerance.

use std::sync::Mutex;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, serialize, skyline_error};
use crate::config::SkylineConfig;
use crate::{wasm_error, wasm_log};

lazy_static! {
    static ref CONFIG: Mutex<SkylineConfig> = Mutex::new(SkylineConfig::default());
}

/// Snapshot of the active configuration
pub fn active_config() -> SkylineConfig {
    match CONFIG.lock() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn store_config(config: SkylineConfig) -> Result<(), JsValue> {
    let mut guard = CONFIG.lock().map_err(|e| {
        wasm_error!("Failed to lock skyline config: {}", e);
        JsValue::from_str(&format!("Failed to lock skyline config: {}", e))
    })?;
    *guard = config;
    Ok(())
}

/// Replace the active configuration with a config object from JavaScript
#[wasm_bindgen(js_name = setSkylineConfig)]
pub fn set_skyline_config(config_js: JsValue) -> Result<(), JsValue> {
    let config: SkylineConfig = deserialize(config_js, "Invalid skyline config")?;
    config.validate().map_err(skyline_error)?;
    wasm_log!("setSkylineConfig: {:?}", config);
    store_config(config)
}

/// Replace the active configuration with a YAML document
#[wasm_bindgen(js_name = loadSkylineConfigYaml)]
pub fn load_skyline_config_yaml(text: &str) -> Result<(), JsValue> {
    let config = SkylineConfig::from_yaml_str(text).map_err(skyline_error)?;
    wasm_log!("loadSkylineConfigYaml: {:?}", config);
    store_config(config)
}

#[wasm_bindgen(js_name = getSkylineConfig)]
pub fn get_skyline_config() -> Result<JsValue, JsValue> {
    serialize(&active_config(), "Failed to serialize skyline config")
}

/// Restore the default configuration
#[wasm_bindgen(js_name = resetSkylineConfig)]
pub fn reset_skyline_config() -> Result<(), JsValue> {
    store_config(SkylineConfig::default())
}
