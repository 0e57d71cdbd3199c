//! JavaScript-facing skyline
//!
//! Thin wrapper over `crate::skyline::Skyline`. Values coming from
//! JavaScript are checked here; the engine itself never fails.

use wasm_bindgen::prelude::*;

use super::config::active_config;
use super::helpers::{deserialize, serialize, skyline_error};
use crate::config::SkylineConfig;
use crate::models::{Rect, Shape};
use crate::skyline::Skyline;
use crate::{wasm_log, wasm_warn};

#[wasm_bindgen]
pub struct WasmSkyline {
    inner: Skyline,
}

#[wasm_bindgen]
impl WasmSkyline {
    /// Create an empty skyline using the active configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSkyline {
        WasmSkyline {
            inner: Skyline::from_config(&active_config()),
        }
    }

    #[wasm_bindgen(js_name = addRect)]
    pub fn add_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), JsValue> {
        let rect = Rect::try_new(x, y, width, height).map_err(skyline_error)?;
        self.inner.add_rect(&rect);
        Ok(())
    }

    /// Add an array of `{x, y, width, height}` objects
    #[wasm_bindgen(js_name = addShape)]
    pub fn add_shape(&mut self, rects_js: JsValue) -> Result<(), JsValue> {
        let shape: Shape = deserialize(rects_js, "Invalid shape")?;
        let (valid, invalid): (Vec<Rect>, Vec<Rect>) =
            shape.iter().copied().partition(|r| r.is_finite());
        if !invalid.is_empty() {
            wasm_warn!("addShape: skipping {} non-finite rectangles", invalid.len());
        }
        self.inner.add_shape(&Shape::from(valid));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Distance needed to place `other` directly below this skyline
    #[wasm_bindgen(js_name = minDistance)]
    pub fn min_distance(&self, other: &WasmSkyline) -> f64 {
        self.inner.min_distance(&other.inner)
    }

    #[wasm_bindgen(js_name = northMax)]
    pub fn north_max(&self) -> f64 {
        self.inner.north().max()
    }

    #[wasm_bindgen(js_name = southMax)]
    pub fn south_max(&self) -> f64 {
        self.inner.south().max()
    }

    pub fn dump(&self, label: &str, north: bool) -> String {
        self.inner.dump(label, north)
    }

    /// Dump of one side as an array of lines
    #[wasm_bindgen(js_name = dumpLines)]
    pub fn dump_lines(&self, north: bool) -> js_sys::Array {
        let line = if north { self.inner.north() } else { self.inner.south() };
        line.dump()
            .lines()
            .map(|l| JsValue::from_str(l.trim()))
            .collect()
    }

    #[wasm_bindgen(js_name = northSegments)]
    pub fn north_segments(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.north().segments(), "Failed to serialize north segments")
    }

    #[wasm_bindgen(js_name = southSegments)]
    pub fn south_segments(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.south().segments(), "Failed to serialize south segments")
    }

    /// Debug display list; `line_width` overrides the configured width
    #[wasm_bindgen(js_name = displayList)]
    pub fn display_list(&self, line_width: Option<f64>) -> Result<JsValue, JsValue> {
        let list = self.inner.paint(&self.render_config(line_width));
        wasm_log!("displayList: {} strokes", list.stroke_count());
        serialize(&list, "Failed to serialize skyline display list")
    }

    #[wasm_bindgen(js_name = toSvg)]
    pub fn to_svg(&self, line_width: Option<f64>) -> String {
        self.inner.paint(&self.render_config(line_width)).to_svg()
    }
}

impl WasmSkyline {
    fn render_config(&self, line_width: Option<f64>) -> SkylineConfig {
        let config = active_config();
        match line_width {
            Some(w) if w.is_finite() && w > 0.0 => config.with_line_width(w),
            Some(w) => {
                wasm_warn!("Ignoring invalid line width {}", w);
                config
            }
            None => config,
        }
    }
}

impl Default for WasmSkyline {
    fn default() -> Self {
        Self::new()
    }
}
