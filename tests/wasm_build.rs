//! WASM build test
//!
//! Exercises the JavaScript-facing skyline inside a browser.

#![cfg(target_arch = "wasm32")]

use skyline_wasm::api::{reset_skyline_config, WasmSkyline};
use skyline_wasm::{MAXIMUM_Y, MINIMUM_Y};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_new_skyline_is_empty() {
    let skyline = WasmSkyline::new();
    assert_eq!(skyline.north_max(), MAXIMUM_Y);
    assert_eq!(skyline.south_max(), MINIMUM_Y);
}

#[wasm_bindgen_test]
fn test_add_rect_and_distance() {
    let mut upper = WasmSkyline::new();
    upper.add_rect(0.0, 0.0, 10.0, 20.0).unwrap();
    let mut lower = WasmSkyline::new();
    lower.add_rect(0.0, 0.0, 10.0, 8.0).unwrap();

    assert_eq!(upper.min_distance(&lower), 20.0);
    assert_eq!(upper.north_max(), 0.0);
    assert_eq!(upper.south_max(), 20.0);
}

#[wasm_bindgen_test]
fn test_non_finite_rect_is_rejected() {
    let mut skyline = WasmSkyline::new();
    assert!(skyline.add_rect(f64::NAN, 0.0, 1.0, 1.0).is_err());
    assert_eq!(skyline.north_max(), MAXIMUM_Y);
}

#[wasm_bindgen_test]
fn test_display_list_serializes() {
    reset_skyline_config().unwrap();
    let mut skyline = WasmSkyline::new();
    skyline.add_rect(0.0, 10.0, 5.0, 10.0).unwrap();

    let list = skyline.display_list(Some(2.0)).unwrap();
    assert!(list.is_object());
    assert!(skyline.to_svg(None).contains("<line "));
    assert_eq!(skyline.dump_lines(true).length(), 1);
}

#[wasm_bindgen_test]
fn test_add_shape_from_js() {
    let mut skyline = WasmSkyline::new();
    let rects = js_sys::JSON::parse(r#"[{"x":0,"y":1,"width":2,"height":3}]"#).unwrap();
    skyline.add_shape(rects).unwrap();
    assert_eq!(skyline.south_max(), 4.0);
    assert!(skyline.add_shape(JsValue::from_str("nope")).is_err());
}
