#![cfg(target_arch = "wasm32")]

use gpx2stats_wasm::{gpx_to_stats_string, gpx_to_stats};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const CLIMB: &str = r#"<?xml version="1.0"?>
<gpx xmlns="http://www.topografix.com/GPX/1/1" version="1.1">
  <trk>
    <trkseg>
      <trkpt lat="45.0" lon="9.0"><ele>100.0</ele></trkpt>
      <trkpt lat="45.0" lon="9.01"><ele>108.0</ele></trkpt>
    </trkseg>
  </trk>
</gpx>"#;

#[wasm_bindgen_test]
fn stats_string_for_minimal_track() {
    let json = gpx_to_stats_string(CLIMB, JsValue::NULL).unwrap();
    assert!(json.contains("\"distanceKm\":0.79"));
}

#[wasm_bindgen_test]
fn stats_object_is_not_null() {
    let value = gpx_to_stats(CLIMB, JsValue::UNDEFINED).unwrap();
    assert!(!value.is_null());
}

#[wasm_bindgen_test]
fn malformed_gpx_yields_empty_record() {
    let json = gpx_to_stats_string("<gpx", JsValue::NULL).unwrap();
    assert!(!json.contains("distanceKm"));
}
