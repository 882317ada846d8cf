pub mod analysis;
pub mod error;
pub mod options;
pub mod parser;
pub mod track;

use wasm_bindgen::prelude::*;

use crate::options::AnalyzeOptions;
use crate::track::TrackStatistics;

/// Analyze a GPX string into a statistics record.
///
/// Never fails: a document that cannot be parsed as XML yields an
/// all-absent record, the same shape callers see for a well-formed
/// document with no usable points. Use [`parser::parse_track_points`]
/// directly to tell the two apart.
pub fn analyze_gpx(gpx_string: &str, opts: &AnalyzeOptions) -> TrackStatistics {
    match parser::parse_track_points(gpx_string) {
        Ok(points) => analysis::to_track_statistics(&points, opts),
        Err(_) => TrackStatistics::default(),
    }
}

/// Analyze raw GPX bytes (UTF-8, or Latin-1 as a fallback).
pub fn analyze_gpx_bytes(bytes: &[u8], opts: &AnalyzeOptions) -> TrackStatistics {
    let text = parser::decode_document(bytes);
    analyze_gpx(&text, opts)
}

/// Analyze a GPX string, statistics returned as a JS object.
#[wasm_bindgen(js_name = gpxToStats)]
pub fn gpx_to_stats(gpx_string: &str, options: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let stats = analyze_gpx(gpx_string, &opts);
    serde_wasm_bindgen::to_value(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Analyze a GPX string, statistics returned as a JSON string.
#[wasm_bindgen(js_name = gpxToStatsString)]
pub fn gpx_to_stats_string(gpx_string: &str, options: JsValue) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let stats = analyze_gpx(gpx_string, &opts);
    serde_json::to_string(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_options(options: JsValue) -> Result<AnalyzeOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(AnalyzeOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
