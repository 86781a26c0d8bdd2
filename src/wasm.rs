//! JavaScript bindings.
//!
//! Exposes `tsp(points)` taking and returning an array of
//! `{ latitude, longitude }` objects, ordered by great-circle distance.

use wasm_bindgen::prelude::*;

use crate::geo::GeoPoint;
use crate::solver::solve;

/// Orders `{ latitude, longitude }` points into a short closed tour.
#[wasm_bindgen]
pub fn tsp(points: JsValue) -> Result<JsValue, JsValue> {
    let points: Vec<GeoPoint> = serde_wasm_bindgen::from_value(points)
        .map_err(|e| JsValue::from_str(&format!("invalid points: {e}")))?;

    serde_wasm_bindgen::to_value(&solve(&points))
        .map_err(|e| JsValue::from_str(&format!("failed to encode tour: {e}")))
}
