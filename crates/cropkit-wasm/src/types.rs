//! Conversions between JavaScript values and core types.
//!
//! Core types derive serde with camelCase names, so they cross the boundary
//! through `serde_wasm_bindgen` without wrapper structs. The helpers here add
//! the error mapping and the few string/array encodings the bindings use.

use cropkit_core::{InteractionState, ObjectFit, Point};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Deserialize a JS value, naming the argument in the error.
pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

/// Serialize a value for JS.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Serialize an optional value, mapping `None` to `null`.
pub(crate) fn option_to_js<T: Serialize>(value: Option<T>) -> Result<JsValue, JsValue> {
    match value {
        Some(v) => to_js(&v),
        None => Ok(JsValue::NULL),
    }
}

/// Report a non-fatal problem on the developer console.
pub(crate) fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Parse a CSS-like object-fit name.
///
/// Accepts `contain`, `horizontal-cover`, `vertical-cover` and `cover`
/// (alias `auto-cover`).
pub(crate) fn parse_object_fit(name: &str) -> Option<ObjectFit> {
    match name {
        "contain" => Some(ObjectFit::Contain),
        "horizontal-cover" => Some(ObjectFit::HorizontalCover),
        "vertical-cover" => Some(ObjectFit::VerticalCover),
        "cover" | "auto-cover" => Some(ObjectFit::Cover),
        _ => None,
    }
}

/// Decode touches passed as a flat `[x0, y0, x1, y1, ...]` array.
///
/// A trailing odd coordinate is ignored.
pub(crate) fn touch_points(coords: &[f64]) -> Vec<Point> {
    coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}

/// Name of an interaction state as seen from JS.
pub(crate) fn state_name(state: InteractionState) -> &'static str {
    match state {
        InteractionState::Idle => "idle",
        InteractionState::Dragging => "dragging",
        InteractionState::Pinching => "pinching",
        InteractionState::Gesture => "gesture",
    }
}
