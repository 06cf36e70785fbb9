//! WASM bindings for the crop geometry.
//!
//! These are stateless and can be used without a `JsCropper`, for example to
//! turn a stored crop into pixels on the server side of an upload.

use crate::types::{from_js, option_to_js, parse_object_fit, to_js};
use cropkit_core::geometry::{
    self, distance_between_points, rotation_between_points,
};
use cropkit_core::{Area, MediaSize, Point, Size};
use wasm_bindgen::prelude::*;

/// Largest crop of `aspect` that fits the rotated media and the container.
///
/// # Returns
///
/// `{ width, height }`
///
/// # Example (TypeScript)
///
/// ```typescript
/// const size = cropSize(800, 480, 800, 600, 4 / 3, 0);
/// // { width: 640, height: 480 }
/// ```
#[wasm_bindgen(js_name = cropSize)]
pub fn crop_size(
    media_width: f64,
    media_height: f64,
    container_width: f64,
    container_height: f64,
    aspect: f64,
    rotation: f64,
) -> Result<JsValue, JsValue> {
    to_js(&geometry::crop_size(
        media_width,
        media_height,
        container_width,
        container_height,
        aspect,
        rotation,
    ))
}

/// Rendered media size under an object-fit mode, or `null` for empty input.
#[wasm_bindgen(js_name = mediaSizeForContainer)]
pub fn media_size_for_container(
    container_width: f64,
    container_height: f64,
    natural_width: f64,
    natural_height: f64,
    object_fit: &str,
) -> Result<JsValue, JsValue> {
    let fit = parse_object_fit(object_fit)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown objectFit: {}", object_fit)))?;
    option_to_js(geometry::media_size_for_container(
        Size::new(container_width, container_height),
        Size::new(natural_width, natural_height),
        fit,
    ))
}

/// Clamp a crop position to the zoomed, rotated media.
///
/// # Arguments
///
/// * `position` - `{ x, y }`
/// * `media_size` - `{ width, height, naturalWidth, naturalHeight }`
#[wasm_bindgen(js_name = restrictPosition)]
pub fn restrict_position(
    position: JsValue,
    media_size: JsValue,
    crop_width: f64,
    crop_height: f64,
    zoom: f64,
    rotation: f64,
) -> Result<JsValue, JsValue> {
    let position: Point = from_js(position, "position")?;
    let media: MediaSize = from_js(media_size, "media size")?;
    to_js(&geometry::restrict_position(
        position,
        &media,
        Size::new(crop_width, crop_height),
        zoom,
        rotation,
    ))
}

/// Cropped area for a crop position.
///
/// # Returns
///
/// `{ percentages: Area, pixels: Area }`
///
/// # Example (TypeScript)
///
/// ```typescript
/// const { percentages, pixels } = computeCroppedArea(
///   crop, mediaSize, 640, 480, 4 / 3, zoom, rotation, true,
/// );
/// ```
#[wasm_bindgen(js_name = computeCroppedArea)]
#[allow(clippy::too_many_arguments)]
pub fn compute_cropped_area(
    crop: JsValue,
    media_size: JsValue,
    crop_width: f64,
    crop_height: f64,
    aspect: f64,
    zoom: f64,
    rotation: f64,
    restrict_position: bool,
) -> Result<JsValue, JsValue> {
    let crop: Point = from_js(crop, "crop")?;
    let media: MediaSize = from_js(media_size, "media size")?;
    to_js(&geometry::compute_cropped_area(
        crop,
        &media,
        Size::new(crop_width, crop_height),
        aspect,
        zoom,
        rotation,
        restrict_position,
    ))
}

/// `{ crop, zoom }` reproducing a percentage area, or `null` for an empty area.
#[wasm_bindgen(js_name = initialCropFromPercentages)]
pub fn initial_crop_from_percentages(
    area: JsValue,
    media_size: JsValue,
    rotation: f64,
    crop_width: f64,
    crop_height: f64,
    min_zoom: f64,
    max_zoom: f64,
) -> Result<JsValue, JsValue> {
    let area: Area = from_js(area, "area")?;
    let media: MediaSize = from_js(media_size, "media size")?;
    option_to_js(geometry::initial_crop_from_percentages(
        &area,
        &media,
        rotation,
        Size::new(crop_width, crop_height),
        min_zoom,
        max_zoom,
    ))
}

/// `{ crop, zoom }` reproducing a pixel area, or `null` for an empty area.
#[wasm_bindgen(js_name = initialCropFromPixels)]
pub fn initial_crop_from_pixels(
    area: JsValue,
    media_size: JsValue,
    rotation: f64,
    crop_width: f64,
    crop_height: f64,
    min_zoom: f64,
    max_zoom: f64,
) -> Result<JsValue, JsValue> {
    let area: Area = from_js(area, "area")?;
    let media: MediaSize = from_js(media_size, "media size")?;
    option_to_js(geometry::initial_crop_from_pixels(
        &area,
        &media,
        rotation,
        Size::new(crop_width, crop_height),
        min_zoom,
        max_zoom,
    ))
}

/// Distance between two touch points.
#[wasm_bindgen(js_name = distanceBetweenPoints)]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    distance_between_points(Point::new(x1, y1), Point::new(x2, y2))
}

/// Angle of the segment between two touch points, in degrees.
#[wasm_bindgen(js_name = rotationBetweenPoints)]
pub fn rotation(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    rotation_between_points(Point::new(x1, y1), Point::new(x2, y2))
}
