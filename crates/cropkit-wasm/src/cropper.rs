//! Stateful cropper session for JavaScript.
//!
//! The host forwards DOM events to a `JsCropper` and applies the returned
//! events to its own state, then feeds the new crop/zoom/rotation back through
//! the setters. Every mutating method returns the events it produced as an
//! array of `{ type, ... }` objects, so no JS function is ever called from
//! inside Rust.

use crate::types::{from_js, option_to_js, parse_object_fit, state_name, to_js, touch_points, warn};
use cropkit_core::controller::DeltaMode;
use cropkit_core::{ContainerRect, Cropper, CropperError, CropperEvent, CropperOptions, Point, Size};
use wasm_bindgen::prelude::*;

/// A cropper session.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const cropper = new JsCropper({ aspect: 16 / 9, maxZoom: 5 });
/// cropper.setContainerRect(rect.left, rect.top, rect.width, rect.height);
/// apply(cropper.mediaLoaded(img.naturalWidth, img.naturalHeight));
///
/// el.onmousedown = (e) => apply(cropper.onMouseDown(e.clientX, e.clientY));
/// const tick = () => { apply(cropper.frame()); apply(cropper.poll()); requestAnimationFrame(tick); };
/// ```
#[wasm_bindgen]
pub struct JsCropper {
    inner: Cropper<Vec<CropperEvent>>,
}

impl JsCropper {
    fn from_options(options: CropperOptions) -> Result<JsCropper, CropperError> {
        Ok(JsCropper {
            inner: Cropper::new(options, Vec::new())?,
        })
    }

    fn drain(&mut self) -> Vec<CropperEvent> {
        std::mem::take(self.inner.callbacks_mut())
    }

    fn flush(&mut self) -> Result<JsValue, JsValue> {
        let events = self.drain();
        to_js(&events)
    }

    /// Flush events, reporting a controller error on the console instead of
    /// throwing.
    fn flush_or_warn(&mut self, result: Result<(), CropperError>) -> Result<JsValue, JsValue> {
        if let Err(err) = result {
            warn(&format!("cropkit: {}", err));
        }
        self.flush()
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn error_to_js(err: CropperError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
impl JsCropper {
    /// Create a session. `options` may be omitted for the defaults.
    ///
    /// # Errors
    ///
    /// Throws when the options fail validation (for example a zero aspect).
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<JsCropper, JsValue> {
        let options: CropperOptions = if options.is_undefined() || options.is_null() {
            CropperOptions::default()
        } else {
            from_js(options, "options")?
        };
        JsCropper::from_options(options).map_err(error_to_js)
    }

    /// Replace all options.
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: JsValue) -> Result<JsValue, JsValue> {
        let options: CropperOptions = from_js(options, "options")?;
        self.inner.set_options(options).map_err(error_to_js)?;
        self.flush()
    }

    #[wasm_bindgen(js_name = setAspect)]
    pub fn set_aspect(&mut self, aspect: f64) -> Result<JsValue, JsValue> {
        self.inner.set_aspect(aspect).map_err(error_to_js)?;
        self.flush()
    }

    /// Set the object-fit mode by name (`contain`, `horizontal-cover`, ...).
    #[wasm_bindgen(js_name = setObjectFit)]
    pub fn set_object_fit(&mut self, object_fit: &str) -> Result<JsValue, JsValue> {
        let fit = parse_object_fit(object_fit)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown objectFit: {}", object_fit)))?;
        self.inner.set_object_fit(fit);
        self.flush()
    }

    /// Fix the crop size, or pass `null` to derive it from the aspect.
    #[wasm_bindgen(js_name = setCropSize)]
    pub fn set_crop_size(&mut self, size: JsValue) -> Result<JsValue, JsValue> {
        let size: Option<Size> = from_js(size, "crop size")?;
        self.inner.set_crop_size(size).map_err(error_to_js)?;
        self.flush()
    }

    /// Report the container's bounding rectangle in client coordinates.
    #[wasm_bindgen(js_name = setContainerRect)]
    pub fn set_container_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<JsValue, JsValue> {
        self.inner
            .set_container_rect(ContainerRect::new(x, y, width, height));
        self.flush()
    }

    /// Report the media's natural dimensions once it has loaded.
    #[wasm_bindgen(js_name = mediaLoaded)]
    pub fn media_loaded(
        &mut self,
        natural_width: f64,
        natural_height: f64,
    ) -> Result<JsValue, JsValue> {
        self.inner
            .media_loaded(Size::new(natural_width, natural_height));
        self.flush()
    }

    #[wasm_bindgen(js_name = setCrop)]
    pub fn set_crop(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        self.inner.set_crop(Point::new(x, y));
        self.flush()
    }

    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(&mut self, zoom: f64) -> Result<JsValue, JsValue> {
        self.inner.set_zoom(zoom);
        self.flush()
    }

    #[wasm_bindgen(js_name = setRotation)]
    pub fn set_rotation(&mut self, rotation: f64) -> Result<JsValue, JsValue> {
        self.inner.set_rotation(rotation);
        self.flush()
    }

    #[wasm_bindgen(js_name = onMouseDown)]
    pub fn on_mouse_down(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        self.inner.mouse_down(Point::new(x, y));
        self.flush()
    }

    #[wasm_bindgen(js_name = onMouseMove)]
    pub fn on_mouse_move(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        self.inner.mouse_move(Point::new(x, y));
        self.flush()
    }

    #[wasm_bindgen(js_name = onMouseUp)]
    pub fn on_mouse_up(&mut self) -> Result<JsValue, JsValue> {
        self.inner.mouse_up();
        self.flush()
    }

    /// Touches as a flat `[x0, y0, x1, y1, ...]` array of client coordinates.
    #[wasm_bindgen(js_name = onTouchStart)]
    pub fn on_touch_start(&mut self, touches: &[f64]) -> Result<JsValue, JsValue> {
        self.inner.touch_start(&touch_points(touches));
        self.flush()
    }

    #[wasm_bindgen(js_name = onTouchMove)]
    pub fn on_touch_move(&mut self, touches: &[f64]) -> Result<JsValue, JsValue> {
        self.inner.touch_move(&touch_points(touches));
        self.flush()
    }

    #[wasm_bindgen(js_name = onTouchEnd)]
    pub fn on_touch_end(&mut self) -> Result<JsValue, JsValue> {
        self.inner.touch_end();
        self.flush()
    }

    /// Wheel zoom. `delta_mode` is `WheelEvent.deltaMode`.
    #[wasm_bindgen(js_name = onWheel)]
    pub fn on_wheel(
        &mut self,
        x: f64,
        y: f64,
        delta_y: f64,
        delta_mode: u32,
    ) -> Result<JsValue, JsValue> {
        let result = self.inner.wheel(
            Point::new(x, y),
            delta_y,
            DeltaMode::from(delta_mode),
            now_ms(),
        );
        self.flush_or_warn(result)
    }

    #[wasm_bindgen(js_name = onGestureStart)]
    pub fn on_gesture_start(&mut self) -> Result<JsValue, JsValue> {
        self.inner.gesture_start();
        self.flush()
    }

    /// Safari gesture update; `scale` and `rotation` are cumulative.
    #[wasm_bindgen(js_name = onGestureChange)]
    pub fn on_gesture_change(
        &mut self,
        x: f64,
        y: f64,
        scale: f64,
        rotation: f64,
    ) -> Result<JsValue, JsValue> {
        let result = self
            .inner
            .gesture_change(Point::new(x, y), scale, rotation);
        self.flush_or_warn(result)
    }

    #[wasm_bindgen(js_name = onGestureEnd)]
    pub fn on_gesture_end(&mut self) -> Result<JsValue, JsValue> {
        self.inner.gesture_end();
        self.flush()
    }

    /// Run the pending drag/pinch update. Call once per animation frame.
    pub fn frame(&mut self) -> Result<JsValue, JsValue> {
        self.inner.frame();
        self.flush()
    }

    /// Fire timers that are due now (the wheel interaction end).
    pub fn poll(&mut self) -> Result<JsValue, JsValue> {
        self.inner.advance_time(now_ms());
        self.flush()
    }

    /// Current `{ percentages, pixels }`, or `null` before the media is sized.
    #[wasm_bindgen(js_name = cropData)]
    pub fn crop_data(&self) -> Result<JsValue, JsValue> {
        option_to_js(self.inner.crop_data())
    }

    /// Current `{ width, height }` of the crop box, or `null`.
    #[wasm_bindgen(js_name = cropSize)]
    pub fn crop_size(&self) -> Result<JsValue, JsValue> {
        option_to_js(self.inner.crop_size())
    }

    /// Rendered media size, or `null`.
    #[wasm_bindgen(js_name = mediaSize)]
    pub fn media_size(&self) -> Result<JsValue, JsValue> {
        option_to_js(self.inner.media_size())
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.inner.zoom()
    }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.inner.rotation()
    }

    /// `idle`, `dragging`, `pinching` or `gesture`.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        state_name(self.inner.state()).to_string()
    }

    #[wasm_bindgen(js_name = hasPendingFrame)]
    pub fn has_pending_frame(&self) -> bool {
        self.inner.has_pending_frame()
    }

    /// Timestamp at which `poll()` will end the wheel interaction, if any.
    #[wasm_bindgen(js_name = wheelDeadline)]
    pub fn wheel_deadline(&self) -> Option<f64> {
        self.inner.wheel_deadline()
    }

    /// Cancel pending frames and timers. Call when the element unmounts.
    pub fn destroy(&mut self) {
        self.inner.teardown();
        self.drain();
    }
}
