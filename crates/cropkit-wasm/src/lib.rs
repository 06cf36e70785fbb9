//! Cropkit WASM - WebAssembly bindings for Cropkit
//!
//! This crate exposes the cropkit-core geometry and the interaction controller
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `geometry` - Stateless crop maths (crop size, clamping, cropped area)
//! - `cropper` - `JsCropper`, a stateful session driven by DOM events
//! - `types` - Conversions between JS values and core types
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropper } from '@cropkit/wasm';
//!
//! await init();
//!
//! const cropper = new JsCropper({ aspect: 4 / 3 });
//! const rect = container.getBoundingClientRect();
//! cropper.setContainerRect(rect.left, rect.top, rect.width, rect.height);
//! for (const event of cropper.mediaLoaded(img.naturalWidth, img.naturalHeight)) {
//!   if (event.type === 'cropComplete') save(event.area.pixels);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod cropper;
mod geometry;
mod types;

pub use cropper::JsCropper;
pub use geometry::{
    compute_cropped_area, crop_size, distance, initial_crop_from_percentages,
    initial_crop_from_pixels, media_size_for_container, restrict_position, rotation,
};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
