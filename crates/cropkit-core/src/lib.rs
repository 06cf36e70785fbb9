//! cropkit Core - crop geometry and interaction library
//!
//! This crate provides the pure geometry behind an interactive media cropper
//! (crop size, position restriction, cropped-area conversion in both
//! directions) and a host-driven interaction controller that turns pointer,
//! touch, wheel and gesture input into crop/zoom/rotation updates.
//!
//! Nothing here touches the DOM. The host measures the container and media,
//! forwards raw event coordinates, and re-supplies the reported values.

pub mod controller;
pub mod error;
pub mod geometry;
pub mod options;

pub use controller::{Cropper, CropperCallbacks, CropperEvent, InteractionState};
pub use error::CropperError;
pub use geometry::{
    compute_cropped_area, crop_size, initial_crop_from_percentages, initial_crop_from_pixels,
    media_size_for_container, restrict_position,
};
pub use options::{CropShape, CropperOptions, InitialCroppedArea, ObjectFit};

use serde::{Deserialize, Serialize};

/// A 2D coordinate in container or media space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a container, media element or crop rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Rendered and intrinsic dimensions of the media.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSize {
    /// Rendered width after object-fit
    pub width: f64,
    /// Rendered height after object-fit
    pub height: f64,
    /// Intrinsic width of the image or video
    pub natural_width: f64,
    /// Intrinsic height of the image or video
    pub natural_height: f64,
}

impl MediaSize {
    pub fn rendered(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn natural(&self) -> Size {
        Size::new(self.natural_width, self.natural_height)
    }
}

/// A crop rectangle, either in percentages or in natural media pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Area {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The cropped area in both of its representations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CroppedArea {
    /// Resolution independent, in the range 0 to 100
    pub percentages: Area,
    /// Whole pixels of the natural (rotated) media
    pub pixels: Area,
}

/// A crop position and zoom pair, as derived from a target area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropView {
    pub crop: Point,
    pub zoom: f64,
}

/// Measured container rectangle in client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
