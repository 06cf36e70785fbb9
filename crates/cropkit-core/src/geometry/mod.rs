//! Crop geometry.
//!
//! Everything in this module is a pure function of its inputs. The controller
//! calls into it on every interaction; hosts can also use it directly, for
//! example to turn a stored crop into pixels without a live cropper.
//!
//! # Coordinate System
//!
//! - A crop position of (0, 0) centers the crop area on the media
//! - Positive crop x moves the media right (shows more of its left side)
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - Percentages are 0 to 100 of the rotated media bounding box
//! - Pixels are whole pixels of the natural, rotated media bounding box

mod area;
mod fit;
mod points;
mod restrict;

pub use area::{
    compute_cropped_area, initial_crop_from_percentages, initial_crop_from_pixels,
    zoom_from_pixels,
};
pub use fit::{crop_size, media_size_for_container};
pub use points::{center, distance_between_points, rotation_between_points};
pub use restrict::restrict_position;

use crate::Size;

/// Convert degrees to radians.
#[inline]
pub fn radian_angle(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Bounding box of a `width` x `height` rectangle rotated by `rotation` degrees.
///
/// ```text
/// w' = |w * cos| + |h * sin|
/// h' = |w * sin| + |h * cos|
/// ```
pub fn rotate_size(width: f64, height: f64, rotation: f64) -> Size {
    let rad = radian_angle(rotation);
    let (sin, cos) = rad.sin_cos();
    Size {
        width: (cos * width).abs() + (sin * height).abs(),
        height: (sin * width).abs() + (cos * height).abs(),
    }
}

/// Clamp without panicking on an inverted range; `min` wins.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}
