//! Position restriction.

use super::{clamp, rotate_size};
use crate::{MediaSize, Point, Size};

/// Clamp a crop position so the crop area stays inside the zoomed, rotated
/// media.
///
/// Each axis is clamped independently to `±(media * zoom / 2 - crop / 2)`.
/// When the crop is larger than the zoomed media on an axis, that axis is
/// centered. Restricting an already restricted position returns it unchanged.
pub fn restrict_position(
    position: Point,
    media_size: &MediaSize,
    crop_size: Size,
    zoom: f64,
    rotation: f64,
) -> Point {
    let bbox = rotate_size(media_size.width, media_size.height, rotation);
    Point {
        x: restrict_coord(position.x, bbox.width, crop_size.width, zoom),
        y: restrict_coord(position.y, bbox.height, crop_size.height, zoom),
    }
}

fn restrict_coord(position: f64, media: f64, crop: f64, zoom: f64) -> f64 {
    let max_position = media * zoom / 2.0 - crop / 2.0;
    if max_position <= 0.0 {
        return 0.0;
    }
    clamp(position, -max_position, max_position)
}
