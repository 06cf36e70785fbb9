//! Conversion between crop position/zoom and cropped areas.
//!
//! # Rounding
//!
//! Pixel areas are always whole numbers (`f64::round`). Percentage areas are
//! never rounded. The inverse functions accept fractional input of either
//! kind, so a stored pixel area restores to within a pixel of itself.

use super::{clamp, rotate_size};
use crate::{Area, CropView, CroppedArea, MediaSize, Point, Size};

/// Clamp to `[0, max]` when the position is restricted, pass through otherwise.
fn limit(restrict: bool, max: f64, value: f64) -> f64 {
    if restrict {
        clamp(value, 0.0, max)
    } else {
        value
    }
}

/// Compute the cropped area for a crop position, in percentages and pixels.
///
/// # Arguments
///
/// * `crop` - Crop position (restricted beforehand if `restrict` is set)
/// * `media_size` - Rendered and natural media size
/// * `crop_size` - Size of the crop area on screen
/// * `aspect` - Crop aspect; the pixel area keeps it exactly
/// * `zoom` - Current zoom
/// * `rotation` - Media rotation in degrees
/// * `restrict` - Clamp the result to the media bounds
pub fn compute_cropped_area(
    crop: Point,
    media_size: &MediaSize,
    crop_size: Size,
    aspect: f64,
    zoom: f64,
    rotation: f64,
    restrict: bool,
) -> CroppedArea {
    let bbox = rotate_size(media_size.width, media_size.height, rotation);
    let natural = rotate_size(media_size.natural_width, media_size.natural_height, rotation);

    let percentages = Area {
        x: limit(
            restrict,
            100.0,
            ((bbox.width - crop_size.width / zoom) / 2.0 - crop.x / zoom) / bbox.width * 100.0,
        ),
        y: limit(
            restrict,
            100.0,
            ((bbox.height - crop_size.height / zoom) / 2.0 - crop.y / zoom) / bbox.height * 100.0,
        ),
        width: limit(restrict, 100.0, crop_size.width / bbox.width * 100.0 / zoom),
        height: limit(restrict, 100.0, crop_size.height / bbox.height * 100.0 / zoom),
    };

    let width_px = limit(restrict, natural.width, percentages.width * natural.width / 100.0).round();
    let height_px =
        limit(restrict, natural.height, percentages.height * natural.height / 100.0).round();

    // Derive one side from the other so the pixel area has the exact aspect
    let size_px = if natural.width >= natural.height * aspect {
        Size::new((height_px * aspect).round(), height_px)
    } else {
        Size::new(width_px, (width_px / aspect).round())
    };

    let pixels = Area {
        x: limit(
            restrict,
            natural.width - size_px.width,
            percentages.x * natural.width / 100.0,
        )
        .round(),
        y: limit(
            restrict,
            natural.height - size_px.height,
            percentages.y * natural.height / 100.0,
        )
        .round(),
        width: size_px.width,
        height: size_px.height,
    };

    CroppedArea {
        percentages,
        pixels,
    }
}

/// Derive the crop position and zoom that reproduce a percentage area.
///
/// Zoom is taken from the area's width and clamped to `[min_zoom, max_zoom]`;
/// when the area's aspect differs from the crop's, horizontal coverage wins.
/// Returns `None` for an empty area or degenerate media.
pub fn initial_crop_from_percentages(
    area: &Area,
    media_size: &MediaSize,
    rotation: f64,
    crop_size: Size,
    min_zoom: f64,
    max_zoom: f64,
) -> Option<CropView> {
    if area.width <= 0.0 || media_size.rendered().is_degenerate() {
        return None;
    }
    let bbox = rotate_size(media_size.width, media_size.height, rotation);

    let zoom = clamp(
        crop_size.width / bbox.width * (100.0 / area.width),
        min_zoom,
        max_zoom,
    );

    let crop = Point {
        x: zoom * bbox.width / 2.0 - crop_size.width / 2.0 - bbox.width * zoom * (area.x / 100.0),
        y: zoom * bbox.height / 2.0
            - crop_size.height / 2.0
            - bbox.height * zoom * (area.y / 100.0),
    };

    Some(CropView { crop, zoom })
}

/// Ratio between rendered and natural media size.
fn media_zoom(media_size: &MediaSize) -> f64 {
    if media_size.width > media_size.height {
        media_size.width / media_size.natural_width
    } else {
        media_size.height / media_size.natural_height
    }
}

/// Zoom at which a pixel area fills the crop, before clamping.
///
/// Uses the crop's longer side so tall crops match on height.
pub fn zoom_from_pixels(area: &Area, media_size: &MediaSize, crop_size: Size) -> f64 {
    let media_zoom = media_zoom(media_size);
    if crop_size.height > crop_size.width {
        crop_size.height / (area.height * media_zoom)
    } else {
        crop_size.width / (area.width * media_zoom)
    }
}

/// Derive the crop position and zoom that reproduce a pixel area.
///
/// Returns `None` for an empty area or degenerate media.
pub fn initial_crop_from_pixels(
    area: &Area,
    media_size: &MediaSize,
    rotation: f64,
    crop_size: Size,
    min_zoom: f64,
    max_zoom: f64,
) -> Option<CropView> {
    if area.width <= 0.0
        || area.height <= 0.0
        || media_size.rendered().is_degenerate()
        || media_size.natural().is_degenerate()
    {
        return None;
    }
    let natural = rotate_size(media_size.natural_width, media_size.natural_height, rotation);

    let zoom = clamp(
        zoom_from_pixels(area, media_size, crop_size),
        min_zoom,
        max_zoom,
    );

    // Screen pixels per natural pixel of the cropped area
    let crop_zoom = if crop_size.height > crop_size.width {
        crop_size.height / area.height
    } else {
        crop_size.width / area.width
    };

    let crop = Point {
        x: ((natural.width - area.width) / 2.0 - area.x) * crop_zoom,
        y: ((natural.height - area.height) / 2.0 - area.y) * crop_zoom,
    };

    Some(CropView { crop, zoom })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
