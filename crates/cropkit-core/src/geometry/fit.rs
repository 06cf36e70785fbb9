//! Media fitting and crop size computation.

use super::rotate_size;
use crate::options::ObjectFit;
use crate::{MediaSize, Size};

/// Rendered media size for a container under the given object-fit mode.
///
/// Returns `None` when either the container or the natural size is degenerate,
/// which is the case before the media has loaded or while the container is
/// hidden.
pub fn media_size_for_container(
    container: Size,
    natural: Size,
    object_fit: ObjectFit,
) -> Option<MediaSize> {
    if container.is_degenerate() || natural.is_degenerate() {
        return None;
    }

    let media_aspect = natural.width / natural.height;
    let container_aspect = container.width / container.height;

    let width_fills = Size::new(container.width, container.width / media_aspect);
    let height_fills = Size::new(container.height * media_aspect, container.height);

    let rendered = match object_fit {
        ObjectFit::Contain => {
            if container_aspect > media_aspect {
                height_fills
            } else {
                width_fills
            }
        }
        ObjectFit::HorizontalCover => width_fills,
        ObjectFit::VerticalCover => height_fills,
        ObjectFit::Cover => {
            if container_aspect > media_aspect {
                width_fills
            } else {
                height_fills
            }
        }
    };

    Some(MediaSize {
        width: rendered.width,
        height: rendered.height,
        natural_width: natural.width,
        natural_height: natural.height,
    })
}

/// Largest crop of the given aspect that fits both the rotated media and the
/// container.
///
/// # Arguments
///
/// * `media_width`, `media_height` - Rendered media size
/// * `container_width`, `container_height` - Container size
/// * `aspect` - Requested width / height of the crop
/// * `rotation` - Media rotation in degrees
///
/// Degenerate input produces a zero-sized result; callers guard against it.
pub fn crop_size(
    media_width: f64,
    media_height: f64,
    container_width: f64,
    container_height: f64,
    aspect: f64,
    rotation: f64,
) -> Size {
    let rotated = rotate_size(media_width, media_height, rotation);
    let fitting_width = rotated.width.min(container_width);
    let fitting_height = rotated.height.min(container_height);

    if fitting_width > fitting_height * aspect {
        Size::new(fitting_height * aspect, fitting_height)
    } else {
        Size::new(fitting_width, fitting_width / aspect)
    }
}
