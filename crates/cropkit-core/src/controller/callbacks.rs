//! The cropper's outbound contract.

use crate::{CroppedArea, MediaSize, Point, Size};
use serde::Serialize;

/// Receives the cropper's reports. Every method defaults to a no-op so hosts
/// implement only what they listen to.
pub trait CropperCallbacks {
    fn crop_change(&mut self, _crop: Point) {}
    fn zoom_change(&mut self, _zoom: f64) {}
    fn rotation_change(&mut self, _rotation: f64) {}
    /// Fired when an interaction ends and once the media has loaded.
    fn crop_complete(&mut self, _area: &CroppedArea) {}
    /// Fired whenever the cropped area may have moved.
    fn crop_area_change(&mut self, _area: &CroppedArea) {}
    fn crop_size_change(&mut self, _size: Size) {}
    fn interaction_start(&mut self) {}
    fn interaction_end(&mut self) {}
    fn media_loaded(&mut self, _media: MediaSize) {}
}

/// A recorded callback, tagged for JavaScript as `{ type: "cropChange", ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CropperEvent {
    CropChange { crop: Point },
    ZoomChange { zoom: f64 },
    RotationChange { rotation: f64 },
    CropComplete { area: CroppedArea },
    CropAreaChange { area: CroppedArea },
    CropSizeChange { size: Size },
    InteractionStart,
    InteractionEnd,
    MediaLoaded { media: MediaSize },
}

impl CropperCallbacks for Vec<CropperEvent> {
    fn crop_change(&mut self, crop: Point) {
        self.push(CropperEvent::CropChange { crop });
    }

    fn zoom_change(&mut self, zoom: f64) {
        self.push(CropperEvent::ZoomChange { zoom });
    }

    fn rotation_change(&mut self, rotation: f64) {
        self.push(CropperEvent::RotationChange { rotation });
    }

    fn crop_complete(&mut self, area: &CroppedArea) {
        self.push(CropperEvent::CropComplete { area: *area });
    }

    fn crop_area_change(&mut self, area: &CroppedArea) {
        self.push(CropperEvent::CropAreaChange { area: *area });
    }

    fn crop_size_change(&mut self, size: Size) {
        self.push(CropperEvent::CropSizeChange { size });
    }

    fn interaction_start(&mut self) {
        self.push(CropperEvent::InteractionStart);
    }

    fn interaction_end(&mut self) {
        self.push(CropperEvent::InteractionEnd);
    }

    fn media_loaded(&mut self, media: MediaSize) {
        self.push(CropperEvent::MediaLoaded { media });
    }
}
