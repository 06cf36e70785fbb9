//! Cropper configuration.
//!
//! Options deserialize from camelCase objects with every field optional, so a
//! host can pass `{ aspect: 16 / 9 }` and get defaults for the rest.

use crate::error::CropperError;
use crate::{Area, Size};
use serde::{Deserialize, Serialize};

/// Strategy for fitting the media into the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Whole media visible, letterboxed on one axis.
    #[default]
    Contain,
    /// Media width fills the container.
    HorizontalCover,
    /// Media height fills the container.
    VerticalCover,
    /// Whichever axis makes the media cover the container.
    Cover,
}

/// Shape of the crop overlay. Geometry is the same for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropShape {
    #[default]
    Rect,
    Round,
}

/// An externally supplied crop to restore once the media has loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialCroppedArea {
    Pixels(Area),
    Percentages(Area),
}

/// Configuration of a [`Cropper`](crate::Cropper).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropperOptions {
    /// Width / height of the crop area
    pub aspect: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplier applied to wheel deltas
    pub zoom_speed: f64,
    pub zoom_with_scroll: bool,
    /// Keep the crop area inside the media
    pub restrict_position: bool,
    pub crop_shape: CropShape,
    pub object_fit: ObjectFit,
    /// Fixed crop size; overrides the aspect-derived size
    pub crop_size: Option<Size>,
    pub initial_cropped_area_pixels: Option<Area>,
    pub initial_cropped_area_percentages: Option<Area>,
}

impl Default for CropperOptions {
    fn default() -> Self {
        Self {
            aspect: 4.0 / 3.0,
            min_zoom: 1.0,
            max_zoom: 3.0,
            zoom_speed: 1.0,
            zoom_with_scroll: true,
            restrict_position: true,
            crop_shape: CropShape::Rect,
            object_fit: ObjectFit::Contain,
            crop_size: None,
            initial_cropped_area_pixels: None,
            initial_cropped_area_percentages: None,
        }
    }
}

impl CropperOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check value ranges the geometry relies on.
    pub fn validate(&self) -> Result<(), CropperError> {
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return Err(CropperError::InvalidOptions(format!(
                "aspect must be a positive number, got {}",
                self.aspect
            )));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(CropperError::InvalidOptions(format!(
                "zoom range {}..{} is invalid",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.zoom_speed > 0.0) {
            return Err(CropperError::InvalidOptions(format!(
                "zoomSpeed must be positive, got {}",
                self.zoom_speed
            )));
        }
        if let Some(size) = self.crop_size {
            if size.is_degenerate() {
                return Err(CropperError::InvalidOptions(
                    "cropSize must have positive dimensions".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Aspect the crop geometry works with: the fixed crop size wins.
    pub fn effective_aspect(&self) -> f64 {
        match self.crop_size {
            Some(size) => size.width / size.height,
            None => self.aspect,
        }
    }

    /// Initial crop to seed on media load. Pixels take precedence.
    pub fn initial_cropped_area(&self) -> Option<InitialCroppedArea> {
        self.initial_cropped_area_pixels
            .map(InitialCroppedArea::Pixels)
            .or(self
                .initial_cropped_area_percentages
                .map(InitialCroppedArea::Percentages))
    }
}
