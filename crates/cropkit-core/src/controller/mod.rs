//! Interaction controller.
//!
//! [`Cropper`] turns raw input into crop, zoom and rotation reports. It is a
//! controlled component: it never commits a position or zoom on its own. The
//! host listens to the callbacks, stores the values, and pushes them back in
//! with [`Cropper::set_crop`], [`Cropper::set_zoom`] and
//! [`Cropper::set_rotation`].
//!
//! # Host responsibilities
//!
//! - Measure the container and call [`Cropper::set_container_rect`]
//! - Call [`Cropper::media_loaded`] with the intrinsic media size
//! - Forward pointer, touch, wheel and gesture input in client coordinates
//! - Call [`Cropper::frame`] from `requestAnimationFrame` while
//!   [`Cropper::has_pending_frame`] is true
//! - Call [`Cropper::advance_time`] once [`Cropper::wheel_deadline`] passes
//! - Call [`Cropper::teardown`] when the component goes away

mod callbacks;
mod frame;
mod wheel;

pub use callbacks::{CropperCallbacks, CropperEvent};
pub use frame::FrameSlot;
pub use wheel::{pixel_delta, DeltaMode, WheelDebounce, WHEEL_DEBOUNCE_MS};

use crate::error::CropperError;
use crate::geometry::{
    center, clamp, compute_cropped_area, crop_size, distance_between_points,
    initial_crop_from_percentages, initial_crop_from_pixels, media_size_for_container,
    restrict_position, rotation_between_points,
};
use crate::options::{CropperOptions, InitialCroppedArea, ObjectFit};
use crate::{ContainerRect, CroppedArea, MediaSize, Point, Size};
use tracing::{debug, trace};

/// What the pointer is currently doing.
///
/// Wheel zooming overlaps with any of these and is tracked separately, see
/// [`Cropper::is_wheel_zooming`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    Pinching,
    /// Platform pinch/rotate gesture (Safari `gesture*` events)
    Gesture,
}

/// Interactive crop controller.
pub struct Cropper<C: CropperCallbacks> {
    callbacks: C,
    options: CropperOptions,

    // Host-controlled values
    crop: Point,
    zoom: f64,
    rotation: f64,

    // Measurements
    container: Option<ContainerRect>,
    natural: Option<Size>,
    media_size: Option<MediaSize>,
    crop_size: Option<Size>,

    // Transient interaction state
    state: InteractionState,
    is_touching: bool,
    drag_start_position: Point,
    drag_start_crop: Point,
    last_pinch_distance: f64,
    last_pinch_rotation: f64,
    gesture_zoom_start: f64,
    gesture_rotation_start: f64,
    drag_frame: FrameSlot<Point>,
    pinch_frame: FrameSlot<(Point, Point)>,
    wheel: WheelDebounce,
}

impl<C: CropperCallbacks> Cropper<C> {
    /// Create a cropper at crop (0, 0), zoom 1 and no rotation.
    pub fn new(options: CropperOptions, callbacks: C) -> Result<Self, CropperError> {
        options.validate()?;
        Ok(Self {
            callbacks,
            options,
            crop: Point::default(),
            zoom: 1.0,
            rotation: 0.0,
            container: None,
            natural: None,
            media_size: None,
            crop_size: None,
            state: InteractionState::Idle,
            is_touching: false,
            drag_start_position: Point::default(),
            drag_start_crop: Point::default(),
            last_pinch_distance: 0.0,
            last_pinch_rotation: 0.0,
            gesture_zoom_start: 1.0,
            gesture_rotation_start: 0.0,
            drag_frame: FrameSlot::new(),
            pinch_frame: FrameSlot::new(),
            wheel: WheelDebounce::new(),
        })
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    pub fn into_callbacks(self) -> C {
        self.callbacks
    }

    pub fn options(&self) -> &CropperOptions {
        &self.options
    }

    pub fn crop(&self) -> Point {
        self.crop
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn media_size(&self) -> Option<MediaSize> {
        self.media_size
    }

    pub fn crop_size(&self) -> Option<Size> {
        self.crop_size
    }

    pub fn is_wheel_zooming(&self) -> bool {
        self.wheel.is_active()
    }

    /// Time at which [`Cropper::advance_time`] will end the wheel interaction.
    pub fn wheel_deadline(&self) -> Option<f64> {
        self.wheel.deadline()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.drag_frame.is_pending() || self.pinch_frame.is_pending()
    }

    // ========================================================================
    // Host inputs
    // ========================================================================

    /// Replace the options, recomputing sizes if the crop shape changed.
    pub fn set_options(&mut self, options: CropperOptions) -> Result<(), CropperError> {
        options.validate()?;
        let resize = options.aspect != self.options.aspect
            || options.object_fit != self.options.object_fit
            || options.crop_size != self.options.crop_size;
        self.options = options;
        if resize {
            self.compute_sizes();
        }
        Ok(())
    }

    pub fn set_aspect(&mut self, aspect: f64) -> Result<(), CropperError> {
        let options = CropperOptions {
            aspect,
            ..self.options.clone()
        };
        self.set_options(options)
    }

    pub fn set_object_fit(&mut self, object_fit: ObjectFit) {
        if object_fit != self.options.object_fit {
            self.options.object_fit = object_fit;
            self.compute_sizes();
        }
    }

    /// Fix the crop size, or go back to the aspect-derived size with `None`.
    pub fn set_crop_size(&mut self, crop_size: Option<Size>) -> Result<(), CropperError> {
        let options = CropperOptions {
            crop_size,
            ..self.options.clone()
        };
        self.set_options(options)
    }

    /// The container was measured or resized.
    pub fn set_container_rect(&mut self, rect: ContainerRect) {
        if self.container == Some(rect) {
            return;
        }
        self.container = Some(rect);
        self.compute_sizes();
    }

    /// The media reported its intrinsic size.
    ///
    /// Emits the initial crop data, seeds the externally supplied initial
    /// crop if any, then reports the measured media.
    pub fn media_loaded(&mut self, natural: Size) {
        self.natural = Some(natural);
        let Some(media) = self.compute_sizes() else {
            debug!(?natural, "media loaded before the container was measured");
            return;
        };
        self.emit_crop_data();
        self.set_initial_crop(&media);
        self.callbacks.media_loaded(media);
    }

    pub fn set_crop(&mut self, crop: Point) {
        if crop == self.crop {
            return;
        }
        self.crop = crop;
        self.emit_crop_area_change();
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom == self.zoom {
            return;
        }
        self.zoom = zoom;
        self.recompute_crop_position();
        self.emit_crop_area_change();
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        if rotation == self.rotation {
            return;
        }
        self.rotation = rotation;
        self.compute_sizes();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The current cropped area, or `None` until the crop size is known.
    pub fn crop_data(&self) -> Option<CroppedArea> {
        let media = self.media_size?;
        let crop_size = self.crop_size?;
        let position = if self.options.restrict_position {
            restrict_position(self.crop, &media, crop_size, self.zoom, self.rotation)
        } else {
            self.crop
        };
        Some(compute_cropped_area(
            position,
            &media,
            crop_size,
            self.options.effective_aspect(),
            self.zoom,
            self.rotation,
            self.options.restrict_position,
        ))
    }

    /// Map a client point to an offset from the container center.
    pub fn point_on_container(&self, point: Point) -> Result<Point, CropperError> {
        let rect = self.container.ok_or(CropperError::NotMounted)?;
        Ok(Point {
            x: rect.width / 2.0 - (point.x - rect.x),
            y: rect.height / 2.0 - (point.y - rect.y),
        })
    }

    /// Map a container offset to unzoomed media coordinates.
    pub fn point_on_media(&self, point: Point) -> Point {
        Point {
            x: (point.x + self.crop.x) / self.zoom,
            y: (point.y + self.crop.y) / self.zoom,
        }
    }

    // ========================================================================
    // Mouse and touch
    // ========================================================================

    pub fn mouse_down(&mut self, point: Point) {
        self.drag_start(point);
    }

    pub fn mouse_move(&mut self, point: Point) {
        if self.state == InteractionState::Dragging {
            self.schedule_drag(point);
        }
    }

    pub fn mouse_up(&mut self) {
        self.drag_stopped();
    }

    /// Touches currently on the surface, in client coordinates.
    pub fn touch_start(&mut self, touches: &[Point]) {
        match touches {
            [a, b] => {
                self.is_touching = true;
                self.pinch_start(*a, *b);
            }
            [p] => {
                self.is_touching = true;
                self.drag_start(*p);
            }
            _ => trace!(count = touches.len(), "ignoring touch start"),
        }
    }

    pub fn touch_move(&mut self, touches: &[Point]) {
        if self.state == InteractionState::Idle {
            return;
        }
        match touches {
            [a, b] => {
                self.schedule_drag(center(*a, *b));
                self.pinch_frame.schedule((*a, *b));
            }
            [p] => self.schedule_drag(*p),
            _ => {}
        }
    }

    pub fn touch_end(&mut self) {
        self.is_touching = false;
        self.drag_stopped();
    }

    /// Run the recomputations scheduled since the last animation frame.
    pub fn frame(&mut self) {
        if let Some(point) = self.drag_frame.take() {
            self.drag_to(point);
        }
        if let Some((a, b)) = self.pinch_frame.take() {
            self.pinch_to(a, b);
        }
    }

    fn drag_start(&mut self, point: Point) {
        if self.state == InteractionState::Idle {
            self.callbacks.interaction_start();
        }
        debug!(?point, "drag start");
        self.state = InteractionState::Dragging;
        self.drag_start_position = point;
        self.drag_start_crop = self.crop;
    }

    fn pinch_start(&mut self, a: Point, b: Point) {
        self.drag_start(center(a, b));
        self.state = InteractionState::Pinching;
        self.last_pinch_distance = distance_between_points(a, b);
        self.last_pinch_rotation = rotation_between_points(a, b);
    }

    fn schedule_drag(&mut self, point: Point) {
        if self.drag_frame.schedule(point) {
            trace!("superseded pending drag frame");
        }
    }

    fn drag_to(&mut self, point: Point) {
        let (Some(media), Some(crop_size)) = (self.media_size, self.crop_size) else {
            debug!("skipping drag before crop size is known");
            return;
        };
        let requested = Point {
            x: self.drag_start_crop.x + point.x - self.drag_start_position.x,
            y: self.drag_start_crop.y + point.y - self.drag_start_position.y,
        };
        let position = if self.options.restrict_position {
            restrict_position(requested, &media, crop_size, self.zoom, self.rotation)
        } else {
            requested
        };
        self.callbacks.crop_change(position);
    }

    fn pinch_to(&mut self, a: Point, b: Point) {
        let distance = distance_between_points(a, b);
        if self.last_pinch_distance > 0.0 {
            let zoom = self.zoom * (distance / self.last_pinch_distance);
            // Position follows the drag of the pinch center instead
            if let Err(err) = self.set_new_zoom(zoom, center(a, b), false) {
                debug!(%err, "pinch zoom skipped");
            }
        }
        self.last_pinch_distance = distance;

        let angle = rotation_between_points(a, b);
        let delta = normalize_angle_delta(angle - self.last_pinch_rotation);
        self.callbacks.rotation_change(self.rotation + delta);
        self.last_pinch_rotation = angle;
    }

    fn drag_stopped(&mut self) {
        if self.state == InteractionState::Idle {
            return;
        }
        debug!(state = ?self.state, "interaction stopped");
        self.is_touching = false;
        self.state = InteractionState::Idle;
        self.drag_frame.cancel();
        self.pinch_frame.cancel();
        self.emit_crop_data();
        self.callbacks.interaction_end();
    }

    // ========================================================================
    // Wheel and gestures
    // ========================================================================

    /// Zoom around `point` for a wheel event received at `now_ms`.
    pub fn wheel(
        &mut self,
        point: Point,
        delta_y: f64,
        delta_mode: DeltaMode,
        now_ms: f64,
    ) -> Result<(), CropperError> {
        if !self.options.zoom_with_scroll {
            return Ok(());
        }
        let pixel_y = pixel_delta(delta_y, delta_mode);
        let zoom = self.zoom - pixel_y * self.options.zoom_speed / 200.0;
        if !self.set_new_zoom(zoom, point, true)? {
            return Ok(());
        }

        if self.wheel.touch(now_ms) {
            debug!("wheel zoom start");
            self.callbacks.interaction_start();
        }
        Ok(())
    }

    /// Fire timers due at `now_ms`.
    pub fn advance_time(&mut self, now_ms: f64) {
        if self.wheel.poll(now_ms) {
            debug!("wheel zoom end");
            self.callbacks.interaction_end();
        }
    }

    pub fn gesture_start(&mut self) {
        // Touch events already own the interaction
        if self.is_touching {
            return;
        }
        if self.state == InteractionState::Idle {
            self.callbacks.interaction_start();
        }
        self.state = InteractionState::Gesture;
        self.gesture_zoom_start = self.zoom;
        self.gesture_rotation_start = self.rotation;
    }

    /// `scale` and `rotation` are cumulative since the gesture started.
    pub fn gesture_change(
        &mut self,
        point: Point,
        scale: f64,
        rotation: f64,
    ) -> Result<(), CropperError> {
        // Touch events already drive the pinch
        if self.is_touching || self.state != InteractionState::Gesture {
            return Ok(());
        }
        let zoom = self.gesture_zoom_start - 1.0 + scale;
        if !self.set_new_zoom(zoom, point, true)? {
            return Ok(());
        }
        self.callbacks
            .rotation_change(self.gesture_rotation_start + rotation);
        Ok(())
    }

    pub fn gesture_end(&mut self) {
        if self.state == InteractionState::Gesture {
            self.drag_stopped();
        }
    }

    /// Drop every pending frame and timer.
    pub fn teardown(&mut self) {
        debug!("teardown");
        self.drag_frame.cancel();
        self.pinch_frame.cancel();
        self.wheel.clear();
        self.state = InteractionState::Idle;
        self.is_touching = false;
    }

    // ========================================================================
    // Derived recomputation
    // ========================================================================

    /// Apply a new zoom, optionally keeping the media point under `point` fixed.
    ///
    /// Returns false when the update was skipped because sizes are unknown.
    fn set_new_zoom(
        &mut self,
        zoom: f64,
        point: Point,
        update_position: bool,
    ) -> Result<bool, CropperError> {
        let (Some(media), Some(crop_size)) = (self.media_size, self.crop_size) else {
            debug!("skipping zoom before crop size is known");
            return Ok(false);
        };
        let new_zoom = clamp(zoom, self.options.min_zoom, self.options.max_zoom);

        if update_position {
            let zoom_point = self.point_on_container(point)?;
            let zoom_target = self.point_on_media(zoom_point);
            let requested = Point {
                x: zoom_target.x * new_zoom - zoom_point.x,
                y: zoom_target.y * new_zoom - zoom_point.y,
            };
            let position = if self.options.restrict_position {
                restrict_position(requested, &media, crop_size, new_zoom, self.rotation)
            } else {
                requested
            };
            self.callbacks.crop_change(position);
        }
        self.callbacks.zoom_change(new_zoom);
        Ok(true)
    }

    /// Recompute the rendered media and crop sizes from the current inputs.
    fn compute_sizes(&mut self) -> Option<MediaSize> {
        let container = self.container?;
        let natural = self.natural?;
        let Some(media) =
            media_size_for_container(container.size(), natural, self.options.object_fit)
        else {
            debug!(?container, ?natural, "cannot fit media into container");
            return None;
        };
        self.media_size = Some(media);

        let size = self.options.crop_size.unwrap_or_else(|| {
            crop_size(
                media.width,
                media.height,
                container.width,
                container.height,
                self.options.aspect,
                self.rotation,
            )
        });
        if size.is_degenerate() {
            debug!(?size, "degenerate crop size");
            self.crop_size = None;
            return Some(media);
        }
        if self.crop_size != Some(size) {
            debug!(width = size.width, height = size.height, "crop size changed");
            self.callbacks.crop_size_change(size);
        }
        self.crop_size = Some(size);
        self.recompute_crop_position();
        Some(media)
    }

    fn recompute_crop_position(&mut self) {
        let (Some(media), Some(crop_size)) = (self.media_size, self.crop_size) else {
            return;
        };
        let position = if self.options.restrict_position {
            restrict_position(self.crop, &media, crop_size, self.zoom, self.rotation)
        } else {
            self.crop
        };
        self.callbacks.crop_change(position);
        self.emit_crop_data();
    }

    fn set_initial_crop(&mut self, media: &MediaSize) {
        let Some(initial) = self.options.initial_cropped_area() else {
            return;
        };
        let Some(crop_size) = self.crop_size else {
            return;
        };
        let (min, max) = (self.options.min_zoom, self.options.max_zoom);
        let view = match initial {
            InitialCroppedArea::Pixels(area) => {
                initial_crop_from_pixels(&area, media, self.rotation, crop_size, min, max)
            }
            InitialCroppedArea::Percentages(area) => {
                initial_crop_from_percentages(&area, media, self.rotation, crop_size, min, max)
            }
        };
        match view {
            Some(view) => {
                debug!(?view, "seeding initial crop");
                self.callbacks.crop_change(view.crop);
                self.callbacks.zoom_change(view.zoom);
            }
            None => debug!(?initial, "initial cropped area is empty"),
        }
    }

    fn emit_crop_data(&mut self) {
        if let Some(area) = self.crop_data() {
            self.callbacks.crop_complete(&area);
            self.callbacks.crop_area_change(&area);
        }
    }

    fn emit_crop_area_change(&mut self) {
        if let Some(area) = self.crop_data() {
            self.callbacks.crop_area_change(&area);
        }
    }
}

/// Fold an angle difference into (-180, 180] so crossing the atan2 seam does
/// not spin the media.
fn normalize_angle_delta(delta: f64) -> f64 {
    let d = delta % 360.0;
    if d > 180.0 {
        d - 360.0
    } else if d <= -180.0 {
        d + 360.0
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Area;

    type Recorder = Cropper<Vec<CropperEvent>>;

    /// 2000x1200 media contained in an 800x600 container at the origin:
    /// rendered 800x480, crop 640x480.
    fn loaded_with(options: CropperOptions) -> Recorder {
        let mut cropper = Cropper::new(options, Vec::new()).unwrap();
        cropper.set_container_rect(ContainerRect::new(0.0, 0.0, 800.0, 600.0));
        cropper.media_loaded(Size::new(2000.0, 1200.0));
        cropper.callbacks_mut().clear();
        cropper
    }

    fn loaded() -> Recorder {
        loaded_with(CropperOptions::default())
    }

    fn events(cropper: &mut Recorder) -> Vec<CropperEvent> {
        std::mem::take(cropper.callbacks_mut())
    }

    fn crop_changes(events: &[CropperEvent]) -> Vec<Point> {
        events
            .iter()
            .filter_map(|e| match e {
                CropperEvent::CropChange { crop } => Some(*crop),
                _ => None,
            })
            .collect()
    }

    fn zoom_changes(events: &[CropperEvent]) -> Vec<f64> {
        events
            .iter()
            .filter_map(|e| match e {
                CropperEvent::ZoomChange { zoom } => Some(*zoom),
                _ => None,
            })
            .collect()
    }

    fn count(events: &[CropperEvent], wanted: &CropperEvent) -> usize {
        events.iter().filter(|e| *e == wanted).count()
    }

    #[test]
    fn test_rejects_invalid_options() {
        let mut options = CropperOptions::default();
        options.aspect = -1.0;
        assert!(Cropper::new(options, Vec::<CropperEvent>::new()).is_err());
    }

    #[test]
    fn test_media_loaded_reports_sizes() {
        let mut cropper = Cropper::new(CropperOptions::default(), Vec::new()).unwrap();
        cropper.set_container_rect(ContainerRect::new(0.0, 0.0, 800.0, 600.0));
        assert!(events(&mut cropper).is_empty());

        cropper.media_loaded(Size::new(2000.0, 1200.0));
        let events = events(&mut cropper);

        let media = MediaSize {
            width: 800.0,
            height: 480.0,
            natural_width: 2000.0,
            natural_height: 1200.0,
        };
        assert_eq!(cropper.media_size(), Some(media));
        assert_eq!(cropper.crop_size(), Some(Size::new(640.0, 480.0)));
        assert!(events.contains(&CropperEvent::CropSizeChange {
            size: Size::new(640.0, 480.0)
        }));
        assert!(events.iter().any(|e| matches!(e, CropperEvent::CropComplete { .. })));
        assert_eq!(events.last(), Some(&CropperEvent::MediaLoaded { media }));
    }

    #[test]
    fn test_media_loaded_before_container_is_deferred() {
        let mut cropper = Cropper::new(CropperOptions::default(), Vec::new()).unwrap();
        cropper.media_loaded(Size::new(2000.0, 1200.0));
        assert!(events(&mut cropper).is_empty());
        assert!(cropper.crop_data().is_none());

        cropper.set_container_rect(ContainerRect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(cropper.crop_size(), Some(Size::new(640.0, 480.0)));
    }

    #[test]
    fn test_drag_waits_for_frame() {
        let mut cropper = loaded();
        cropper.mouse_down(Point::new(100.0, 100.0));
        assert_eq!(cropper.state(), InteractionState::Dragging);
        cropper.mouse_move(Point::new(150.0, 130.0));
        assert!(cropper.has_pending_frame());

        let before = events(&mut cropper);
        assert_eq!(before, vec![CropperEvent::InteractionStart]);

        cropper.frame();
        // y is pinned: the crop already spans the full media height
        assert_eq!(
            events(&mut cropper),
            vec![CropperEvent::CropChange {
                crop: Point::new(50.0, 0.0)
            }]
        );
    }

    #[test]
    fn test_drag_moves_collapse_per_frame() {
        let mut cropper = loaded();
        cropper.mouse_down(Point::new(100.0, 100.0));
        cropper.mouse_move(Point::new(110.0, 100.0));
        cropper.mouse_move(Point::new(120.0, 100.0));
        cropper.mouse_move(Point::new(130.0, 100.0));
        events(&mut cropper);

        cropper.frame();
        assert_eq!(crop_changes(&events(&mut cropper)), vec![Point::new(30.0, 0.0)]);
    }

    #[test]
    fn test_drag_is_restricted() {
        let mut cropper = loaded();
        cropper.mouse_down(Point::new(0.0, 0.0));
        cropper.mouse_move(Point::new(500.0, 0.0));
        cropper.frame();
        // (800 - 640) / 2 = 80
        assert_eq!(
            crop_changes(&events(&mut cropper)),
            vec![Point::new(80.0, 0.0)]
        );
    }

    #[test]
    fn test_drag_unrestricted() {
        let mut options = CropperOptions::default();
        options.restrict_position = false;
        let mut cropper = loaded_with(options);
        cropper.mouse_down(Point::new(0.0, 0.0));
        cropper.mouse_move(Point::new(500.0, -20.0));
        cropper.frame();
        assert_eq!(
            crop_changes(&events(&mut cropper)),
            vec![Point::new(500.0, -20.0)]
        );
    }

    #[test]
    fn test_drag_starts_from_current_crop() {
        let mut cropper = loaded();
        cropper.set_crop(Point::new(20.0, 0.0));
        cropper.mouse_down(Point::new(0.0, 0.0));
        cropper.mouse_move(Point::new(-30.0, 0.0));
        cropper.frame();
        assert_eq!(
            crop_changes(&events(&mut cropper)),
            vec![Point::new(-10.0, 0.0)]
        );
    }

    #[test]
    fn test_mouse_up_completes_interaction() {
        let mut cropper = loaded();
        cropper.mouse_down(Point::new(0.0, 0.0));
        events(&mut cropper);

        cropper.mouse_up();
        let events = events(&mut cropper);
        assert_eq!(cropper.state(), InteractionState::Idle);
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], CropperEvent::CropComplete { .. }));
        assert!(matches!(events[1], CropperEvent::CropAreaChange { .. }));
        assert_eq!(events[2], CropperEvent::InteractionEnd);

        if let CropperEvent::CropComplete { area } = &events[0] {
            assert_eq!(area.pixels, Area::new(200.0, 0.0, 1600.0, 1200.0));
        }
    }

    #[test]
    fn test_mouse_up_cancels_pending_frame() {
        let mut cropper = loaded();
        cropper.mouse_down(Point::new(0.0, 0.0));
        cropper.mouse_move(Point::new(40.0, 0.0));
        cropper.mouse_up();
        assert!(!cropper.has_pending_frame());
        events(&mut cropper);
        cropper.frame();
        assert!(events(&mut cropper).is_empty());
    }

    #[test]
    fn test_mouse_move_without_drag_is_ignored() {
        let mut cropper = loaded();
        cropper.mouse_move(Point::new(40.0, 0.0));
        assert!(!cropper.has_pending_frame());
    }

    #[test]
    fn test_drag_skipped_without_crop_size() {
        let mut cropper = Cropper::new(CropperOptions::default(), Vec::new()).unwrap();
        cropper.mouse_down(Point::new(0.0, 0.0));
        cropper.mouse_move(Point::new(40.0, 0.0));
        cropper.frame();
        assert_eq!(events(&mut cropper), vec![CropperEvent::InteractionStart]);
    }

    #[test]
    fn test_pinch_doubles_zoom() {
        let mut cropper = loaded();
        cropper.touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        assert_eq!(cropper.state(), InteractionState::Pinching);
        cropper.touch_move(&[Point::new(0.0, 0.0), Point::new(200.0, 0.0)]);
        events(&mut cropper);

        cropper.frame();
        let events = events(&mut cropper);
        let zooms = zoom_changes(&events);
        assert_eq!(zooms.len(), 1);
        assert!((zooms[0] - 2.0).abs() < 1e-9);
        assert!(events.contains(&CropperEvent::RotationChange { rotation: 0.0 }));
    }

    #[test]
    fn test_pinch_zoom_is_clamped() {
        let mut cropper = loaded();
        cropper.touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        cropper.touch_move(&[Point::new(0.0, 0.0), Point::new(1000.0, 0.0)]);
        cropper.frame();
        assert_eq!(zoom_changes(&events(&mut cropper)), vec![3.0]);
    }

    #[test]
    fn test_two_finger_rotation() {
        let mut cropper = loaded();
        cropper.set_rotation(10.0);
        cropper.touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        cropper.touch_move(&[Point::new(0.0, 0.0), Point::new(0.0, 100.0)]);
        events(&mut cropper);

        cropper.frame();
        let events = events(&mut cropper);
        let rotation = events
            .iter()
            .find_map(|e| match e {
                CropperEvent::RotationChange { rotation } => Some(*rotation),
                _ => None,
            })
            .unwrap();
        assert!((rotation - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_delta_wraps_across_seam() {
        assert!((normalize_angle_delta(350.0) + 10.0).abs() < 1e-9);
        assert!((normalize_angle_delta(-350.0) - 10.0).abs() < 1e-9);
        assert!((normalize_angle_delta(180.0) - 180.0).abs() < 1e-9);
        assert!((normalize_angle_delta(15.0) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_second_finger_promotes_drag_to_pinch() {
        let mut cropper = loaded();
        cropper.touch_start(&[Point::new(10.0, 10.0)]);
        assert_eq!(cropper.state(), InteractionState::Dragging);
        cropper.touch_start(&[Point::new(10.0, 10.0), Point::new(110.0, 10.0)]);
        assert_eq!(cropper.state(), InteractionState::Pinching);

        let events = events(&mut cropper);
        assert_eq!(count(&events, &CropperEvent::InteractionStart), 1);

        cropper.touch_end();
        assert_eq!(cropper.state(), InteractionState::Idle);
    }

    #[test]
    fn test_wheel_zooms_immediately() {
        let mut cropper = loaded();
        cropper
            .wheel(Point::new(400.0, 300.0), -100.0, DeltaMode::Pixel, 0.0)
            .unwrap();
        let events = events(&mut cropper);
        assert_eq!(zoom_changes(&events), vec![1.5]);
        assert_eq!(crop_changes(&events), vec![Point::new(0.0, 0.0)]);
        assert_eq!(count(&events, &CropperEvent::InteractionStart), 1);
        assert!(cropper.is_wheel_zooming());
    }

    #[test]
    fn test_wheel_keeps_point_under_cursor() {
        let mut cropper = loaded();
        // Zoom in around the left edge of the crop: the media point there
        // stays put, so the media shifts right.
        cropper
            .wheel(Point::new(80.0, 300.0), -200.0, DeltaMode::Pixel, 0.0)
            .unwrap();
        let events = events(&mut cropper);
        assert_eq!(zoom_changes(&events), vec![2.0]);
        // zoom point x = 400 - 80 = 320, target 320, requested 640 - 320 = 320
        assert_eq!(crop_changes(&events), vec![Point::new(320.0, 0.0)]);
    }

    #[test]
    fn test_wheel_line_mode_and_speed() {
        let mut options = CropperOptions::default();
        options.zoom_speed = 0.5;
        let mut cropper = loaded_with(options);
        cropper
            .wheel(Point::new(400.0, 300.0), -5.0, DeltaMode::Line, 0.0)
            .unwrap();
        // 1 + 200 * 0.5 / 200
        assert_eq!(zoom_changes(&events(&mut cropper)), vec![1.5]);
    }

    #[test]
    fn test_wheel_disabled() {
        let mut options = CropperOptions::default();
        options.zoom_with_scroll = false;
        let mut cropper = loaded_with(options);
        cropper
            .wheel(Point::new(400.0, 300.0), -100.0, DeltaMode::Pixel, 0.0)
            .unwrap();
        assert!(events(&mut cropper).is_empty());
        assert!(!cropper.is_wheel_zooming());
    }

    #[test]
    fn test_spaced_wheel_events_each_get_a_pair() {
        let mut cropper = loaded();
        let center = Point::new(400.0, 300.0);
        for start in [0.0, 1000.0, 2000.0] {
            cropper.wheel(center, -1.0, DeltaMode::Pixel, start).unwrap();
            cropper.advance_time(start + 300.0);
        }
        let events = events(&mut cropper);
        assert_eq!(count(&events, &CropperEvent::InteractionStart), 3);
        assert_eq!(count(&events, &CropperEvent::InteractionEnd), 3);
    }

    #[test]
    fn test_close_wheel_events_collapse() {
        let mut cropper = loaded();
        let center = Point::new(400.0, 300.0);
        for t in [0.0, 100.0, 200.0, 300.0] {
            cropper.wheel(center, -1.0, DeltaMode::Pixel, t).unwrap();
            cropper.advance_time(t + 50.0);
        }
        assert_eq!(cropper.wheel_deadline(), Some(550.0));
        cropper.advance_time(600.0);

        let events = events(&mut cropper);
        assert_eq!(count(&events, &CropperEvent::InteractionStart), 1);
        assert_eq!(count(&events, &CropperEvent::InteractionEnd), 1);
        assert_eq!(zoom_changes(&events).len(), 4);
    }

    #[test]
    fn test_point_on_container_requires_mount() {
        let cropper = Cropper::new(CropperOptions::default(), Vec::<CropperEvent>::new()).unwrap();
        assert_eq!(
            cropper.point_on_container(Point::new(1.0, 1.0)),
            Err(CropperError::NotMounted)
        );
    }

    #[test]
    fn test_point_on_container_is_center_relative() {
        let mut cropper = Cropper::new(CropperOptions::default(), Vec::new()).unwrap();
        cropper.set_container_rect(ContainerRect::new(100.0, 50.0, 800.0, 600.0));
        let p = cropper.point_on_container(Point::new(100.0, 50.0)).unwrap();
        assert_eq!(p, Point::new(400.0, 300.0));
        let p = cropper.point_on_container(Point::new(500.0, 350.0)).unwrap();
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_gesture_zoom_and_rotation() {
        let mut cropper = loaded();
        cropper.gesture_start();
        assert_eq!(cropper.state(), InteractionState::Gesture);
        cropper
            .gesture_change(Point::new(400.0, 300.0), 2.0, 15.0)
            .unwrap();
        let changed = events(&mut cropper);
        assert_eq!(zoom_changes(&changed), vec![2.0]);
        assert!(changed.contains(&CropperEvent::RotationChange { rotation: 15.0 }));

        cropper.gesture_end();
        let ended = events(&mut cropper);
        assert!(matches!(ended[0], CropperEvent::CropComplete { .. }));
        assert_eq!(ended.last(), Some(&CropperEvent::InteractionEnd));
        assert_eq!(cropper.state(), InteractionState::Idle);
    }

    #[test]
    fn test_gesture_ignored_while_touching() {
        let mut cropper = loaded();
        cropper.touch_start(&[Point::new(0.0, 0.0)]);
        cropper.gesture_start();
        events(&mut cropper);
        cropper
            .gesture_change(Point::new(400.0, 300.0), 2.0, 15.0)
            .unwrap();
        assert!(events(&mut cropper).is_empty());
    }

    #[test]
    fn test_ignored_touch_does_not_block_gestures() {
        let mut cropper = loaded();
        let three = [
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 0.0),
        ];
        cropper.touch_start(&three);
        assert_eq!(cropper.state(), InteractionState::Idle);
        cropper.touch_end();

        cropper.gesture_start();
        cropper
            .gesture_change(Point::new(400.0, 300.0), 2.0, 0.0)
            .unwrap();
        assert_eq!(zoom_changes(&events(&mut cropper)), vec![2.0]);
    }

    #[test]
    fn test_gesture_during_touch_pinch_keeps_pinch() {
        let mut cropper = loaded();
        cropper.touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        events(&mut cropper);

        cropper.gesture_start();
        assert_eq!(cropper.state(), InteractionState::Pinching);
        cropper.gesture_end();
        assert_eq!(cropper.state(), InteractionState::Pinching);
        assert!(events(&mut cropper).is_empty());

        // Fingers still down keep driving the pinch
        cropper.touch_move(&[Point::new(0.0, 0.0), Point::new(200.0, 0.0)]);
        cropper.frame();
        assert_eq!(zoom_changes(&events(&mut cropper)), vec![2.0]);
    }

    #[test]
    fn test_wheel_before_sizes_is_skipped() {
        let mut cropper = Cropper::new(CropperOptions::default(), Vec::new()).unwrap();
        cropper
            .wheel(Point::new(10.0, 10.0), -100.0, DeltaMode::Pixel, 0.0)
            .unwrap();
        assert!(cropper.callbacks().is_empty());
        assert!(!cropper.is_wheel_zooming());
        assert_eq!(cropper.wheel_deadline(), None);
    }

    #[test]
    fn test_set_zoom_recomputes_position() {
        let mut cropper = loaded();
        cropper.set_crop(Point::new(300.0, 0.0));
        events(&mut cropper);

        // Zooming out pulls an out-of-range crop back in
        cropper.set_zoom(1.0 + f64::EPSILON);
        let events = events(&mut cropper);
        let changes = crop_changes(&events);
        assert_eq!(changes.len(), 1);
        assert!((changes[0].x - 80.0).abs() < 1e-6);
        assert!(events.iter().any(|e| matches!(e, CropperEvent::CropAreaChange { .. })));
    }

    #[test]
    fn test_set_crop_same_value_is_silent() {
        let mut cropper = loaded();
        cropper.set_crop(Point::default());
        assert!(events(&mut cropper).is_empty());
    }

    #[test]
    fn test_rotation_recomputes_crop_size() {
        let mut cropper = loaded();
        cropper.set_rotation(90.0);
        let size = cropper.crop_size().unwrap();
        // bbox 480x800 clipped to 480x600, aspect 4:3 -> 480x360
        assert!((size.width - 480.0).abs() < 1e-6);
        assert!((size.height - 360.0).abs() < 1e-6);
        assert!(events(&mut cropper)
            .iter()
            .any(|e| matches!(e, CropperEvent::CropSizeChange { .. })));
    }

    #[test]
    fn test_aspect_change_recomputes_crop_size() {
        let mut cropper = loaded();
        cropper.set_aspect(1.0).unwrap();
        assert_eq!(cropper.crop_size(), Some(Size::new(480.0, 480.0)));
        assert!(cropper.set_aspect(0.0).is_err());
        assert_eq!(cropper.options().aspect, 1.0);
    }

    #[test]
    fn test_fixed_crop_size() {
        let mut cropper = loaded();
        cropper.set_crop_size(Some(Size::new(200.0, 100.0))).unwrap();
        assert_eq!(cropper.crop_size(), Some(Size::new(200.0, 100.0)));
        let area = cropper.crop_data().unwrap();
        // Pixel area follows the fixed crop's 2:1 aspect
        assert!((area.pixels.width / area.pixels.height - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_object_fit_change() {
        let mut cropper = loaded();
        cropper.set_object_fit(ObjectFit::VerticalCover);
        let media = cropper.media_size().unwrap();
        assert!((media.height - 600.0).abs() < 1e-9);
        assert!((media.width - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_container_resize_recomputes() {
        let mut cropper = loaded();
        cropper.set_container_rect(ContainerRect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(cropper.crop_size(), Some(Size::new(320.0, 240.0)));
        let events = events(&mut cropper);
        assert!(events.contains(&CropperEvent::CropSizeChange {
            size: Size::new(320.0, 240.0)
        }));

        // Same rect again is a no-op
        cropper.set_container_rect(ContainerRect::new(0.0, 0.0, 400.0, 300.0));
        assert!(cropper.callbacks().is_empty());
    }

    #[test]
    fn test_initial_crop_from_pixels() {
        let mut options = CropperOptions::default();
        options.initial_cropped_area_pixels = Some(Area::new(475.0, 300.0, 800.0, 600.0));
        let mut cropper = Cropper::new(options, Vec::new()).unwrap();
        cropper.set_container_rect(ContainerRect::new(0.0, 0.0, 800.0, 600.0));
        cropper.media_loaded(Size::new(2000.0, 1200.0));

        let events = events(&mut cropper);
        let crop = *crop_changes(&events).last().unwrap();
        assert!((crop.x - 100.0).abs() < 1e-6);
        assert!(crop.y.abs() < 1e-6);
        assert_eq!(zoom_changes(&events), vec![2.0]);
    }

    #[test]
    fn test_initial_crop_pixels_win_over_percentages() {
        let mut options = CropperOptions::default();
        options.initial_cropped_area_percentages = Some(Area::new(10.0, 0.0, 80.0, 100.0));
        options.initial_cropped_area_pixels = Some(Area::new(475.0, 300.0, 800.0, 600.0));
        let mut cropper = Cropper::new(options, Vec::new()).unwrap();
        cropper.set_container_rect(ContainerRect::new(0.0, 0.0, 800.0, 600.0));
        cropper.media_loaded(Size::new(2000.0, 1200.0));

        assert_eq!(zoom_changes(&events(&mut cropper)), vec![2.0]);
    }

    #[test]
    fn test_initial_crop_from_percentages() {
        let mut options = CropperOptions::default();
        options.initial_cropped_area_percentages = Some(Area::new(23.75, 25.0, 40.0, 50.0));
        let mut cropper = Cropper::new(options, Vec::new()).unwrap();
        cropper.set_container_rect(ContainerRect::new(0.0, 0.0, 800.0, 600.0));
        cropper.media_loaded(Size::new(2000.0, 1200.0));

        let events = events(&mut cropper);
        let zooms = zoom_changes(&events);
        assert_eq!(zooms.len(), 1);
        assert!((zooms[0] - 2.0).abs() < 1e-9);
        let crop = *crop_changes(&events).last().unwrap();
        assert!((crop.x - 100.0).abs() < 1e-6);
        assert!(crop.y.abs() < 1e-6);
    }

    #[test]
    fn test_teardown_cancels_pending_work() {
        let mut cropper = loaded();
        cropper.mouse_down(Point::new(0.0, 0.0));
        cropper.mouse_move(Point::new(40.0, 0.0));
        cropper
            .wheel(Point::new(400.0, 300.0), -1.0, DeltaMode::Pixel, 0.0)
            .unwrap();
        events(&mut cropper);

        cropper.teardown();
        cropper.frame();
        cropper.advance_time(10_000.0);
        assert!(events(&mut cropper).is_empty());
        assert_eq!(cropper.state(), InteractionState::Idle);
        assert!(!cropper.is_wheel_zooming());
    }
}
