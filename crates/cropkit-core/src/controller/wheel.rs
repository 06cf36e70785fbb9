//! Wheel delta normalisation and the interaction start/end debounce.

/// Quiet period after the last wheel event before the interaction ends.
pub const WHEEL_DEBOUNCE_MS: f64 = 250.0;

const LINE_HEIGHT: f64 = 40.0;
const PAGE_HEIGHT: f64 = 800.0;

/// Unit of a wheel delta, matching `WheelEvent.deltaMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl From<u32> for DeltaMode {
    fn from(value: u32) -> Self {
        match value {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

/// Convert a vertical wheel delta to pixels.
pub fn pixel_delta(delta_y: f64, mode: DeltaMode) -> f64 {
    match mode {
        DeltaMode::Pixel => delta_y,
        DeltaMode::Line => delta_y * LINE_HEIGHT,
        DeltaMode::Page => delta_y * PAGE_HEIGHT,
    }
}

/// Tracks one burst of wheel events.
///
/// Only the interaction start/end pair is debounced; zoom updates apply on
/// every event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelDebounce {
    deadline: Option<f64>,
}

impl WheelDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a wheel event at `now_ms`. Returns true when it starts a burst.
    pub fn touch(&mut self, now_ms: f64) -> bool {
        let started = self.deadline.is_none();
        self.deadline = Some(now_ms + WHEEL_DEBOUNCE_MS);
        started
    }

    /// Returns true, once, when the quiet period has elapsed by `now_ms`.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time of the pending end, for hosts that arm a real timer.
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }
}
