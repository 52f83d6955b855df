use super::config::ViewerConfig;
use super::constants::{ELEVATION_LIMIT_DEG, INITIAL_AZIMUTH_DEG, INITIAL_ELEVATION_DEG};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Orientation and pointer position captured when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub x: f64,
    pub y: f64,
    pub sensitivity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging(DragAnchor),
}

#[inline]
pub fn clamp_elevation(elevation_deg: f64) -> f64 {
    if elevation_deg.is_nan() {
        return 0.0;
    }
    elevation_deg.clamp(-ELEVATION_LIMIT_DEG, ELEVATION_LIMIT_DEG)
}

/// Camera look angles driven by drags and time-based auto-rotation.
///
/// Time is supplied by the caller in milliseconds so the machine stays
/// deterministic; the web frontend feeds it `performance.now()`.
#[derive(Clone, Debug)]
pub struct Orientation {
    azimuth_deg: f64,
    elevation_deg: f64,
    phase: DragPhase,
    auto_rotate: bool,
    speed_deg_per_sec: f64,
    last_tick_ms: Option<f64>,
    mouse_sensitivity: f64,
    touch_sensitivity: f64,
}

impl Orientation {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            azimuth_deg: INITIAL_AZIMUTH_DEG,
            elevation_deg: INITIAL_ELEVATION_DEG,
            phase: DragPhase::Idle,
            auto_rotate: config.auto_rotate,
            speed_deg_per_sec: config.auto_rotate_speed,
            last_tick_ms: None,
            mouse_sensitivity: config.mouse_sensitivity,
            touch_sensitivity: config.touch_sensitivity,
        }
    }

    pub fn azimuth_deg(&self) -> f64 {
        self.azimuth_deg
    }

    pub fn elevation_deg(&self) -> f64 {
        self.elevation_deg
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn is_auto_rotating(&self) -> bool {
        self.auto_rotate
    }

    pub fn sensitivity(&self, kind: PointerKind) -> f64 {
        match kind {
            PointerKind::Mouse => self.mouse_sensitivity,
            PointerKind::Touch => self.touch_sensitivity,
        }
    }

    /// Idle -> Dragging. Cancels auto-rotation immediately.
    pub fn begin_drag(&mut self, kind: PointerKind, x: f64, y: f64) {
        self.phase = DragPhase::Dragging(DragAnchor {
            azimuth_deg: self.azimuth_deg,
            elevation_deg: self.elevation_deg,
            x,
            y,
            sensitivity: self.sensitivity(kind),
        });
        self.stop_auto_rotate();
    }

    /// Applies the pointer offset relative to the anchor. Returns false when idle.
    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        let DragPhase::Dragging(anchor) = self.phase else {
            return false;
        };
        self.azimuth_deg = anchor.azimuth_deg + (anchor.x - x) * anchor.sensitivity;
        self.elevation_deg =
            clamp_elevation(anchor.elevation_deg + (y - anchor.y) * anchor.sensitivity);
        true
    }

    /// Dragging -> Idle. Returns true when a resume of auto-rotation should be scheduled.
    pub fn end_drag(&mut self) -> bool {
        if self.is_dragging() {
            self.phase = DragPhase::Idle;
            true
        } else {
            false
        }
    }

    pub fn stop_auto_rotate(&mut self) {
        self.auto_rotate = false;
        self.last_tick_ms = None;
    }

    pub fn resume_auto_rotate(&mut self) {
        self.auto_rotate = true;
        self.last_tick_ms = None;
    }

    /// Per-frame step: rotate by wall-clock time while idle, then clamp elevation.
    pub fn advance(&mut self, now_ms: f64) {
        if self.auto_rotate && !self.is_dragging() {
            if let Some(last) = self.last_tick_ms {
                let dt_sec = ((now_ms - last) / 1000.0).max(0.0);
                self.azimuth_deg += self.speed_deg_per_sec * dt_sec;
            }
        }
        self.last_tick_ms = Some(now_ms);
        self.elevation_deg = clamp_elevation(self.elevation_deg);
    }

    /// Forgets the previous frame time so a paused loop does not resume with a jump.
    pub fn reset_clock(&mut self) {
        self.last_tick_ms = None;
    }
}
