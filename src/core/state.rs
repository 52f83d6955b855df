use super::admission::ViewerId;
use super::camera::{eye_position, CameraRig};
use super::config::ViewerConfig;
use super::constants::VISIBILITY_TOLERANCE;
use super::error::ViewerError;
use super::orientation::{Orientation, PointerKind};
use glam::{Mat4, Vec3};

pub const CURSOR_IDLE: &str = "move";
pub const CURSOR_DRAGGING: &str = "grabbing";

/// Everything a renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub eye: Vec3,
    pub view_proj: Mat4,
}

/// What to do with a freshly decoded panorama.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureUpload {
    /// The image belongs to a renderer build that has since been replaced,
    /// or the viewer is finished.
    Discard,
    Upload,
    /// Larger than the current renderer's texture limit.
    TooLarge,
}

/// Intersection test used by the visibility observer callback.
#[inline]
pub fn visibility_reached(ratio: f64, is_intersecting: bool, threshold: f64) -> bool {
    is_intersecting && ratio + VISIBILITY_TOLERANCE >= threshold
}

/// Platform-free state of one mounted viewer.
///
/// Every mutator is a no-op once [`ViewerState::dispose`] has run, and most
/// report whether anything changed so the shell knows which side effects
/// (timers, loop, DOM) to apply.
#[derive(Clone, Debug)]
pub struct ViewerState {
    id: ViewerId,
    config: ViewerConfig,
    orientation: Orientation,
    camera: CameraRig,
    active: bool,
    fullscreen: bool,
    disposed: bool,
    texture_ready: bool,
    resume_pending: bool,
    renderer_epoch: u64,
    error: Option<ViewerError>,
}

impl ViewerState {
    pub fn new(id: ViewerId, config: ViewerConfig) -> Self {
        Self {
            id,
            orientation: Orientation::new(&config),
            camera: CameraRig::new(&config),
            config,
            active: false,
            fullscreen: false,
            disposed: false,
            texture_ready: false,
            resume_pending: false,
            renderer_epoch: 0,
            error: None,
        }
    }

    pub fn id(&self) -> ViewerId {
        self.id
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn texture_ready(&self) -> bool {
        self.texture_ready
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn resume_pending(&self) -> bool {
        self.resume_pending
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn error(&self) -> Option<&ViewerError> {
        self.error.as_ref()
    }

    pub fn cursor(&self) -> &'static str {
        if self.orientation.is_dragging() {
            CURSOR_DRAGGING
        } else {
            CURSOR_IDLE
        }
    }

    /// Returns true when the flag actually flipped.
    pub fn set_active(&mut self, active: bool) -> bool {
        if self.disposed || self.active == active {
            return false;
        }
        self.active = active;
        self.orientation.reset_clock();
        true
    }

    /// For loop pauses that do not change the active flag (e.g. a lost GPU context).
    pub fn reset_clock(&mut self) {
        if !self.disposed {
            self.orientation.reset_clock();
        }
    }

    /// Starts a drag unless the press landed on a control button.
    /// A true result means any pending resume timer must be cancelled.
    pub fn begin_drag(&mut self, kind: PointerKind, x: f64, y: f64, on_control: bool) -> bool {
        if self.disposed || on_control {
            return false;
        }
        self.orientation.begin_drag(kind, x, y);
        self.resume_pending = false;
        true
    }

    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        if self.disposed {
            return false;
        }
        self.orientation.drag_to(x, y)
    }

    /// A true result means the shell should arm the resume timer.
    pub fn end_drag(&mut self) -> bool {
        if self.disposed || !self.orientation.end_drag() {
            return false;
        }
        self.resume_pending = true;
        true
    }

    /// Resume-timer callback. Stale timers (a new drag started, or the viewer
    /// was disposed) do nothing.
    pub fn resume_auto_rotate(&mut self) -> bool {
        if self.disposed || !self.resume_pending || self.orientation.is_dragging() {
            return false;
        }
        self.resume_pending = false;
        self.orientation.resume_auto_rotate();
        true
    }

    pub fn zoom_in(&mut self) -> Option<f32> {
        (!self.disposed).then(|| self.camera.zoom_in())
    }

    pub fn zoom_out(&mut self) -> Option<f32> {
        (!self.disposed).then(|| self.camera.zoom_out())
    }

    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if self.disposed || width <= 0.0 || height <= 0.0 {
            return false;
        }
        self.camera.set_viewport(width, height);
        true
    }

    /// One render-loop step. `None` means the loop must not draw and should stop.
    pub fn tick(&mut self, now_ms: f64) -> Option<FrameParams> {
        if self.disposed || !self.active {
            return None;
        }
        self.orientation.advance(now_ms);
        let azimuth_deg = self.orientation.azimuth_deg();
        let elevation_deg = self.orientation.elevation_deg();
        let eye = eye_position(azimuth_deg, elevation_deg);
        Some(FrameParams {
            azimuth_deg,
            elevation_deg,
            eye,
            view_proj: self.camera.view_proj(eye),
        })
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        if self.disposed || self.fullscreen == fullscreen {
            return false;
        }
        self.fullscreen = fullscreen;
        true
    }

    /// Starts a new renderer build (initial mount, or after a lost graphics
    /// context came back). Any build or image still in flight for an earlier
    /// epoch is stale from here on.
    pub fn begin_renderer_build(&mut self) -> Option<u64> {
        if self.disposed || self.error.is_some() {
            return None;
        }
        self.renderer_epoch += 1;
        self.texture_ready = false;
        Some(self.renderer_epoch)
    }

    pub fn accepts_renderer(&self, epoch: u64) -> bool {
        !self.disposed && self.error.is_none() && epoch == self.renderer_epoch
    }

    pub fn plan_texture_upload(
        &self,
        epoch: u64,
        (width, height): (u32, u32),
        max_texture_dim: u32,
    ) -> TextureUpload {
        if !self.accepts_renderer(epoch) {
            TextureUpload::Discard
        } else if width > max_texture_dim || height > max_texture_dim {
            TextureUpload::TooLarge
        } else {
            TextureUpload::Upload
        }
    }

    /// Records a terminal failure; the first one wins.
    pub fn fail(&mut self, error: ViewerError) -> bool {
        if self.disposed || self.error.is_some() {
            return false;
        }
        self.texture_ready = false;
        self.error = Some(error);
        true
    }

    pub fn mark_texture_ready(&mut self) -> bool {
        if self.disposed || self.error.is_some() {
            return false;
        }
        self.texture_ready = true;
        true
    }

    /// Irreversible. Returns true only on the first call.
    pub fn dispose(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.orientation.end_drag();
        self.orientation.reset_clock();
        self.active = false;
        self.fullscreen = false;
        self.resume_pending = false;
        self.texture_ready = false;
        self.disposed = true;
        true
    }
}
