use super::constants::*;

// Per-container overrides read from `data-*` attributes.
pub const ATTR_AUTO_ROTATE: &str = "data-auto-rotate";
pub const ATTR_AUTO_ROTATE_SPEED: &str = "data-auto-rotate-speed";
pub const ATTR_FOV: &str = "data-fov";

/// Tuning for a single viewer instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
    pub resume_delay_ms: i32,
    pub initial_fov: f32,
    pub min_fov: f32,
    pub max_fov: f32,
    pub fov_step: f32,
    pub mouse_sensitivity: f64,
    pub touch_sensitivity: f64,
    pub visibility_threshold: f64,
    pub fallback_rings: u32,
    pub fallback_segments: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: AUTO_ROTATE_SPEED_DEG_PER_SEC,
            resume_delay_ms: AUTO_ROTATE_RESUME_DELAY_MS,
            initial_fov: INITIAL_FOV_DEG,
            min_fov: MIN_FOV_DEG,
            max_fov: MAX_FOV_DEG,
            fov_step: FOV_STEP_DEG,
            mouse_sensitivity: MOUSE_DRAG_SENSITIVITY,
            touch_sensitivity: TOUCH_DRAG_SENSITIVITY,
            visibility_threshold: VISIBILITY_THRESHOLD,
            fallback_rings: FALLBACK_RINGS,
            fallback_segments: FALLBACK_SEGMENTS,
        }
    }
}

impl ViewerConfig {
    /// Build a config from the defaults plus whatever overrides `lookup` finds.
    ///
    /// Malformed values are logged and skipped; they never fail the viewer.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ATTR_AUTO_ROTATE) {
            match parse_flag(&raw) {
                Some(on) => cfg.auto_rotate = on,
                None => log::warn!("[config] ignoring {}={:?}", ATTR_AUTO_ROTATE, raw),
            }
        }
        if let Some(raw) = lookup(ATTR_AUTO_ROTATE_SPEED) {
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => cfg.auto_rotate_speed = v,
                _ => log::warn!("[config] ignoring {}={:?}", ATTR_AUTO_ROTATE_SPEED, raw),
            }
        }
        if let Some(raw) = lookup(ATTR_FOV) {
            match raw.trim().parse::<f32>() {
                Ok(v) if v.is_finite() => cfg.initial_fov = v.clamp(cfg.min_fov, cfg.max_fov),
                _ => log::warn!("[config] ignoring {}={:?}", ATTR_FOV, raw),
            }
        }
        cfg
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Page-wide settings localized onto the page as `window.PSV360Config`.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub debug: bool,
    pub max_active: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            debug: false,
            max_active: MAX_ACTIVE_VIEWERS,
        }
    }
}

impl PageConfig {
    pub fn new(debug: Option<bool>, max_active: Option<f64>) -> Self {
        let mut cfg = Self::default();
        if let Some(d) = debug {
            cfg.debug = d;
        }
        if let Some(n) = max_active {
            if n.is_finite() {
                cfg.max_active = n.max(1.0) as usize;
            }
        }
        cfg
    }

    pub fn log_level(&self) -> log::Level {
        if self.debug {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}
