// Shared viewer tuning constants used by the web frontend and host tests.

// Admission
pub const MAX_ACTIVE_VIEWERS: usize = 3; // simultaneously animating instances per page

// Orientation
pub const INITIAL_AZIMUTH_DEG: f64 = 90.0;
pub const INITIAL_ELEVATION_DEG: f64 = 0.0;
pub const ELEVATION_LIMIT_DEG: f64 = 85.0; // keeps the camera off the poles
pub const MOUSE_DRAG_SENSITIVITY: f64 = 0.1; // degrees per CSS pixel
pub const TOUCH_DRAG_SENSITIVITY: f64 = 0.15; // touch drags cover less distance

// Auto-rotation
pub const AUTO_ROTATE_SPEED_DEG_PER_SEC: f64 = 3.0;
pub const AUTO_ROTATE_RESUME_DELAY_MS: i32 = 3000;

// Camera
pub const INITIAL_FOV_DEG: f32 = 75.0;
pub const MIN_FOV_DEG: f32 = 30.0;
pub const MAX_FOV_DEG: f32 = 90.0;
pub const FOV_STEP_DEG: f32 = 10.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1100.0;
pub const CAMERA_ORBIT_RADIUS: f32 = 100.0; // eye distance from the sphere center

// Panorama sphere
pub const SPHERE_RADIUS: f32 = 500.0;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 60;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 40;

// Software fallback sampling grid
pub const FALLBACK_RINGS: u32 = 40;
pub const FALLBACK_SEGMENTS: u32 = 60;
pub const FALLBACK_SPLAT_PX: f64 = 2.0;
pub const FALLBACK_MAX_TEXTURE_DIM: u32 = 4096;

// Viewport lifecycle
pub const VISIBILITY_THRESHOLD: f64 = 0.1; // fraction of the container that must be visible
pub const VISIBILITY_TOLERANCE: f64 = 1e-3;
pub const FULLSCREEN_SETTLE_DELAY_MS: i32 = 100;
pub const PSEUDO_FULLSCREEN_SCROLL_DELAY_MS: i32 = 100;

// Device pixel ratio caps
pub const PIXEL_RATIO_CAP_MAC: f64 = 3.0;
pub const PIXEL_RATIO_CAP_DEFAULT: f64 = 2.0;
pub const MOBILE_MAX_INNER_WIDTH_PX: f64 = 768.0;
