use super::config::ViewerConfig;
use super::constants::{CAMERA_FAR, CAMERA_NEAR, CAMERA_ORBIT_RADIUS};
use glam::{Mat4, Vec3};

/// Perspective camera parked inside the panorama sphere.
///
/// The eye sits on a small orbit around the center and always looks at it,
/// so only the direction of the eye matters for what ends up on screen.
#[derive(Clone, Debug)]
pub struct CameraRig {
    fov_deg: f32,
    min_fov: f32,
    max_fov: f32,
    fov_step: f32,
    aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraRig {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            fov_deg: config.initial_fov.clamp(config.min_fov, config.max_fov),
            min_fov: config.min_fov,
            max_fov: config.max_fov,
            fov_step: config.fov_step,
            aspect: 1.0,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.fov_deg = (self.fov_deg - self.fov_step).max(self.min_fov);
        self.fov_deg
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.fov_deg = (self.fov_deg + self.fov_step).min(self.max_fov);
        self.fov_deg
    }

    /// Zero-sized viewports (hidden containers) keep the previous aspect.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = (width / height) as f32;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self, eye: Vec3) -> Mat4 {
        Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y)
    }

    pub fn view_proj(&self, eye: Vec3) -> Mat4 {
        self.projection_matrix() * self.view_matrix(eye)
    }
}

/// Unit direction for the given look angles; elevation is measured from the
/// equator, so the polar angle is `90° - elevation`.
#[inline]
pub fn spherical_direction(azimuth_deg: f64, elevation_deg: f64) -> Vec3 {
    let phi = (90.0 - elevation_deg).to_radians();
    let theta = azimuth_deg.to_radians();
    Vec3::new(
        (phi.sin() * theta.cos()) as f32,
        phi.cos() as f32,
        (phi.sin() * theta.sin()) as f32,
    )
}

#[inline]
pub fn eye_position(azimuth_deg: f64, elevation_deg: f64) -> Vec3 {
    spherical_direction(azimuth_deg, elevation_deg) * CAMERA_ORBIT_RADIUS
}
