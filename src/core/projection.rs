use super::camera::spherical_direction;
use super::error::ViewerError;
use std::f64::consts::PI;

/// Decoded equirectangular image, tightly packed RGBA8 rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Panorama {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Panorama {
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ViewerError> {
        if width == 0 || height == 0 {
            return Err(ViewerError::InvalidImage(format!(
                "empty image {}x{}",
                width, height
            )));
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ViewerError::InvalidImage(format!(
                "expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Nearest texel for texture coordinates; `u` wraps around the seam, `v` clamps.
    pub fn sample(&self, u: f64, v: f64) -> [u8; 4] {
        let u = u.rem_euclid(1.0);
        let v = v.clamp(0.0, 1.0);
        let x = ((u * self.width as f64).floor() as u32).min(self.width - 1);
        let y = ((v * self.height as f64).floor() as u32).min(self.height - 1);
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}

/// Largest size with the same aspect that fits within `max_dim` on both axes.
pub fn fit_within(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let max_dim = max_dim.max(1);
    if width <= max_dim && height <= max_dim {
        return (width.max(1), height.max(1));
    }
    let scale = max_dim as f64 / width.max(height) as f64;
    (
        ((width as f64 * scale).round() as u32).clamp(1, max_dim),
        ((height as f64 * scale).round() as u32).clamp(1, max_dim),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleGrid {
    pub rings: u32,
    pub segments: u32,
}

impl SampleGrid {
    pub fn new(rings: u32, segments: u32) -> Self {
        Self {
            rings: rings.max(1),
            segments: segments.max(1),
        }
    }

    pub fn sample_count(&self) -> usize {
        (self.rings as usize + 1) * (self.segments as usize + 1)
    }
}

/// One plotted sample of the software fallback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Splat {
    pub x: f64,
    pub y: f64,
    pub rgba: [u8; 4],
}

/// Coarse screen-space approximation of the sphere as seen from `azimuth`/`elevation`.
///
/// Each grid point on the unit sphere is offset by the camera direction and
/// normalized into the viewport. This is not a perspective projection; it is
/// only meant to keep something recognizable on screen without a GPU.
pub fn project_samples(
    panorama: &Panorama,
    grid: SampleGrid,
    azimuth_deg: f64,
    elevation_deg: f64,
    width: f64,
    height: f64,
    out: &mut Vec<Splat>,
) {
    out.clear();
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let cam = spherical_direction(azimuth_deg, elevation_deg);
    let (cx, cy, cz) = (cam.x as f64, cam.y as f64, cam.z as f64);
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    for i in 0..=grid.rings {
        let ring_phi = i as f64 / grid.rings as f64 * PI;
        let (sin_phi, cos_phi) = ring_phi.sin_cos();
        for j in 0..=grid.segments {
            let seg_theta = j as f64 / grid.segments as f64 * 2.0 * PI;
            let dx = sin_phi * seg_theta.cos() - cx;
            let dy = cos_phi - cy;
            let dz = sin_phi * seg_theta.sin() - cz;
            let dist = (dx * dx + dy * dy + dz * dz).sqrt();
            if dist <= f64::EPSILON {
                continue;
            }
            let u = (seg_theta + PI) / (2.0 * PI);
            let v = ring_phi / PI;
            out.push(Splat {
                x: (dx / dist * half_w + half_w).floor(),
                y: (dy / dist * half_h + half_h).floor(),
                rgba: panorama.sample(u, v),
            });
        }
    }
}
