// Host-side tests for the perspective camera rig.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}

use camera::*;
use config::ViewerConfig;
use glam::Vec3;

fn rig() -> CameraRig {
    CameraRig::new(&ViewerConfig::default())
}

#[test]
fn zoom_in_steps_down_to_30() {
    let mut c = rig();
    assert_eq!(c.fov_deg(), 75.0);
    let seen: Vec<f32> = (0..6).map(|_| c.zoom_in()).collect();
    assert_eq!(seen, vec![65.0, 55.0, 45.0, 35.0, 30.0, 30.0]);
}

#[test]
fn zoom_out_steps_up_to_90() {
    let mut c = rig();
    let seen: Vec<f32> = (0..4).map(|_| c.zoom_out()).collect();
    assert_eq!(seen, vec![85.0, 90.0, 90.0, 90.0]);
}

#[test]
fn fov_stays_in_range_for_any_sequence() {
    let mut c = rig();
    let mut seed: u32 = 7;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let fov = if seed & 0x100 == 0 {
            c.zoom_in()
        } else {
            c.zoom_out()
        };
        assert!((30.0..=90.0).contains(&fov));
    }
}

#[test]
fn out_of_range_initial_fov_is_clamped() {
    let cfg = ViewerConfig {
        initial_fov: 200.0,
        ..ViewerConfig::default()
    };
    assert_eq!(CameraRig::new(&cfg).fov_deg(), 90.0);
}

#[test]
fn viewport_sets_aspect_and_ignores_hidden_containers() {
    let mut c = rig();
    c.set_viewport(1600.0, 900.0);
    assert!((c.aspect() - 16.0 / 9.0).abs() < 1e-6);
    c.set_viewport(0.0, 0.0);
    c.set_viewport(800.0, 0.0);
    assert!((c.aspect() - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn initial_look_direction_is_plus_z() {
    let d = spherical_direction(90.0, 0.0);
    assert!((d - Vec3::Z).length() < 1e-6);
    let eye = eye_position(90.0, 0.0);
    assert!((eye - Vec3::new(0.0, 0.0, 100.0)).length() < 1e-4);
}

#[test]
fn elevation_is_measured_from_the_horizon() {
    let up = spherical_direction(0.0, 85.0);
    assert!((up.y - 85f32.to_radians().sin()).abs() < 1e-6);
    let down = spherical_direction(0.0, -85.0);
    assert!(down.y < -0.99);
    let ahead = spherical_direction(0.0, 0.0);
    assert!((ahead - Vec3::X).length() < 1e-6);
}

#[test]
fn view_proj_maps_the_sphere_center_into_clip_space() {
    let mut c = rig();
    c.set_viewport(1000.0, 500.0);
    let eye = eye_position(30.0, 10.0);
    let clip = c.view_proj(eye) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
