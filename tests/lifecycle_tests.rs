// Host-side tests for the per-instance viewer state: activation, drags,
// failures and disposal, plus the end-to-end scenarios built from the
// platform-free pieces the page bootstrap uses.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod error {
    include!("../src/core/error.rs");
}
mod orientation {
    include!("../src/core/orientation.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod admission {
    include!("../src/core/admission.rs");
}
mod discovery {
    include!("../src/core/discovery.rs");
}
mod state {
    include!("../src/core/state.rs");
}

use admission::{AdmissionSet, ViewerId};
use config::ViewerConfig;
use error::ViewerError;
use orientation::PointerKind;
use state::*;

fn viewer(n: u32) -> ViewerState {
    ViewerState::new(ViewerId(n), ViewerConfig::default())
}

#[derive(Debug, PartialEq)]
struct Snapshot {
    active: bool,
    fullscreen: bool,
    disposed: bool,
    texture_ready: bool,
    resume_pending: bool,
    azimuth: f64,
    elevation: f64,
    fov: f32,
    error: Option<ViewerError>,
}

fn snapshot(s: &ViewerState) -> Snapshot {
    Snapshot {
        active: s.is_active(),
        fullscreen: s.is_fullscreen(),
        disposed: s.is_disposed(),
        texture_ready: s.texture_ready(),
        resume_pending: s.resume_pending(),
        azimuth: s.orientation().azimuth_deg(),
        elevation: s.orientation().elevation_deg(),
        fov: s.camera().fov_deg(),
        error: s.error().cloned(),
    }
}

#[test]
fn dispose_twice_equals_dispose_once() {
    let mut once = viewer(1);
    let mut twice = viewer(1);
    for s in [&mut once, &mut twice] {
        s.set_active(true);
        s.set_fullscreen(true);
        s.begin_drag(PointerKind::Mouse, 0.0, 0.0, false);
        s.end_drag();
        s.mark_texture_ready();
    }
    assert!(once.dispose());
    assert!(twice.dispose());
    assert!(!twice.dispose());
    assert_eq!(snapshot(&once), snapshot(&twice));
    assert!(once.is_disposed() && !once.is_active() && !once.is_fullscreen());
}

#[test]
fn every_entry_point_is_inert_after_disposal() {
    let mut s = viewer(1);
    s.dispose();
    let before = snapshot(&s);
    assert!(!s.set_active(true));
    assert!(!s.begin_drag(PointerKind::Touch, 1.0, 2.0, false));
    assert!(!s.drag_to(500.0, 500.0));
    assert!(!s.end_drag());
    assert!(!s.resume_auto_rotate());
    assert_eq!(s.zoom_in(), None);
    assert_eq!(s.zoom_out(), None);
    assert!(!s.resize(800.0, 600.0));
    assert!(!s.set_fullscreen(true));
    assert!(!s.fail(ViewerError::ImageLoad("late".into())));
    assert!(!s.mark_texture_ready());
    assert_eq!(s.tick(1_000.0), None);
    s.reset_clock();
    assert_eq!(snapshot(&s), before);
}

#[test]
fn tick_only_runs_while_active() {
    let mut s = viewer(1);
    assert_eq!(s.tick(0.0), None);
    assert!(s.set_active(true));
    assert!(!s.set_active(true));
    let first = s.tick(0.0).expect("active viewer ticks");
    assert_eq!(first.azimuth_deg, 90.0);
    let second = s.tick(1_000.0).expect("active viewer ticks");
    assert!((second.azimuth_deg - 93.0).abs() < 1e-9);
    assert!(s.set_active(false));
    assert_eq!(s.tick(2_000.0), None);
}

#[test]
fn reactivation_does_not_replay_the_pause() {
    let mut s = viewer(1);
    s.set_active(true);
    s.tick(0.0);
    s.set_active(false);
    s.set_active(true);
    let f = s.tick(120_000.0).expect("ticks");
    assert_eq!(f.azimuth_deg, 90.0);
}

#[test]
fn presses_on_controls_never_start_a_drag() {
    let mut s = viewer(1);
    assert!(!s.begin_drag(PointerKind::Mouse, 10.0, 10.0, true));
    assert!(!s.orientation().is_dragging());
    assert!(s.orientation().is_auto_rotating());
}

#[test]
fn cursor_follows_drag_state() {
    let mut s = viewer(1);
    assert_eq!(s.cursor(), CURSOR_IDLE);
    s.begin_drag(PointerKind::Mouse, 0.0, 0.0, false);
    assert_eq!(s.cursor(), CURSOR_DRAGGING);
    s.end_drag();
    assert_eq!(s.cursor(), CURSOR_IDLE);
}

#[test]
fn new_drag_cancels_pending_resume() {
    let mut s = viewer(1);
    s.begin_drag(PointerKind::Mouse, 0.0, 0.0, false);
    assert!(s.end_drag());
    assert!(s.resume_pending());
    s.begin_drag(PointerKind::Mouse, 0.0, 0.0, false);
    assert!(!s.resume_pending());
    assert!(!s.resume_auto_rotate(), "stale timer must not restart rotation");
    assert!(!s.orientation().is_auto_rotating());
    s.end_drag();
    assert!(s.resume_auto_rotate());
    assert!(s.orientation().is_auto_rotating());
}

#[test]
fn frame_params_track_orientation_and_zoom() {
    let mut s = viewer(1);
    s.set_active(true);
    s.resize(1200.0, 600.0);
    s.begin_drag(PointerKind::Mouse, 0.0, 0.0, false);
    s.drag_to(-100.0, 200.0);
    let f = s.tick(0.0).expect("ticks");
    assert!((f.azimuth_deg - 100.0).abs() < 1e-9);
    assert!((f.elevation_deg - 20.0).abs() < 1e-9);
    assert!((f.eye.length() - 100.0).abs() < 1e-3);
    assert_eq!(s.zoom_in(), Some(65.0));
    let g = s.tick(16.0).expect("ticks");
    assert_ne!(f.view_proj, g.view_proj);
}

#[test]
fn first_failure_wins_and_blocks_the_texture() {
    let mut s = viewer(1);
    assert!(s.fail(ViewerError::Init("no context".into())));
    assert!(!s.fail(ViewerError::ImageLoad("x".into())));
    assert!(!s.mark_texture_ready());
    assert_eq!(s.error().map(|e| e.notice()), Some("Failed to initialize the 360° viewer."));
}

#[test]
fn visibility_threshold_with_tolerance() {
    assert!(visibility_reached(0.1, true, 0.1));
    assert!(visibility_reached(0.0995, true, 0.1));
    assert!(visibility_reached(1.0, true, 0.1));
    assert!(!visibility_reached(0.05, true, 0.1));
    assert!(!visibility_reached(0.5, false, 0.1));
}

#[test]
fn visible_container_yields_one_active_instance_facing_90() {
    let mut admission: AdmissionSet<ViewerId> = AdmissionSet::new(constants::MAX_ACTIVE_VIEWERS);
    let url = discovery::image_source(Some("https://example.com/pano.jpg"))
        .expect("container has an image");
    assert_eq!(url, "https://example.com/pano.jpg");

    let mut s = viewer(1);
    if visibility_reached(0.1, true, s.config().visibility_threshold) {
        assert_eq!(admission.activate(s.id()), None);
        s.set_active(true);
    }
    assert_eq!(admission.len(), 1);
    assert!(admission.contains(s.id()));
    assert!(s.is_active());
    assert_eq!(s.orientation().azimuth_deg(), 90.0);
    assert_eq!(s.orientation().elevation_deg(), 0.0);
}

#[test]
fn image_load_failure_surfaces_a_notice_without_panicking() {
    let mut s = viewer(1);
    let failed = ViewerError::ImageLoad("https://example.com/pano.jpg".into());
    let result = std::panic::catch_unwind(move || {
        s.fail(failed);
        s
    });
    let s = result.expect("no panic reaches the caller");
    let err = s.error().expect("failure recorded");
    assert_eq!(
        err.notice(),
        "Failed to load the 360° image. Please check the image URL."
    );
    assert!(err.to_string().contains("example.com/pano.jpg"));
    assert!(!s.texture_ready());
}

#[test]
fn eviction_stops_the_oldest_viewer() {
    let mut admission: AdmissionSet<ViewerId> = AdmissionSet::new(3);
    let mut viewers: Vec<ViewerState> = (1..=4).map(viewer).collect();
    for i in 0..viewers.len() {
        if let Some(evicted) = admission.activate(viewers[i].id()) {
            if let Some(v) = viewers.iter_mut().find(|v| v.id() == evicted) {
                v.set_active(false);
            }
        }
        viewers[i].set_active(true);
    }
    let active: Vec<u32> = viewers
        .iter()
        .filter(|v| v.is_active())
        .map(|v| v.id().0)
        .collect();
    assert_eq!(active, vec![2, 3, 4]);
    assert_eq!(admission.len(), 3);
}

#[test]
fn each_renderer_build_supersedes_the_previous_one() {
    let mut s = viewer(1);
    let first = s.begin_renderer_build().expect("live viewer builds");
    assert!(s.accepts_renderer(first));
    assert!(s.mark_texture_ready());

    // graphics context came back: everything from the first build is stale
    let second = s.begin_renderer_build().expect("rebuild");
    assert_ne!(first, second);
    assert!(!s.texture_ready(), "texture from the lost context is gone");
    assert!(!s.accepts_renderer(first));
    assert!(s.accepts_renderer(second));
}

#[test]
fn panorama_upload_follows_the_current_build() {
    let mut s = viewer(1);
    let first = s.begin_renderer_build().expect("build");
    assert_eq!(
        s.plan_texture_upload(first, (4096, 2048), 8192),
        TextureUpload::Upload
    );
    let second = s.begin_renderer_build().expect("rebuild");
    assert_eq!(
        s.plan_texture_upload(first, (4096, 2048), 8192),
        TextureUpload::Discard
    );
    assert_eq!(
        s.plan_texture_upload(second, (4096, 2048), 8192),
        TextureUpload::Upload
    );
    // the rebuilt strategy may accept less than the image was decoded for
    assert_eq!(
        s.plan_texture_upload(second, (4096, 2048), 2048),
        TextureUpload::TooLarge
    );
    assert_eq!(
        s.plan_texture_upload(second, (2048, 1024), 2048),
        TextureUpload::Upload
    );
}

#[test]
fn no_rebuild_after_failure_or_disposal() {
    let mut failed = viewer(1);
    let epoch = failed.begin_renderer_build().expect("build");
    failed.fail(ViewerError::Init("no 2d context".into()));
    assert_eq!(failed.begin_renderer_build(), None);
    assert!(!failed.accepts_renderer(epoch));

    let mut gone = viewer(2);
    let epoch = gone.begin_renderer_build().expect("build");
    gone.dispose();
    assert_eq!(gone.begin_renderer_build(), None);
    assert_eq!(
        gone.plan_texture_upload(epoch, (8, 4), 4096),
        TextureUpload::Discard
    );
}
