// Host-side tests for the render-loop gate and container discovery.

mod schedule {
    include!("../src/core/schedule.rs");
}
mod discovery {
    include!("../src/core/discovery.rs");
}

use discovery::*;
use schedule::LoopGate;

#[test]
fn start_is_idempotent_while_running() {
    let mut gate = LoopGate::default();
    assert!(!gate.is_running());
    let g = gate.start().expect("first start");
    assert_eq!(gate.start(), None);
    assert!(gate.admits(g));
    assert_eq!(gate.generation(), g);
}

#[test]
fn stale_ticks_are_rejected_after_restart() {
    let mut gate = LoopGate::default();
    let first = gate.start().expect("start");
    assert!(gate.stop());
    assert!(!gate.stop());
    assert!(!gate.admits(first));
    let second = gate.start().expect("restart");
    assert_ne!(first, second);
    assert!(!gate.admits(first));
    assert!(gate.admits(second));
}

#[test]
fn at_most_one_tick_chain_survives_toggling() {
    let mut gate = LoopGate::default();
    let mut issued = Vec::new();
    for _ in 0..10 {
        if let Some(g) = gate.start() {
            issued.push(g);
        }
        gate.stop();
        if let Some(g) = gate.start() {
            issued.push(g);
        }
    }
    let live = issued.iter().filter(|g| gate.admits(**g)).count();
    assert_eq!(live, 1);
}

#[test]
fn image_source_ignores_blank_values() {
    assert_eq!(image_source(Some("a.jpg")), Some("a.jpg"));
    assert_eq!(image_source(Some("  /pano/b.jpg \n")), Some("/pano/b.jpg"));
    assert_eq!(image_source(Some("   ")), None);
    assert_eq!(image_source(Some("")), None);
    assert_eq!(image_source(None), None);
}

#[test]
fn selector_and_attribute_names() {
    assert_eq!(CONTAINER_SELECTOR, ".psv-container");
    assert_eq!(IMAGE_ATTRIBUTE, "data-img");
}
