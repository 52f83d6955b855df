// Host-side tests for the fullscreen strategy tables, the style snapshot and
// native change reconciliation.

#![allow(dead_code)]
mod fullscreen {
    include!("../src/core/fullscreen.rs");
}

use fullscreen::*;

#[test]
fn apple_devices_try_the_prefixed_api_first() {
    assert_eq!(request_methods(true), ["webkitRequestFullscreen", "requestFullscreen"]);
    assert_eq!(exit_methods(true), ["webkitExitFullscreen", "exitFullscreen"]);
}

#[test]
fn other_devices_try_the_standard_api_first() {
    let req = request_methods(false);
    assert_eq!(req[0], "requestFullscreen");
    assert_eq!(req.len(), 4);
    assert!(req.contains(&"msRequestFullscreen"));
    let exit = exit_methods(false);
    assert_eq!(exit[0], "exitFullscreen");
    assert!(exit.contains(&"mozCancelFullScreen"));
}

#[test]
fn change_events_cover_every_vendor() {
    assert_eq!(CHANGE_EVENTS.len(), ELEMENT_PROPERTIES.len());
    assert!(CHANGE_EVENTS.contains(&"fullscreenchange"));
    assert!(CHANGE_EVENTS.contains(&"MSFullscreenChange"));
}

#[test]
fn every_overridden_property_is_snapshotted() {
    for (prop, _) in CONTAINER_STYLE {
        assert!(SNAPSHOT_PROPERTIES.contains(&prop), "{prop} not captured");
    }
}

#[test]
fn snapshot_restores_original_values() {
    let snap = StyleSnapshot::capture(|p| match p {
        "width" => "640px".to_string(),
        "position" => "absolute".to_string(),
        _ => String::new(),
    });
    assert_eq!(snap.get("width"), Some("640px"));
    assert_eq!(snap.get("height"), Some(""));
    assert_eq!(snap.get("color"), None);

    let restored: Vec<_> = snap.restorations().collect();
    assert_eq!(restored.len(), SNAPSHOT_PROPERTIES.len());
    assert!(restored.contains(&("width", Some("640px"))));
    assert!(restored.contains(&("position", Some("absolute"))));
    assert!(restored.contains(&("padding-top", None)));
    assert_eq!(restored.iter().filter(|(_, v)| v.is_some()).count(), 2);
}

#[test]
fn platform_sync_table() {
    use PlatformSync::*;
    assert_eq!(sync_with_platform(false, false, true), Ignore);
    assert_eq!(sync_with_platform(false, true, false), Ignore);
    assert_eq!(sync_with_platform(true, false, true), Engaged);
    assert_eq!(sync_with_platform(true, true, true), Ignore);
    assert_eq!(sync_with_platform(true, true, false), ExitSession);
    // pseudo-fullscreen session never engaged the platform
    assert_eq!(sync_with_platform(true, false, false), Ignore);
}

#[test]
fn late_request_results_are_reconciled() {
    use RequestSettled::*;
    assert_eq!(request_settled(true, true), Nothing);
    assert_eq!(request_settled(false, true), ApplyPseudo);
    // user left before the browser answered
    assert_eq!(request_settled(true, false), ExitPlatform);
    assert_eq!(request_settled(false, false), Nothing);
}
