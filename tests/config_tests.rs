// Host-side tests for per-container and page-wide configuration.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}

use config::*;
use constants::*;
use std::collections::HashMap;

fn from(pairs: &[(&str, &str)]) -> ViewerConfig {
    let attrs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ViewerConfig::from_attributes(|name| attrs.get(name).cloned())
}

#[test]
fn no_attributes_means_defaults() {
    let cfg = from(&[]);
    assert_eq!(cfg, ViewerConfig::default());
    assert!(cfg.auto_rotate);
    assert_eq!(cfg.auto_rotate_speed, AUTO_ROTATE_SPEED_DEG_PER_SEC);
    assert_eq!(cfg.initial_fov, INITIAL_FOV_DEG);
    assert_eq!(cfg.resume_delay_ms, AUTO_ROTATE_RESUME_DELAY_MS);
}

#[test]
fn auto_rotate_flag_values() {
    for (raw, expected) in [
        ("false", false),
        ("0", false),
        (" OFF ", false),
        ("no", false),
        ("true", true),
        ("", true),
        ("yes", true),
    ] {
        assert_eq!(from(&[(ATTR_AUTO_ROTATE, raw)]).auto_rotate, expected, "{raw:?}");
    }
    assert!(from(&[(ATTR_AUTO_ROTATE, "maybe")]).auto_rotate);
}

#[test]
fn speed_override_rejects_negative_and_garbage() {
    assert_eq!(from(&[(ATTR_AUTO_ROTATE_SPEED, "6.5")]).auto_rotate_speed, 6.5);
    assert_eq!(from(&[(ATTR_AUTO_ROTATE_SPEED, "0")]).auto_rotate_speed, 0.0);
    assert_eq!(
        from(&[(ATTR_AUTO_ROTATE_SPEED, "-1")]).auto_rotate_speed,
        AUTO_ROTATE_SPEED_DEG_PER_SEC
    );
    assert_eq!(
        from(&[(ATTR_AUTO_ROTATE_SPEED, "fast")]).auto_rotate_speed,
        AUTO_ROTATE_SPEED_DEG_PER_SEC
    );
    assert_eq!(
        from(&[(ATTR_AUTO_ROTATE_SPEED, "inf")]).auto_rotate_speed,
        AUTO_ROTATE_SPEED_DEG_PER_SEC
    );
}

#[test]
fn fov_override_is_clamped() {
    assert_eq!(from(&[(ATTR_FOV, "60")]).initial_fov, 60.0);
    assert_eq!(from(&[(ATTR_FOV, "10")]).initial_fov, MIN_FOV_DEG);
    assert_eq!(from(&[(ATTR_FOV, "170")]).initial_fov, MAX_FOV_DEG);
    assert_eq!(from(&[(ATTR_FOV, "wide")]).initial_fov, INITIAL_FOV_DEG);
}

#[test]
fn page_config_defaults_and_overrides() {
    let d = PageConfig::default();
    assert!(!d.debug);
    assert_eq!(d.max_active, MAX_ACTIVE_VIEWERS);
    assert_eq!(d.log_level(), log::Level::Info);

    let p = PageConfig::new(Some(true), Some(5.0));
    assert!(p.debug);
    assert_eq!(p.max_active, 5);
    assert_eq!(p.log_level(), log::Level::Debug);

    assert_eq!(PageConfig::new(None, Some(0.0)).max_active, 1);
    assert_eq!(PageConfig::new(None, Some(f64::NAN)).max_active, MAX_ACTIVE_VIEWERS);
    assert_eq!(PageConfig::new(None, None), d);
}
