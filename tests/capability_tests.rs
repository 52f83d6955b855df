// Host-side tests for device classification and renderer selection.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod capability {
    include!("../src/core/capability.rs");
}

use capability::*;

const UA_MAC: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 Version/17.0 Safari/605.1.15";
const UA_IPHONE: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
const UA_ANDROID: &str =
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36";
const UA_WINDOWS: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";

#[test]
fn user_agent_families() {
    assert!(is_mac_user_agent(UA_MAC));
    assert!(is_mac_user_agent(UA_IPHONE));
    assert!(!is_mac_user_agent(UA_WINDOWS));
    assert!(is_mobile_user_agent(UA_ANDROID));
    assert!(is_mobile_user_agent(UA_IPHONE));
    assert!(!is_mobile_user_agent(UA_MAC));
    assert!(is_ios_user_agent(UA_IPHONE));
    assert!(!is_ios_user_agent(UA_ANDROID));
}

#[test]
fn touch_form_factor() {
    assert!(detect_touch_form_factor(UA_ANDROID, false, 1200.0));
    assert!(detect_touch_form_factor(UA_IPHONE, true, 390.0));
    assert!(!detect_touch_form_factor(UA_IPHONE, false, 390.0));
    // narrow touch-enabled Windows laptop window
    assert!(detect_touch_form_factor(UA_WINDOWS, true, 700.0));
    assert!(detect_touch_form_factor(UA_WINDOWS, true, 768.0));
    assert!(!detect_touch_form_factor(UA_WINDOWS, true, 1200.0));
    assert!(!detect_touch_form_factor(UA_WINDOWS, false, 500.0));
    // narrow desktop Safari is still a desktop
    assert!(!detect_touch_form_factor(UA_MAC, true, 500.0));
    assert!(!detect_touch_form_factor(UA_MAC, false, 500.0));
}

#[test]
fn software_renderers_are_recognised() {
    assert!(is_software_renderer("Google SwiftShader"));
    assert!(is_software_renderer("llvmpipe (LLVM 15.0.7, 256 bits)"));
    assert!(is_software_renderer("Mesa OffScreen"));
    assert!(is_software_renderer("Software Rasterizer"));
    assert!(!is_software_renderer("Apple M2"));
    assert!(!is_software_renderer("ANGLE (NVIDIA, NVIDIA GeForce RTX 3080 Direct3D11)"));
}

#[test]
fn renderer_kind_follows_context_availability() {
    let none = Capabilities::default();
    assert_eq!(none.renderer_kind(), RendererKind::Fallback);
    let software = Capabilities {
        accelerated_context: true,
        ..Default::default()
    };
    assert_eq!(software.renderer_kind(), RendererKind::Accelerated);
    assert_eq!(software.power_mode(), PowerMode::LowPower);
}

#[test]
fn power_mode_prefers_high_performance_only_on_mac_hardware() {
    let mac = Capabilities {
        is_mac_like: true,
        accelerated_context: true,
        hardware_acceleration_available: true,
        ..Default::default()
    };
    assert_eq!(mac.power_mode(), PowerMode::HighPerformance);
    let pc = Capabilities {
        is_mac_like: false,
        ..mac
    };
    assert_eq!(pc.power_mode(), PowerMode::LowPower);
}

#[test]
fn pixel_ratio_caps() {
    let mac = Capabilities {
        is_mac_like: true,
        accelerated_context: true,
        hardware_acceleration_available: true,
        ..Default::default()
    };
    let pc = Capabilities {
        is_mac_like: false,
        ..mac
    };
    let software = Capabilities {
        hardware_acceleration_available: false,
        ..mac
    };
    assert_eq!(mac.pixel_ratio(4.0), 3.0);
    assert_eq!(mac.pixel_ratio(2.0), 2.0);
    assert_eq!(pc.pixel_ratio(3.0), 2.0);
    assert_eq!(pc.pixel_ratio(1.25), 1.25);
    assert_eq!(software.pixel_ratio(3.0), 1.0);
    assert_eq!(pc.pixel_ratio(f64::NAN), 1.0);
    assert_eq!(pc.pixel_ratio(0.0), 1.0);
}

#[test]
fn context_classification() {
    assert_eq!(ContextInfo::from_renderer(None), ContextInfo::Hardware);
    assert_eq!(
        ContextInfo::from_renderer(Some("Apple M2".into())),
        ContextInfo::Hardware
    );
    assert_eq!(
        ContextInfo::from_renderer(Some("Google SwiftShader".into())),
        ContextInfo::Software("Google SwiftShader".into())
    );
}

#[test]
fn context_acceleration_flags() {
    assert_eq!(ContextInfo::Hardware.acceleration(false), (true, true));
    assert_eq!(
        ContextInfo::Software("llvmpipe".into()).acceleration(true),
        (true, false)
    );
    assert_eq!(ContextInfo::Unavailable.acceleration(true), (true, true));
    assert_eq!(ContextInfo::Unavailable.acceleration(false), (false, false));
}
