use super::constants::{MOBILE_MAX_INNER_WIDTH_PX, PIXEL_RATIO_CAP_DEFAULT, PIXEL_RATIO_CAP_MAC};

const MAC_TOKENS: [&str; 1] = ["mac"]; // covers Macintosh, MacIntel, MacPPC, Mac68K
const MOBILE_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];
const IOS_TOKENS: [&str; 3] = ["iPhone", "iPad", "iPod"];
const SOFTWARE_RENDERER_MARKERS: [&str; 4] = ["software", "mesa", "llvmpipe", "swiftshader"];

/// One-shot snapshot of what the host device can do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Touch/mobile form factor; disables fullscreen controls.
    pub is_touch_device: bool,
    pub is_mac_like: bool,
    /// A GPU-backed context (WebGPU or WebGL) can be created at all.
    pub accelerated_context: bool,
    /// The accelerated context is backed by real hardware, not an emulator.
    pub hardware_acceleration_available: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererKind {
    Accelerated,
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerMode {
    HighPerformance,
    LowPower,
}

/// What the throwaway WebGL test context reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextInfo {
    Unavailable,
    Hardware,
    Software(String),
}

impl ContextInfo {
    /// `renderer` is the unmasked renderer string, if the debug extension
    /// exposed one. A working context without it is taken at face value.
    pub fn from_renderer(renderer: Option<String>) -> Self {
        match renderer {
            Some(r) if is_software_renderer(&r) => ContextInfo::Software(r),
            _ => ContextInfo::Hardware,
        }
    }

    /// `(accelerated_context, hardware_acceleration_available)`. Without any
    /// GL context, WebGPU presence decides both.
    pub fn acceleration(&self, webgpu: bool) -> (bool, bool) {
        match self {
            ContextInfo::Hardware => (true, true),
            ContextInfo::Software(_) => (true, false),
            ContextInfo::Unavailable => (webgpu, webgpu),
        }
    }
}

impl Capabilities {
    pub fn renderer_kind(&self) -> RendererKind {
        if self.accelerated_context {
            RendererKind::Accelerated
        } else {
            RendererKind::Fallback
        }
    }

    pub fn power_mode(&self) -> PowerMode {
        if self.hardware_acceleration_available && self.is_mac_like {
            PowerMode::HighPerformance
        } else {
            PowerMode::LowPower
        }
    }

    /// Backing-store scale for the accelerated surface.
    pub fn pixel_ratio(&self, device_pixel_ratio: f64) -> f64 {
        if !self.hardware_acceleration_available {
            return 1.0;
        }
        let cap = if self.is_mac_like {
            PIXEL_RATIO_CAP_MAC
        } else {
            PIXEL_RATIO_CAP_DEFAULT
        };
        if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(cap)
        } else {
            1.0
        }
    }
}

#[inline]
pub fn is_mac_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MAC_TOKENS.iter().any(|t| ua.contains(t))
}

#[inline]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_TOKENS.iter().any(|t| ua.contains(t))
}

#[inline]
pub fn is_ios_user_agent(user_agent: &str) -> bool {
    IOS_TOKENS.iter().any(|t| user_agent.contains(t))
}

/// Touch/mobile form factor decision.
///
/// Mac-like agents are never classified by viewport width alone, since a
/// narrow desktop window is still a desktop.
pub fn detect_touch_form_factor(user_agent: &str, has_touch: bool, inner_width: f64) -> bool {
    let mobile_ua = is_mobile_user_agent(user_agent);
    if is_mac_user_agent(user_agent) {
        has_touch && mobile_ua
    } else {
        mobile_ua || (has_touch && inner_width <= MOBILE_MAX_INNER_WIDTH_PX)
    }
}

/// True when an unmasked renderer string names an emulated rasterizer.
#[inline]
pub fn is_software_renderer(renderer: &str) -> bool {
    let r = renderer.to_ascii_lowercase();
    SOFTWARE_RENDERER_MARKERS.iter().any(|m| r.contains(m))
}
