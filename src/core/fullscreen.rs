// Platform fullscreen entry points, tried in order; the first that exists and
// does not throw wins. Apple WebKit behaves better with its prefixed API first.
const REQUEST_METHODS: [&str; 4] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "mozRequestFullScreen",
    "msRequestFullscreen",
];
const REQUEST_METHODS_MAC: [&str; 2] = ["webkitRequestFullscreen", "requestFullscreen"];

const EXIT_METHODS: [&str; 4] = [
    "exitFullscreen",
    "webkitExitFullscreen",
    "mozCancelFullScreen",
    "msExitFullscreen",
];
const EXIT_METHODS_MAC: [&str; 2] = ["webkitExitFullscreen", "exitFullscreen"];

pub const ELEMENT_PROPERTIES: [&str; 4] = [
    "fullscreenElement",
    "webkitFullscreenElement",
    "mozFullScreenElement",
    "msFullscreenElement",
];

pub const CHANGE_EVENTS: [&str; 4] = [
    "fullscreenchange",
    "webkitfullscreenchange",
    "mozfullscreenchange",
    "MSFullscreenChange",
];

/// Inline properties rewritten while a container is fullscreen. All of them
/// are captured on entry so exit can put back exactly what was there.
pub const SNAPSHOT_PROPERTIES: [&str; 10] = [
    "position",
    "top",
    "left",
    "width",
    "height",
    "z-index",
    "background-color",
    "padding-top",
    "max-width",
    "max-height",
];

pub const CONTAINER_STYLE: [(&str, &str); 7] = [
    ("position", "relative"),
    ("width", "100vw"),
    ("height", "100vh"),
    ("padding-top", "0"),
    ("max-width", "none"),
    ("max-height", "none"),
    ("background-color", "#000"),
];

pub const OVERLAY_CSS: &str = "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; \
     background: #000; z-index: 9999; display: flex; align-items: center; justify-content: center;";

pub const PSEUDO_VIEWPORT_CONTENT: &str =
    "width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no";

pub fn request_methods(is_mac: bool) -> &'static [&'static str] {
    if is_mac {
        &REQUEST_METHODS_MAC
    } else {
        &REQUEST_METHODS
    }
}

pub fn exit_methods(is_mac: bool) -> &'static [&'static str] {
    if is_mac {
        &EXIT_METHODS_MAC
    } else {
        &EXIT_METHODS
    }
}

/// Inline style values captured before the fullscreen styling is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSnapshot {
    values: Vec<(&'static str, String)>,
}

impl StyleSnapshot {
    pub fn capture<F>(read: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        Self {
            values: SNAPSHOT_PROPERTIES
                .iter()
                .map(|p| (*p, read(p)))
                .collect(),
        }
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn get(&self, property: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Properties paired with their original value; `None` means it was unset.
    pub fn restorations(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.values
            .iter()
            .map(|(p, v)| (*p, (!v.is_empty()).then_some(v.as_str())))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformSync {
    Ignore,
    /// The platform fullscreen this instance requested was engaged.
    Engaged,
    /// The browser left fullscreen on its own; run the full exit path.
    ExitSession,
}

/// Reconcile a native fullscreen change with this instance's session.
///
/// `engaged` says whether the platform already reported fullscreen during the
/// current session; sessions running in pseudo-fullscreen never engage and so
/// are never torn down by unrelated change events.
pub fn sync_with_platform(session_active: bool, engaged: bool, platform_fullscreen: bool) -> PlatformSync {
    match (session_active, engaged, platform_fullscreen) {
        (false, _, _) => PlatformSync::Ignore,
        (true, false, true) => PlatformSync::Engaged,
        (true, true, false) => PlatformSync::ExitSession,
        _ => PlatformSync::Ignore,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestSettled {
    Nothing,
    /// Refused while the session is still open: fall back to pseudo-fullscreen.
    ApplyPseudo,
    /// Granted after the session already ended: leave platform fullscreen again.
    ExitPlatform,
}

/// Follow-up for a platform request promise that settled, possibly long after
/// the session that issued it was torn down.
pub fn request_settled(granted: bool, session_open: bool) -> RequestSettled {
    match (granted, session_open) {
        (false, true) => RequestSettled::ApplyPseudo,
        (true, false) => RequestSettled::ExitPlatform,
        _ => RequestSettled::Nothing,
    }
}
