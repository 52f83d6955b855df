// DOM-facing names, labels and inline styles used by the web shell.
// Numeric tuning lives in `core::constants`.

// Class names
pub const CLASS_CONTROLS: &str = "psv-controls-container";
pub const CLASS_BUTTON: &str = "psv-btn";
pub const CLASS_FULLSCREEN_BUTTON: &str = "psv-btn psv-fullscreen-btn";
pub const CLASS_ZOOM_IN_BUTTON: &str = "psv-btn psv-zoom-btn psv-zoom-in-btn";
pub const CLASS_ZOOM_OUT_BUTTON: &str = "psv-btn psv-zoom-btn psv-zoom-out-btn";
pub const CLASS_ERROR: &str = "psv-error-message";
pub const CLASS_OVERLAY: &str = "psv-fullscreen-overlay";
pub const CLASS_CANVAS: &str = "psv-canvas";

// Button glyphs and tooltips
pub const GLYPH_ZOOM_IN: &str = "+";
pub const GLYPH_ZOOM_OUT: &str = "\u{2212}"; // minus sign, not a hyphen
pub const GLYPH_FULLSCREEN_ENTER: &str = "\u{26F6}";
pub const GLYPH_FULLSCREEN_EXIT: &str = "\u{2715}";
pub const TITLE_ZOOM_IN: &str = "Zoom in";
pub const TITLE_ZOOM_OUT: &str = "Zoom out";
pub const TITLE_FULLSCREEN_ENTER: &str = "Fullscreen";
pub const TITLE_FULLSCREEN_EXIT: &str = "Exit fullscreen";

pub const ERROR_CSS: &str = "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); \
     background: rgba(255, 0, 0, 0.8); color: white; padding: 20px; border-radius: 8px; \
     text-align: center; font-family: Arial, sans-serif; z-index: 1000;";
pub const CANVAS_CSS: &str = "display: block; width: 100%; height: 100%;";

// Page hooks
pub const PAGE_CONFIG_GLOBAL: &str = "PSV360Config";
pub const VIEWPORT_META_SELECTOR: &str = "meta[name=viewport]";
pub const OPTION_DEBUG: &str = "debug";
pub const OPTION_MAX_ACTIVE: &str = "maxActive";

// WEBGL_debug_renderer_info
pub const DEBUG_RENDERER_EXTENSION: &str = "WEBGL_debug_renderer_info";
pub const UNMASKED_RENDERER_WEBGL: u32 = 0x9246;
pub const LOSE_CONTEXT_EXTENSION: &str = "WEBGL_lose_context";

pub const KEY_ESCAPE: &str = "Escape";
