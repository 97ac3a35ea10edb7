/// DOM hooks and front-end tuning for the web build.
///
/// Scene tuning (shapes, follow rates, colours) lives in `aether-core`; this
/// file only names the page elements the web layer looks for and the limits
/// it applies before handing values to the core.
pub const CANVAS_ID: &str = "webgl-canvas";

// Scrolling happens inside this container when present, else on the document.
pub const SCROLL_CONTAINER_SELECTOR: &str = ".content-wrapper";

pub const SECTION_SELECTOR: &str = "section";
pub const NAV_DOT_SELECTOR: &str = ".nav-dot";
pub const REVEAL_SELECTOR: &str = ".reveal-text";
pub const ACTIVE_CLASS: &str = "active";

// Nav dots carry `data-section="<index>"`.
pub const NAV_DOT_INDEX_ATTR: &str = "data-section";

// Canvas `data-*` attributes forwarded to `SceneConfig::apply_override`.
pub const CONFIG_ATTR_PREFIX: &str = "data-";
pub const CONFIG_KEYS: [&str; 5] = ["particles", "seed", "shape", "interpolation", "sphere"];

// Backing store never exceeds 2x CSS pixels.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Longest step handed to the scene; a tab returning from the background
// resumes instead of jumping.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// The intro section reveals on first paint with the slower preset.
pub const INTRO_SECTION: usize = 0;
