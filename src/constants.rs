// Markup contract: selectors, attribute names and element ids the engine
// reads from the page. Motion tuning lives in `core::constants`.

// Cursor
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, [role=\"button\"], input, textarea, select, .cursor-hover";
pub const CURSOR_LABEL_ATTR: &str = "data-cursor-text";
// per-element key assigned on first scan
pub const CURSOR_KEY_ATTR: &str = "data-cursor-key";
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
pub const CURSOR_DOT_CLASS: &str = "cursor-dot";
pub const CURSOR_RING_CLASS: &str = "cursor-ring";
pub const CURSOR_LABEL_CLASS: &str = "cursor-label";
pub const CURSOR_LABEL_OFFSET_PX: f32 = 40.0;
pub const CURSOR_DOT_COLOR: &str = "#fff";
pub const CURSOR_ACCENT_COLOR: &str = "#ff006e";
pub const CURSOR_RING_BORDER: &str = "rgba(255, 255, 255, 0.5)";

// Tilt / magnetic
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const TILT_ATTR: &str = "data-tilt";
pub const TILT_GLOW_ATTR: &str = "data-tilt-glow";
pub const TILT_DEFAULT_GLOW: &str = "rgba(255, 0, 110, 0.3)";
pub const TILT_HOVERED_CLASS: &str = "tilt-hovered";
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const MAGNETIC_ATTR: &str = "data-magnetic";

// Scroll
pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const HEADER_ID: &str = "site-nav";
pub const HEADER_SOLID_CLASS: &str = "nav-solid";
pub const NAV_LINK_SELECTOR: &str = "#site-nav a[href^=\"#\"]";
pub const NAV_ACTIVE_CLASS: &str = "active";

// Text effects
pub const TYPEWRITER_SELECTOR: &str = "[data-typewriter]";
pub const TYPEWRITER_WORDS_ATTR: &str = "data-words";
pub const TYPEWRITER_TYPING_ATTR: &str = "data-typing-speed";
pub const TYPEWRITER_DELETING_ATTR: &str = "data-deleting-speed";
pub const TYPEWRITER_PAUSE_ATTR: &str = "data-pause-time";
pub const TYPEWRITER_CARET_CLASS: &str = "typewriter-caret";
pub const SCRAMBLE_SELECTOR: &str = "[data-scramble]";

// Count-up
pub const COUNT_UP_SELECTOR: &str = "[data-count-up]";
pub const COUNT_UP_ATTR: &str = "data-count-up";
pub const COUNT_UP_DURATION_ATTR: &str = "data-duration";
pub const COUNT_UP_PREFIX_ATTR: &str = "data-prefix";
pub const COUNT_UP_SUFFIX_ATTR: &str = "data-suffix";
pub const COUNT_UP_ROOT_MARGIN: &str = "-100px";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_ENDPOINT_ATTR: &str = "data-endpoint";
// tried in order: an explicit submit button wins over any earlier button
pub const SUBMIT_BUTTON_SELECTORS: [&str; 2] = ["button[type=\"submit\"]", "button"];
pub const CONTACT_STATUS_ID: &str = "contact-status";
