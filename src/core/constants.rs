// Motion tuning constants.
//
// Spring presets are (stiffness, damping, mass). Times are milliseconds
// unless the name says otherwise.

// Spring integration
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_DT_SEC: f32 = 0.1; // tab switches and long stalls
pub const SPRING_DEFAULT_REST_DELTA: f32 = 0.01;
pub const SPRING_REST_SPEED_FACTOR: f32 = 10.0; // rest speed = rest delta * factor

// Cursor
pub const CURSOR_DOT_SPRING: (f32, f32, f32) = (500.0, 28.0, 1.0);
pub const CURSOR_RING_SPRING: (f32, f32, f32) = (150.0, 20.0, 1.0);
pub const CURSOR_SCALE_SPRING: (f32, f32, f32) = (600.0, 40.0, 1.0);
pub const CURSOR_DOT_SCALE_HOVER: f32 = 2.0;
pub const CURSOR_DOT_SCALE_CLICK: f32 = 0.8;
pub const CURSOR_RING_SCALE_CLICK: f32 = 0.9;
pub const CURSOR_RING_SIZE_PX: f32 = 40.0;
pub const CURSOR_RING_SIZE_HOVER_PX: f32 = 60.0;
pub const CURSOR_RING_OPACITY: f32 = 0.5;
pub const CURSOR_RING_OPACITY_HOVER: f32 = 0.8;

// Tilt / magnetic
pub const TILT_SPRING: (f32, f32, f32) = (300.0, 20.0, 1.0);
pub const TILT_DEFAULT_AMOUNT_DEG: f32 = 10.0;
pub const TILT_DEFAULT_HOVER_SCALE: f32 = 1.02;
pub const HOVER_SCALE_SPRING: (f32, f32, f32) = (400.0, 25.0, 1.0);
pub const MAGNETIC_SPRING: (f32, f32, f32) = (150.0, 15.0, 0.1);
pub const MAGNETIC_DEFAULT_STRENGTH: f32 = 0.3;

// Scroll
pub const PROGRESS_SPRING: (f32, f32, f32) = (100.0, 30.0, 1.0);
pub const PROGRESS_REST_DELTA: f32 = 0.001;
pub const HEADER_ALWAYS_VISIBLE_BELOW_PX: f64 = 100.0;
pub const HEADER_SOLID_AFTER_PX: f64 = 50.0;
pub const ACTIVE_SECTION_MARKER: f64 = 0.35; // fraction of viewport height

// Typewriter
pub const TYPEWRITER_TYPING_MS: u64 = 100;
pub const TYPEWRITER_DELETING_MS: u64 = 50;
pub const TYPEWRITER_PAUSE_MS: u64 = 2000;
pub const CARET_HALF_PERIOD_SEC: f32 = 0.5;

// Count-up
pub const COUNT_UP_DEFAULT_SECS: f32 = 2.0;

// Scramble
pub const SCRAMBLE_STEP_MS: u64 = 30;
pub const SCRAMBLE_ITERATION_STEP: f32 = 0.5;
pub const SCRAMBLE_GLYPHS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

// Contact form
pub const CONTACT_TIMEOUT_MS: u64 = 8000;
pub const CONTACT_SENT_BANNER_MS: u64 = 5000;
