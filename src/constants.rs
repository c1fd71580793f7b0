// Constants module - centralized default values for the directive store
//
// Session defaults and validation bounds live here so the store, the
// config loader, and the tests agree on the same numbers.

// =============================================================================
// Session defaults
// =============================================================================

/// Default target width in pixels
pub const DEFAULT_WIDTH: u32 = 400;

/// Default target height in pixels
pub const DEFAULT_HEIGHT: u32 = 500;

/// Default compression level
pub const DEFAULT_COMPRESSION: u8 = 10;

/// Default sharpness level
pub const DEFAULT_SHARPNESS: u8 = 10;

/// Default rotation in degrees
pub const DEFAULT_ROTATE: i32 = 0;

/// Default scale-to-screen-width value
pub const DEFAULT_SCALE_TO_SCREEN_WIDTH: i32 = 0;

/// Default auto width fallback (0 = absent)
pub const DEFAULT_AUTO_WIDTH_WITH_FALLBACK: u32 = 0;

// =============================================================================
// Validation bounds (closed intervals)
// =============================================================================

/// Lowest accepted rotation
pub const ROTATE_MIN: i32 = -360;

/// Highest accepted rotation
pub const ROTATE_MAX: i32 = 360;

/// Lowest accepted compression/sharpness
pub const PERCENT_MIN: i32 = 0;

/// Highest accepted compression/sharpness
pub const PERCENT_MAX: i32 = 100;

// =============================================================================
// Logging defaults
// =============================================================================

/// Default log filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";
