//! The directive configuration snapshot

use serde::{Deserialize, Serialize};

use super::errors::{ErrorMap, RangedField};
use super::format::{FitMethod, OutputFormat};
use crate::constants::{
    DEFAULT_AUTO_WIDTH_WITH_FALLBACK, DEFAULT_COMPRESSION, DEFAULT_HEIGHT, DEFAULT_ROTATE,
    DEFAULT_SCALE_TO_SCREEN_WIDTH, DEFAULT_SHARPNESS, DEFAULT_WIDTH,
};

/// One immutable configuration value. Every applied action yields a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DirectiveConfig {
    // === Geometry ===
    pub width: u32,
    pub height: u32,
    /// Degrees, within [-360, 360]
    pub rotate: i32,
    /// Within [-360, 360]
    pub scale_to_screen_width: i32,
    /// 0 means absent
    pub auto_width_with_fallback: u32,
    pub fit_method: FitMethod,

    // === Encoding ===
    /// Within [0, 100]
    pub compression: u8,
    /// Within [0, 100]
    pub sharpness: u8,
    pub output_format: OutputFormat,
    pub no_optimization: bool,

    // === Reserved crop (stored only, never validated or forwarded) ===
    pub crop_width: u32,
    pub crop_height: u32,
    pub crop_left: u32,
    pub crop_top: u32,
    pub crop: [u32; 4],

    // === Static flags ===
    pub inline: bool,
    pub keep_meta: bool,

    #[serde(skip_deserializing)]
    pub error: ErrorMap,
}

impl Default for DirectiveConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rotate: DEFAULT_ROTATE,
            scale_to_screen_width: DEFAULT_SCALE_TO_SCREEN_WIDTH,
            auto_width_with_fallback: DEFAULT_AUTO_WIDTH_WITH_FALLBACK,
            fit_method: FitMethod::Box,
            compression: DEFAULT_COMPRESSION,
            sharpness: DEFAULT_SHARPNESS,
            output_format: OutputFormat::Jpg,
            no_optimization: false,
            crop_width: 0,
            crop_height: 0,
            crop_left: 0,
            crop_top: 0,
            crop: [0; 4],
            inline: true,
            keep_meta: true,
            error: ErrorMap::new(),
        }
    }
}

impl DirectiveConfig {
    /// Current value of a range-checked field
    pub fn ranged_value(&self, field: RangedField) -> i64 {
        match field {
            RangedField::Rotate => i64::from(self.rotate),
            RangedField::Compression => i64::from(self.compression),
            RangedField::Sharpness => i64::from(self.sharpness),
            RangedField::ScaleToScreenWidth => i64::from(self.scale_to_screen_width),
        }
    }
}
