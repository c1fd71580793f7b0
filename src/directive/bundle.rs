//! Directive bundle handed to the image delivery service

use serde::Serialize;

use super::format::{FitMethod, OutputFormat};
use super::state::DirectiveConfig;

/// Read-only projection of the forwarded fields
///
/// Crop fields and the static `inline`/`keepMeta` flags are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveBundle {
    pub width: u32,
    pub height: u32,
    pub rotate: i32,
    pub compression: u8,
    pub sharpness: u8,
    pub scale_to_screen_width: i32,
    pub output_format: OutputFormat,
    pub fit_method: FitMethod,
    pub no_optimization: bool,
    /// None when the configured value is 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_width_with_fallback: Option<u32>,
}

impl From<&DirectiveConfig> for DirectiveBundle {
    fn from(config: &DirectiveConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            rotate: config.rotate,
            compression: config.compression,
            sharpness: config.sharpness,
            scale_to_screen_width: config.scale_to_screen_width,
            output_format: config.output_format,
            fit_method: config.fit_method,
            no_optimization: config.no_optimization,
            auto_width_with_fallback: match config.auto_width_with_fallback {
                0 => None,
                n => Some(n),
            },
        }
    }
}
