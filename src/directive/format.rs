//! Output format and fit method enumerations
//!
//! Both parse case-insensitively from the values the form controls send and
//! serialize back to the lowercase directive tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Gif,
    #[default]
    Jpg,
    Bmp,
    WebP,
    Jp2,
    Svg,
    Jxr,
    /// Video output, only honoured when the store allows it
    Mp4,
}

impl OutputFormat {
    /// Every still-image format, in the order the form lists them
    pub const IMAGE_FORMATS: [OutputFormat; 8] = [
        OutputFormat::Png,
        OutputFormat::Gif,
        OutputFormat::Jpg,
        OutputFormat::Bmp,
        OutputFormat::WebP,
        OutputFormat::Jp2,
        OutputFormat::Svg,
        OutputFormat::Jxr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Jpg => "jpg",
            Self::Bmp => "bmp",
            Self::WebP => "webp",
            Self::Jp2 => "jp2",
            Self::Svg => "svg",
            Self::Jxr => "jxr",
            Self::Mp4 => "mp4",
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Self::Mp4)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a format or fit token is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownToken {}

impl FromStr for OutputFormat {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "gif" => Ok(OutputFormat::Gif),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpg),
            "bmp" => Ok(OutputFormat::Bmp),
            "webp" => Ok(OutputFormat::WebP),
            "jp2" => Ok(OutputFormat::Jp2),
            "svg" => Ok(OutputFormat::Svg),
            "jxr" => Ok(OutputFormat::Jxr),
            "mp4" => Ok(OutputFormat::Mp4),
            _ => Err(UnknownToken {
                kind: "output format",
                value: s.to_string(),
            }),
        }
    }
}

/// How the CDN fits the image into the requested box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMethod {
    /// Distort to fill the box exactly
    Stretch,
    /// Scale to fit inside the box
    #[default]
    Box,
    /// Fit inside the box and pad the remainder
    Letterbox,
    /// Fill the box and crop the overflow
    Cropbox,
}

impl FitMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Box => "box",
            Self::Letterbox => "letterbox",
            Self::Cropbox => "cropbox",
        }
    }
}

impl fmt::Display for FitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitMethod {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stretch" => Ok(FitMethod::Stretch),
            "box" => Ok(FitMethod::Box),
            "letterbox" => Ok(FitMethod::Letterbox),
            "cropbox" => Ok(FitMethod::Cropbox),
            _ => Err(UnknownToken {
                kind: "fit method",
                value: s.to_string(),
            }),
        }
    }
}
