//! Actions accepted by the directive store
//!
//! Two representations exist:
//! 1. [`Action`]: the closed, typed union the store applies
//! 2. [`ActionRecord`]: the loose `{ type, fieldName, payload }` form read from
//!    scripts and form events, resolved into an `Action` before dispatch
//!
//! # Record format
//! ```yaml
//! - type: field
//!   fieldName: width
//!   payload: 800
//! - type: SET_ROTATE
//!   payload: "-90"
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::format::{FitMethod, OutputFormat};
use super::validation;

/// Raw action payload as delivered by a form control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Flag(bool),
    Number(f64),
    Sequence([i64; 4]),
    Text(String),
}

impl Payload {
    /// Read as a non-negative pixel count. Whole-valued decimals such as
    /// `"800.0"` are accepted.
    fn as_unsigned(&self) -> Option<u32> {
        let n = validation::read_number(self)?;
        if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) {
            Some(n as u32)
        } else {
            None
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn as_quad(&self) -> Option<[u32; 4]> {
        match self {
            Payload::Sequence(values) => {
                let mut quad = [0u32; 4];
                for (slot, value) in quad.iter_mut().zip(values) {
                    *slot = u32::try_from(*value).ok()?;
                }
                Some(quad)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Flag(b) => write!(f, "{}", b),
            Payload::Number(n) => write!(f, "{}", n),
            Payload::Sequence([a, b, c, d]) => write!(f, "[{}, {}, {}, {}]", a, b, c, d),
            Payload::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Flag(value)
    }
}

impl From<i32> for Payload {
    fn from(value: i32) -> Self {
        Payload::Number(f64::from(value))
    }
}

impl From<u32> for Payload {
    fn from(value: u32) -> Self {
        Payload::Number(f64::from(value))
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Number(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Text(value.to_string())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Text(value)
    }
}

impl From<[i64; 4]> for Payload {
    fn from(value: [i64; 4]) -> Self {
        Payload::Sequence(value)
    }
}

/// Unchecked field writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Width(u32),
    Height(u32),
    AutoWidthWithFallback(u32),
    OutputFormat(OutputFormat),
    FitMethod(FitMethod),
    // Reserved crop fields: stored, never validated or forwarded
    CropWidth(u32),
    CropHeight(u32),
    CropLeft(u32),
    CropTop(u32),
    Crop([u32; 4]),
}

impl FieldUpdate {
    /// Build an update from a field name and raw payload
    ///
    /// Returns None for unknown names and for payloads that do not fit the
    /// field's type (negative widths, unknown format tokens, ...).
    pub fn from_name(name: &str, payload: &Payload) -> Option<Self> {
        match name {
            "width" => payload.as_unsigned().map(FieldUpdate::Width),
            "height" => payload.as_unsigned().map(FieldUpdate::Height),
            "autoWidthWithFallback" => {
                payload.as_unsigned().map(FieldUpdate::AutoWidthWithFallback)
            }
            "outputFormat" => payload
                .as_text()
                .and_then(|s| s.parse().ok())
                .map(FieldUpdate::OutputFormat),
            "fitMethod" => payload
                .as_text()
                .and_then(|s| s.parse().ok())
                .map(FieldUpdate::FitMethod),
            "cropWidth" => payload.as_unsigned().map(FieldUpdate::CropWidth),
            "cropHeight" => payload.as_unsigned().map(FieldUpdate::CropHeight),
            "cropLeft" => payload.as_unsigned().map(FieldUpdate::CropLeft),
            "cropTop" => payload.as_unsigned().map(FieldUpdate::CropTop),
            "crop" => payload.as_quad().map(FieldUpdate::Crop),
            _ => None,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Width(_) => "width",
            Self::Height(_) => "height",
            Self::AutoWidthWithFallback(_) => "autoWidthWithFallback",
            Self::OutputFormat(_) => "outputFormat",
            Self::FitMethod(_) => "fitMethod",
            Self::CropWidth(_) => "cropWidth",
            Self::CropHeight(_) => "cropHeight",
            Self::CropLeft(_) => "cropLeft",
            Self::CropTop(_) => "cropTop",
            Self::Crop(_) => "crop",
        }
    }
}

/// The six store operations
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetField(FieldUpdate),
    SetCompression(Payload),
    SetSharpness(Payload),
    SetRotate(Payload),
    SetScaleToScreenWidth(Payload),
    /// Only the literal text `"true"` enables the flag
    SetNoOptimization(Payload),
}

impl Action {
    pub fn compression(value: impl Into<Payload>) -> Self {
        Action::SetCompression(value.into())
    }

    pub fn sharpness(value: impl Into<Payload>) -> Self {
        Action::SetSharpness(value.into())
    }

    pub fn rotate(value: impl Into<Payload>) -> Self {
        Action::SetRotate(value.into())
    }

    pub fn scale_to_screen_width(value: impl Into<Payload>) -> Self {
        Action::SetScaleToScreenWidth(value.into())
    }

    pub fn no_optimization(value: impl Into<Payload>) -> Self {
        Action::SetNoOptimization(value.into())
    }

    /// Short name used in log fields
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::SetField(_) => ActionKind::Field,
            Action::SetCompression(_) => ActionKind::SetCompression,
            Action::SetSharpness(_) => ActionKind::SetSharpness,
            Action::SetRotate(_) => ActionKind::SetRotate,
            Action::SetScaleToScreenWidth(_) => ActionKind::SetScaleToScreenWidth,
            Action::SetNoOptimization(_) => ActionKind::SetNoOptimization,
        }
    }
}

/// Wire names of the action types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "field")]
    Field,
    #[serde(rename = "SET_COMPRESSION")]
    SetCompression,
    #[serde(rename = "SET_SHARPNESS")]
    SetSharpness,
    #[serde(rename = "SET_ROTATE")]
    SetRotate,
    #[serde(rename = "SET_ScaleToScreenWidth")]
    SetScaleToScreenWidth,
    #[serde(rename = "SET_NO_OPTIMIZATION")]
    SetNoOptimization,
    /// Any unrecognised type, applied as a no-op
    #[serde(other)]
    Unknown,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::SetCompression => "SET_COMPRESSION",
            Self::SetSharpness => "SET_SHARPNESS",
            Self::SetRotate => "SET_ROTATE",
            Self::SetScaleToScreenWidth => "SET_ScaleToScreenWidth",
            Self::SetNoOptimization => "SET_NO_OPTIMIZATION",
            Self::Unknown => "unknown",
        }
    }
}

/// Dynamic action form: `{ type, fieldName, payload }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    #[serde(rename = "fieldName", default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    pub payload: Payload,
}

impl ActionRecord {
    pub fn new(kind: ActionKind, field_name: Option<&str>, payload: impl Into<Payload>) -> Self {
        Self {
            kind,
            field_name: field_name.map(str::to_string),
            payload: payload.into(),
        }
    }

    /// Convenience for `type: field` records
    pub fn field(name: &str, payload: impl Into<Payload>) -> Self {
        Self::new(ActionKind::Field, Some(name), payload)
    }

    /// Resolve into a typed action; None means the record is a no-op
    pub fn resolve(&self) -> Option<Action> {
        let payload = self.payload.clone();
        match self.kind {
            ActionKind::Field => {
                let name = self.field_name.as_deref()?;
                FieldUpdate::from_name(name, &self.payload).map(Action::SetField)
            }
            ActionKind::SetCompression => Some(Action::SetCompression(payload)),
            ActionKind::SetSharpness => Some(Action::SetSharpness(payload)),
            ActionKind::SetRotate => Some(Action::SetRotate(payload)),
            ActionKind::SetScaleToScreenWidth => Some(Action::SetScaleToScreenWidth(payload)),
            ActionKind::SetNoOptimization => Some(Action::SetNoOptimization(payload)),
            ActionKind::Unknown => None,
        }
    }
}
