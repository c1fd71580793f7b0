//! Range validation for the checked directives
//!
//! Each checked field owns a closed interval. A payload is accepted only if it
//! reads as a whole number inside that interval.

use super::action::Payload;
use super::errors::RangedField;
use crate::constants::{PERCENT_MAX, PERCENT_MIN, ROTATE_MAX, ROTATE_MIN};
use crate::error::DirectiveError;

/// Closed integer interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

impl Bounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= f64::from(self.min) && value <= f64::from(self.max)
    }
}

pub const ROTATE_BOUNDS: Bounds = Bounds::new(ROTATE_MIN, ROTATE_MAX);

/// Shares the rotate interval.
// TODO: confirm with the CDN owners whether this should be a 0-100 percentage
pub const SCALE_TO_SCREEN_WIDTH_BOUNDS: Bounds = ROTATE_BOUNDS;

pub const PERCENT_BOUNDS: Bounds = Bounds::new(PERCENT_MIN, PERCENT_MAX);

pub fn bounds_for(field: RangedField) -> Bounds {
    match field {
        RangedField::Rotate => ROTATE_BOUNDS,
        RangedField::ScaleToScreenWidth => SCALE_TO_SCREEN_WIDTH_BOUNDS,
        RangedField::Compression | RangedField::Sharpness => PERCENT_BOUNDS,
    }
}

/// Read `payload` as a decimal number
///
/// Text is trimmed before parsing. Blank or unparseable text, NaN, booleans
/// and sequences yield None. Infinities pass through for the caller to range
/// check.
pub(crate) fn read_number(payload: &Payload) -> Option<f64> {
    let value = match payload {
        Payload::Number(n) => *n,
        Payload::Text(s) => s.trim().parse::<f64>().ok()?,
        Payload::Flag(_) | Payload::Sequence(_) => return None,
    };
    (!value.is_nan()).then_some(value)
}

/// Read `payload` as an integer inside `field`'s interval
///
/// See [`read_number`] for which payloads are malformed. The range check runs
/// before the whole-number check, so `400.5` for rotate is reported as out of
/// range rather than malformed.
pub fn check(field: RangedField, payload: &Payload) -> Result<i32, DirectiveError> {
    let value = read_number(payload)
        .ok_or_else(|| DirectiveError::malformed(field, payload.to_string()))?;

    let bounds = bounds_for(field);
    if !bounds.contains(value) {
        return Err(DirectiveError::OutOfRange {
            field,
            value,
            min: bounds.min,
            max: bounds.max,
        });
    }

    if value.fract() != 0.0 {
        return Err(DirectiveError::malformed(field, payload.to_string()));
    }

    Ok(value as i32)
}

/// Check an already-typed value, used when loading initial overrides
pub fn check_value(field: RangedField, value: i64) -> Result<(), DirectiveError> {
    let bounds = bounds_for(field);
    if value < i64::from(bounds.min) || value > i64::from(bounds.max) {
        return Err(DirectiveError::OutOfRange {
            field,
            value: value as f64,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(())
}
