//! Directive error types
//!
//! Range and parse failures never escape the store: they are folded into the
//! snapshot's error map. Only config loading and delivery encoding return
//! these to the caller.

use thiserror::Error;

use crate::directive::errors::RangedField;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectiveError {
    /// Value parsed but falls outside the field's closed interval
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: RangedField,
        value: f64,
        min: i32,
        max: i32,
    },

    /// Payload could not be read as an integer
    #[error("{field} payload {input:?} is not a whole number")]
    Malformed { field: RangedField, input: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DirectiveError {
    pub fn malformed(field: RangedField, input: impl Into<String>) -> Self {
        DirectiveError::Malformed {
            field,
            input: input.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        DirectiveError::Config(message.into())
    }

    /// The ranged field this error belongs to, if any
    pub fn field(&self) -> Option<RangedField> {
        match self {
            DirectiveError::OutOfRange { field, .. } | DirectiveError::Malformed { field, .. } => {
                Some(*field)
            }
            DirectiveError::Config(_) => None,
        }
    }
}
