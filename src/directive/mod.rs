//! Directive state management
//!
//! Holds the image transform configuration for one tuning session:
//! - A single immutable [`DirectiveConfig`] snapshot per applied action
//! - Range validation for rotate, compression, sharpness and scaleToScreenWidth
//! - An [`ErrorMap`] recording which checked fields were last rejected
//! - The [`DirectiveBundle`] projection forwarded to the image CDN
//!
//! # Example
//!
//! ```
//! use directive_tuner::directive::{apply, Action, DirectiveConfig, RangedField};
//!
//! let state = DirectiveConfig::default();
//! let state = apply(&state, &Action::compression(150));
//! assert_eq!(state.compression, 10);
//! assert!(state.error.is_flagged(RangedField::Compression));
//! ```

pub mod action;
pub mod bundle;
pub mod errors;
pub mod format;
pub mod state;
pub mod store;
pub mod validation;

pub use action::{Action, ActionKind, ActionRecord, FieldUpdate, Payload};
pub use bundle::DirectiveBundle;
pub use errors::{ErrorMap, ErrorPolicy, RangedField};
pub use format::{FitMethod, OutputFormat, UnknownToken};
pub use state::DirectiveConfig;
pub use store::{apply, apply_with, DirectiveStore, StoreOptions};
pub use validation::{bounds_for, Bounds};
