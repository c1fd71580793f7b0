// Directive Tuner Library
// State management and encoding for interactive image CDN directive tuning

pub mod config;
pub mod constants;
pub mod delivery;
pub mod directive;
pub mod error;
pub mod logging;
