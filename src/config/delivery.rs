//! Image delivery configuration types.
//!
//! Where the tuned image is served from. Only used to build preview URLs.

use serde::{Deserialize, Serialize};

/// CDN address and the source image path to preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// CDN base address (e.g. "https://demo.cdn.imgeng.in")
    pub address: String,
    /// Path of the source image on the CDN (e.g. "/images/bike.jpg")
    pub source: String,
}

impl DeliveryConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.address.trim().is_empty() {
            return Err("delivery.address cannot be empty".to_string());
        }
        if self.source.trim().trim_start_matches('/').is_empty() {
            return Err("delivery.source cannot be empty".to_string());
        }
        Ok(())
    }
}
