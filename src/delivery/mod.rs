//! Directive encoding for the image delivery CDN
//!
//! Renders a [`DirectiveBundle`] into the CDN's directive path and builds the
//! full image URL. No requests are made here.
//!
//! # URL Format
//!
//! ```text
//! https://{address}/{source}?imgeng=/w_400/h_500/r_0/cmpr_10/s_10/pc_0/f_jpg/m_box
//! ```

use crate::config::DeliveryConfig;
use crate::directive::DirectiveBundle;
use crate::error::DirectiveError;

/// Query parameter carrying the directive path
pub const DIRECTIVE_QUERY_PARAM: &str = "imgeng";

/// Render the bundle as a slash-separated directive path
pub fn directive_path(bundle: &DirectiveBundle) -> String {
    let mut parts = vec![
        format!("w_{}", bundle.width),
        format!("h_{}", bundle.height),
    ];

    if let Some(fallback) = bundle.auto_width_with_fallback {
        parts.push(format!("w_auto,{}", fallback));
    }

    parts.push(format!("r_{}", bundle.rotate));
    parts.push(format!("cmpr_{}", bundle.compression));
    parts.push(format!("s_{}", bundle.sharpness));
    parts.push(format!("pc_{}", bundle.scale_to_screen_width));
    parts.push(format!("f_{}", bundle.output_format.as_str()));
    parts.push(format!("m_{}", bundle.fit_method.as_str()));

    if bundle.no_optimization {
        parts.push("pass_true".to_string());
    }

    format!("/{}", parts.join("/"))
}

/// Build the full image URL for `bundle`
pub fn image_url(
    delivery: &DeliveryConfig,
    bundle: &DirectiveBundle,
) -> Result<String, DirectiveError> {
    let address = delivery.address.trim().trim_end_matches('/');
    if address.is_empty() {
        return Err(DirectiveError::config("delivery address is empty"));
    }
    if !address.starts_with("http://") && !address.starts_with("https://") {
        return Err(DirectiveError::config(format!(
            "delivery address '{}' must start with http:// or https://",
            address
        )));
    }

    let source = encode_source(&delivery.source)?;

    Ok(format!(
        "{}{}?{}={}",
        address,
        source,
        DIRECTIVE_QUERY_PARAM,
        directive_path(bundle)
    ))
}

/// Percent-encode each path segment, keeping the separators
fn encode_source(source: &str) -> Result<String, DirectiveError> {
    let trimmed = source.trim().trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(DirectiveError::config("delivery source path is empty"));
    }

    let encoded: Vec<String> = trimmed
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();

    Ok(format!("/{}", encoded.join("/")))
}
