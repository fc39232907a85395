//! SVG emission: wrap a path into a markup fragment and run the whole
//! selector-to-markup pipeline.

use limelight_protocol::OpeningConfig;

use crate::dom::{ElementLookup, ViewportSource};
use crate::error::OverlayError;
use crate::opening::opening_properties;
use crate::path::overlay_path;

/// Wrap path data in an `<svg>` fragment.
pub fn svg_fragment(path: &str) -> String {
    format!(r#"<svg><path d="{path}" /></svg>"#)
}

/// Resolve `selector` through the host, compute the opening with a default
/// config, and return the complete overlay fragment.
pub fn overlay_markup<H>(host: &H, selector: &str) -> Result<String, OverlayError>
where
    H: ElementLookup + ViewportSource,
{
    let target = host
        .query_selector(selector)
        .ok_or_else(|| OverlayError::ElementNotFound {
            selector: selector.to_owned(),
        })?;
    let opening = opening_properties(&target, &OpeningConfig::default());
    Ok(svg_fragment(&overlay_path(&opening, host)))
}
