mod host;

pub use host::{BrowserElement, BrowserHost};

use limelight_core::{opening_properties, overlay_markup, overlay_path};
use limelight_protocol::{OpeningConfig, OverlayProps};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    // Surface panics in the browser console instead of an opaque trap.
    console_error_panic_hook::set_once();
}

/// Compute the opening rectangle for a target element. `config` is an
/// optional JSON object `{padding?, xOffset?, yOffset?, radius?}` where
/// `radius` is a number or a per-corner record. Returns the opening as
/// JSON with a canonical four-corner `r`.
#[wasm_bindgen]
pub fn get_opening_properties(
    target: &web_sys::Element,
    config: Option<String>,
) -> Result<String, JsError> {
    let config: OpeningConfig = match config {
        Some(json) => serde_json::from_str(&json).map_err(|e| JsError::new(&e.to_string()))?,
        None => OpeningConfig::default(),
    };
    let opening = opening_properties(&BrowserElement::from(target.clone()), &config);
    serde_json::to_string(&opening).map_err(|e| JsError::new(&e.to_string()))
}

/// Build the overlay path for `{width, height, x, y, r}` props (extra
/// fields such as style maps are accepted and ignored), reading the live
/// window size for the outer rectangle.
#[wasm_bindgen]
pub fn make_overlay_path(props: &str) -> Result<String, JsError> {
    let props: OverlayProps =
        serde_json::from_str(props).map_err(|e| JsError::new(&e.to_string()))?;
    let host = BrowserHost::new()?;
    Ok(overlay_path(&props.opening(), &host))
}

/// Run the full pipeline against the live document: resolve `selector`,
/// compute the opening with defaults, and return the `<svg>` fragment.
#[wasm_bindgen]
pub fn get_overlay(selector: &str) -> Result<String, JsError> {
    let host = BrowserHost::new()?;
    overlay_markup(&host, selector).map_err(|e| JsError::new(&e.to_string()))
}
