//! Live-browser implementations of the host capability traits.

use limelight_core::dom::{ElementHandle, ElementLookup, Overflow, ScrollExtent, ViewportSource};
use limelight_protocol::{Rect, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// An `Element` wrapped as a geometry handle. Cloning clones the JS
/// reference, not the node.
#[derive(Clone)]
pub struct BrowserElement(web_sys::Element);

impl From<web_sys::Element> for BrowserElement {
    fn from(element: web_sys::Element) -> Self {
        Self(element)
    }
}

impl ElementHandle for BrowserElement {
    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
    }

    fn overflow_y(&self) -> Option<Overflow> {
        // Computed style applies to HTML elements only, so e.g. an SVG
        // node reports None and stays on the scrollable side of the
        // predicate.
        self.0.dyn_ref::<web_sys::HtmlElement>()?;
        let style = web_sys::window()?.get_computed_style(&self.0).ok()??;
        let value = style.get_property_value("overflow-y").ok()?;
        Some(Overflow::from_css(&value))
    }

    fn scroll_extent(&self) -> Option<ScrollExtent> {
        Some(ScrollExtent {
            scroll_height: f64::from(self.0.scroll_height()),
            client_height: f64::from(self.0.client_height()),
        })
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(BrowserElement)
    }
}

/// The live window and document as a lookup-plus-viewport host.
pub struct BrowserHost {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl BrowserHost {
    pub fn new() -> Result<Self, JsError> {
        let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsError::new("no document"))?;
        Ok(Self { window, document })
    }
}

impl ElementLookup for BrowserHost {
    type Element = BrowserElement;

    fn query_selector(&self, selector: &str) -> Option<BrowserElement> {
        // A selector the engine rejects answers None, same as no match.
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(BrowserElement::from)
    }
}

impl ViewportSource for BrowserHost {
    fn viewport(&self) -> Viewport {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Viewport::new(width, height)
    }
}
