//! Host capability traits.
//!
//! The geometry pipeline never touches a live document directly. Everything
//! it needs from the host — bounding rects, computed overflow, scroll
//! extents, parent links, selector lookup, viewport size — comes through
//! these traits, implemented by a browser binding in production and by
//! [`crate::synthetic`] in tests and headless use.

use limelight_protocol::{Rect, Viewport};

/// Computed vertical overflow of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    /// Parse a computed `overflow-y` value. Unrecognized values parse as
    /// `Auto`, which keeps them on the scrollable side of the predicate.
    pub fn from_css(value: &str) -> Self {
        match value {
            "visible" => Overflow::Visible,
            "hidden" => Overflow::Hidden,
            "clip" => Overflow::Clip,
            "scroll" => Overflow::Scroll,
            _ => Overflow::Auto,
        }
    }

    /// Whether this overflow lets the node act as a scroll clip. Exactly
    /// `hidden` and `visible` are excluded, so `clip` counts as scrollable —
    /// a quirk of the established semantics, kept deliberately.
    pub fn is_scrollable(self) -> bool {
        !matches!(self, Overflow::Hidden | Overflow::Visible)
    }
}

/// Content height vs. visible height of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollExtent {
    pub scroll_height: f64,
    pub client_height: f64,
}

/// Read-only handle to a node in the host's tree.
///
/// Handles are cheap references (`Clone` is a pointer copy in both the
/// browser binding and the synthetic tree); no query transfers ownership
/// or mutates the tree.
pub trait ElementHandle: Clone {
    /// The node's bounding rect in viewport coordinates. A detached or
    /// zero-layout node reports a zero-size rect rather than failing.
    fn bounding_rect(&self) -> Rect;

    /// Computed vertical overflow, or `None` for nodes without computed
    /// style (documents, text nodes).
    fn overflow_y(&self) -> Option<Overflow>;

    /// Scroll and client heights, or `None` for nodes without a layout box.
    fn scroll_extent(&self) -> Option<ScrollExtent>;

    /// The parent node, or `None` at the root.
    fn parent(&self) -> Option<Self>;
}

/// Selector-based element lookup.
pub trait ElementLookup {
    type Element: ElementHandle;

    /// The first element matching `selector`, or `None` when nothing
    /// matches (including selectors the host rejects as unparseable).
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
}

/// Live viewport size.
///
/// Injected rather than read from an ambient global so the path builder
/// always reflects the size at path-build time and stays testable with
/// synthetic values.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}
