//! A synthetic host: an in-memory node tree plus a selector table and a
//! fixed viewport. Implements every capability trait, so the full pipeline
//! runs against it in tests and headless environments.

use std::collections::HashMap;
use std::rc::Rc;

use limelight_protocol::{Rect, Viewport};

use crate::dom::{ElementHandle, ElementLookup, Overflow, ScrollExtent, ViewportSource};

/// A node in the synthetic tree. Cloning copies the `Rc` handle; children
/// keep their parent alive, never the reverse.
#[derive(Clone)]
pub struct SyntheticElement(Rc<NodeData>);

struct NodeData {
    rect: Rect,
    overflow_y: Option<Overflow>,
    scroll_extent: Option<ScrollExtent>,
    parent: Option<SyntheticElement>,
}

impl SyntheticElement {
    /// An element with explicit overflow and scroll extent.
    pub fn element(
        rect: Rect,
        overflow_y: Overflow,
        scroll_extent: ScrollExtent,
        parent: Option<&SyntheticElement>,
    ) -> Self {
        Self(Rc::new(NodeData {
            rect,
            overflow_y: Some(overflow_y),
            scroll_extent: Some(scroll_extent),
            parent: parent.cloned(),
        }))
    }

    /// An ordinary non-scrolling element: overflow `visible`, content
    /// exactly filling its box.
    pub fn block(rect: Rect, parent: Option<&SyntheticElement>) -> Self {
        Self::element(
            rect,
            Overflow::Visible,
            ScrollExtent {
                scroll_height: rect.height,
                client_height: rect.height,
            },
            parent,
        )
    }

    /// A node without computed style or layout box (a document or text
    /// node). Reports no overflow and no scroll extent, and a zero rect.
    pub fn opaque(parent: Option<&SyntheticElement>) -> Self {
        Self(Rc::new(NodeData {
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            overflow_y: None,
            scroll_extent: None,
            parent: parent.cloned(),
        }))
    }

    /// Identity comparison: whether two handles point at the same node.
    pub fn ptr_eq(&self, other: &SyntheticElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ElementHandle for SyntheticElement {
    fn bounding_rect(&self) -> Rect {
        self.0.rect
    }

    fn overflow_y(&self) -> Option<Overflow> {
        self.0.overflow_y
    }

    fn scroll_extent(&self) -> Option<ScrollExtent> {
        self.0.scroll_extent
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent.clone()
    }
}

/// Selector table plus fixed viewport.
pub struct SyntheticHost {
    viewport: Viewport,
    elements: HashMap<String, SyntheticElement>,
}

impl SyntheticHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: HashMap::new(),
        }
    }

    /// Register `element` under `selector`. Lookup is exact-match on the
    /// selector string; there is no selector engine here.
    pub fn insert(&mut self, selector: impl Into<String>, element: SyntheticElement) {
        self.elements.insert(selector.into(), element);
    }
}

impl ElementLookup for SyntheticHost {
    type Element = SyntheticElement;

    fn query_selector(&self, selector: &str) -> Option<SyntheticElement> {
        self.elements.get(selector).cloned()
    }
}

impl ViewportSource for SyntheticHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
