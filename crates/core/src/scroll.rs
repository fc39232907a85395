//! Scroll-parent resolution.

use crate::dom::{ElementHandle, Overflow};

/// Find the nearest scroll-clipping node, starting at `target` itself and
/// climbing parent links. Returns `None` once the chain is exhausted —
/// this walk never fails.
///
/// The walk is an explicit loop so stack depth never couples to tree
/// depth.
pub fn scroll_parent<E: ElementHandle>(target: &E) -> Option<E> {
    let mut node = Some(target.clone());
    while let Some(current) = node {
        if is_scroll_clipping(&current) {
            return Some(current);
        }
        node = current.parent();
    }
    None
}

/// A node clips scroll when its vertical overflow is neither `hidden` nor
/// `visible` AND its content height reaches its visible height. Nodes
/// without computed style pass the overflow half (there is no `hidden` or
/// `visible` to exclude them); nodes without a scroll extent never clip.
fn is_scroll_clipping<E: ElementHandle>(node: &E) -> bool {
    let scrollable = node.overflow_y().is_none_or(Overflow::is_scrollable);
    let Some(extent) = node.scroll_extent() else {
        return false;
    };
    scrollable && extent.scroll_height >= extent.client_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ScrollExtent;
    use crate::synthetic::SyntheticElement;
    use limelight_protocol::Rect;

    fn extent(scroll_height: f64, client_height: f64) -> ScrollExtent {
        ScrollExtent {
            scroll_height,
            client_height,
        }
    }

    #[test]
    fn finds_nearest_scrolling_ancestor() {
        let root = SyntheticElement::opaque(None);
        let outer = SyntheticElement::element(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Overflow::Auto,
            extent(2000.0, 600.0),
            Some(&root),
        );
        let inner = SyntheticElement::element(
            Rect::new(0.0, 100.0, 400.0, 200.0),
            Overflow::Scroll,
            extent(800.0, 200.0),
            Some(&outer),
        );
        let target = SyntheticElement::block(Rect::new(20.0, 150.0, 100.0, 40.0), Some(&inner));

        let found = scroll_parent(&target);
        assert!(found.is_some_and(|p| p.ptr_eq(&inner)), "nearest wins");
    }

    #[test]
    fn none_when_chain_is_hidden_or_visible() {
        let root = SyntheticElement::opaque(None);
        let hidden = SyntheticElement::element(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Overflow::Hidden,
            extent(2000.0, 600.0),
            Some(&root),
        );
        let target = SyntheticElement::block(Rect::new(0.0, 0.0, 100.0, 40.0), Some(&hidden));

        assert!(scroll_parent(&target).is_none());
    }

    #[test]
    fn none_when_content_never_reaches_client_height() {
        let root = SyntheticElement::opaque(None);
        let short = SyntheticElement::element(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Overflow::Auto,
            extent(300.0, 600.0),
            Some(&root),
        );
        let target = SyntheticElement::block(Rect::new(0.0, 0.0, 100.0, 40.0), Some(&short));

        assert!(scroll_parent(&target).is_none());
    }

    #[test]
    fn self_scrolling_target_is_its_own_clip() {
        let root = SyntheticElement::opaque(None);
        let outer = SyntheticElement::element(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Overflow::Auto,
            extent(2000.0, 600.0),
            Some(&root),
        );
        let target = SyntheticElement::element(
            Rect::new(0.0, 0.0, 100.0, 40.0),
            Overflow::Scroll,
            extent(400.0, 40.0),
            Some(&outer),
        );

        let found = scroll_parent(&target);
        assert!(found.is_some_and(|p| p.ptr_eq(&target)));
    }

    #[test]
    fn clip_overflow_counts_as_scrollable() {
        let root = SyntheticElement::opaque(None);
        let clipped = SyntheticElement::element(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Overflow::Clip,
            extent(600.0, 600.0),
            Some(&root),
        );
        let target = SyntheticElement::block(Rect::new(0.0, 0.0, 100.0, 40.0), Some(&clipped));

        let found = scroll_parent(&target);
        assert!(found.is_some_and(|p| p.ptr_eq(&clipped)));
    }

    #[test]
    fn opaque_root_terminates_the_walk() {
        let root = SyntheticElement::opaque(None);
        let target = SyntheticElement::block(Rect::new(0.0, 0.0, 100.0, 40.0), Some(&root));
        assert!(scroll_parent(&target).is_none());
    }

    #[test]
    fn deep_chains_resolve_without_deep_stacks() {
        let mut node = SyntheticElement::opaque(None);
        for i in 0..10_000 {
            node = SyntheticElement::block(
                Rect::new(0.0, f64::from(i), 800.0, 600.0),
                Some(&node),
            );
        }
        assert!(scroll_parent(&node).is_none());
    }
}
