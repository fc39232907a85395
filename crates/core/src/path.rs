//! Overlay path construction: a viewport-sized rectangle with a
//! rounded-rectangle hole, encoded as SVG path data.

use limelight_protocol::{CornerRadii, Opening, Viewport};

use crate::dom::ViewportSource;

/// Build the overlay path for `opening`.
///
/// The viewport size is read from `viewport` at call time, not captured
/// when the opening was computed — the outer rectangle always matches the
/// surface being covered right now.
///
/// Two subpaths of opposite winding: the outer rectangle traces the full
/// viewport clockwise from its bottom-right corner; the inner rounded
/// rectangle runs counter-clockwise from `(x + top_left, y)`. Under the
/// renderer's fill rule their overlap is unfilled, which cuts the hole.
///
/// Never fails. A zero corner radius degenerates its arc to a sharp
/// right-angle turn; a zero-size opening leaves a point hole; radii larger
/// than the rectangle produce overlapping arcs and are emitted as-is.
pub fn overlay_path<V: ViewportSource>(opening: &Opening, viewport: &V) -> String {
    let Viewport {
        width: w,
        height: h,
    } = viewport.viewport();
    let Opening {
        width,
        height,
        x,
        y,
        radius,
    } = *opening;
    let CornerRadii {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    } = radius;

    let mut d = String::with_capacity(160);
    // Outer subpath: bottom-right, across to the left edge, up, across,
    // back down. Clockwise.
    d.push_str(&format!("M{w},{h}H0V0H{w}V{h}Z"));
    // Inner subpath, counter-clockwise: top-left arc, left edge,
    // bottom-left arc, bottom edge, bottom-right arc, right edge,
    // top-right arc, implicit top edge via close.
    d.push_str(&format!("M{},{y}", x + tl));
    d.push_str(&format!("a{tl},{tl},0,0,0-{tl},{tl}"));
    d.push_str(&format!("V{}", height + y - bl));
    d.push_str(&format!("a{bl},{bl},0,0,0,{bl},{bl}"));
    d.push_str(&format!("H{}", width + x - br));
    d.push_str(&format!("a{br},{br},0,0,0,{br}-{br}"));
    d.push_str(&format!("V{}", y + tr));
    d.push_str(&format!("a{tr},{tr},0,0,0-{tr}-{tr}"));
    d.push('Z');
    d
}
