//! Vertical visibility: clip a target's vertical extent to the band its
//! scroll parent leaves visible.

use limelight_protocol::Rect;

/// The vertically visible slice of a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleBand {
    pub y: f64,
    pub height: f64,
}

/// Clip `target` vertically against `scroll_parent`.
///
/// Clipping is vertical only: the target's horizontal extent is never
/// clipped, by design. Without a scroll parent the band is the target's own
/// vertical extent. Height is clamped to 0 when the target sits entirely
/// outside the parent's band.
pub fn visible_band(target: &Rect, scroll_parent: Option<&Rect>) -> VisibleBand {
    let mut top = target.top();
    let mut bottom = target.bottom();

    if let Some(parent) = scroll_parent {
        top = top.max(parent.top());
        bottom = bottom.min(parent.bottom());
    }

    VisibleBand {
        y: top,
        height: (bottom - top).max(0.0),
    }
}
