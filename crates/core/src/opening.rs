//! Opening construction: the resolver and calculator composed with the
//! padding/offset arithmetic.

use limelight_protocol::{Opening, OpeningConfig};

use crate::dom::ElementHandle;
use crate::scroll::scroll_parent;
use crate::visible::visible_band;

/// Compute the opening rectangle for `target`.
///
/// The vertical extent is the visible band under the target's scroll
/// parent; the horizontal extent is the target's own, unclipped. Padding
/// grows the opening on all sides, the offsets move it, and the radius is
/// canonicalized here — downstream path math only ever sees the four-field
/// record.
///
/// Never fails: a detached target reads as a zero-size rect and yields a
/// zero-size opening.
pub fn opening_properties<E: ElementHandle>(target: &E, config: &OpeningConfig) -> Opening {
    let clip = scroll_parent(target).map(|parent| parent.bounding_rect());
    let rect = target.bounding_rect();
    let band = visible_band(&rect, clip.as_ref());

    Opening {
        width: rect.width + config.padding * 2.0,
        height: band.height + config.padding * 2.0,
        x: rect.x + config.x_offset - config.padding,
        y: band.y + config.y_offset - config.padding,
        radius: config.radius.canonical(),
    }
}
