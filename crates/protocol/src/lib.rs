pub mod opening;
pub mod radius;
pub mod types;

pub use opening::{Opening, OpeningConfig, OverlayProps};
pub use radius::{CornerRadii, Radius};
pub use types::{Rect, Viewport};
