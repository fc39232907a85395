pub mod dom;
pub mod error;
pub mod opening;
pub mod path;
pub mod scroll;
pub mod svg;
pub mod synthetic;
pub mod visible;

pub use dom::{ElementHandle, ElementLookup, Overflow, ScrollExtent, ViewportSource};
pub use error::OverlayError;
pub use opening::opening_properties;
pub use path::overlay_path;
pub use svg::overlay_markup;
