use serde::{Deserialize, Serialize};

use crate::radius::{CornerRadii, Radius};

/// Input knobs for the opening computation. All fields default to 0.
///
/// `padding` expands the opening symmetrically on all sides; the offsets
/// translate its position only, never its size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpeningConfig {
    pub padding: f64,
    pub x_offset: f64,
    pub y_offset: f64,
    pub radius: Radius,
}

/// The derived opening rectangle: a padded, offset rect with a canonical
/// per-corner radius. Ephemeral — recomputed on every call, never cached.
///
/// Serializes the radius under the wire name `r`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "r")]
    pub radius: CornerRadii,
}

/// The payload a rendering host hands back when it asks for a path: the
/// five numeric opening fields plus two style maps (outer container and
/// path element).
///
/// `r` accepts either wire shape (bare number or per-corner record); `x`,
/// `y`, and `r` default to 0 when absent. The style maps never influence
/// the path — hosts memoize path construction on [`OverlayProps::opening`],
/// which covers exactly the five numeric fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlayProps {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub r: Radius,
    #[serde(default)]
    pub styles: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub pstyles: serde_json::Map<String, serde_json::Value>,
}

impl OverlayProps {
    /// The memoization key: the opening these props describe, with the
    /// radius canonicalized. Two props with equal openings produce the
    /// same path regardless of their style maps.
    pub fn opening(&self) -> Opening {
        Opening {
            width: self.width,
            height: self.height,
            x: self.x,
            y: self.y,
            radius: self.r.canonical(),
        }
    }
}
