use serde::{Deserialize, Serialize};

/// Corner radius as it appears on the wire: either a single number for all
/// four corners or a per-corner record with missing corners defaulting to 0.
///
/// Canonicalize with [`Radius::canonical`] exactly once at the entry
/// boundary; everything past that point works on [`CornerRadii`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Radius {
    Uniform(f64),
    PerCorner(CornerRadii),
}

impl Radius {
    /// Expand to the four-field record. Negative values violate the radius
    /// invariant and are clamped to 0 here; no upper bound is applied, so a
    /// radius larger than the rectangle's extent passes through untouched.
    pub fn canonical(&self) -> CornerRadii {
        let radii = match *self {
            Radius::Uniform(r) => CornerRadii::uniform(r),
            Radius::PerCorner(radii) => radii,
        };
        CornerRadii {
            top_left: radii.top_left.max(0.0),
            top_right: radii.top_right.max(0.0),
            bottom_right: radii.bottom_right.max(0.0),
            bottom_left: radii.bottom_left.max(0.0),
        }
    }
}

impl Default for Radius {
    fn default() -> Self {
        Radius::Uniform(0.0)
    }
}

impl From<f64> for Radius {
    fn from(r: f64) -> Self {
        Radius::Uniform(r)
    }
}

impl From<CornerRadii> for Radius {
    fn from(radii: CornerRadii) -> Self {
        Radius::PerCorner(radii)
    }
}

/// The canonical four-corner radius record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    #[serde(default)]
    pub top_left: f64,
    #[serde(default)]
    pub top_right: f64,
    #[serde(default)]
    pub bottom_right: f64,
    #[serde(default)]
    pub bottom_left: f64,
}

impl CornerRadii {
    pub fn uniform(r: f64) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_expands_to_all_corners() {
        let radii = Radius::Uniform(8.0).canonical();
        assert_eq!(radii, CornerRadii::uniform(8.0));
    }

    #[test]
    fn partial_record_defaults_missing_corners_to_zero() {
        let radius: Radius = serde_json::from_str(r#"{"topLeft": 4, "bottomRight": 2}"#)
            .expect("partial record deserializes");
        assert_eq!(
            radius.canonical(),
            CornerRadii {
                top_left: 4.0,
                top_right: 0.0,
                bottom_right: 2.0,
                bottom_left: 0.0,
            }
        );
    }

    #[test]
    fn bare_number_parses_as_uniform() {
        let radius: Radius = serde_json::from_str("8").expect("bare number deserializes");
        assert_eq!(radius, Radius::Uniform(8.0));
        assert_eq!(radius.canonical(), CornerRadii::uniform(8.0));
    }

    #[test]
    fn negative_values_clamp_to_zero() {
        let radii = Radius::PerCorner(CornerRadii {
            top_left: -3.0,
            top_right: 5.0,
            bottom_right: -0.5,
            bottom_left: 0.0,
        })
        .canonical();
        assert_eq!(radii.top_left, 0.0);
        assert_eq!(radii.top_right, 5.0);
        assert_eq!(radii.bottom_right, 0.0);
        assert_eq!(radii.bottom_left, 0.0);
    }

    #[test]
    fn oversized_radius_passes_through() {
        // No bound against the rectangle's extent; overlapping arcs are
        // accepted behavior.
        let radii = Radius::Uniform(10_000.0).canonical();
        assert_eq!(radii.top_left, 10_000.0);
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let json = serde_json::to_string(&CornerRadii::uniform(1.0)).expect("radii serialize");
        assert_eq!(
            json,
            r#"{"topLeft":1.0,"topRight":1.0,"bottomRight":1.0,"bottomLeft":1.0}"#
        );
    }

    #[test]
    fn malformed_radius_is_a_parse_error() {
        assert!(serde_json::from_str::<Radius>("garbage").is_err());
        assert!(serde_json::from_str::<Radius>(r#""8""#).is_err());
    }
}
