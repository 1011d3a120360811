//! The fixed-shape feature summary derived from one map query.

use serde::{Deserialize, Serialize};

/// Applied when no highway-tagged way with resolvable geometry is found.
pub const DEFAULT_ROAD_DISTANCE_M: f64 = 300.0;

/// Placeholder parcel area. The current extractor does not compute polygon
/// area from way geometry; this constant stands in for it, which makes the
/// area-based rule in the engine unreachable today. Known gap, kept on
/// purpose — see DESIGN.md.
pub const ASSUMED_PARCEL_AREA_M2: f64 = 1_500.0;

/// Derived summary of the region around a query coordinate.
///
/// Every field is always populated; extraction either yields a complete
/// record or fails outright. The only locally-recovered case is
/// `road_dist_m`, which falls back to [`DEFAULT_ROAD_DISTANCE_M`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// True iff no way in the region carries a building tag.
    pub is_empty: bool,
    /// Landuse tag value of the first way carrying one, in provider order.
    pub land_use: Option<String>,
    /// Parcel area in square meters. Currently always [`ASSUMED_PARCEL_AREA_M2`].
    pub area_m2: f64,
    /// Number of amenity-tagged nodes in the region.
    pub amenities: u32,
    /// Distance in meters from the query coordinate to the nearest point of
    /// any highway-tagged way.
    pub road_dist_m: f64,
}

impl FeatureRecord {
    /// The record produced for a region with no elements at all.
    #[must_use]
    pub fn vacant() -> Self {
        Self {
            is_empty: true,
            land_use: None,
            area_m2: ASSUMED_PARCEL_AREA_M2,
            amenities: 0,
            road_dist_m: DEFAULT_ROAD_DISTANCE_M,
        }
    }
}
