//! Reduction of raw Overpass elements into a [`FeatureRecord`].

use landplan_core::{
    Coordinate, FeatureRecord, ASSUMED_PARCEL_AREA_M2, DEFAULT_ROAD_DISTANCE_M,
};

use crate::client::OverpassClient;
use crate::error::OverpassError;
use crate::types::Element;

/// Fetches map data around `origin` and derives the feature record.
///
/// # Errors
///
/// Propagates any [`OverpassError`] from the fetch; never returns a partial
/// or defaulted record on provider failure.
pub async fn extract(
    client: &OverpassClient,
    origin: Coordinate,
    radius_m: u32,
) -> Result<FeatureRecord, OverpassError> {
    let response = client.fetch_around(origin, radius_m).await?;
    let record = reduce_elements(origin, &response.elements);
    tracing::debug!(
        is_empty = record.is_empty,
        amenities = record.amenities,
        road_dist_m = record.road_dist_m,
        land_use = record.land_use.as_deref(),
        "extracted features"
    );
    Ok(record)
}

/// Reduces an element sequence into a complete [`FeatureRecord`].
///
/// Pure and order-sensitive: `land_use` takes the first landuse-tagged way
/// in provider order. `road_dist_m` is the minimum great-circle distance
/// from `origin` to any coordinate-bearing point of a highway-tagged way,
/// falling back to [`DEFAULT_ROAD_DISTANCE_M`] when no such point exists.
#[must_use]
pub fn reduce_elements(origin: Coordinate, elements: &[Element]) -> FeatureRecord {
    let land_use = elements
        .iter()
        .find(|e| e.is_way_with("landuse"))
        .and_then(|e| e.tag("landuse"))
        .map(ToOwned::to_owned);

    let has_buildings = elements.iter().any(|e| e.is_way_with("building"));

    let amenities = u32::try_from(
        elements.iter().filter(|e| e.is_node_with("amenity")).count(),
    )
    .unwrap_or(u32::MAX);

    let road_dist_m = elements
        .iter()
        .filter(|e| e.is_way_with("highway"))
        .flat_map(|way| way.nodes.iter())
        .filter_map(|point| match (point.lat, point.lon) {
            (Some(lat), Some(lon)) => Some(origin.distance_m(&Coordinate::new(lat, lon))),
            _ => None,
        })
        .min_by(f64::total_cmp)
        .unwrap_or(DEFAULT_ROAD_DISTANCE_M);

    FeatureRecord {
        is_empty: !has_buildings,
        land_use,
        area_m2: ASSUMED_PARCEL_AREA_M2,
        amenities,
        road_dist_m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(json: serde_json::Value) -> Element {
        serde_json::from_value(json).expect("test element should deserialize")
    }

    #[test]
    fn zero_elements_yield_vacant_record() {
        let record = reduce_elements(Coordinate::new(51.5, -0.12), &[]);
        assert_eq!(record, FeatureRecord::vacant());
    }

    #[test]
    fn building_way_clears_is_empty() {
        let elements = vec![element(serde_json::json!({
            "type": "way",
            "tags": { "building": "yes" }
        }))];
        let record = reduce_elements(Coordinate::new(51.5, -0.12), &elements);
        assert!(!record.is_empty);
    }

    #[test]
    fn building_tag_on_node_does_not_clear_is_empty() {
        let elements = vec![element(serde_json::json!({
            "type": "node",
            "tags": { "building": "yes" }
        }))];
        let record = reduce_elements(Coordinate::new(51.5, -0.12), &elements);
        assert!(record.is_empty);
    }

    #[test]
    fn land_use_takes_first_way_in_provider_order() {
        let elements = vec![
            element(serde_json::json!({
                "type": "node",
                "tags": { "landuse": "ignored-on-nodes" }
            })),
            element(serde_json::json!({
                "type": "way",
                "tags": { "landuse": "farmland" }
            })),
            element(serde_json::json!({
                "type": "way",
                "tags": { "landuse": "residential" }
            })),
        ];
        let record = reduce_elements(Coordinate::new(51.5, -0.12), &elements);
        assert_eq!(record.land_use.as_deref(), Some("farmland"));
    }

    #[test]
    fn amenities_counts_tagged_nodes_only() {
        let elements = vec![
            element(serde_json::json!({
                "type": "node",
                "tags": { "amenity": "cafe" }
            })),
            element(serde_json::json!({
                "type": "node",
                "tags": { "amenity": "bank" }
            })),
            element(serde_json::json!({
                "type": "way",
                "tags": { "amenity": "parking" }
            })),
            element(serde_json::json!({ "type": "node" })),
        ];
        let record = reduce_elements(Coordinate::new(51.5, -0.12), &elements);
        assert_eq!(record.amenities, 2);
    }

    #[test]
    fn road_dist_is_minimum_over_highway_points() {
        let origin = Coordinate::new(51.5074, -0.1278);
        let near = Coordinate::new(51.5080, -0.1278);
        let far = Coordinate::new(51.5200, -0.1278);
        let elements = vec![element(serde_json::json!({
            "type": "way",
            "tags": { "highway": "residential" },
            "nodes": [
                { "lat": far.lat, "lon": far.lng },
                { "lat": near.lat, "lon": near.lng }
            ]
        }))];
        let record = reduce_elements(origin, &elements);
        let expected = origin.distance_m(&near);
        assert!(
            (record.road_dist_m - expected).abs() < 1e-6,
            "expected {expected}, got {}",
            record.road_dist_m
        );
    }

    #[test]
    fn highway_points_without_coordinates_fall_back_to_default() {
        let elements = vec![element(serde_json::json!({
            "type": "way",
            "tags": { "highway": "residential" },
            "nodes": [ { "lat": 51.5 }, { "lon": -0.12 }, {} ]
        }))];
        let record = reduce_elements(Coordinate::new(51.5, -0.12), &elements);
        assert!((record.road_dist_m - DEFAULT_ROAD_DISTANCE_M).abs() < f64::EPSILON);
    }

    #[test]
    fn non_highway_way_points_are_ignored_for_distance() {
        let elements = vec![element(serde_json::json!({
            "type": "way",
            "tags": { "building": "yes" },
            "nodes": [ { "lat": 51.5001, "lon": -0.12 } ]
        }))];
        let record = reduce_elements(Coordinate::new(51.5, -0.12), &elements);
        assert!((record.road_dist_m - DEFAULT_ROAD_DISTANCE_M).abs() < f64::EPSILON);
    }

    #[test]
    fn area_is_always_the_assumed_constant() {
        let record = reduce_elements(Coordinate::new(51.5, -0.12), &[]);
        assert!((record.area_m2 - ASSUMED_PARCEL_AREA_M2).abs() < f64::EPSILON);
    }
}
