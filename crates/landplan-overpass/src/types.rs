//! Overpass API response types.
//!
//! These model the `[out:json]` wire format: a top-level `elements` array
//! where each entry carries a `type` discriminator, optional `tags`, and —
//! for ways with resolved geometry — an ordered list of constituent points.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level envelope for an Overpass `[out:json]` response.
#[derive(Debug, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Discriminator for the `type` field of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Way,
    Node,
    /// Relations and any future element kinds; carried but never inspected.
    #[serde(other)]
    Other,
}

/// One raw element from the Overpass result set.
///
/// Lives only for the duration of a single request; the extractor reduces
/// the element sequence into a `FeatureRecord` and discards it.
#[derive(Debug, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub nodes: Vec<WayPoint>,
}

/// A constituent point of a way. Coordinates are optional on the wire;
/// points without both components are skipped during distance computation.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WayPoint {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl Element {
    /// Returns the tag value for `key`, if present.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// True if this element is a way carrying the given tag key.
    #[must_use]
    pub fn is_way_with(&self, key: &str) -> bool {
        self.element_type == ElementType::Way && self.tags.contains_key(key)
    }

    /// True if this element is a node carrying the given tag key.
    #[must_use]
    pub fn is_node_with(&self, key: &str) -> bool {
        self.element_type == ElementType::Node && self.tags.contains_key(key)
    }
}
