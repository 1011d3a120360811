//! Overpass API client and feature extraction.
//!
//! Queries OpenStreetMap data around a coordinate via the Overpass API and
//! reduces the raw elements into a [`landplan_core::FeatureRecord`]. One
//! outbound call per extraction; no caching, no retries — a failed call
//! surfaces immediately as an [`OverpassError`].

mod client;
mod error;
pub mod extract;
mod types;

pub use client::OverpassClient;
pub use error::OverpassError;
pub use extract::extract;
pub use types::{Element, ElementType, OverpassResponse, WayPoint};
