//! HTTP client for the Overpass API.
//!
//! Wraps `reqwest` with Overpass-specific error handling and typed response
//! deserialization. Timeouts are surfaced as [`OverpassError::Timeout`] so
//! callers can distinguish a slow provider from a broken one.

use std::time::Duration;

use landplan_core::Coordinate;

use crate::error::OverpassError;
use crate::types::OverpassResponse;

/// Client for the Overpass API interpreter endpoint.
///
/// Use [`OverpassClient::new`] for production or point `base_url` at a mock
/// server in tests.
pub struct OverpassClient {
    client: reqwest::Client,
    base_url: String,
}

impl OverpassClient {
    /// Creates a new client for the given interpreter endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, OverpassError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }

    /// Fetches all tagged ways and nodes of interest within `radius_m`
    /// meters of `origin`, with way geometry resolved.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::Timeout`] if the deadline elapses.
    /// - [`OverpassError::Http`] on network failure or a non-2xx status.
    /// - [`OverpassError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_around(
        &self,
        origin: Coordinate,
        radius_m: u32,
    ) -> Result<OverpassResponse, OverpassError> {
        let query = build_query(origin, radius_m);
        tracing::debug!(lat = origin.lat, lng = origin.lng, radius_m, "querying overpass");

        let response = self
            .client
            .post(&self.base_url)
            .body(query)
            .send()
            .await
            .map_err(classify)?;
        let response = response.error_for_status().map_err(classify)?;
        let body = response.text().await.map_err(classify)?;

        serde_json::from_str(&body).map_err(|e| OverpassError::Deserialize {
            context: self.base_url.clone(),
            source: e,
        })
    }
}

/// Maps reqwest timeout errors to the dedicated `Timeout` variant.
fn classify(error: reqwest::Error) -> OverpassError {
    if error.is_timeout() {
        OverpassError::Timeout
    } else {
        OverpassError::Http(error)
    }
}

/// Builds the Overpass QL query for one extraction.
///
/// Requests building, landuse, and highway ways plus amenity nodes around
/// the origin, then recurses (`>`) so way geometry resolves to coordinates.
fn build_query(origin: Coordinate, radius_m: u32) -> String {
    let Coordinate { lat, lng } = origin;
    format!(
        "[out:json];\n\
         (\n\
         way[building](around:{radius_m},{lat},{lng});\n\
         way[landuse](around:{radius_m},{lat},{lng});\n\
         way[highway](around:{radius_m},{lat},{lng});\n\
         node[amenity](around:{radius_m},{lat},{lng});\n\
         );\n\
         out body;\n\
         >;\n\
         out skel qt;"
    )
}
