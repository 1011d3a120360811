use thiserror::Error;

/// Errors returned by the Overpass client and extractor.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Network or TLS failure, or a non-2xx HTTP status from the provider.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The fixed request deadline elapsed before the provider responded.
    #[error("Overpass request timed out")]
    Timeout,

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
