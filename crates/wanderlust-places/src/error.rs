use thiserror::Error;

/// Errors returned by the places provider transport.
///
/// None of these escape [`crate::PlacesService`]; the service turns them into
/// mock data or an absent result depending on the operation.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network, TLS, timeout or non-2xx failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a `status` other than `OK` / `ZERO_RESULTS`.
    #[error("provider returned status {status}: {message}")]
    ProviderStatus { status: String, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot be parsed or cannot carry a path.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
