//! HTTP client for the Google Places and Geocoding web services.
//!
//! Wraps `reqwest` with API key management, a bounded per-request timeout and
//! typed response deserialization. Every endpoint checks the `"status"` field
//! of the JSON envelope and surfaces provider-level failures as
//! [`PlacesError::ProviderStatus`]. Nothing here retries: one call, one
//! attempt.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{
    GeocodeResponse, PlaceDetailsResponse, PlacesListResponse, RawGeocode, RawPlace,
};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Fields requested from the details endpoint.
pub const DETAIL_FIELDS: &[&str] = &[
    "place_id",
    "name",
    "formatted_address",
    "geometry",
    "photos",
    "rating",
    "reviews",
    "types",
    "website",
    "formatted_phone_number",
    "price_level",
];

/// Place types a destination text search is restricted to.
pub const SEARCH_PLACE_TYPES: &str = "tourist_attraction|locality|country";

/// Client for the Places / Geocoding REST API.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Google Maps API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a usable URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent("wanderlust/0.1 (travel-planner)")
            .build()?;

        // Exactly one trailing slash so `Url::join` appends endpoint paths
        // instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(PlacesError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Base URL without the trailing slash, as used for photo links.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Free-text place search (`place/textsearch/json`).
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ProviderStatus`] if the provider returns a failure status.
    /// - [`PlacesError::Http`] on network failure, timeout or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn text_search(
        &self,
        query: &str,
        place_type: &str,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        let url = self.build_url(
            "place/textsearch/json",
            &[("query", query), ("type", place_type)],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        let envelope: PlacesListResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("textsearch(query={query})"),
                source: e,
            })?;

        Ok(envelope.results)
    }

    /// Place details (`place/details/json`) for the given field set.
    ///
    /// Returns `Ok(None)` when the envelope is OK but carries no `result`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ProviderStatus`] if the provider returns a failure
    ///   status, including `NOT_FOUND` for unknown ids.
    /// - [`PlacesError::Http`] on network failure, timeout or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<Option<RawPlace>, PlacesError> {
        let fields = fields.join(",");
        let url = self.build_url(
            "place/details/json",
            &[("place_id", place_id), ("fields", &fields)],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        let envelope: PlaceDetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        Ok(envelope.result)
    }

    /// Places around a point (`place/nearbysearch/json`). `radius` is in
    /// metres and, like `place_type`, is forwarded unchanged.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ProviderStatus`] if the provider returns a failure status.
    /// - [`PlacesError::Http`] on network failure, timeout or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn nearby_search(
        &self,
        lat: f64,
        lng: f64,
        radius: u32,
        place_type: &str,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        let location = format!("{lat},{lng}");
        let radius = radius.to_string();
        let url = self.build_url(
            "place/nearbysearch/json",
            &[
                ("location", &location),
                ("radius", &radius),
                ("type", place_type),
            ],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        let envelope: PlacesListResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("nearbysearch(location={location})"),
                source: e,
            })?;

        Ok(envelope.results)
    }

    /// Forward geocoding (`geocode/json`).
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ProviderStatus`] if the provider returns a failure status.
    /// - [`PlacesError::Http`] on network failure, timeout or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, address: &str) -> Result<Vec<RawGeocode>, PlacesError> {
        let url = self.build_url("geocode/json", &[("address", address)])?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        let envelope: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("geocode(address={address})"),
                source: e,
            })?;

        Ok(envelope.results)
    }

    /// Builds the full request URL with percent-encoded query parameters.
    ///
    /// The API key is always appended last as `key`.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure, timeout or a non-2xx
    /// status. Returns [`PlacesError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        // The query string carries the API key; only the path is logged.
        tracing::debug!(endpoint = url.path(), "places provider request");
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field. `OK` and `ZERO_RESULTS` pass;
    /// anything else is an error carrying the provider's `error_message`.
    fn check_status(body: &serde_json::Value) -> Result<(), PlacesError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("UNKNOWN");
        if matches!(status, "OK" | "ZERO_RESULTS") {
            return Ok(());
        }
        let message = body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("no error message")
            .to_string();
        Err(PlacesError::ProviderStatus {
            status: status.to_string(),
            message,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
