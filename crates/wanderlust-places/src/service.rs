//! The place normalizer: live provider lookups with a deterministic mock
//! fallback.
//!
//! Fallback policy per operation:
//!
//! | operation                | unconfigured      | provider failure |
//! |--------------------------|-------------------|------------------|
//! | [`PlacesService::search`]               | filtered mocks    | filtered mocks   |
//! | [`PlacesService::popular_destinations`] | all mocks         | all mocks        |
//! | [`PlacesService::find_nearby`]          | mock nearby list  | mock nearby list |
//! | [`PlacesService::get_details`]          | canned detail     | `None`           |
//! | [`PlacesService::geocode`]              | mock coordinate   | `None`           |
//!
//! No operation returns an error; failures are logged and absorbed here.

use wanderlust_core::AppConfig;

use crate::client::{PlacesClient, DEFAULT_BASE_URL, DETAIL_FIELDS, SEARCH_PLACE_TYPES};
use crate::error::PlacesError;
use crate::mock;
use crate::model::{GeocodeResult, NearbyPlace, PlaceDetail, PlaceRecord};
use crate::normalize::{
    normalize_details, normalize_geocode, normalize_nearby, normalize_place, PhotoSource,
};

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_NEARBY_TYPE: &str = "tourist_attraction";
pub const DEFAULT_NEARBY_RADIUS: u32 = 5000;
pub const POPULAR_QUERY: &str = "popular tourist destinations";

/// Values shipped in sample `.env` files that must never reach the provider.
const PLACEHOLDER_KEYS: &[&str] = &[
    "changeme",
    "change-me",
    "placeholder",
    "your_api_key",
    "your-api-key",
    "your_google_maps_api_key",
    "your-google-maps-api-key",
    "xxx",
];

/// Returns `true` for blank keys and well-known sample values.
#[must_use]
pub fn is_placeholder_key(key: &str) -> bool {
    let key = key.trim().to_ascii_lowercase();
    key.is_empty()
        || PLACEHOLDER_KEYS.contains(&key.as_str())
        || (key.starts_with("your") && key.ends_with("key"))
}

/// Provider settings, built once per process.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ProviderConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.google_maps_api_key.clone(),
            base_url: config.places_base_url.clone(),
            timeout_secs: config.places_timeout_secs,
        }
    }

    /// The API key, unless it is missing or a placeholder.
    #[must_use]
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !is_placeholder_key(k))
    }
}

/// Normalizes provider place data, or serves mocks when it cannot.
///
/// Holds no mutable state; share it across tasks behind an `Arc`.
pub struct PlacesService {
    client: Option<PlacesClient>,
}

impl PlacesService {
    /// Builds the service. Without a usable key the instance stays in mock
    /// mode for its whole lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError`] if a key is configured but the HTTP client or
    /// base URL cannot be set up.
    pub fn new(config: &ProviderConfig) -> Result<Self, PlacesError> {
        let Some(api_key) = config.usable_api_key() else {
            tracing::info!("no usable Google Maps API key configured; serving mock place data");
            return Ok(Self::mock());
        };

        let client = PlacesClient::with_base_url(api_key, config.timeout_secs, &config.base_url)?;
        tracing::info!(
            base_url = client.base_url(),
            timeout_secs = config.timeout_secs,
            "places provider enabled"
        );
        Ok(Self {
            client: Some(client),
        })
    }

    /// A service that never contacts the provider.
    #[must_use]
    pub fn mock() -> Self {
        Self { client: None }
    }

    /// `true` when a provider is configured.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.client.is_some()
    }

    /// Destination search by free text, capped at `limit` results.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<PlaceRecord> {
        let Some(client) = &self.client else {
            return truncate(mock::destinations(query), limit);
        };

        match client.text_search(query, SEARCH_PLACE_TYPES).await {
            Ok(raw) => {
                let photos = photo_source(client);
                let records: Vec<PlaceRecord> = raw
                    .iter()
                    .filter_map(|p| normalize_place(p, photos))
                    .take(limit)
                    .collect();
                tracing::debug!(query, count = records.len(), "destination search");
                records
            }
            Err(e) => {
                tracing::warn!(error = %e, query, "destination search failed; serving mock data");
                truncate(mock::destinations(query), limit)
            }
        }
    }

    /// Popular destinations for the landing page.
    ///
    /// Unlike [`Self::search`], the mock fallback is unfiltered: the fixed
    /// query never matches a mock name.
    pub async fn popular_destinations(&self, limit: usize) -> Vec<PlaceRecord> {
        let Some(client) = &self.client else {
            return truncate(mock::destinations(""), limit);
        };

        match client.text_search(POPULAR_QUERY, SEARCH_PLACE_TYPES).await {
            Ok(raw) => {
                let photos = photo_source(client);
                raw.iter()
                    .filter_map(|p| normalize_place(p, photos))
                    .take(limit)
                    .collect()
            }
            Err(e) => {
                tracing::warn!(error = %e, "popular destinations failed; serving mock data");
                truncate(mock::destinations(""), limit)
            }
        }
    }

    /// Full detail for one place.
    ///
    /// Mock mode always answers. In live mode any provider failure, including
    /// an unknown id, yields `None`.
    pub async fn get_details(&self, place_id: &str) -> Option<PlaceDetail> {
        let Some(client) = &self.client else {
            return Some(mock::place_details(place_id));
        };

        match client.place_details(place_id, DETAIL_FIELDS).await {
            Ok(Some(raw)) => Some(normalize_details(&raw, place_id, photo_source(client))),
            Ok(None) => {
                tracing::debug!(place_id, "place details returned no result");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, place_id, "place details failed");
                None
            }
        }
    }

    /// Places of `place_type` within `radius` metres of a point.
    pub async fn find_nearby(
        &self,
        lat: f64,
        lng: f64,
        place_type: &str,
        radius: u32,
    ) -> Vec<NearbyPlace> {
        let Some(client) = &self.client else {
            return mock::nearby_places();
        };

        match client.nearby_search(lat, lng, radius, place_type).await {
            Ok(raw) => {
                let photos = photo_source(client);
                let places: Vec<NearbyPlace> = raw
                    .iter()
                    .filter_map(|p| normalize_nearby(p, photos))
                    .collect();
                tracing::debug!(lat, lng, place_type, radius, count = places.len(), "nearby search");
                places
            }
            Err(e) => {
                tracing::warn!(error = %e, lat, lng, "nearby search failed; serving mock data");
                mock::nearby_places()
            }
        }
    }

    /// Forward geocode, first result only.
    ///
    /// Mock mode returns a fixed coordinate. In live mode a provider failure
    /// or an empty result list yields `None`.
    pub async fn geocode(&self, address: &str) -> Option<GeocodeResult> {
        let Some(client) = &self.client else {
            return Some(mock::geocode(address));
        };

        match client.geocode(address).await {
            Ok(results) => results
                .first()
                .and_then(|r| normalize_geocode(r, address)),
            Err(e) => {
                tracing::warn!(error = %e, address, "geocoding failed");
                None
            }
        }
    }
}

fn photo_source(client: &PlacesClient) -> PhotoSource<'_> {
    PhotoSource {
        base_url: client.base_url(),
        api_key: client.api_key(),
    }
}

fn truncate<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_keys_are_detected() {
        assert!(is_placeholder_key(""));
        assert!(is_placeholder_key("   "));
        assert!(is_placeholder_key("your_google_maps_api_key"));
        assert!(is_placeholder_key("YOUR-API-KEY"));
        assert!(is_placeholder_key("changeme"));
        assert!(!is_placeholder_key("AIzaSyA-real-looking-key"));
    }

    #[test]
    fn placeholder_key_puts_service_in_mock_mode() {
        let config = ProviderConfig {
            api_key: Some("your_google_maps_api_key".to_string()),
            ..ProviderConfig::default()
        };
        assert!(config.usable_api_key().is_none());
        let service = PlacesService::new(&config).expect("service");
        assert!(!service.is_live());
    }

    #[test]
    fn real_key_enables_provider() {
        let config = ProviderConfig {
            api_key: Some("AIza-test".to_string()),
            ..ProviderConfig::default()
        };
        let service = PlacesService::new(&config).expect("service");
        assert!(service.is_live());
    }

    #[test]
    fn provider_config_debug_redacts_key() {
        let config = ProviderConfig {
            api_key: Some("AIza-secret".to_string()),
            ..ProviderConfig::default()
        };
        assert!(!format!("{config:?}").contains("AIza-secret"));
    }

    #[tokio::test]
    async fn mock_search_filters_by_query() {
        let service = PlacesService::mock();
        let results = service.search("Paris", 10).await;
        assert!(!results.is_empty());
        for record in &results {
            assert!(
                record.name.to_lowercase().contains("paris")
                    || record.country.to_lowercase().contains("paris")
            );
        }
        assert!(service.search("zzzznotfound", 10).await.is_empty());
    }

    #[tokio::test]
    async fn mock_search_respects_limit() {
        let service = PlacesService::mock();
        assert_eq!(service.search("", 3).await.len(), 3);
        assert!(service.popular_destinations(0).await.is_empty());
    }

    #[tokio::test]
    async fn mock_popular_destinations_are_unfiltered() {
        let service = PlacesService::mock();
        assert_eq!(
            service.popular_destinations(100).await,
            mock::destinations("")
        );
    }

    #[tokio::test]
    async fn mock_details_never_absent() {
        let service = PlacesService::mock();
        let detail = service.get_details("ChIJ-any").await.expect("detail");
        assert_eq!(detail.place.id, "ChIJ-any");
    }

    #[tokio::test]
    async fn mock_geocode_returns_fixed_coordinate() {
        let service = PlacesService::mock();
        let result = service.geocode("Somewhere 1").await.expect("result");
        assert!(result.lat.abs() < f64::EPSILON && result.lng.abs() < f64::EPSILON);
        assert_eq!(result.formatted_address, "Somewhere 1");
    }

    #[tokio::test]
    async fn mock_nearby_returns_fixed_list() {
        let service = PlacesService::mock();
        let places = service
            .find_nearby(48.85, 2.35, DEFAULT_NEARBY_TYPE, DEFAULT_NEARBY_RADIUS)
            .await;
        assert_eq!(places, mock::nearby_places());
    }
}
