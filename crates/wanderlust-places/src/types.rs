//! Google Places / Geocoding web service response types.
//!
//! Every response is wrapped in a `{"status": "OK", ...}` envelope. All
//! fields other than `status` are optional on the wire and decode leniently:
//! a missing, `null` or wrongly typed field becomes `None` / empty, and a
//! list element that does not decode is skipped. One malformed entry never
//! fails the whole envelope; the mapping rules in [`crate::normalize`] fill
//! in defaults per field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Decodes a field as `Some` only when it has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decodes a list, dropping elements of the wrong shape. Anything other than
/// an array yields an empty list.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

// ---------------------------------------------------------------------------
// textsearch / nearbysearch
// ---------------------------------------------------------------------------

/// Envelope for `place/textsearch/json` and `place/nearbysearch/json`.
#[derive(Debug, Deserialize)]
pub struct PlacesListResponse {
    pub status: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub results: Vec<RawPlace>,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

/// Envelope for `place/details/json`.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    #[serde(default, deserialize_with = "lenient")]
    pub result: Option<RawPlace>,
}

/// A single place as returned by any of the Places endpoints.
///
/// Search results carry `formatted_address`, nearby results carry
/// `vicinity`, details carry the contact and review fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlace {
    #[serde(default, deserialize_with = "lenient")]
    pub place_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub formatted_address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub vicinity: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub photos: Vec<RawPhoto>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub price_level: Option<i64>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub formatted_phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub reviews: Vec<RawReview>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPhoto {
    #[serde(default, deserialize_with = "lenient")]
    pub photo_reference: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    #[serde(default, deserialize_with = "lenient")]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// geocode
// ---------------------------------------------------------------------------

/// Envelope for `geocode/json`.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub results: Vec<RawGeocode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGeocode {
    #[serde(default, deserialize_with = "lenient")]
    pub formatted_address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "lenient")]
    pub place_id: Option<String>,
}
