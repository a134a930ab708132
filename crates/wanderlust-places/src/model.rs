//! Normalized place shapes handed to the API layer.
//!
//! Field names serialize in camelCase. Mock and live paths build the same
//! types, so consumers can treat them interchangeably.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceLevel {
    Budget,
    Moderate,
    Luxury,
}

/// Travel category a place is filed under.
///
/// Ordering is the declaration order, which fixes the serialized order of a
/// category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Culture,
    Nature,
    Adventure,
    Relaxation,
    Urban,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    pub id: String,
    pub name: String,
    pub country: String,
    /// `None` when the source entry had no geometry.
    pub coordinates: Option<Coordinates>,
    pub rating: f64,
    pub price_level: PriceLevel,
    /// Never empty.
    pub categories: BTreeSet<Category>,
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetail {
    #[serde(flatten)]
    pub place: PlaceRecord,
    pub address: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    /// At most [`crate::normalize::MAX_DETAIL_PHOTOS`] entries.
    pub photo_urls: Vec<String>,
    /// At most [`crate::normalize::MAX_DETAIL_REVIEWS`] entries.
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPlace {
    pub id: String,
    pub name: String,
    pub vicinity: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub rating: f64,
    pub price_level: PriceLevel,
    pub categories: BTreeSet<Category>,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    pub lat: f64,
    pub lng: f64,
    pub formatted_address: String,
    pub place_id: Option<String>,
}
