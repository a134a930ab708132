//! Mapping of raw provider entries into the normalized shapes in
//! [`crate::model`].
//!
//! Every function here is pure: identical input yields identical output.

use std::collections::BTreeSet;

use crate::model::{
    Category, Coordinates, GeocodeResult, NearbyPlace, PlaceDetail, PlaceRecord, PriceLevel,
    Review,
};
use crate::types::{RawGeocode, RawPhoto, RawPlace};

/// Rating used when the provider omits one.
pub const DEFAULT_RATING: f64 = 4.5;

pub const SEARCH_PHOTO_WIDTH: u32 = 400;
pub const DETAIL_PHOTO_WIDTH: u32 = 800;
pub const MAX_DETAIL_PHOTOS: usize = 5;
pub const MAX_DETAIL_REVIEWS: usize = 3;

pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Stock image used when a place has no usable photo.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1591373/pexels-photo-1591373.jpeg?auto=compress&cs=tinysrgb&w=400";

/// Where photo URLs point and which key signs them.
#[derive(Debug, Clone, Copy)]
pub struct PhotoSource<'a> {
    pub base_url: &'a str,
    pub api_key: &'a str,
}

impl PhotoSource<'_> {
    fn url(&self, reference: &str, width: u32) -> Option<String> {
        photo_url(self.base_url, reference, width, Some(self.api_key))
    }

    fn first_url(&self, photos: &[RawPhoto], width: u32) -> Option<String> {
        photos
            .iter()
            .filter_map(|p| p.photo_reference.as_deref())
            .find_map(|r| self.url(r, width))
    }
}

/// Builds a provider photo URL for a photo reference.
///
/// Returns `None` when no key is available: an unsigned photo URL is useless
/// to the client.
#[must_use]
pub fn photo_url(base_url: &str, reference: &str, width: u32, api_key: Option<&str>) -> Option<String> {
    let key = api_key.map(str::trim).filter(|k| !k.is_empty())?;
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }
    let base = base_url.trim_end_matches('/');
    Some(format!(
        "{base}/place/photo?maxwidth={width}&photoreference={reference}&key={key}"
    ))
}

/// Maps the provider's 0–4 price level onto the three app tiers.
#[must_use]
pub fn map_price_level(price_level: Option<i64>) -> PriceLevel {
    match price_level {
        Some(0 | 1) => PriceLevel::Budget,
        Some(3 | 4) => PriceLevel::Luxury,
        _ => PriceLevel::Moderate,
    }
}

fn category_for_type(place_type: &str) -> Option<Category> {
    match place_type {
        "tourist_attraction" | "museum" => Some(Category::Culture),
        "natural_feature" | "park" => Some(Category::Nature),
        "amusement_park" | "zoo" => Some(Category::Adventure),
        "beach" | "spa" => Some(Category::Relaxation),
        "shopping_mall" | "restaurant" | "locality" | "administrative_area_level_1" => {
            Some(Category::Urban)
        }
        _ => None,
    }
}

/// Collapses provider place types into app categories.
///
/// Unknown types are ignored. The result is never empty: with no match it
/// is `{culture}`.
#[must_use]
pub fn extract_categories<S: AsRef<str>>(types: &[S]) -> BTreeSet<Category> {
    let mut categories: BTreeSet<Category> = types
        .iter()
        .filter_map(|t| category_for_type(t.as_ref()))
        .collect();
    if categories.is_empty() {
        categories.insert(Category::Culture);
    }
    categories
}

/// Takes the last `", "`-separated segment of a formatted address.
#[must_use]
pub fn extract_country(address: &str) -> String {
    address
        .rsplit(", ")
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(|| UNKNOWN_COUNTRY.to_string(), ToOwned::to_owned)
}

fn coordinates(raw: &RawPlace) -> Option<Coordinates> {
    raw.geometry.map(|g| Coordinates {
        lat: g.location.lat,
        lng: g.location.lng,
    })
}

fn describe(name: &str) -> String {
    format!("Discover the beauty and culture of {name}")
}

/// Maps a text-search result. Entries without an id or name are dropped.
#[must_use]
pub fn normalize_place(raw: &RawPlace, photos: PhotoSource<'_>) -> Option<PlaceRecord> {
    let id = raw.place_id.clone()?;
    let name = raw.name.clone()?;

    Some(PlaceRecord {
        country: extract_country(raw.formatted_address.as_deref().unwrap_or_default()),
        coordinates: coordinates(raw),
        rating: raw.rating.unwrap_or(DEFAULT_RATING),
        price_level: map_price_level(raw.price_level),
        categories: extract_categories(&raw.types),
        image_url: photos
            .first_url(&raw.photos, SEARCH_PHOTO_WIDTH)
            .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string()),
        description: describe(&name),
        id,
        name,
    })
}

/// Maps a details result.
///
/// `requested_id` stands in for a missing `place_id` so the detail is always
/// keyed by what the caller asked for.
#[must_use]
pub fn normalize_details(raw: &RawPlace, requested_id: &str, photos: PhotoSource<'_>) -> PlaceDetail {
    let name = raw
        .name
        .clone()
        .or_else(|| raw.formatted_address.clone())
        .unwrap_or_else(|| requested_id.to_string());

    let photo_urls: Vec<String> = raw
        .photos
        .iter()
        .take(MAX_DETAIL_PHOTOS)
        .filter_map(|p| p.photo_reference.as_deref())
        .filter_map(|r| photos.url(r, DETAIL_PHOTO_WIDTH))
        .collect();

    let reviews = raw
        .reviews
        .iter()
        .take(MAX_DETAIL_REVIEWS)
        .map(|r| Review {
            author: r.author_name.clone().unwrap_or_default(),
            rating: r.rating.unwrap_or(0.0),
            text: r.text.clone().unwrap_or_default(),
        })
        .collect();

    let place = PlaceRecord {
        id: raw
            .place_id
            .clone()
            .unwrap_or_else(|| requested_id.to_string()),
        country: extract_country(raw.formatted_address.as_deref().unwrap_or_default()),
        coordinates: coordinates(raw),
        rating: raw.rating.unwrap_or(DEFAULT_RATING),
        price_level: map_price_level(raw.price_level),
        categories: extract_categories(&raw.types),
        image_url: photo_urls
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string()),
        description: describe(&name),
        name,
    };

    PlaceDetail {
        place,
        address: raw.formatted_address.clone(),
        website: raw.website.clone(),
        phone: raw.formatted_phone_number.clone(),
        photo_urls,
        reviews,
    }
}

/// Maps a nearby-search result. Entries without an id or name are dropped.
#[must_use]
pub fn normalize_nearby(raw: &RawPlace, photos: PhotoSource<'_>) -> Option<NearbyPlace> {
    Some(NearbyPlace {
        id: raw.place_id.clone()?,
        name: raw.name.clone()?,
        vicinity: raw.vicinity.clone(),
        coordinates: coordinates(raw),
        rating: raw.rating.unwrap_or(DEFAULT_RATING),
        price_level: map_price_level(raw.price_level),
        categories: extract_categories(&raw.types),
        image_url: photos
            .first_url(&raw.photos, SEARCH_PHOTO_WIDTH)
            .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string()),
    })
}

/// Maps a geocoding result. Results without geometry carry no answer and map
/// to `None`.
#[must_use]
pub fn normalize_geocode(raw: &RawGeocode, address: &str) -> Option<GeocodeResult> {
    let location = raw.geometry?.location;
    Some(GeocodeResult {
        lat: location.lat,
        lng: location.lng,
        formatted_address: raw
            .formatted_address
            .clone()
            .unwrap_or_else(|| address.trim().to_string()),
        place_id: raw.place_id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Geometry, LatLng, RawReview};

    const BASE: &str = "https://maps.googleapis.com/maps/api";

    fn source() -> PhotoSource<'static> {
        PhotoSource {
            base_url: BASE,
            api_key: "K",
        }
    }

    fn photo(reference: &str) -> RawPhoto {
        RawPhoto {
            photo_reference: Some(reference.to_string()),
        }
    }

    fn raw_place() -> RawPlace {
        RawPlace {
            place_id: Some("ChIJ-eiffel".to_string()),
            name: Some("Eiffel Tower".to_string()),
            formatted_address: Some("Champ de Mars, 75007 Paris, France".to_string()),
            geometry: Some(Geometry {
                location: LatLng {
                    lat: 48.8584,
                    lng: 2.2945,
                },
            }),
            photos: vec![photo("ref1")],
            rating: Some(4.7),
            price_level: Some(3),
            types: vec!["tourist_attraction".to_string(), "point_of_interest".to_string()],
            ..RawPlace::default()
        }
    }

    #[test]
    fn map_price_level_covers_full_table() {
        assert_eq!(map_price_level(Some(0)), PriceLevel::Budget);
        assert_eq!(map_price_level(Some(1)), PriceLevel::Budget);
        assert_eq!(map_price_level(Some(2)), PriceLevel::Moderate);
        assert_eq!(map_price_level(Some(3)), PriceLevel::Luxury);
        assert_eq!(map_price_level(Some(4)), PriceLevel::Luxury);
    }

    #[test]
    fn map_price_level_unknown_is_moderate() {
        assert_eq!(map_price_level(None), PriceLevel::Moderate);
        assert_eq!(map_price_level(Some(7)), PriceLevel::Moderate);
        assert_eq!(map_price_level(Some(-1)), PriceLevel::Moderate);
    }

    #[test]
    fn extract_categories_museum_and_park() {
        let categories = extract_categories(&["museum", "park"]);
        assert_eq!(
            categories,
            BTreeSet::from([Category::Culture, Category::Nature])
        );
    }

    #[test]
    fn extract_categories_deduplicates() {
        let categories = extract_categories(&["museum", "tourist_attraction", "restaurant", "locality"]);
        assert_eq!(categories.len(), 2);
        assert!(categories.contains(&Category::Culture));
        assert!(categories.contains(&Category::Urban));
    }

    #[test]
    fn extract_categories_defaults_to_culture() {
        let empty: [&str; 0] = [];
        assert_eq!(extract_categories(&empty), BTreeSet::from([Category::Culture]));
        assert_eq!(
            extract_categories(&["point_of_interest", "establishment"]),
            BTreeSet::from([Category::Culture])
        );
    }

    #[test]
    fn extract_country_takes_last_segment() {
        assert_eq!(extract_country("123 Main St, Springfield, USA"), "USA");
        assert_eq!(extract_country("Iceland"), "Iceland");
    }

    #[test]
    fn extract_country_empty_is_unknown() {
        assert_eq!(extract_country(""), "Unknown");
        assert_eq!(extract_country("   "), "Unknown");
    }

    #[test]
    fn photo_url_exact_format() {
        let url = photo_url("https://maps.googleapis.com/maps/api", "ref1", 400, Some("K"));
        assert_eq!(
            url.as_deref(),
            Some("https://maps.googleapis.com/maps/api/place/photo?maxwidth=400&photoreference=ref1&key=K")
        );
    }

    #[test]
    fn photo_url_trims_trailing_slash() {
        let url = photo_url("http://localhost:9000/", "r", 800, Some("K")).unwrap();
        assert_eq!(url, "http://localhost:9000/place/photo?maxwidth=800&photoreference=r&key=K");
    }

    #[test]
    fn photo_url_omitted_without_key() {
        assert!(photo_url(BASE, "ref1", 400, None).is_none());
        assert!(photo_url(BASE, "ref1", 400, Some("  ")).is_none());
    }

    #[test]
    fn normalize_place_maps_all_fields() {
        let record = normalize_place(&raw_place(), source()).expect("record");
        assert_eq!(record.id, "ChIJ-eiffel");
        assert_eq!(record.country, "France");
        assert_eq!(record.price_level, PriceLevel::Luxury);
        assert!((record.rating - 4.7).abs() < f64::EPSILON);
        assert_eq!(record.categories, BTreeSet::from([Category::Culture]));
        assert_eq!(
            record.image_url,
            format!("{BASE}/place/photo?maxwidth=400&photoreference=ref1&key=K")
        );
        assert_eq!(record.description, "Discover the beauty and culture of Eiffel Tower");
        let coords = record.coordinates.expect("coordinates");
        assert!((coords.lat - 48.8584).abs() < f64::EPSILON);
    }

    #[test]
    fn normalize_place_defaults_missing_fields() {
        let raw = RawPlace {
            place_id: Some("x".to_string()),
            name: Some("Nowhere".to_string()),
            ..RawPlace::default()
        };
        let record = normalize_place(&raw, source()).expect("record");
        assert_eq!(record.country, "Unknown");
        assert!(record.coordinates.is_none());
        assert!((record.rating - DEFAULT_RATING).abs() < f64::EPSILON);
        assert_eq!(record.price_level, PriceLevel::Moderate);
        assert_eq!(record.image_url, FALLBACK_IMAGE_URL);
    }

    #[test]
    fn normalize_place_skips_entries_without_id() {
        let raw = RawPlace {
            name: Some("Anonymous".to_string()),
            ..RawPlace::default()
        };
        assert!(normalize_place(&raw, source()).is_none());
    }

    #[test]
    fn normalize_details_caps_photos_and_reviews() {
        let mut raw = raw_place();
        raw.photos = (0..8).map(|i| photo(&format!("ref{i}"))).collect();
        raw.reviews = (0..6)
            .map(|i| RawReview {
                author_name: Some(format!("author{i}")),
                rating: Some(5.0),
                text: Some("great".to_string()),
            })
            .collect();
        raw.website = Some("https://www.toureiffel.paris".to_string());

        let detail = normalize_details(&raw, "ChIJ-eiffel", source());
        assert_eq!(detail.photo_urls.len(), MAX_DETAIL_PHOTOS);
        assert_eq!(detail.reviews.len(), MAX_DETAIL_REVIEWS);
        assert_eq!(detail.reviews[0].author, "author0");
        assert!(detail.photo_urls[0].contains("maxwidth=800"));
        assert_eq!(detail.place.image_url, detail.photo_urls[0]);
        assert_eq!(detail.website.as_deref(), Some("https://www.toureiffel.paris"));
    }

    #[test]
    fn normalize_details_falls_back_to_requested_id() {
        let raw = RawPlace::default();
        let detail = normalize_details(&raw, "requested", source());
        assert_eq!(detail.place.id, "requested");
        assert_eq!(detail.place.name, "requested");
        assert!(detail.photo_urls.is_empty());
        assert_eq!(detail.place.image_url, FALLBACK_IMAGE_URL);
    }

    #[test]
    fn normalize_nearby_keeps_vicinity() {
        let mut raw = raw_place();
        raw.vicinity = Some("7th arrondissement".to_string());
        raw.rating = None;
        let nearby = normalize_nearby(&raw, source()).expect("nearby");
        assert_eq!(nearby.vicinity.as_deref(), Some("7th arrondissement"));
        assert!((nearby.rating - DEFAULT_RATING).abs() < f64::EPSILON);
    }

    #[test]
    fn normalize_geocode_requires_geometry() {
        let raw = RawGeocode {
            formatted_address: Some("Berlin, Germany".to_string()),
            geometry: None,
            place_id: None,
        };
        assert!(normalize_geocode(&raw, "Berlin").is_none());

        let raw = RawGeocode {
            geometry: Some(Geometry {
                location: LatLng { lat: 52.52, lng: 13.405 },
            }),
            ..raw
        };
        let result = normalize_geocode(&raw, "Berlin").expect("result");
        assert_eq!(result.formatted_address, "Berlin, Germany");
        assert!((result.lat - 52.52).abs() < f64::EPSILON);
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = raw_place();
        let a = serde_json::to_string(&normalize_place(&raw, source())).unwrap();
        let b = serde_json::to_string(&normalize_place(&raw, source())).unwrap();
        assert_eq!(a, b);
    }
}
