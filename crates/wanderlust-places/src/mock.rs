//! Fixed, deterministic data served when the provider is unconfigured or
//! unavailable.

use crate::model::{
    Category, Coordinates, GeocodeResult, NearbyPlace, PlaceDetail, PlaceRecord, PriceLevel,
};
use crate::normalize::FALLBACK_IMAGE_URL;

struct MockDestination {
    id: &'static str,
    name: &'static str,
    country: &'static str,
    image_url: &'static str,
    rating: f64,
    price_level: PriceLevel,
    description: &'static str,
    categories: &'static [Category],
    lat: f64,
    lng: f64,
}

impl MockDestination {
    fn to_record(&self) -> PlaceRecord {
        PlaceRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            country: self.country.to_string(),
            coordinates: Some(Coordinates {
                lat: self.lat,
                lng: self.lng,
            }),
            rating: self.rating,
            price_level: self.price_level,
            categories: self.categories.iter().copied().collect(),
            image_url: self.image_url.to_string(),
            description: self.description.to_string(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.country.to_lowercase().contains(needle)
    }
}

const DESTINATIONS: &[MockDestination] = &[
    MockDestination {
        id: "mock-bali",
        name: "Bali",
        country: "Indonesia",
        image_url: "https://images.pexels.com/photos/460621/pexels-photo-460621.jpeg",
        rating: 4.8,
        price_level: PriceLevel::Moderate,
        description: "Experience the beautiful beaches and vibrant culture of Bali.",
        categories: &[Category::Relaxation, Category::Culture],
        lat: -8.3405,
        lng: 115.0920,
    },
    MockDestination {
        id: "mock-paris",
        name: "Paris",
        country: "France",
        image_url: "https://images.pexels.com/photos/736402/pexels-photo-736402.jpeg",
        rating: 4.7,
        price_level: PriceLevel::Luxury,
        description: "Discover the art, fashion, and gastronomy of Paris.",
        categories: &[Category::Culture, Category::Urban],
        lat: 48.8566,
        lng: 2.3522,
    },
    MockDestination {
        id: "mock-tokyo",
        name: "Tokyo",
        country: "Japan",
        image_url: "https://images.pexels.com/photos/2506923/pexels-photo-2506923.jpeg",
        rating: 4.9,
        price_level: PriceLevel::Moderate,
        description: "Experience the perfect blend of traditional and modern culture in Tokyo.",
        categories: &[Category::Culture, Category::Urban, Category::Adventure],
        lat: 35.6762,
        lng: 139.6503,
    },
    MockDestination {
        id: "mock-santorini",
        name: "Santorini",
        country: "Greece",
        image_url: "https://images.pexels.com/photos/1285625/pexels-photo-1285625.jpeg",
        rating: 4.6,
        price_level: PriceLevel::Luxury,
        description: "Stunning sunsets and white-washed buildings overlooking the Aegean Sea.",
        categories: &[Category::Relaxation, Category::Culture, Category::Nature],
        lat: 36.3932,
        lng: 25.4615,
    },
    MockDestination {
        id: "mock-new-york",
        name: "New York City",
        country: "United States",
        image_url: "https://images.pexels.com/photos/466685/pexels-photo-466685.jpeg",
        rating: 4.5,
        price_level: PriceLevel::Luxury,
        description: "Iconic skyline, Broadway shows, and world-class museums.",
        categories: &[Category::Urban, Category::Culture, Category::Adventure],
        lat: 40.7128,
        lng: -74.0060,
    },
    MockDestination {
        id: "mock-rome",
        name: "Rome",
        country: "Italy",
        image_url: "https://images.pexels.com/photos/1591373/pexels-photo-1591373.jpeg",
        rating: 4.7,
        price_level: PriceLevel::Moderate,
        description: "The Eternal City with ancient history, incredible architecture, and amazing cuisine.",
        categories: &[Category::Culture, Category::Urban],
        lat: 41.9028,
        lng: 12.4964,
    },
    MockDestination {
        id: "mock-sydney",
        name: "Sydney",
        country: "Australia",
        image_url: "https://images.pexels.com/photos/783682/pexels-photo-783682.jpeg",
        rating: 4.6,
        price_level: PriceLevel::Moderate,
        description: "Harbor city with an iconic Opera House and beautiful beaches.",
        categories: &[Category::Urban, Category::Nature, Category::Relaxation],
        lat: -33.8688,
        lng: 151.2093,
    },
    MockDestination {
        id: "mock-machu-picchu",
        name: "Machu Picchu",
        country: "Peru",
        image_url: "https://images.pexels.com/photos/259967/pexels-photo-259967.jpeg",
        rating: 4.9,
        price_level: PriceLevel::Moderate,
        description: "Ancient Incan citadel set high in the Andes Mountains.",
        categories: &[Category::Adventure, Category::Nature],
        lat: -13.1631,
        lng: -72.5450,
    },
];

/// Mock destinations whose name or country contains `query`, case-insensitively.
///
/// A blank query matches everything.
#[must_use]
pub fn destinations(query: &str) -> Vec<PlaceRecord> {
    let needle = query.trim().to_lowercase();
    DESTINATIONS
        .iter()
        .filter(|d| needle.is_empty() || d.matches(&needle))
        .map(MockDestination::to_record)
        .collect()
}

/// Canned detail keyed by the requested id.
#[must_use]
pub fn place_details(place_id: &str) -> PlaceDetail {
    PlaceDetail {
        place: PlaceRecord {
            id: place_id.to_string(),
            name: "Sample Destination".to_string(),
            country: "Sample Country".to_string(),
            coordinates: Some(Coordinates { lat: 0.0, lng: 0.0 }),
            rating: 4.5,
            price_level: PriceLevel::Moderate,
            categories: [Category::Culture].into_iter().collect(),
            image_url: FALLBACK_IMAGE_URL.to_string(),
            description: "A sample destination served while live place data is unavailable."
                .to_string(),
        },
        address: Some("123 Sample Street, Sample City, Sample Country".to_string()),
        website: Some("https://example.com".to_string()),
        phone: Some("+1-234-567-8900".to_string()),
        photo_urls: vec![FALLBACK_IMAGE_URL.to_string()],
        reviews: Vec::new(),
    }
}

#[must_use]
pub fn nearby_places() -> Vec<NearbyPlace> {
    vec![NearbyPlace {
        id: "mock-nearby-1".to_string(),
        name: "Sample Restaurant".to_string(),
        vicinity: Some("Sample Area".to_string()),
        coordinates: Some(Coordinates { lat: 0.0, lng: 0.0 }),
        rating: 4.3,
        price_level: PriceLevel::Moderate,
        categories: [Category::Urban].into_iter().collect(),
        image_url: FALLBACK_IMAGE_URL.to_string(),
    }]
}

/// Fixed coordinate with the caller's address echoed back.
#[must_use]
pub fn geocode(address: &str) -> GeocodeResult {
    GeocodeResult {
        lat: 0.0,
        lng: 0.0,
        formatted_address: address.trim().to_string(),
        place_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_returns_every_destination() {
        assert_eq!(destinations("").len(), DESTINATIONS.len());
        assert_eq!(destinations("   ").len(), DESTINATIONS.len());
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let results = destinations("PARIS");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "mock-paris");
    }

    #[test]
    fn query_matches_country() {
        let results = destinations("japan");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Tokyo");
    }

    #[test]
    fn unmatched_query_is_empty() {
        assert!(destinations("zzzznotfound").is_empty());
    }

    #[test]
    fn every_destination_has_categories_and_coordinates() {
        for record in destinations("") {
            assert!(!record.categories.is_empty(), "{} has no categories", record.id);
            assert!(record.coordinates.is_some(), "{} has no coordinates", record.id);
            assert!((0.0..=5.0).contains(&record.rating));
        }
    }

    #[test]
    fn place_details_echoes_id() {
        assert_eq!(place_details("anything-123").place.id, "anything-123");
    }

    #[test]
    fn geocode_echoes_trimmed_address() {
        let result = geocode("  221B Baker Street ");
        assert_eq!(result.formatted_address, "221B Baker Street");
        assert!(result.place_id.is_none());
    }
}
