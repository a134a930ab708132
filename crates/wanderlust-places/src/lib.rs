//! Place lookups for Wanderlust.
//!
//! [`PlacesService`] turns Google Places / Geocoding responses into the
//! normalized shapes in [`model`], and falls back to the fixed data in
//! [`mock`] when no provider is configured or the provider fails.

pub mod client;
pub mod error;
pub mod mock;
pub mod model;
pub mod normalize;
pub mod service;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use model::{
    Category, Coordinates, GeocodeResult, NearbyPlace, PlaceDetail, PlaceRecord, PriceLevel,
    Review,
};
pub use normalize::{extract_categories, extract_country, map_price_level, photo_url};
pub use service::{
    is_placeholder_key, PlacesService, ProviderConfig, DEFAULT_NEARBY_RADIUS,
    DEFAULT_NEARBY_TYPE,
};
