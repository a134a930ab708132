use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use wanderlust_places::{
    NearbyPlace, PlaceDetail, PlaceRecord, DEFAULT_NEARBY_RADIUS, DEFAULT_NEARBY_TYPE,
};

use crate::middleware::RequestId;

use super::{non_blank, normalize_limit, ApiError, ApiResponse, AppState};

const DEFAULT_SEARCH_LIMIT: usize = 20;
const DEFAULT_POPULAR_LIMIT: usize = 10;

#[derive(Debug, Serialize)]
pub(super) struct DestinationList {
    pub destinations: Vec<PlaceRecord>,
    pub total: usize,
}

impl From<Vec<PlaceRecord>> for DestinationList {
    fn from(destinations: Vec<PlaceRecord>) -> Self {
        Self {
            total: destinations.len(),
            destinations,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NearbyList {
    pub places: Vec<NearbyPlace>,
    pub total: usize,
}

// Query values stay raw strings; handlers parse them and answer with the
// JSON error envelope or a default.

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PopularQuery {
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct NearbyQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub radius: Option<String>,
}

pub(super) async fn search_destinations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<DestinationList>>, ApiError> {
    let Some(q) = non_blank(query.q.as_deref()) else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "Search query is required",
        ));
    };
    let limit = normalize_limit(query.limit.as_deref(), DEFAULT_SEARCH_LIMIT);

    let results = state.places.search(q, limit).await;
    Ok(Json(ApiResponse::new(req_id.0, results.into())))
}

pub(super) async fn popular_destinations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PopularQuery>,
) -> Json<ApiResponse<DestinationList>> {
    let limit = normalize_limit(query.limit.as_deref(), DEFAULT_POPULAR_LIMIT);
    let results = state.places.popular_destinations(limit).await;
    Json(ApiResponse::new(req_id.0, results.into()))
}

pub(super) async fn nearby_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<ApiResponse<NearbyList>>, ApiError> {
    let (Some(lat), Some(lng)) = (
        parse_coordinate(query.lat.as_deref(), 90.0),
        parse_coordinate(query.lng.as_deref(), 180.0),
    ) else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "Invalid latitude or longitude",
        ));
    };

    let place_type = non_blank(query.place_type.as_deref()).unwrap_or(DEFAULT_NEARBY_TYPE);
    let radius = query
        .radius
        .as_deref()
        .and_then(|r| r.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_NEARBY_RADIUS);

    let places = state
        .places
        .find_nearby(lat, lng, place_type, radius)
        .await;
    Ok(Json(ApiResponse::new(
        req_id.0,
        NearbyList {
            total: places.len(),
            places,
        },
    )))
}

pub(super) async fn place_details(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(place_id): Path<String>,
) -> Result<Json<ApiResponse<PlaceDetail>>, ApiError> {
    match state.places.get_details(&place_id).await {
        Some(detail) => Ok(Json(ApiResponse::new(req_id.0, detail))),
        None => Err(ApiError::new(req_id.0, "not_found", "Place not found")),
    }
}

/// Parses a finite coordinate within `-bound..=bound`.
fn parse_coordinate(raw: Option<&str>, bound: f64) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && v.abs() <= bound)
}
