use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use wanderlust_places::GeocodeResult;

use crate::middleware::RequestId;

use super::{non_blank, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeQuery {
    pub address: Option<String>,
}

pub(super) async fn geocode_address(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<ApiResponse<GeocodeResult>>, ApiError> {
    let Some(address) = non_blank(query.address.as_deref()) else {
        return Err(ApiError::new(req_id.0, "bad_request", "Address is required"));
    };

    match state.places.geocode(address).await {
        Some(result) => Ok(Json(ApiResponse::new(req_id.0, result))),
        None => Err(ApiError::new(req_id.0, "not_found", "Address not found")),
    }
}
