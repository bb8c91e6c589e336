use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use service::errors::ServiceError;
use service::facility::domain::{Facility, FacilityInput};
use tracing::error;

use crate::{errors::JsonApiError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/facility", get(list).post(create))
        .route("/api/facility/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    post, path = "/api/facility", tag = "facility",
    request_body = crate::openapi::FacilityInputDoc,
    responses((status = 200, description = "Created", body = crate::openapi::FacilityDoc))
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<FacilityInput>) -> Result<Json<Facility>, JsonApiError> {
    Ok(Json(state.facilities.add_facility(input).await?))
}

#[utoipa::path(get, path = "/api/facility", tag = "facility", responses((status = 200, description = "All facilities", body = [crate::openapi::FacilityDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Facility>>, JsonApiError> {
    Ok(Json(state.facilities.get_all_facilities().await?))
}

#[utoipa::path(
    get, path = "/api/facility/{id}", tag = "facility",
    params(("id" = String, Path, description = "Facility id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::FacilityDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Facility>, JsonApiError> {
    Ok(Json(state.facilities.get_facility_by_id(&id).await?))
}

/// A malformed id answers 400 with no body.
#[utoipa::path(
    put, path = "/api/facility/{id}", tag = "facility",
    params(("id" = String, Path, description = "Facility id")),
    request_body = crate::openapi::FacilityInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::FacilityDoc),
        (status = 400, description = "Malformed id, empty body"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<FacilityInput>,
) -> Result<Response, JsonApiError> {
    match state.facilities.update_facility(&id, input).await {
        Ok(f) => Ok(Json(f).into_response()),
        Err(ServiceError::InvalidId(_)) => Ok(StatusCode::BAD_REQUEST.into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Plain-text outcome messages.
#[utoipa::path(
    delete, path = "/api/facility/{id}", tag = "facility",
    params(("id" = String, Path, description = "Facility id")),
    responses(
        (status = 200, description = "Facility deleted successfully", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid ObjectId format", body = String, content_type = "text/plain"),
        (status = 404, description = "Facility not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Error deleting facility", body = String, content_type = "text/plain")
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> (StatusCode, String) {
    match state.facilities.delete_facility(&id).await {
        Ok(()) => (StatusCode::OK, "Facility deleted successfully".into()),
        Err(ServiceError::InvalidId(_)) => (StatusCode::BAD_REQUEST, "Invalid ObjectId format".into()),
        Err(ServiceError::NotFound(_)) => (StatusCode::NOT_FOUND, "Facility not found".into()),
        Err(e @ ServiceError::Timeout(_)) => {
            error!(err = %e, "delete facility timed out");
            (StatusCode::SERVICE_UNAVAILABLE, format!("Error deleting facility: {e}"))
        }
        Err(e) => {
            error!(err = %e, "delete facility failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error deleting facility: {e}"))
        }
    }
}
