use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use service::errors::ServiceError;
use service::gallery::domain::{Gallery, GalleryInput, ItemInput};

use crate::{errors::JsonApiError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/gallery", get(list).post(create))
        .route("/api/gallery/search", get(search))
        .route("/api/gallery/:id", get(fetch).put(update).delete(remove))
        .route("/api/gallery/:id/items", post(add_items))
        .route("/api/gallery/:id/items/:item_id", put(update_item).delete(remove_item))
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Exact, case-sensitive gallery name
    pub name: Option<String>,
}

#[utoipa::path(get, path = "/api/gallery", tag = "gallery", responses((status = 200, description = "All galleries", body = [crate::openapi::GalleryDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Gallery>>, JsonApiError> {
    Ok(Json(state.galleries.get_all_galleries().await?))
}

/// Image data of the first gallery with the given name.
#[utoipa::path(
    get, path = "/api/gallery/search", tag = "gallery",
    params(SearchQuery),
    responses(
        (status = 200, description = "Match", body = crate::openapi::SearchResultDoc),
        (status = 400, description = "Missing name", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No gallery with that name", body = crate::openapi::SearchResultDoc)
    )
)]
pub async fn search(State(state): State<AppState>, Query(q): Query<SearchQuery>) -> Result<Response, JsonApiError> {
    let Some(name) = q.name else {
        return Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Missing Parameter", Some("query parameter `name` is required".into())));
    };
    match state.galleries.get_gallery_by_name(&name).await {
        Ok(g) => Ok(Json(serde_json::json!({"images": g.image_data()})).into_response()),
        Err(ServiceError::NotFound(_)) => Ok((StatusCode::NOT_FOUND, Json(serde_json::json!({"images": []}))).into_response()),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get, path = "/api/gallery/{id}", tag = "gallery",
    params(("id" = String, Path, description = "Gallery id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::GalleryDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Gallery>, JsonApiError> {
    Ok(Json(state.galleries.get_gallery_by_id(&id).await?))
}

#[utoipa::path(
    post, path = "/api/gallery", tag = "gallery",
    request_body = crate::openapi::GalleryInputDoc,
    responses((status = 200, description = "Created", body = crate::openapi::GalleryDoc))
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<GalleryInput>) -> Result<Json<Gallery>, JsonApiError> {
    Ok(Json(state.galleries.add_gallery(input).await?))
}

#[utoipa::path(
    put, path = "/api/gallery/{id}", tag = "gallery",
    params(("id" = String, Path, description = "Gallery id")),
    request_body = crate::openapi::GalleryInputDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::GalleryDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<GalleryInput>,
) -> Result<Json<Gallery>, JsonApiError> {
    Ok(Json(state.galleries.update_gallery(&id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/gallery/{id}", tag = "gallery",
    params(("id" = String, Path, description = "Gallery id")),
    responses((status = 204, description = "Deleted, or already absent"))
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.galleries.delete_gallery(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post, path = "/api/gallery/{id}/items", tag = "gallery",
    params(("id" = String, Path, description = "Gallery id")),
    request_body = [crate::openapi::ItemInputDoc],
    responses(
        (status = 200, description = "Items appended", body = crate::openapi::GalleryDoc),
        (status = 404, description = "Gallery not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add_items(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(items): Json<Vec<ItemInput>>,
) -> Result<Json<Gallery>, JsonApiError> {
    Ok(Json(state.galleries.add_items_to_gallery(&id, items).await?))
}

#[utoipa::path(
    put, path = "/api/gallery/{id}/items/{item_id}", tag = "gallery",
    params(("id" = String, Path, description = "Gallery id"), ("item_id" = String, Path, description = "Item id")),
    request_body = crate::openapi::ItemInputDoc,
    responses(
        (status = 200, description = "Item replaced", body = crate::openapi::GalleryDoc),
        (status = 404, description = "Gallery or item not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(item): Json<ItemInput>,
) -> Result<Json<Gallery>, JsonApiError> {
    Ok(Json(state.galleries.update_item_in_gallery(&id, &item_id, item).await?))
}

#[utoipa::path(
    delete, path = "/api/gallery/{id}/items/{item_id}", tag = "gallery",
    params(("id" = String, Path, description = "Gallery id"), ("item_id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item removed", body = crate::openapi::GalleryDoc),
        (status = 404, description = "Gallery or item not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
) -> Result<Json<Gallery>, JsonApiError> {
    Ok(Json(state.galleries.delete_item_from_gallery(&id, &item_id).await?))
}
