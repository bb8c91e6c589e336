use axum::{extract::{Path, State}, http::StatusCode, routing::get, Json, Router};
use service::contact::domain::{Contact, ContactInput};

use crate::{errors::JsonApiError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/contact", get(list).post(create))
        .route("/api/contact/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    post, path = "/api/contact", tag = "contact",
    request_body = crate::openapi::ContactInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ContactDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<ContactInput>) -> Result<Json<Contact>, JsonApiError> {
    Ok(Json(state.contacts.add_contact(input).await?))
}

#[utoipa::path(get, path = "/api/contact", tag = "contact", responses((status = 200, description = "All contacts", body = [crate::openapi::ContactDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, JsonApiError> {
    Ok(Json(state.contacts.get_all_contacts().await?))
}

#[utoipa::path(
    get, path = "/api/contact/{id}", tag = "contact",
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ContactDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Contact>, JsonApiError> {
    Ok(Json(state.contacts.get_contact_by_id(&id).await?))
}

#[utoipa::path(
    put, path = "/api/contact/{id}", tag = "contact",
    params(("id" = String, Path, description = "Contact id")),
    request_body = crate::openapi::ContactInputDoc,
    responses(
        (status = 200, description = "Updated; a `done` status also emails the enquirer", body = crate::openapi::ContactDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Contact>, JsonApiError> {
    Ok(Json(state.contacts.update_contact(&id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/contact/{id}", tag = "contact",
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Deleted, or already absent"),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.contacts.delete_contact(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
