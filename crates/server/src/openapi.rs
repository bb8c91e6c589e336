use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInputDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub event: Option<String>,
    pub status: Option<String>,
    pub reply_note: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDoc {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub event: Option<String>,
    pub status: Option<String>,
    pub reply_note: Option<String>,
}

#[derive(ToSchema)]
pub struct FacilityInputDoc { pub heading: Option<String>, pub description: Option<String>, pub image: Option<String> }

#[derive(ToSchema)]
pub struct FacilityDoc { pub id: Uuid, pub heading: Option<String>, pub description: Option<String>, pub image: Option<String> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemInputDoc { pub id: Option<String>, pub image_data: Option<String> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDoc { pub id: String, pub image_data: Option<String> }

#[derive(ToSchema)]
pub struct GalleryInputDoc { pub name: Option<String>, pub images: Vec<ItemInputDoc> }

#[derive(ToSchema)]
pub struct GalleryDoc { pub id: Uuid, pub name: Option<String>, pub images: Vec<ItemDoc> }

/// Image data of every item, in gallery order.
#[derive(ToSchema)]
pub struct SearchResultDoc { pub images: Vec<Option<String>> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::contact::create,
        crate::routes::contact::list,
        crate::routes::contact::fetch,
        crate::routes::contact::update,
        crate::routes::contact::remove,
        crate::routes::facility::create,
        crate::routes::facility::list,
        crate::routes::facility::fetch,
        crate::routes::facility::update,
        crate::routes::facility::remove,
        crate::routes::gallery::list,
        crate::routes::gallery::search,
        crate::routes::gallery::fetch,
        crate::routes::gallery::create,
        crate::routes::gallery::update,
        crate::routes::gallery::remove,
        crate::routes::gallery::add_items,
        crate::routes::gallery::update_item,
        crate::routes::gallery::remove_item,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            ContactInputDoc,
            ContactDoc,
            FacilityInputDoc,
            FacilityDoc,
            ItemInputDoc,
            ItemDoc,
            GalleryInputDoc,
            GalleryDoc,
            SearchResultDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "contact"),
        (name = "facility"),
        (name = "gallery")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource_path() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for p in ["/health", "/api/contact/{id}", "/api/facility", "/api/gallery/search", "/api/gallery/{id}/items/{item_id}"] {
            assert!(paths.contains_key(p), "missing {p}");
        }
        assert!(doc["components"]["schemas"]["ContactDoc"]["properties"].get("replyNote").is_some());
    }
}
