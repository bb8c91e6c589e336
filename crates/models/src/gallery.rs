use sea_orm::entity::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::ModelError;

/// A named gallery. Its items live inside the row as a JSON array, so the
/// whole gallery is read and written as one document.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gallery")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub name: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Decode the embedded item array; a NULL column reads as empty.
    pub fn items<T: DeserializeOwned>(&self) -> Result<Vec<T>, ModelError> {
        decode_items(&self.images)
    }
}

pub fn decode_items<T: DeserializeOwned>(raw: &Json) -> Result<Vec<T>, ModelError> {
    if raw.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(raw.clone()).map_err(|e| ModelError::Decode(e.to_string()))
}

pub fn encode_items<T: Serialize>(items: &[T]) -> Result<Json, ModelError> {
    serde_json::to_value(items).map_err(|e| ModelError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        id: String,
        image_data: Option<String>,
    }

    #[test]
    fn null_column_decodes_as_empty() {
        let items: Vec<Row> = decode_items(&Json::Null).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn items_keep_their_order() {
        let raw = json!([
            {"id": "b", "imageData": "second.png"},
            {"id": "a", "imageData": null}
        ]);
        let items: Vec<Row> = decode_items(&raw).unwrap();
        assert_eq!(items[0].id, "b");
        assert_eq!(items[1].image_data, None);
        assert_eq!(encode_items(&items).unwrap(), raw);
    }

    #[test]
    fn malformed_column_is_a_decode_error() {
        let err = decode_items::<Row>(&json!({"not": "a list"})).unwrap_err();
        assert!(matches!(err, ModelError::Decode(_)));
    }
}
