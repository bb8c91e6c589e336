use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied contact fields. Missing fields stay `None`; an `id` in
/// the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reply_note: Option<String>,
}

/// Stored inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub event: Option<String>,
    pub status: Option<String>,
    pub reply_note: Option<String>,
}

impl Contact {
    pub fn from_input(id: Uuid, input: ContactInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            event: input.event,
            status: input.status,
            reply_note: input.reply_note,
        }
    }
}

impl From<models::contact::Model> for Contact {
    fn from(m: models::contact::Model) -> Self {
        Self { id: m.id, name: m.name, email: m.email, event: m.event, status: m.status, reply_note: m.reply_note }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_uses_camel_case_and_tolerates_missing_fields() {
        let input: ContactInput = serde_json::from_value(json!({
            "id": "whatever-the-client-sent",
            "name": "Nimal",
            "replyNote": "See you Friday"
        }))
        .unwrap();
        assert_eq!(input.name.as_deref(), Some("Nimal"));
        assert_eq!(input.reply_note.as_deref(), Some("See you Friday"));
        assert_eq!(input.email, None);
    }

    #[test]
    fn contact_serializes_with_id_and_nulls() {
        let id = Uuid::new_v4();
        let c = Contact::from_input(id, ContactInput { status: Some("new".into()), ..Default::default() });
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["id"], json!(id.to_string()));
        assert_eq!(v["status"], json!("new"));
        assert!(v["replyNote"].is_null());
    }
}
