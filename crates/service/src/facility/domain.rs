use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityInput {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: Uuid,
    pub heading: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Facility {
    pub fn from_input(id: Uuid, input: FacilityInput) -> Self {
        Self { id, heading: input.heading, description: input.description, image: input.image }
    }
}

impl From<models::facility::Model> for Facility {
    fn from(m: models::facility::Model) -> Self {
        Self { id: m.id, heading: m.heading, description: m.description, image: m.image }
    }
}
