use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Item as sent by a client. `id` is only honoured when a whole gallery is
/// replaced; batch appends always get fresh ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub image_data: Option<String>,
}

/// An item stored inside a gallery, addressable by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub image_data: Option<String>,
}

impl Item {
    pub fn fresh(image_data: Option<String>) -> Self {
        Self { id: Uuid::new_v4().to_string(), image_data }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<ItemInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub id: Uuid,
    pub name: Option<String>,
    pub images: Vec<Item>,
}

fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

/// Items for a brand-new gallery: every one gets a fresh id.
pub fn fresh_items(inputs: Vec<ItemInput>) -> Vec<Item> {
    inputs.into_iter().map(|i| Item::fresh(i.image_data)).collect()
}

/// Items for a replaced gallery: a supplied id survives unless it is blank
/// or already taken earlier in the list, in which case a fresh one is used.
pub fn normalize_items(inputs: Vec<ItemInput>) -> Vec<Item> {
    let mut seen = HashSet::new();
    inputs
        .into_iter()
        .map(|i| match i.id {
            Some(id) if !id.trim().is_empty() && seen.insert(id.clone()) => Item { id, image_data: i.image_data },
            _ => {
                let item = Item::fresh(i.image_data);
                seen.insert(item.id.clone());
                item
            }
        })
        .collect()
}

impl Gallery {
    /// Append `items` in order with fresh ids; returns the ids assigned.
    pub fn append_items(&mut self, items: Vec<ItemInput>) -> Vec<String> {
        let fresh = fresh_items(items);
        let ids = fresh.iter().map(|i| i.id.clone()).collect();
        self.images.extend(fresh);
        ids
    }

    /// Overwrite the fields of item `item_id` in place. Its id and position
    /// are kept. Returns false when no such item exists.
    pub fn update_item(&mut self, item_id: &str, input: ItemInput) -> bool {
        match self.images.iter_mut().find(|i| i.id == item_id) {
            Some(slot) => {
                slot.image_data = input.image_data;
                true
            }
            None => false,
        }
    }

    /// Remove item `item_id`; false when no such item exists.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        match self.images.iter().position(|i| i.id == item_id) {
            Some(pos) => {
                self.images.remove(pos);
                true
            }
            None => false,
        }
    }

    /// `imageData` of every item, in gallery order.
    pub fn image_data(&self) -> Vec<Option<String>> {
        self.images.iter().map(|i| i.image_data.clone()).collect()
    }
}

impl TryFrom<models::gallery::Model> for Gallery {
    type Error = models::errors::ModelError;

    fn try_from(m: models::gallery::Model) -> Result<Self, Self::Error> {
        let images = m.items()?;
        Ok(Self { id: m.id, name: m.name, images })
    }
}
