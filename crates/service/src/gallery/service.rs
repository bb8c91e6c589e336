use std::{sync::Arc, time::Duration};

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{fresh_items, normalize_items, Gallery, GalleryInput, ItemInput};
use super::repository::GalleryRepository;
use crate::errors::ServiceError;
use crate::store::{bounded, parse_id};

/// Gallery use cases, including the item-level operations that rewrite a
/// single gallery document.
///
/// Item operations load the gallery, change it in memory, and write the whole
/// document back. A missing gallery or item is `NotFound` and nothing is written.
pub struct GalleryService {
    repo: Arc<dyn GalleryRepository>,
    timeout: Duration,
}

impl GalleryService {
    pub fn new(repo: Arc<dyn GalleryRepository>, timeout: Duration) -> Self { Self { repo, timeout } }

    #[instrument(skip(self, input))]
    pub async fn add_gallery(&self, input: GalleryInput) -> Result<Gallery, ServiceError> {
        let images = fresh_items(input.images);
        let created = bounded(self.timeout, "gallery.insert", self.repo.insert(input.name, images)).await?;
        info!(id = %created.id, items = created.images.len(), "gallery_created");
        Ok(created)
    }

    pub async fn get_all_galleries(&self) -> Result<Vec<Gallery>, ServiceError> {
        bounded(self.timeout, "gallery.find_all", self.repo.find_all()).await
    }

    pub async fn get_gallery_by_id(&self, id: &str) -> Result<Gallery, ServiceError> {
        self.load(parse_id(id)?).await
    }

    /// First gallery whose name matches exactly (case-sensitive).
    pub async fn get_gallery_by_name(&self, name: &str) -> Result<Gallery, ServiceError> {
        bounded(self.timeout, "gallery.find_by_name", self.repo.find_first_by_name(name))
            .await?
            .ok_or_else(|| ServiceError::not_found("gallery"))
    }

    #[instrument(skip(self, input))]
    pub async fn update_gallery(&self, id: &str, input: GalleryInput) -> Result<Gallery, ServiceError> {
        let gallery = Gallery { id: parse_id(id)?, name: input.name, images: normalize_items(input.images) };
        self.save(gallery).await
    }

    /// Deleting an unknown gallery is not an error.
    pub async fn delete_gallery(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        let removed = bounded(self.timeout, "gallery.delete", self.repo.delete(id)).await?;
        info!(id = %id, removed, "gallery_deleted");
        Ok(())
    }

    #[instrument(skip(self, items))]
    pub async fn add_items_to_gallery(&self, id: &str, items: Vec<ItemInput>) -> Result<Gallery, ServiceError> {
        let mut gallery = self.load(parse_id(id)?).await?;
        let added = gallery.append_items(items);
        info!(id = %gallery.id, added = added.len(), "gallery_items_added");
        self.save(gallery).await
    }

    #[instrument(skip(self, item))]
    pub async fn update_item_in_gallery(&self, id: &str, item_id: &str, item: ItemInput) -> Result<Gallery, ServiceError> {
        let mut gallery = self.load(parse_id(id)?).await?;
        if !gallery.update_item(item_id, item) {
            return Err(ServiceError::not_found("item"));
        }
        self.save(gallery).await
    }

    #[instrument(skip(self))]
    pub async fn delete_item_from_gallery(&self, id: &str, item_id: &str) -> Result<Gallery, ServiceError> {
        let mut gallery = self.load(parse_id(id)?).await?;
        if !gallery.remove_item(item_id) {
            return Err(ServiceError::not_found("item"));
        }
        self.save(gallery).await
    }

    async fn load(&self, id: Uuid) -> Result<Gallery, ServiceError> {
        bounded(self.timeout, "gallery.find_by_id", self.repo.find_by_id(id))
            .await?
            .ok_or_else(|| ServiceError::not_found("gallery"))
    }

    async fn save(&self, gallery: Gallery) -> Result<Gallery, ServiceError> {
        if !bounded(self.timeout, "gallery.replace", self.repo.replace(&gallery)).await? {
            return Err(ServiceError::not_found("gallery"));
        }
        Ok(gallery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::repository::mock::MockGalleryRepository;

    fn svc() -> (Arc<MockGalleryRepository>, GalleryService) {
        let repo = Arc::new(MockGalleryRepository::default());
        (repo.clone(), GalleryService::new(repo, Duration::from_secs(1)))
    }

    fn item(data: &str) -> ItemInput { ItemInput { id: None, image_data: Some(data.into()) } }

    fn named(name: &str, items: &[&str]) -> GalleryInput {
        GalleryInput { name: Some(name.into()), images: items.iter().map(|d| item(d)).collect() }
    }

    #[tokio::test]
    async fn items_can_be_added_updated_and_removed() -> Result<(), anyhow::Error> {
        let (_, svc) = svc();
        let g = svc.add_gallery(named("Weddings", &[])).await?;
        let id = g.id.to_string();

        let g = svc.add_items_to_gallery(&id, vec![item("a.png"), item("b.png")]).await?;
        assert_eq!(g.image_data(), vec![Some("a.png".into()), Some("b.png".into())]);
        let (first, second) = (g.images[0].id.clone(), g.images[1].id.clone());
        assert_ne!(first, second);

        let g = svc.update_item_in_gallery(&id, &first, item("c.png")).await?;
        assert_eq!(g.images[0].id, first);
        assert_eq!(g.image_data(), vec![Some("c.png".into()), Some("b.png".into())]);

        let g = svc.delete_item_from_gallery(&id, &second).await?;
        assert_eq!(g.image_data(), vec![Some("c.png".into())]);

        assert_eq!(svc.get_gallery_by_id(&id).await?, g);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_item_is_not_found_and_gallery_is_untouched() -> Result<(), anyhow::Error> {
        let (_, svc) = svc();
        let g = svc.add_gallery(named("Pool", &["a.png"])).await?;
        let id = g.id.to_string();

        assert!(matches!(svc.update_item_in_gallery(&id, "missing", item("x.png")).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete_item_from_gallery(&id, "missing").await, Err(ServiceError::NotFound(_))));
        assert_eq!(svc.get_gallery_by_id(&id).await?, g);
        Ok(())
    }

    #[tokio::test]
    async fn item_operations_on_unknown_gallery_are_not_found() {
        let (_, svc) = svc();
        let id = Uuid::new_v4().to_string();
        assert!(matches!(svc.add_items_to_gallery(&id, vec![item("a.png")]).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update_item_in_gallery(&id, "i", item("a.png")).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete_item_from_gallery(&id, "i").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update_gallery(&id, named("x", &[])).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.add_items_to_gallery("nope", vec![]).await, Err(ServiceError::InvalidId(_))));
    }

    #[tokio::test]
    async fn search_returns_first_exact_match() -> Result<(), anyhow::Error> {
        let (_, svc) = svc();
        let first = svc.add_gallery(named("Garden", &["1.png"])).await?;
        svc.add_gallery(named("Garden", &["2.png"])).await?;

        assert_eq!(svc.get_gallery_by_name("Garden").await?.id, first.id);
        assert!(matches!(svc.get_gallery_by_name("garden").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.get_gallery_by_name("Nowhere").await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_gallery_replaces_whole_document() -> Result<(), anyhow::Error> {
        let (_, svc) = svc();
        let g = svc.add_gallery(named("Hall", &["a.png", "b.png"])).await?;
        let kept = g.images[0].id.clone();

        let input = GalleryInput {
            name: Some("Main hall".into()),
            images: vec![ItemInput { id: Some(kept.clone()), image_data: Some("a2.png".into()) }, item("c.png")],
        };
        let updated = svc.update_gallery(&g.id.to_string(), input).await?;
        assert_eq!(updated.id, g.id);
        assert_eq!(updated.name.as_deref(), Some("Main hall"));
        assert_eq!(updated.images[0].id, kept);
        assert_eq!(updated.image_data(), vec![Some("a2.png".into()), Some("c.png".into())]);
        assert_eq!(svc.get_all_galleries().await?, vec![updated]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_gallery_is_idempotent() -> Result<(), anyhow::Error> {
        let (_, svc) = svc();
        let g = svc.add_gallery(named("Lobby", &[])).await?;
        let id = g.id.to_string();
        svc.delete_gallery(&id).await?;
        svc.delete_gallery(&id).await?;
        assert!(svc.get_all_galleries().await?.is_empty());
        assert!(matches!(svc.delete_gallery("bad-id").await, Err(ServiceError::InvalidId(_))));
        Ok(())
    }

    #[tokio::test]
    async fn store_outage_surfaces_as_db_error() -> Result<(), anyhow::Error> {
        let (repo, svc) = svc();
        let g = svc.add_gallery(named("Lobby", &["a.png"])).await?;
        repo.docs.set_unavailable(true);
        assert!(matches!(svc.add_items_to_gallery(&g.id.to_string(), vec![item("b.png")]).await, Err(ServiceError::Db(_))));
        assert!(matches!(svc.get_all_galleries().await, Err(ServiceError::Db(_))));
        Ok(())
    }
}
