use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{Gallery, Item};
use crate::errors::ServiceError;

/// Persistence for gallery documents; a gallery and its items are always
/// written together.
#[async_trait]
pub trait GalleryRepository: Send + Sync {
    async fn insert(&self, name: Option<String>, images: Vec<Item>) -> Result<Gallery, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Gallery>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Gallery>, ServiceError>;
    /// Earliest-created gallery whose name equals `name` exactly.
    async fn find_first_by_name(&self, name: &str) -> Result<Option<Gallery>, ServiceError>;
    /// Overwrite the stored document with `gallery`; false if it no longer exists.
    async fn replace(&self, gallery: &Gallery) -> Result<bool, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::storage::{Document, MemoryCollection};

    impl Document for Gallery {
        fn id(&self) -> Uuid { self.id }
    }

    #[derive(Default)]
    pub struct MockGalleryRepository {
        pub docs: MemoryCollection<Gallery>,
    }

    #[async_trait]
    impl GalleryRepository for MockGalleryRepository {
        async fn insert(&self, name: Option<String>, images: Vec<Item>) -> Result<Gallery, ServiceError> {
            self.docs.insert(Gallery { id: Uuid::new_v4(), name, images }).await
        }

        async fn find_all(&self) -> Result<Vec<Gallery>, ServiceError> {
            self.docs.all().await
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Gallery>, ServiceError> {
            self.docs.get(id).await
        }

        async fn find_first_by_name(&self, name: &str) -> Result<Option<Gallery>, ServiceError> {
            self.docs.find(|g| g.name.as_deref() == Some(name)).await
        }

        async fn replace(&self, gallery: &Gallery) -> Result<bool, ServiceError> {
            self.docs.replace(gallery.clone()).await
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            self.docs.remove(id).await
        }
    }
}
