use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{Facility, FacilityInput};
use crate::errors::ServiceError;

#[async_trait]
pub trait FacilityRepository: Send + Sync {
    async fn insert(&self, input: FacilityInput) -> Result<Facility, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Facility>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Facility>, ServiceError>;
    async fn replace(&self, id: Uuid, input: FacilityInput) -> Result<Option<Facility>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::storage::{Document, MemoryCollection};

    impl Document for Facility {
        fn id(&self) -> Uuid { self.id }
    }

    #[derive(Default)]
    pub struct MockFacilityRepository {
        pub docs: MemoryCollection<Facility>,
    }

    #[async_trait]
    impl FacilityRepository for MockFacilityRepository {
        async fn insert(&self, input: FacilityInput) -> Result<Facility, ServiceError> {
            self.docs.insert(Facility::from_input(Uuid::new_v4(), input)).await
        }

        async fn find_all(&self) -> Result<Vec<Facility>, ServiceError> {
            self.docs.all().await
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Facility>, ServiceError> {
            self.docs.get(id).await
        }

        async fn replace(&self, id: Uuid, input: FacilityInput) -> Result<Option<Facility>, ServiceError> {
            let doc = Facility::from_input(id, input);
            if self.docs.replace(doc.clone()).await? { Ok(Some(doc)) } else { Ok(None) }
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            self.docs.remove(id).await
        }
    }
}
