use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{Contact, ContactInput};
use crate::errors::ServiceError;

/// Persistence for contact documents. The store assigns identifiers.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, input: ContactInput) -> Result<Contact, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Contact>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, ServiceError>;
    /// Replace every field of an existing document; `None` if absent.
    async fn replace(&self, id: Uuid, input: ContactInput) -> Result<Option<Contact>, ServiceError>;
    /// Returns whether a document was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::storage::{Document, MemoryCollection};

    impl Document for Contact {
        fn id(&self) -> Uuid { self.id }
    }

    #[derive(Default)]
    pub struct MockContactRepository {
        pub docs: MemoryCollection<Contact>,
    }

    #[async_trait]
    impl ContactRepository for MockContactRepository {
        async fn insert(&self, input: ContactInput) -> Result<Contact, ServiceError> {
            self.docs.insert(Contact::from_input(Uuid::new_v4(), input)).await
        }

        async fn find_all(&self) -> Result<Vec<Contact>, ServiceError> {
            self.docs.all().await
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, ServiceError> {
            self.docs.get(id).await
        }

        async fn replace(&self, id: Uuid, input: ContactInput) -> Result<Option<Contact>, ServiceError> {
            let doc = Contact::from_input(id, input);
            if self.docs.replace(doc.clone()).await? { Ok(Some(doc)) } else { Ok(None) }
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            self.docs.remove(id).await
        }
    }
}
