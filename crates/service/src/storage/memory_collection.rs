use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Anything stored in a [`MemoryCollection`].
pub trait Document: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

/// Generic in-memory document collection.
///
/// Keeps documents in insertion order and offers the same primitive
/// operations the SQL-backed repositories expose. Backs the mock
/// repositories used by tests and local demos.
pub struct MemoryCollection<T> {
    docs: RwLock<Vec<T>>,
    unavailable: AtomicBool,
}

impl<T: Document> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self { docs: RwLock::new(Vec::new()), unavailable: AtomicBool::new(false) }
    }
}

impl<T: Document> MemoryCollection<T> {
    pub fn new() -> Self { Self::default() }

    /// Make every following call fail with `ServiceError::Db`, as a broken
    /// connection would.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), ServiceError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ServiceError::Db("connection refused".into()));
        }
        Ok(())
    }

    pub async fn insert(&self, doc: T) -> Result<T, ServiceError> {
        self.check()?;
        self.docs.write().await.push(doc.clone());
        Ok(doc)
    }

    pub async fn all(&self) -> Result<Vec<T>, ServiceError> {
        self.check()?;
        Ok(self.docs.read().await.clone())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<T>, ServiceError> {
        self.check()?;
        Ok(self.docs.read().await.iter().find(|d| d.id() == id).cloned())
    }

    /// First document, in insertion order, matching `pred`.
    pub async fn find<P>(&self, pred: P) -> Result<Option<T>, ServiceError>
    where
        P: Fn(&T) -> bool,
    {
        self.check()?;
        Ok(self.docs.read().await.iter().find(|d| pred(d)).cloned())
    }

    /// Overwrite the document with the same id in place; false if absent.
    pub async fn replace(&self, doc: T) -> Result<bool, ServiceError> {
        self.check()?;
        let mut docs = self.docs.write().await;
        match docs.iter_mut().find(|d| d.id() == doc.id()) {
            Some(slot) => {
                *slot = doc;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove by id; returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.check()?;
        let mut docs = self.docs.write().await;
        let before = docs.len();
        docs.retain(|d| d.id() != id);
        Ok(docs.len() != before)
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: Uuid,
        text: &'static str,
    }

    impl Document for Note {
        fn id(&self) -> Uuid { self.id }
    }

    fn note(text: &'static str) -> Note { Note { id: Uuid::new_v4(), text } }

    #[tokio::test]
    async fn memory_collection_crud_keeps_insertion_order() -> Result<(), anyhow::Error> {
        let store = MemoryCollection::<Note>::new();
        assert!(store.is_empty().await);

        let a = store.insert(note("a")).await?;
        let b = store.insert(note("b")).await?;
        let texts: Vec<_> = store.all().await?.into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["a", "b"]);

        assert!(store.replace(Note { id: a.id, text: "a2" }).await?);
        assert_eq!(store.get(a.id).await?.unwrap().text, "a2");
        assert_eq!(store.all().await?[0].text, "a2");

        assert_eq!(store.find(|n| n.text == "b").await?.unwrap().id, b.id);
        assert!(store.find(|n| n.text == "zzz").await?.is_none());

        assert!(store.remove(b.id).await?);
        assert!(!store.remove(b.id).await?);
        assert_eq!(store.len().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn replace_of_unknown_id_is_reported() -> Result<(), anyhow::Error> {
        let store = MemoryCollection::<Note>::new();
        assert!(!store.replace(note("ghost")).await?);
        assert!(store.is_empty().await);
        Ok(())
    }

    #[tokio::test]
    async fn unavailable_collection_fails_every_call() {
        let store = MemoryCollection::<Note>::new();
        store.set_unavailable(true);
        assert!(matches!(store.all().await, Err(ServiceError::Db(_))));
        assert!(matches!(store.insert(note("x")).await, Err(ServiceError::Db(_))));
        store.set_unavailable(false);
        assert!(store.all().await.is_ok());
    }
}
