use std::{sync::Arc, time::Duration};

use tracing::{info, instrument};

use super::domain::{Contact, ContactInput};
use super::notification;
use super::repository::ContactRepository;
use crate::errors::ServiceError;
use crate::mail::Notifier;
use crate::store::{bounded, parse_id};

/// Contact inquiry use cases.
///
/// # Examples
/// ```
/// use std::{sync::Arc, time::Duration};
/// use service::contact::{ContactService, domain::ContactInput, repository::mock::MockContactRepository};
/// use service::mail::{mock::RecordingTransport, DispatchMode, Notifier};
///
/// let mail = Arc::new(RecordingTransport::new());
/// let notifier = Notifier::new(mail.clone(), Duration::from_secs(1), DispatchMode::Inline);
/// let svc = ContactService::new(Arc::new(MockContactRepository::default()), notifier, Duration::from_secs(1));
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let c = rt.block_on(svc.add_contact(ContactInput { email: Some("a@b.c".into()), ..Default::default() })).unwrap();
/// let done = ContactInput { email: Some("a@b.c".into()), status: Some("DONE".into()), ..Default::default() };
/// rt.block_on(svc.update_contact(&c.id.to_string(), done)).unwrap();
/// assert_eq!(mail.sent().len(), 1);
/// ```
pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
    notifier: Notifier,
    timeout: Duration,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>, notifier: Notifier, timeout: Duration) -> Self {
        Self { repo, notifier, timeout }
    }

    #[instrument(skip(self, input))]
    pub async fn add_contact(&self, input: ContactInput) -> Result<Contact, ServiceError> {
        let created = bounded(self.timeout, "contact.insert", self.repo.insert(input)).await?;
        info!(id = %created.id, "contact_created");
        Ok(created)
    }

    pub async fn get_all_contacts(&self) -> Result<Vec<Contact>, ServiceError> {
        bounded(self.timeout, "contact.find_all", self.repo.find_all()).await
    }

    pub async fn get_contact_by_id(&self, id: &str) -> Result<Contact, ServiceError> {
        let id = parse_id(id)?;
        bounded(self.timeout, "contact.find_by_id", self.repo.find_by_id(id))
            .await?
            .ok_or_else(|| ServiceError::not_found("contact"))
    }

    /// Replace the stored contact. If the new status is `done` the
    /// resolution notice goes out; its outcome never affects the result.
    #[instrument(skip(self, input))]
    pub async fn update_contact(&self, id: &str, input: ContactInput) -> Result<Contact, ServiceError> {
        let id = parse_id(id)?;
        let updated = bounded(self.timeout, "contact.replace", self.repo.replace(id, input))
            .await?
            .ok_or_else(|| ServiceError::not_found("contact"))?;
        info!(id = %updated.id, status = updated.status.as_deref().unwrap_or(""), "contact_updated");

        if let Some(mail) = notification::resolution_notice(&updated) {
            self.notifier.dispatch(mail).await;
        }
        Ok(updated)
    }

    /// Removing an absent contact is not an error.
    pub async fn delete_contact(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        let existed = bounded(self.timeout, "contact.delete", self.repo.delete(id)).await?;
        info!(id = %id, existed, "contact_deleted");
        Ok(())
    }
}
