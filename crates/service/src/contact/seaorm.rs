use async_trait::async_trait;
use chrono::Utc;
use models::contact::{self, Entity as ContactEntity};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::domain::{Contact, ContactInput};
use super::repository::ContactRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmContactRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn insert(&self, input: ContactInput) -> Result<Contact, ServiceError> {
        let now = Utc::now();
        let am = contact::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email),
            event: Set(input.event),
            status: Set(input.status),
            reply_note: Set(input.reply_note),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        Ok(am.insert(&self.db).await?.into())
    }

    async fn find_all(&self) -> Result<Vec<Contact>, ServiceError> {
        let rows = ContactEntity::find()
            .order_by_asc(contact::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, ServiceError> {
        Ok(ContactEntity::find_by_id(id).one(&self.db).await?.map(Contact::from))
    }

    async fn replace(&self, id: Uuid, input: ContactInput) -> Result<Option<Contact>, ServiceError> {
        let Some(existing) = ContactEntity::find_by_id(id).one(&self.db).await? else { return Ok(None); };
        let mut am: contact::ActiveModel = existing.into();
        am.name = Set(input.name);
        am.email = Set(input.email);
        am.event = Set(input.event);
        am.status = Set(input.status);
        am.reply_note = Set(input.reply_note);
        am.updated_at = Set(Utc::now().into());
        Ok(Some(am.update(&self.db).await?.into()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = ContactEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{db_tests_enabled, get_db};

    #[tokio::test]
    async fn contact_crud_seaorm() -> Result<(), anyhow::Error> {
        if !db_tests_enabled() { return Ok(()); }
        let repo = SeaOrmContactRepository { db: get_db().await? };

        let created = repo
            .insert(ContactInput { name: Some("Ayesha".into()), event: Some("Wedding".into()), ..Default::default() })
            .await?;
        assert_eq!(created.name.as_deref(), Some("Ayesha"));

        let found = repo.find_by_id(created.id).await?.expect("inserted row");
        assert_eq!(found, created);
        assert!(repo.find_all().await?.iter().any(|c| c.id == created.id));

        let replaced = repo
            .replace(created.id, ContactInput { status: Some("done".into()), ..Default::default() })
            .await?
            .expect("existing row");
        assert_eq!(replaced.status.as_deref(), Some("done"));
        assert_eq!(replaced.name, None);

        assert!(repo.replace(Uuid::new_v4(), ContactInput::default()).await?.is_none());
        assert!(repo.delete(created.id).await?);
        assert!(!repo.delete(created.id).await?);
        Ok(())
    }
}
