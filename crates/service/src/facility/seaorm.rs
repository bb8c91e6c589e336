use async_trait::async_trait;
use chrono::Utc;
use models::facility::{self, Entity as FacilityEntity};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::domain::{Facility, FacilityInput};
use super::repository::FacilityRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmFacilityRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl FacilityRepository for SeaOrmFacilityRepository {
    async fn insert(&self, input: FacilityInput) -> Result<Facility, ServiceError> {
        let now = Utc::now();
        let am = facility::ActiveModel {
            id: Set(Uuid::new_v4()),
            heading: Set(input.heading),
            description: Set(input.description),
            image: Set(input.image),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        Ok(am.insert(&self.db).await?.into())
    }

    async fn find_all(&self) -> Result<Vec<Facility>, ServiceError> {
        let rows = FacilityEntity::find()
            .order_by_asc(facility::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Facility::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Facility>, ServiceError> {
        Ok(FacilityEntity::find_by_id(id).one(&self.db).await?.map(Facility::from))
    }

    async fn replace(&self, id: Uuid, input: FacilityInput) -> Result<Option<Facility>, ServiceError> {
        let Some(existing) = FacilityEntity::find_by_id(id).one(&self.db).await? else { return Ok(None); };
        let mut am: facility::ActiveModel = existing.into();
        am.heading = Set(input.heading);
        am.description = Set(input.description);
        am.image = Set(input.image);
        am.updated_at = Set(Utc::now().into());
        Ok(Some(am.update(&self.db).await?.into()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = FacilityEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{db_tests_enabled, get_db};

    #[tokio::test]
    async fn facility_crud_seaorm() -> Result<(), anyhow::Error> {
        if !db_tests_enabled() { return Ok(()); }
        let repo = SeaOrmFacilityRepository { db: get_db().await? };

        let pool = repo
            .insert(FacilityInput { heading: Some("Pool".into()), description: Some("Outdoor pool".into()), image: Some("pool.jpg".into()) })
            .await?;
        assert_eq!(repo.find_by_id(pool.id).await?.as_ref(), Some(&pool));

        let renamed = repo
            .replace(pool.id, FacilityInput { heading: Some("Infinity pool".into()), ..Default::default() })
            .await?
            .expect("existing row");
        assert_eq!(renamed.heading.as_deref(), Some("Infinity pool"));
        assert_eq!(renamed.image, None);

        assert!(repo.delete(pool.id).await?);
        assert!(repo.find_by_id(pool.id).await?.is_none());
        Ok(())
    }
}
