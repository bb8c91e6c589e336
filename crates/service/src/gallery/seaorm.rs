use async_trait::async_trait;
use chrono::Utc;
use models::gallery::{self, Entity as GalleryEntity};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::domain::{Gallery, Item};
use super::repository::GalleryRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation; items live in the `images` jsonb column.
pub struct SeaOrmGalleryRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: gallery::Model) -> Result<Gallery, ServiceError> {
    Ok(Gallery::try_from(m)?)
}

#[async_trait]
impl GalleryRepository for SeaOrmGalleryRepository {
    async fn insert(&self, name: Option<String>, images: Vec<Item>) -> Result<Gallery, ServiceError> {
        let now = Utc::now();
        let am = gallery::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            images: Set(gallery::encode_items(&images)?),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        to_domain(am.insert(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<Gallery>, ServiceError> {
        GalleryEntity::find()
            .order_by_asc(gallery::Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Gallery>, ServiceError> {
        GalleryEntity::find_by_id(id).one(&self.db).await?.map(to_domain).transpose()
    }

    async fn find_first_by_name(&self, name: &str) -> Result<Option<Gallery>, ServiceError> {
        GalleryEntity::find()
            .filter(gallery::Column::Name.eq(name))
            .order_by_asc(gallery::Column::CreatedAt)
            .one(&self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    async fn replace(&self, g: &Gallery) -> Result<bool, ServiceError> {
        let Some(existing) = GalleryEntity::find_by_id(g.id).one(&self.db).await? else { return Ok(false); };
        let mut am: gallery::ActiveModel = existing.into();
        am.name = Set(g.name.clone());
        am.images = Set(gallery::encode_items(&g.images)?);
        am.updated_at = Set(Utc::now().into());
        am.update(&self.db).await?;
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = GalleryEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{db_tests_enabled, get_db};

    #[tokio::test]
    async fn gallery_document_round_trip_seaorm() -> Result<(), anyhow::Error> {
        if !db_tests_enabled() { return Ok(()); }
        let repo = SeaOrmGalleryRepository { db: get_db().await? };
        let name = format!("seaorm_gallery_{}", Uuid::new_v4());

        let mut g = repo.insert(Some(name.clone()), vec![Item::fresh(Some("a.png".into()))]).await?;
        assert_eq!(repo.find_first_by_name(&name).await?.map(|x| x.id), Some(g.id));

        g.images.push(Item::fresh(Some("b.png".into())));
        assert!(repo.replace(&g).await?);
        let stored = repo.find_by_id(g.id).await?.expect("stored gallery");
        assert_eq!(stored.image_data(), vec![Some("a.png".into()), Some("b.png".into())]);

        assert!(repo.delete(g.id).await?);
        assert!(!repo.replace(&g).await?);
        Ok(())
    }
}
