//! Lookup indexes: gallery search by name, and creation order for listings.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_gallery_name")
                    .table(Gallery::Table)
                    .col(Gallery::Name)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_created_at")
                    .table(Contact::Table)
                    .col(Contact::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contact_created_at").table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_gallery_name").table(Gallery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Gallery { Table, Name }

#[derive(DeriveIden)]
enum Contact { Table, CreatedAt }
