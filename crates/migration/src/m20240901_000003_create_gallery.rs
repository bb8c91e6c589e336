//! Create `gallery` table.
//! Items are embedded as a `jsonb` array so a gallery is stored as one document.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gallery::Table)
                    .if_not_exists()
                    .col(uuid(Gallery::Id).primary_key())
                    .col(text_null(Gallery::Name))
                    .col(json_binary(Gallery::Images).not_null())
                    .col(timestamp_with_time_zone(Gallery::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Gallery::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Gallery::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Gallery { Table, Id, Name, Images, CreatedAt, UpdatedAt }
