//! Create `facility` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Facility::Table)
                    .if_not_exists()
                    .col(uuid(Facility::Id).primary_key())
                    .col(text_null(Facility::Heading))
                    .col(text_null(Facility::Description))
                    .col(text_null(Facility::Image))
                    .col(timestamp_with_time_zone(Facility::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Facility::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Facility::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Facility { Table, Id, Heading, Description, Image, CreatedAt, UpdatedAt }
