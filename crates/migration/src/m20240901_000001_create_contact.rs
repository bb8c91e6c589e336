//! Create `contact` table.
//! One row per inquiry; every user-supplied field is optional free text.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(uuid(Contact::Id).primary_key())
                    .col(text_null(Contact::Name))
                    .col(text_null(Contact::Email))
                    .col(text_null(Contact::Event))
                    .col(text_null(Contact::Status))
                    .col(text_null(Contact::ReplyNote))
                    .col(timestamp_with_time_zone(Contact::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Contact::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact {
    Table,
    Id,
    Name,
    Email,
    Event,
    Status,
    ReplyNote,
    CreatedAt,
    UpdatedAt,
}
