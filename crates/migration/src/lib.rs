//! Migrator registering the document tables in creation order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_contact;
mod m20240901_000002_create_facility;
mod m20240901_000003_create_gallery;
mod m20240901_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_contact::Migration),
            Box::new(m20240901_000002_create_facility::Migration),
            Box::new(m20240901_000003_create_gallery::Migration),
            // Indexes should always be applied last
            Box::new(m20240901_000004_add_indexes::Migration),
        ]
    }
}
