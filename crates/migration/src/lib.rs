//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_service;
mod m20250301_000002_create_service_request;
mod m20250301_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_service::Migration),
            Box::new(m20250301_000002_create_service_request::Migration),
            // Indexes should always be applied last
            Box::new(m20250301_000003_add_indexes::Migration),
        ]
    }
}
