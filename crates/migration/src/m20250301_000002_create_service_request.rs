//! Create `service_request` table with FK to `service`.
//!
//! Tracks checkout/return requests and their approval status.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceRequest::Id))
                    .col(integer(ServiceRequest::ServiceId))
                    .col(string_len(ServiceRequest::RequesterName, 100))
                    .col(timestamp_with_time_zone(ServiceRequest::RequestDate))
                    .col(string_len(ServiceRequest::Status, 16).default("pending"))
                    .col(timestamp_with_time_zone(ServiceRequest::CreatedAt))
                    .col(timestamp_with_time_zone(ServiceRequest::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_servicerequest_service")
                            .from(ServiceRequest::Table, ServiceRequest::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceRequest::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceRequest { Table, Id, ServiceId, RequesterName, RequestDate, Status, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Service { Table, Id }
