use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Service: index on name
        manager
            .create_index(
                Index::create()
                    .name("idx_service_name")
                    .table(Service::Table)
                    .col(Service::Name)
                    .to_owned(),
            )
            .await?;

        // ServiceRequest: index on service_id
        manager
            .create_index(
                Index::create()
                    .name("idx_servicerequest_service")
                    .table(ServiceRequest::Table)
                    .col(ServiceRequest::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_service_name").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_servicerequest_service").table(ServiceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Service { Table, Name }

#[derive(DeriveIden)]
enum ServiceRequest { Table, ServiceId }
