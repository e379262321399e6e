/// CRUD operations tests for both entities
pub mod crud_tests;

/// Integration tests combining both entities
pub mod integration_tests {
    use anyhow::Result;
    use migration::MigratorTrait;
    use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
    use chrono::Utc;
    use uuid::Uuid;

    use crate::{db, service, service_request};

    /// Test complete workflow: service -> request -> status change
    #[tokio::test]
    async fn test_checkout_workflow() -> Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = match db::connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        migration::Migrator::up(&db, None).await?;

        let now = Utc::now().into();
        let item = service::ActiveModel {
            id: NotSet,
            name: Set(format!("workflow_item_{}", Uuid::new_v4())),
            description: Set(Some("integration fixture".into())),
            quantity: Set(3),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&db)
        .await?;
        assert!(item.quantity >= 0);

        let req = service_request::ActiveModel {
            id: NotSet,
            service_id: Set(item.id),
            requester_name: Set("Workflow User".into()),
            request_date: Set(now),
            status: Set(service_request::ServiceStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&db)
        .await?;
        assert_eq!(req.status, service_request::ServiceStatus::Pending);
        assert_eq!(req.service_id, item.id);

        let mut am: service_request::ActiveModel = req.into();
        am.status = Set(service_request::ServiceStatus::Approved);
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&db).await?;
        assert_eq!(updated.status, service_request::ServiceStatus::Approved);
        assert!(updated.updated_at >= updated.created_at);

        Ok(())
    }
}
