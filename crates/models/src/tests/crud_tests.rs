use anyhow::Result;
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};
use uuid::Uuid;

use crate::{db, service, service_request};

/// Setup test database with migrations
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(None);
        }
    };
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

/// Test service entity CRUD operations
#[tokio::test]
async fn test_service_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let name = format!("test_service_{}", Uuid::new_v4());
    let now = Utc::now().into();
    let created = service::ActiveModel {
        id: NotSet,
        name: Set(name.clone()),
        description: Set(None),
        quantity: Set(5),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;

    assert_eq!(created.name, name);
    assert_eq!(created.quantity, 5);

    // Read back by id
    let found = service::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);

    // Find by indexed name
    let by_name = service::Entity::find()
        .filter(service::Column::Name.eq(name.clone()))
        .one(&db)
        .await?;
    assert_eq!(by_name.unwrap().id, created.id);

    // Update the single mutable field
    let mut am: service::ActiveModel = found.into();
    am.quantity = Set(2);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.quantity, 2);
    assert!(updated.quantity >= 0);
    assert!(updated.updated_at >= updated.created_at);

    Ok(())
}

/// Test service_request entity CRUD and the schema-level status default
#[tokio::test]
async fn test_service_request_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let now = Utc::now().into();
    let item = service::ActiveModel {
        id: NotSet,
        name: Set(format!("request_target_{}", Uuid::new_v4())),
        description: Set(Some("crud fixture".into())),
        quantity: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;

    // Leave status unset so the column default applies
    let created = service_request::ActiveModel {
        id: NotSet,
        service_id: Set(item.id),
        requester_name: Set("Alice".into()),
        request_date: Set(now),
        status: NotSet,
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;
    assert_eq!(created.status, service_request::ServiceStatus::Pending);
    assert_eq!(created.requester_name, "Alice");

    let found = service_request::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());

    let mut am: service_request::ActiveModel = found.unwrap().into();
    am.status = Set(service_request::ServiceStatus::Returned);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.status, service_request::ServiceStatus::Returned);

    Ok(())
}

#[test]
fn validate_name_rejects_empty_and_oversized() {
    assert!(service::validate_name("Laptop").is_ok());
    assert!(service::validate_name("  ").is_err());
    assert!(service::validate_name(&"x".repeat(service::NAME_MAX_LEN + 1)).is_err());
}

#[test]
fn validate_quantity_rejects_negative() {
    assert!(service::validate_quantity(0).is_ok());
    assert!(service::validate_quantity(42).is_ok());
    assert!(service::validate_quantity(-1).is_err());
}

#[test]
fn validate_requester_name_bounds() {
    assert!(service_request::validate_requester_name("Alice").is_ok());
    assert!(service_request::validate_requester_name("").is_err());
    let long = "y".repeat(service_request::REQUESTER_NAME_MAX_LEN + 1);
    assert!(service_request::validate_requester_name(&long).is_err());
}

#[test]
fn status_serializes_as_lowercase_label() {
    let s = serde_json::to_string(&service_request::ServiceStatus::Approved).unwrap();
    assert_eq!(s, "\"approved\"");
    let parsed: service_request::ServiceStatus = serde_json::from_str("\"returned\"").unwrap();
    assert_eq!(parsed, service_request::ServiceStatus::Returned);
}
