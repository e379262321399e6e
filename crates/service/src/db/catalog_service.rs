use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set, TransactionTrait,
};
use tracing::warn;

use crate::errors::ServiceError;
use models::service;

/// Field values for a new catalog entry; `id` and both timestamps are always
/// assigned here, never by the caller.
#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
}

/// Fetch all services. Empty table yields an empty vec, not an error.
pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<service::Model>, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let rows = service::Entity::find()
        .all(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Create a service row and return it fully materialized.
pub async fn create_service(
    db: &DatabaseConnection,
    input: NewService,
) -> Result<service::Model, ServiceError> {
    service::validate_name(&input.name)?;
    service::validate_description(input.description.as_deref())?;
    service::validate_quantity(input.quantity)?;

    let now = Utc::now().into();
    let am = service::ActiveModel {
        id: NotSet,
        name: Set(input.name),
        description: Set(input.description),
        quantity: Set(input.quantity),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let created = am.insert(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(created)
}

/// Update the quantity of a service, refreshing `updated_at`.
pub async fn update_service_quantity(
    db: &DatabaseConnection,
    service_id: i32,
    quantity: i32,
) -> Result<service::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = service::Entity::find_by_id(service_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(found) = found else {
        if let Err(e) = txn.rollback().await {
            warn!(error = %e, service_id, "rollback failed");
        }
        return Err(ServiceError::not_found("service"));
    };
    let mut am: service::ActiveModel = found.into();
    am.quantity = Set(quantity);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}
