use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set, TransactionTrait,
};
use tracing::warn;

use crate::errors::ServiceError;
use models::service_request::{self, ServiceStatus};

/// Field values for a new request. `request_date` and `status` fall back to
/// now/pending; `id` and both timestamps are always assigned here.
#[derive(Debug, Clone)]
pub struct NewServiceRequest {
    pub service_id: i32,
    pub requester_name: String,
    pub request_date: Option<chrono::DateTime<chrono::FixedOffset>>,
    pub status: Option<ServiceStatus>,
}

/// Fetch all service requests. Empty table yields an empty vec, not an error.
pub async fn list_service_requests(
    db: &DatabaseConnection,
) -> Result<Vec<service_request::Model>, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let rows = service_request::Entity::find()
        .all(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Create a service request. Referential integrity of `service_id` is left to
/// the storage engine; a violation surfaces as `ServiceError::Db`.
pub async fn create_service_request(
    db: &DatabaseConnection,
    input: NewServiceRequest,
) -> Result<service_request::Model, ServiceError> {
    service_request::validate_requester_name(&input.requester_name)?;

    let now = Utc::now().into();
    let am = service_request::ActiveModel {
        id: NotSet,
        service_id: Set(input.service_id),
        requester_name: Set(input.requester_name),
        request_date: Set(input.request_date.unwrap_or(now)),
        status: Set(input.status.unwrap_or_default()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let created = am.insert(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(created)
}

/// Update the status of a service request, refreshing `updated_at`.
pub async fn update_service_request_status(
    db: &DatabaseConnection,
    request_id: i32,
    status: ServiceStatus,
) -> Result<service_request::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = service_request::Entity::find_by_id(request_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(found) = found else {
        if let Err(e) = txn.rollback().await {
            warn!(error = %e, request_id, "rollback failed");
        }
        return Err(ServiceError::not_found("service request"));
    };
    let mut am: service_request::ActiveModel = found.into();
    am.status = Set(status);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}
