use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::catalog_service;
use crate::errors::ServiceError;
use crate::tools::envelope::ToolReply;
use models::service;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateServiceQuantity {
    pub quantity: i32,
}

/// Fetch all services. A storage failure is logged and reported as an empty
/// list under a success envelope; callers cannot tell the two apart.
pub async fn read_services(db: &DatabaseConnection) -> ToolReply<Vec<service::Model>> {
    match catalog_service::list_services(db).await {
        Ok(rows) => ToolReply::success("Services retrieved successfully.", rows),
        Err(e) => {
            error!(error = %e, "error fetching services");
            ToolReply::success("Services retrieved successfully.", Vec::new())
        }
    }
}

/// Update the quantity of a service. Not-found and storage failure collapse
/// into the same error envelope.
pub async fn modify_service_quantity(
    db: &DatabaseConnection,
    service_id: i32,
    payload: UpdateServiceQuantity,
) -> ToolReply<service::Model> {
    match catalog_service::update_service_quantity(db, service_id, payload.quantity).await {
        Ok(row) => ToolReply::success("Service quantity updated successfully.", row),
        Err(ServiceError::NotFound(_)) => ToolReply::error("Service not found"),
        Err(e @ ServiceError::Db(_)) => {
            error!(error = %e, service_id, "error updating service quantity");
            ToolReply::error("Service not found")
        }
        Err(e) => ToolReply::fault(-1, e.to_string()),
    }
}
