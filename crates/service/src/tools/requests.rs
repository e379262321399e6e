use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::request_service::{self, NewServiceRequest};
use crate::errors::ServiceError;
use crate::tools::envelope::ToolReply;
use models::service_request::{self, ServiceStatus};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateServiceRequest {
    pub service_id: i32,
    pub requester_name: String,
    #[serde(default)]
    pub request_date: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(default)]
    pub status: Option<ServiceStatus>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateServiceRequestStatus {
    pub status: ServiceStatus,
}

/// Fetch all service requests; same swallow policy as `read_services`.
pub async fn read_service_requests(
    db: &DatabaseConnection,
) -> ToolReply<Vec<service_request::Model>> {
    match request_service::list_service_requests(db).await {
        Ok(rows) => ToolReply::success("Service requests retrieved successfully.", rows),
        Err(e) => {
            error!(error = %e, "error fetching service requests");
            ToolReply::success("Service requests retrieved successfully.", Vec::new())
        }
    }
}

/// Create a service request; any failure surfaces as the `{error}` shape.
pub async fn create_service_request(
    db: &DatabaseConnection,
    request: CreateServiceRequest,
) -> ToolReply<service_request::Model> {
    let input = NewServiceRequest {
        service_id: request.service_id,
        requester_name: request.requester_name,
        request_date: request.request_date,
        status: request.status,
    };
    match request_service::create_service_request(db, input).await {
        Ok(row) => ToolReply::success("Service request created successfully.", row),
        Err(e) => {
            error!(error = %e, "error creating service request");
            ToolReply::fault(-1, e.to_string())
        }
    }
}

/// Update the status of a service request. Unlike the quantity operation,
/// this one reports not-found through the `{error}` shape.
pub async fn modify_service_request_status(
    db: &DatabaseConnection,
    request_id: i32,
    payload: UpdateServiceRequestStatus,
) -> ToolReply<service_request::Model> {
    match request_service::update_service_request_status(db, request_id, payload.status).await {
        Ok(row) => ToolReply::success("Service request status updated successfully.", row),
        Err(ServiceError::NotFound(_)) => ToolReply::fault(-1, "Service request not found"),
        Err(e @ ServiceError::Db(_)) => {
            error!(error = %e, request_id, "error updating service request status");
            ToolReply::fault(-1, "Service request not found")
        }
        Err(e) => ToolReply::fault(-1, e.to_string()),
    }
}
