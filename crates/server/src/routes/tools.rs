use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::ValidationRejection;
use crate::routes::ServerState;
use service::tools::envelope::ToolReply;
use service::tools::{catalog, requests};

#[derive(Debug, Deserialize)]
pub struct ModifyServiceQuantityArgs {
    pub service_id: i32,
    pub payload: catalog::UpdateServiceQuantity,
}

#[derive(Debug, Deserialize)]
pub struct CreateServiceRequestArgs {
    pub request: requests::CreateServiceRequest,
}

#[derive(Debug, Deserialize)]
pub struct UpdateServiceRequestStatusArgs {
    pub request_id: i32,
    pub payload: requests::UpdateServiceRequestStatus,
}

#[utoipa::path(
    post, path = "/tools/read_services", tag = "tools",
    responses((status = 200, description = "Envelope with the list of services"))
)]
pub async fn read_services(
    State(state): State<ServerState>,
) -> Json<ToolReply<Vec<models::service::Model>>> {
    Json(catalog::read_services(&state.db).await)
}

#[utoipa::path(
    post, path = "/tools/modify_service_quantity", tag = "tools",
    responses(
        (status = 200, description = "Envelope with the updated service, or an error envelope when the id matches no row"),
        (status = 422, description = "Negative quantity rejected before reaching the operation layer")
    )
)]
pub async fn modify_service_quantity(
    State(state): State<ServerState>,
    Json(args): Json<ModifyServiceQuantityArgs>,
) -> Result<Json<ToolReply<models::service::Model>>, ValidationRejection> {
    if args.payload.quantity < 0 {
        return Err(ValidationRejection("quantity must be >= 0".into()));
    }
    info!(service_id = args.service_id, quantity = args.payload.quantity, "modify_service_quantity");
    Ok(Json(catalog::modify_service_quantity(&state.db, args.service_id, args.payload).await))
}

#[utoipa::path(
    post, path = "/tools/read_service_requests", tag = "tools",
    responses((status = 200, description = "Envelope with the list of service requests"))
)]
pub async fn read_service_requests(
    State(state): State<ServerState>,
) -> Json<ToolReply<Vec<models::service_request::Model>>> {
    Json(requests::read_service_requests(&state.db).await)
}

#[utoipa::path(
    post, path = "/tools/create_service_request", tag = "tools",
    responses((status = 200, description = "Envelope with the created request, or a fault object on storage failure"))
)]
pub async fn create_service_request(
    State(state): State<ServerState>,
    Json(args): Json<CreateServiceRequestArgs>,
) -> Json<ToolReply<models::service_request::Model>> {
    info!(service_id = args.request.service_id, "create_service_request");
    Json(requests::create_service_request(&state.db, args.request).await)
}

#[utoipa::path(
    post, path = "/tools/update_service_request_status", tag = "tools",
    responses(
        (status = 200, description = "Envelope with the updated request, or a fault object when the id matches no row"),
        (status = 422, description = "Unknown status label rejected during deserialization")
    )
)]
pub async fn update_service_request_status(
    State(state): State<ServerState>,
    Json(args): Json<UpdateServiceRequestStatusArgs>,
) -> Json<ToolReply<models::service_request::Model>> {
    info!(request_id = args.request_id, "update_service_request_status");
    Json(
        requests::modify_service_request_status(&state.db, args.request_id, args.payload).await,
    )
}
