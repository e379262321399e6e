use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(utoipa::ToSchema)]
pub struct ServiceRequestDoc {
    pub id: i32,
    pub service_id: i32,
    pub requester_name: String,
    pub request_date: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateServiceQuantityDoc { pub quantity: i32 }

#[derive(utoipa::ToSchema)]
pub struct CreateServiceRequestDoc {
    pub service_id: i32,
    pub requester_name: String,
    pub request_date: Option<String>,
    pub status: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateServiceRequestStatusDoc { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct ToolFaultDoc { pub code: i32, pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::tools::read_services,
        crate::routes::tools::modify_service_quantity,
        crate::routes::tools::read_service_requests,
        crate::routes::tools::create_service_request,
        crate::routes::tools::update_service_request_status,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceDoc,
            ServiceRequestDoc,
            UpdateServiceQuantityDoc,
            CreateServiceRequestDoc,
            UpdateServiceRequestStatusDoc,
            ToolFaultDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "tools")
    )
)]
pub struct ApiDoc;

/// Serve the generated schema document at `/openapi.json`.
pub async fn openapi_schema() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
