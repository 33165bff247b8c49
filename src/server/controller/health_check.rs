use axum::http::StatusCode;

use crate::model::api::{Empty, ServiceResponse};

/// Tag for grouping health check endpoints in OpenAPI documentation
pub static HEALTH_CHECK_TAG: &str = "Health Check";

/// Report that the service is up.
///
/// Does not touch the database.
#[utoipa::path(
    get,
    path = "/api/health-check",
    tag = HEALTH_CHECK_TAG,
    operation_id = "healthCheck",
    responses(
        (status = 200, description = "Service is healthy", body = ServiceResponse<Empty>)
    ),
)]
pub async fn health_check() -> ServiceResponse<Empty> {
    ServiceResponse::success(StatusCode::OK, "Service is healthy", Empty)
}
