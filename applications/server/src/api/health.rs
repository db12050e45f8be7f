/// Health check API routes
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "melodia";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "melodia")]
    pub service: String,
    pub version: String,
}

/// GET /health
/// Liveness check; not wrapped in the data envelope
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
