use actix_web::web::Data;
use actix_web::{get, HttpResponse};

use crate::error::{ApiError, ApiResult};
use crate::models::common::HealthResponse;
use crate::services::UserStore;

#[get("/health")]
pub async fn health_check(store: Data<dyn UserStore>) -> ApiResult<HttpResponse> {
    store.health_check().await.map_err(|e| {
        log::error!("health check failed: {}", e);
        ApiError::Unavailable("Database unavailable".to_string())
    })?;

    Ok(HttpResponse::Ok().json(HealthResponse { status: "ok" }))
}
