use axum::Json;
use taskforge_domain::Timestamp;

use crate::dto::response::{HealthResponse, SERVICE_NAME};

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: SERVICE_NAME.to_string(),
        status: "ok".to_string(),
        timestamp: Timestamp::now().to_string(),
    })
}
