use axum::Json;
use common::search_result::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { message: "OK".to_string() })
}
