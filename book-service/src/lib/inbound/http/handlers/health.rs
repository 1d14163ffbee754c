use axum::http::StatusCode;

use super::ApiSuccess;

pub async fn health() -> ApiSuccess<String> {
    ApiSuccess::new(StatusCode::OK, "Server is healthy.".to_string())
}
