use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::with_store_timeout;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let email = body.email.clone();

    with_store_timeout(
        state.store_timeout,
        state.auth_service.register(body.email, body.password),
    )
    .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterResponseData {
            message: "Registration success".to_string(),
            email,
        },
    ))
}

/// HTTP request body for registration (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub message: String,
    pub email: String,
}
