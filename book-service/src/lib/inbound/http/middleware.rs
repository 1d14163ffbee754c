use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use super::handlers::ApiResponseBody;
use crate::inbound::http::router::AppState;

/// Identity attached to requests that passed the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub is_privileged: bool,
}

/// Middleware that runs the request gate and adds the caller's identity to request extensions
///
/// Every refusal gets the same 401 body, whatever the reason.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let claims = state
        .gate
        .admit(req.headers())
        .map_err(|_| unauthorized())?;

    req.extensions_mut().insert(AuthenticatedUser {
        email: claims.subject,
        is_privileged: claims.is_privileged,
    });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponseBody::new_error(
            StatusCode::UNAUTHORIZED,
            "Unauthorized".to_string(),
        )),
    )
        .into_response()
}
