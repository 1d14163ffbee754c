use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use super::with_store_timeout;
use super::ApiError;
use super::ApiSuccess;
use crate::config::SessionConfig;
use crate::config::TokenTransport;
use crate::inbound::http::router::AppState;

/// Check credentials and hand out a session token.
///
/// Header deployments get the token in the body. Cookie deployments get an
/// `HttpOnly` cookie expiring together with the token and no token in the body.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, ApiSuccess<LoginResponseData>), ApiError> {
    let issued = with_store_timeout(
        state.store_timeout,
        state.auth_service.login(&body.email, &body.password),
    )
    .await?;

    let expires_at = issued.expires_at();

    let (jar, token) = match state.session.token_location {
        TokenTransport::Header => (jar, Some(issued.token)),
        TokenTransport::Cookie => {
            let cookie = session_cookie(&state.session, issued.token, issued.claims.expires_at)?;
            (jar.add(cookie), None)
        }
    };

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                message: "Login success".to_string(),
                token,
                expires_at,
            },
        ),
    ))
}

fn session_cookie(
    session: &SessionConfig,
    token: String,
    expires_at: i64,
) -> Result<Cookie<'static>, ApiError> {
    let expires = OffsetDateTime::from_unix_timestamp(expires_at).map_err(ApiError::internal)?;

    Ok(Cookie::build((session.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(session.secure_cookie)
        .same_site(SameSite::Lax)
        .expires(expires)
        .build())
}

/// HTTP request body for login (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub expires_at: DateTime<Utc>,
}
