use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::claims::Identity;
use super::errors::JwtError;
use super::handler::JwtHandler;
use crate::clock::Clock;

/// Fixed session lifetime, in hours, for every issued token.
pub const SESSION_LIFETIME_HOURS: i64 = 72;

/// Signed token together with the claims it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

impl IssuedToken {
    /// Instant after which the token is no longer accepted.
    ///
    /// Transports that persist the token (cookies) must expire at this same instant.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.claims.expires_at_utc()
    }
}

/// Builds and signs session tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    handler: Arc<JwtHandler>,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub fn new(handler: Arc<JwtHandler>, clock: Arc<dyn Clock>) -> Self {
        Self { handler, clock }
    }

    /// Issue a token for `identity`, valid for [`SESSION_LIFETIME_HOURS`] from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, identity: &Identity) -> Result<IssuedToken, JwtError> {
        let claims = Claims::for_identity(
            identity,
            self.clock.now(),
            Duration::hours(SESSION_LIFETIME_HOURS),
        );
        let token = self.handler.encode(&claims)?;

        tracing::debug!(
            subject = %claims.subject,
            expires_at = claims.expires_at,
            "Session token issued"
        );

        Ok(IssuedToken { token, claims })
    }
}
