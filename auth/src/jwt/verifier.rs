use std::sync::Arc;

use super::claims::Claims;
use super::errors::Unauthorized;
use super::handler::JwtHandler;
use crate::clock::Clock;

/// Validates presented tokens and extracts their claims.
#[derive(Clone)]
pub struct TokenVerifier {
    handler: Arc<JwtHandler>,
    clock: Arc<dyn Clock>,
}

impl TokenVerifier {
    pub fn new(handler: Arc<JwtHandler>, clock: Arc<dyn Clock>) -> Self {
        Self { handler, clock }
    }

    /// Verify signature and expiry of `token`.
    ///
    /// # Returns
    /// Claims of a correctly signed token whose expiry is strictly after now
    ///
    /// # Errors
    /// * `Unauthorized` - Malformed, forged or expired token
    pub fn verify(&self, token: &str) -> Result<Claims, Unauthorized> {
        let claims: Claims = self.handler.decode(token).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            Unauthorized
        })?;

        if claims.is_expired(self.clock.now().timestamp()) {
            tracing::debug!(
                subject = %claims.subject,
                expires_at = claims.expires_at,
                "Token rejected: expired"
            );
            return Err(Unauthorized);
        }

        Ok(claims)
    }
}
