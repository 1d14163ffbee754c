use std::sync::Arc;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::gate::RequestGate;
use crate::gate::TokenLocation;
use crate::jwt::Claims;
use crate::jwt::Identity;
use crate::jwt::IssuedToken;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenVerifier;
use crate::jwt::Unauthorized;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Plaintext behind the digest checked when no account matches a login.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Authentication coordinator combining password verification and token handling.
///
/// Holds the process-wide signing secret; built once at startup and shared.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
    decoy_digest: Option<String>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator on the system clock.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    pub fn new(jwt_secret: &[u8]) -> Result<Self, JwtError> {
        Self::with_clock(jwt_secret, Arc::new(SystemClock))
    }

    /// Create a new authenticator reading time from `clock`.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    pub fn with_clock(jwt_secret: &[u8], clock: Arc<dyn Clock>) -> Result<Self, JwtError> {
        let handler = Arc::new(JwtHandler::new(jwt_secret)?);
        let password_hasher = PasswordHasher::new();
        let decoy_digest = password_hasher.hash(DECOY_PASSWORD).ok();

        Ok(Self {
            password_hasher,
            issuer: TokenIssuer::new(Arc::clone(&handler), Arc::clone(&clock)),
            verifier: TokenVerifier::new(handler, clock),
            decoy_digest,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password digest
    /// * `identity` - Identity to encode in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored digest is malformed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        identity: &Identity,
    ) -> Result<IssuedToken, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issuer.issue(identity)?)
    }

    /// Refuse a login that has no stored digest to check against.
    ///
    /// Verifies `password` against a decoy digest first, so an unknown account
    /// costs the same hashing work as a wrong password.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        if let Some(digest) = &self.decoy_digest {
            let _ = self.password_hasher.verify(password, digest);
        }
        AuthenticationError::InvalidCredentials
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, identity: &Identity) -> Result<IssuedToken, JwtError> {
        self.issuer.issue(identity)
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `Unauthorized` - Token is malformed, forged or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, Unauthorized> {
        self.verifier.verify(token)
    }

    /// Build a request gate reading tokens from `location`.
    pub fn gate(&self, location: TokenLocation) -> RequestGate {
        RequestGate::new(self.verifier.clone(), location)
    }
}
