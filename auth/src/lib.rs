//! Credential and session core
//!
//! Reusable authentication building blocks for HTTP services:
//! - Password hashing (Argon2id)
//! - Session token issuance and verification (HS512 JWT, fixed 72h lifetime)
//! - Request gate with pluggable admission policy
//!
//! Services own their credential storage and adapt these pieces to their
//! transport.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Identity, TokenLocation};
//! use http::{header, HeaderMap, HeaderValue};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let identity = Identity::new("alice@example.com", true);
//! let issued = auth.authenticate("password123", &hash, &identity).unwrap();
//!
//! // Gate a request carrying the token
//! let gate = auth.gate(TokenLocation::AuthorizationHeader);
//! let mut headers = HeaderMap::new();
//! let bearer = format!("Bearer {}", issued.token);
//! headers.insert(header::AUTHORIZATION, HeaderValue::from_str(&bearer).unwrap());
//!
//! let claims = gate.admit(&headers).unwrap();
//! assert_eq!(claims.subject, "alice@example.com");
//! ```

pub mod authenticator;
pub mod clock;
pub mod gate;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::SystemClock;
#[cfg(any(test, feature = "test-util"))]
pub use clock::ManualClock;
pub use gate::AdmissionPolicy;
pub use gate::RequestGate;
pub use gate::TokenLocation;
pub use jwt::Claims;
pub use jwt::Identity;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use jwt::TokenVerifier;
pub use jwt::Unauthorized;
pub use jwt::SESSION_LIFETIME_HOURS;
pub use password::PasswordError;
pub use password::PasswordHasher;
