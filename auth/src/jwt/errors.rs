use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Signing secret is missing or empty")]
    MissingSecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),
}

/// Token rejected.
///
/// Deliberately carries no detail: malformed, forged and expired tokens are
/// indistinguishable to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unauthorized")]
pub struct Unauthorized;
