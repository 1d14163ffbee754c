use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email address is empty")]
    Empty,

    #[error("Email address too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for password policy violations.
///
/// Reports lengths only, never the password itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password is empty")]
    Empty,

    #[error("Password too long: maximum {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for credential operations
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    // Validation errors (automatically converted via #[from])
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    // Domain-level errors
    #[error("Email already registered: {0}")]
    EmailAlreadyRegistered(String),

    /// Unknown account and wrong password both end up here.
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

impl From<auth::AuthenticationError> for CredentialError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => CredentialError::InvalidCredentials,
            auth::AuthenticationError::PasswordError(e) => CredentialError::Password(e),
            auth::AuthenticationError::JwtError(e) => CredentialError::Token(e),
        }
    }
}
