use async_trait::async_trait;
use auth::IssuedToken;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::CredentialRecord;
use crate::domain::credential::models::EmailAddress;

/// Port for registration and login.
///
/// Operations are cancel-safe: callers bound them with `tokio::time::timeout`
/// and dropping the future abandons the pending store call.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `email` - Raw email; validated here
    /// * `password` - Raw plaintext password; validated and hashed here
    ///
    /// # Returns
    /// Unit on success. No token is issued.
    ///
    /// # Errors
    /// * `InvalidEmail` / `InvalidPassword` - Input rejected
    /// * `EmailAlreadyRegistered` - Email is already taken
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, email: String, password: String) -> Result<(), CredentialError>;

    /// Check credentials and issue a session token.
    ///
    /// # Returns
    /// Signed token for `{ subject: email, is_privileged: true }`
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, malformed email or wrong password
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, CredentialError>;
}

/// Persistence operations for credential records.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a credential record by email.
    ///
    /// # Returns
    /// Optional record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<CredentialRecord>, CredentialError>;

    /// Persist a new credential record.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Uniqueness violation on email
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, record: CredentialRecord) -> Result<(), CredentialError>;
}
