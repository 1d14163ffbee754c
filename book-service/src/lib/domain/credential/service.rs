use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Identity;
use auth::IssuedToken;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::CredentialRecord;
use crate::domain::credential::models::EmailAddress;
use crate::domain::credential::models::RegisterCommand;
use crate::domain::credential::ports::AuthServicePort;
use crate::domain::credential::ports::CredentialStore;

/// Domain service implementation for registration and login.
///
/// Every authenticated account receives the same privilege flag.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `authenticator` - Hashing and token issuance, holding the signing secret
    pub fn new(store: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn register(&self, email: String, password: String) -> Result<(), CredentialError> {
        let command = RegisterCommand::new(email, password)?;

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            run_blocking(move || authenticator.hash_password(password.expose())).await??;

        let record = CredentialRecord {
            email: command.email,
            password_hash,
        };
        let email = record.email.clone();

        self.store.create(record).await?;

        tracing::info!(email = %email, "Account registered");
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, CredentialError> {
        let Ok(email) = EmailAddress::new(email.to_string()) else {
            return Err(self.reject_unknown(password).await);
        };

        let Some(record) = self.store.find_by_email(&email).await? else {
            tracing::debug!(email = %email, "Login for unknown account");
            return Err(self.reject_unknown(password).await);
        };

        let identity = Identity::new(record.email.as_str(), true);
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();
        let issued = run_blocking(move || {
            authenticator.authenticate(&password, &record.password_hash, &identity)
        })
        .await?
        .map_err(|e| {
            if matches!(e, auth::AuthenticationError::InvalidCredentials) {
                tracing::debug!(email = %email, "Login with wrong password");
            }
            CredentialError::from(e)
        })?;

        tracing::info!(email = %email, "Login succeeded");
        Ok(issued)
    }
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Refuse a login with no matching account after the same hashing work as
    /// a wrong password.
    async fn reject_unknown(&self, password: &str) -> CredentialError {
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();

        match run_blocking(move || authenticator.reject_unknown(&password)).await {
            Ok(err) => CredentialError::from(err),
            Err(err) => err,
        }
    }
}

/// Run password hashing work on the blocking pool, off the async workers.
async fn run_blocking<T, F>(work: F) -> Result<T, CredentialError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| CredentialError::TaskFailed(e.to_string()))
}
