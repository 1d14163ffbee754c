use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::CredentialRecord;
use crate::domain::credential::models::EmailAddress;
use crate::domain::credential::ports::CredentialStore;

/// Credential store backed by the `credentials` table.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<CredentialRecord>, CredentialError> {
        let row: Option<(String, String)> = sqlx::query_as(
            r#"
            SELECT email, password_hash
            FROM credentials
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;

        match row {
            Some((email, password_hash)) => Ok(Some(CredentialRecord {
                email: EmailAddress::new(email)?,
                password_hash,
            })),
            None => Ok(None),
        }
    }

    async fn create(&self, record: CredentialRecord) -> Result<(), CredentialError> {
        sqlx::query(
            r#"
            INSERT INTO credentials (email, password_hash)
            VALUES ($1, $2)
            "#,
        )
        .bind(record.email.as_str())
        .bind(&record.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return CredentialError::EmailAlreadyRegistered(
                        record.email.as_str().to_string(),
                    );
                }
            }
            CredentialError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
