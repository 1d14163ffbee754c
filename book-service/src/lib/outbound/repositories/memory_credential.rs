use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::CredentialRecord;
use crate::domain::credential::models::EmailAddress;
use crate::domain::credential::ports::CredentialStore;

/// Process-local credential store, used when no database is configured.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    records: RwLock<HashMap<EmailAddress, CredentialRecord>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<CredentialRecord>, CredentialError> {
        Ok(self.records.read().await.get(email).cloned())
    }

    async fn create(&self, record: CredentialRecord) -> Result<(), CredentialError> {
        match self.records.write().await.entry(record.email.clone()) {
            Entry::Occupied(entry) => Err(CredentialError::EmailAlreadyRegistered(
                entry.key().as_str().to_string(),
            )),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }
}
