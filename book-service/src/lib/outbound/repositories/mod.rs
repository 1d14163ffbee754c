pub mod book;
pub mod credential;
pub mod memory_credential;

pub use book::InMemoryBookRepository;
pub use credential::PostgresCredentialStore;
pub use memory_credential::InMemoryCredentialStore;
