use thiserror::Error;

use crate::domain::book::models::BookId;

/// Error for book operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("Book not found: {0}")]
    NotFound(BookId),

    #[error("Book already exists: {0}")]
    AlreadyExists(BookId),
}
