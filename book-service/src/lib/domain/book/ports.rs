use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;

/// Storage for books.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// All books in insertion order.
    async fn list(&self) -> Vec<Book>;

    /// # Errors
    /// * `NotFound` - No book with this id
    async fn get(&self, id: BookId) -> Result<Book, BookError>;

    /// # Errors
    /// * `AlreadyExists` - A book with the same id is stored
    async fn create(&self, book: Book) -> Result<Book, BookError>;

    /// Replace the book stored under `id`. The replacement may carry a new id.
    ///
    /// # Errors
    /// * `NotFound` - No book with this id
    /// * `AlreadyExists` - The new id belongs to another book
    async fn update(&self, id: BookId, book: Book) -> Result<Book, BookError>;

    /// # Errors
    /// * `NotFound` - No book with this id
    async fn delete(&self, id: BookId) -> Result<(), BookError>;
}
