use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookRepository;

/// Book collection owned by the service and shared through `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `books`.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    async fn get(&self, id: BookId) -> Result<Book, BookError> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(BookError::NotFound(id))
    }

    async fn create(&self, book: Book) -> Result<Book, BookError> {
        let mut books = self.books.write().await;
        if books.iter().any(|existing| existing.id == book.id) {
            return Err(BookError::AlreadyExists(book.id));
        }
        books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: BookId, book: Book) -> Result<Book, BookError> {
        let mut books = self.books.write().await;

        let index = books
            .iter()
            .position(|existing| existing.id == id)
            .ok_or(BookError::NotFound(id))?;

        if book.id != id && books.iter().any(|existing| existing.id == book.id) {
            return Err(BookError::AlreadyExists(book.id));
        }

        books[index] = book.clone();
        Ok(book)
    }

    async fn delete(&self, id: BookId) -> Result<(), BookError> {
        let mut books = self.books.write().await;

        let index = books
            .iter()
            .position(|existing| existing.id == id)
            .ok_or(BookError::NotFound(id))?;

        books.remove(index);
        Ok(())
    }
}
