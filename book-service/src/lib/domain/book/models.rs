use serde::Deserialize;
use serde::Serialize;

pub type BookId = i64;

/// Demo resource served behind the request gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
}
