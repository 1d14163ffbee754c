pub mod book;
pub mod credential;
