use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiSuccess;
use crate::domain::book::models::Book;
use crate::inbound::http::router::AppState;

pub async fn list_books(State(state): State<AppState>) -> ApiSuccess<Vec<Book>> {
    ApiSuccess::new(StatusCode::OK, state.book_repository.list().await)
}
