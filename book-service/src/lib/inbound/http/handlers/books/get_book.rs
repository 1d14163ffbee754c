use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::inbound::http::router::AppState;

pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> Result<ApiSuccess<Book>, ApiError> {
    state
        .book_repository
        .get(book_id)
        .await
        .map_err(ApiError::from)
        .map(|book| ApiSuccess::new(StatusCode::OK, book))
}
