use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::inbound::http::router::AppState;

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
    Json(book): Json<Book>,
) -> Result<ApiSuccess<Book>, ApiError> {
    state
        .book_repository
        .update(book_id, book)
        .await
        .map_err(ApiError::from)
        .map(|book| ApiSuccess::new(StatusCode::OK, book))
}
