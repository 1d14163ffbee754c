use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use crate::domain::book::models::BookId;
use crate::inbound::http::router::AppState;

pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> Result<StatusCode, ApiError> {
    state.book_repository.delete(book_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
