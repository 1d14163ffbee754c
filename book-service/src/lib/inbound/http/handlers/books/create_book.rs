use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::book::models::Book;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(book): Json<Book>,
) -> Result<ApiSuccess<Book>, ApiError> {
    let book = state.book_repository.create(book).await?;

    tracing::info!(book_id = book.id, created_by = %user.email, "Book created");

    Ok(ApiSuccess::new(StatusCode::CREATED, book))
}
