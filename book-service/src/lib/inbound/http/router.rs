use std::sync::Arc;
use std::time::Duration;

use auth::RequestGate;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::books::create_book::create_book;
use super::handlers::books::delete_book::delete_book;
use super::handlers::books::get_book::get_book;
use super::handlers::books::list_books::list_books;
use super::handlers::books::update_book::update_book;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::config::SessionConfig;
use crate::domain::book::ports::BookRepository;
use crate::domain::credential::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub book_repository: Arc<dyn BookRepository>,
    pub gate: Arc<RequestGate>,
    pub session: SessionConfig,
    /// Deadline for each credential store call made by a handler
    pub store_timeout: Duration,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/register", post(register))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:book_id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers stay out of the span; they carry session tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
