use std::sync::Arc;

use auth::Authenticator;
use book_service::config::Config;
use book_service::domain::book::models::Book;
use book_service::domain::credential::ports::AuthServicePort;
use book_service::domain::credential::service::AuthService;
use book_service::inbound::http::router::create_router;
use book_service::inbound::http::router::AppState;
use book_service::outbound::repositories::InMemoryBookRepository;
use book_service::outbound::repositories::InMemoryCredentialStore;
use book_service::outbound::repositories::PostgresCredentialStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_service=debug,auth=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "book-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        store_timeout_ms = config.server.store_timeout_ms,
        token_location = ?config.session.token_location,
        allowed_subjects = config.gate.allowed_subjects.len(),
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes())?);

    let auth_service: Arc<dyn AuthServicePort> = match &config.database.url {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            Arc::new(AuthService::new(
                Arc::new(PostgresCredentialStore::new(pg_pool)),
                Arc::clone(&authenticator),
            ))
        }
        None => {
            tracing::warn!("No database.url configured, credentials are kept in memory");
            Arc::new(AuthService::new(
                Arc::new(InMemoryCredentialStore::new()),
                Arc::clone(&authenticator),
            ))
        }
    };

    let book_repository = Arc::new(InMemoryBookRepository::with_books(vec![
        Book {
            id: 1,
            title: "Book 1".to_string(),
            author: "Author 1".to_string(),
        },
        Book {
            id: 2,
            title: "Book 2".to_string(),
            author: "Author 2".to_string(),
        },
    ]));

    let gate = authenticator
        .gate(config.session.token_location())
        .with_allowed_subjects(config.gate.allowed_subjects.clone());

    let state = AppState {
        auth_service,
        book_repository,
        gate: Arc::new(gate),
        session: config.session.clone(),
        store_timeout: config.server.store_timeout(),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
