use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use configuration::Settings;
use database::{DbRepository, SportsRepository};
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub repo: Box<dyn SportsRepository>,
}

impl AppState {
    pub fn new(repo: impl SportsRepository + 'static) -> Self {
        Self {
            repo: Box::new(repo),
        }
    }
}

/// CORS for the single allowed browser origin.
pub fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("invalid CORS origin {origin:?}"))?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::any()))
}

/// Builds the full application: the `/api` routers, CORS, request tracing
/// and the body size limit.
pub fn app(state: AppState, cors_origin: &str) -> anyhow::Result<Router> {
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/deportes", handlers::deportes::router())
        .nest("/api/equipos", handlers::equipos::router())
        .nest("/api/jugadores", handlers::jugadores::router())
        .nest("/api/estadisticas", handlers::estadisticas::router())
        .with_state(Arc::new(state))
        .layer(cors_layer(cors_origin)?)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024)); // 1MB is plenty for these bodies

    Ok(app)
}

/// Binds `host:port`, moving on to the next port while the current one is
/// in use, for at most `attempts` ports in total.
pub async fn bind_with_retry(host: &str, port: u16, attempts: u16) -> io::Result<TcpListener> {
    let mut port = port;
    let mut attempt = 1;
    loop {
        match TcpListener::bind((host, port)).await {
            Ok(listener) => return Ok(listener),
            Err(e) if e.kind() == io::ErrorKind::AddrInUse && attempt < attempts => {
                tracing::warn!(port, attempt, "Port in use, trying the next one.");
                port = port.checked_add(1).ok_or(e)?;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// The main function to configure and run the web server.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let db_pool = database::connect(&settings.database)
        .await
        .context("Database connection failed")?;
    database::run_migrations(&db_pool).await?;
    let db_repo = DbRepository::new(db_pool);
    db_repo.ping().await.context("Database connection failed")?;
    tracing::info!("Database connected successfully");

    let app = app(AppState::new(db_repo), &settings.server.cors_origin)?;

    let listener = bind_with_retry(
        &settings.server.host,
        settings.server.port,
        settings.server.bind_attempts,
    )
    .await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down.");
}
