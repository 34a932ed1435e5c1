//! Web Temple Web Server
//!
//! Axum-based server for the analysis form page and JSON API.

pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use temple_core::CompletionClient;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Server bind and CORS settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

/// Build the CORS layer. Preflight `OPTIONS` requests are answered here.
pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values = origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin: {}", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any))
}

/// Create the application router.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    let api_routes = Router::new()
        .route("/", post(routes::analyze::analyze))
        .route("/analyze", post(routes::analyze::analyze_snake_case));

    Router::new()
        .route("/", get(routes::page::index).post(routes::page::submit))
        .route("/health", get(routes::health::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind the listening socket. Host names and IPv6 literals both resolve here.
pub async fn bind_listener(host: &str, port: u16) -> anyhow::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {} port {}", host, port))
}

/// Run the web server.
pub async fn run_server(
    client: Arc<dyn CompletionClient>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let state = AppState::new(client);
    let app = create_router(state, cors_layer(&config.cors_origins)?);

    let listener = bind_listener(&config.host, config.port).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
