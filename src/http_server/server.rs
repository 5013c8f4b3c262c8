//! # HTTP Server
//!
//! Router for the archive UI plus bind/serve helpers.

use axum::{
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::config::HttpServerConfig;
use super::routes;
use super::state::AppState;

/// HTTP Server for the archive UI
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the router.
    ///
    /// Anything not under `/entries` or `/static/` falls through to the page
    /// shell, for every method.
    fn build_router(config: &HttpServerConfig) -> Router {
        let state = AppState::new(config);

        Router::new()
            .route("/", any(routes::page))
            .route("/entries", get(routes::entries))
            .nest_service("/static", ServeDir::new(&config.static_dir))
            .fallback(routes::page)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the configuration
    pub fn config(&self) -> &HttpServerConfig {
        &self.config
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener without serving yet
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.config.socket_addr()).await
    }

    /// Serve on an already bound listener until Ctrl+C
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutting down gracefully..."),
        Err(e) => {
            // Without a signal handler the server runs until killed.
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
