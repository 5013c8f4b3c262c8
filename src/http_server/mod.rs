//! # Galactic Archive HTTP Server
//!
//! Serves the archive browsing UI.
//!
//! # Endpoints
//!
//! - `/` - Page shell (also the fallback for unmatched paths)
//! - `/entries?type=<category>` - Fragment of records in one category
//! - `/static/*` - Files from the static directory, served as-is

pub mod config;
pub mod errors;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use config::HttpServerConfig;
pub use errors::HandlerError;
pub use server::HttpServer;
pub use state::AppState;
