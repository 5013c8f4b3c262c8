//! Handler errors
//!
//! Every per-request failure ends here and becomes a 500. Load failures hide
//! their cause from the client; render failures return the error text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tokio::task::JoinError;

use crate::archive::ArchiveError;

/// Body returned when the data file cannot be loaded
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load entries";

/// Errors surfaced at the handler boundary
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Data file unreadable or undecodable
    #[error("{}", LOAD_FAILED_MESSAGE)]
    Load(#[from] ArchiveError),

    /// Blocking load task panicked or was cancelled
    #[error("{}", LOAD_FAILED_MESSAGE)]
    LoadTask(#[from] JoinError),

    /// Template execution failed
    #[error("{0}")]
    Render(#[from] askama::Error),
}

impl HandlerError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match &self {
            HandlerError::Load(err) => {
                tracing::error!(kind = err.kind(), error = %err, "failed to load entries");
            }
            HandlerError::LoadTask(err) => {
                tracing::error!(error = %err, "entries load task failed");
            }
            HandlerError::Render(err) => {
                tracing::error!(error = %err, "failed to render template");
            }
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
