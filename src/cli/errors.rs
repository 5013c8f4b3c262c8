//! Startup error types
//!
//! All startup errors are fatal: the process exits before any listener is
//! serving.

use std::fmt;

/// Startup error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupErrorCode {
    /// Configuration file missing, malformed or invalid
    ConfigError,
    /// Templates failed to render during the startup check
    TemplateError,
    /// Async runtime could not be created
    RuntimeError,
    /// Listener could not be bound
    BindFailed,
    /// Server stopped with an I/O error
    ServeFailed,
}

impl StartupErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "ARCHIVE_CONFIG_ERROR",
            Self::TemplateError => "ARCHIVE_TEMPLATE_ERROR",
            Self::RuntimeError => "ARCHIVE_RUNTIME_ERROR",
            Self::BindFailed => "ARCHIVE_BIND_FAILED",
            Self::ServeFailed => "ARCHIVE_SERVE_FAILED",
        }
    }
}

/// Fatal startup error
#[derive(Debug)]
pub struct StartupError {
    code: StartupErrorCode,
    message: String,
}

impl StartupError {
    /// Create a new startup error
    pub fn new(code: StartupErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(StartupErrorCode::ConfigError, msg)
    }

    /// Template error
    pub fn template_error(msg: impl Into<String>) -> Self {
        Self::new(StartupErrorCode::TemplateError, msg)
    }

    /// Runtime error
    pub fn runtime_error(msg: impl Into<String>) -> Self {
        Self::new(StartupErrorCode::RuntimeError, msg)
    }

    /// Bind failed
    pub fn bind_failed(msg: impl Into<String>) -> Self {
        Self::new(StartupErrorCode::BindFailed, msg)
    }

    /// Serve failed
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(StartupErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &StartupErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for StartupError {}

/// Startup result type
pub type StartupResult<T> = Result<T, StartupError>;
