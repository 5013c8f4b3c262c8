//! Application State
//!
//! Immutable after startup; cloned into every handler.

use std::sync::Arc;

use crate::archive::RecordLoader;

use super::config::HttpServerConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    loader: RecordLoader,
}

impl AppState {
    /// Create state for the given configuration.
    pub fn new(config: &HttpServerConfig) -> Self {
        Self {
            inner: Arc::new(InnerState {
                loader: RecordLoader::new(config.data_file.clone()),
            }),
        }
    }

    /// Get the record loader.
    pub fn loader(&self) -> &RecordLoader {
        &self.inner.loader
    }
}
