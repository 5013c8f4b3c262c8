//! HTTP Server Configuration
//!
//! Listen address plus the on-disk locations the server reads from. Every
//! field has a default, so an empty config file (or no file at all) gives the
//! fixed `0.0.0.0:8080` / `data/entries.json` / `static` layout.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON record file, read on every `/entries` request
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Directory served under `/static/`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/entries.json")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            static_dir: default_static_dir(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check field values. Returns a description of the first bad field.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }

        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }

        if self.data_file.as_os_str().is_empty() {
            return Err("data_file must not be empty".to_string());
        }

        if self.static_dir.as_os_str().is_empty() {
            return Err("static_dir must not be empty".to_string());
        }

        Ok(())
    }
}
