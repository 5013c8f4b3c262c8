//! CLI command implementations
//!
//! Startup order:
//! 1. Load and validate configuration
//! 2. Check the template set
//! 3. Bind the listener
//! 4. Serve until Ctrl+C
//!
//! Any failure before step 4 exits the process without serving.

use std::fs;
use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::http_server::{templates, HttpServer, HttpServerConfig};

use super::args::Cli;
use super::errors::{StartupError, StartupResult};

const DEFAULT_LOG_FILTER: &str = "galactic_archive=info,tower_http=info";

/// Main CLI entry point
///
/// This is the only function that main.rs should call.
pub fn run() -> StartupResult<()> {
    let cli = Cli::parse_args();
    init_tracing();

    let config = prepare(&cli)?;
    serve(config)
}

/// Install the tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}

/// Build the effective configuration from flags and the optional config file
pub fn load_config(cli: &Cli) -> StartupResult<HttpServerConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(port) = cli.port {
        config.port = port;
    }

    config
        .validate()
        .map_err(|e| StartupError::config_error(format!("Invalid config: {}", e)))?;

    Ok(config)
}

fn read_config_file(path: &Path) -> StartupResult<HttpServerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        StartupError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| StartupError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Run every startup check that does not need the network
pub fn prepare(cli: &Cli) -> StartupResult<HttpServerConfig> {
    let config = load_config(cli)?;

    templates::verify()
        .map_err(|e| StartupError::template_error(format!("Template check failed: {}", e)))?;

    if !config.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "static directory does not exist; /static/ requests will 404"
        );
    }

    Ok(config)
}

/// Start the HTTP server and block until it shuts down
pub fn serve(config: HttpServerConfig) -> StartupResult<()> {
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| StartupError::runtime_error(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async move {
        let listener = server.bind().await.map_err(|e| {
            StartupError::bind_failed(format!("Failed to bind {}: {}", server.socket_addr(), e))
        })?;

        tracing::info!(
            data_file = %server.config().data_file.display(),
            "Galactic Archive listening at http://{}",
            server.socket_addr()
        );

        server
            .serve(listener)
            .await
            .map_err(|e| StartupError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::super::errors::StartupErrorCode;
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn cli_with_config(path: PathBuf) -> Cli {
        Cli {
            config: Some(path),
            port: None,
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let config = load_config(&Cli::default()).unwrap();
        assert_eq!(config, HttpServerConfig::default());
    }

    #[test]
    fn test_port_flag_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("archive.json");
        fs::write(&config_path, json!({ "port": 3000 }).to_string()).unwrap();

        let cli = Cli {
            config: Some(config_path),
            port: Some(4000),
        };
        assert_eq!(load_config(&cli).unwrap().port, 4000);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("archive.json");
        let data_file = temp_dir.path().join("records.json");
        fs::write(
            &config_path,
            json!({ "host": "127.0.0.1", "data_file": data_file.to_string_lossy() }).to_string(),
        )
        .unwrap();

        let config = load_config(&cli_with_config(config_path)).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_file, data_file);
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config(&cli_with_config(temp_dir.path().join("absent.json")));
        assert_eq!(result.unwrap_err().code(), &StartupErrorCode::ConfigError);
    }

    #[test]
    fn test_malformed_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("archive.json");
        fs::write(&config_path, "{ port: ").unwrap();

        let result = load_config(&cli_with_config(config_path));
        assert_eq!(result.unwrap_err().code(), &StartupErrorCode::ConfigError);
    }

    #[test]
    fn test_zero_port_rejected() {
        let cli = Cli {
            config: None,
            port: Some(0),
        };
        let err = load_config(&cli).unwrap_err();
        assert_eq!(err.code(), &StartupErrorCode::ConfigError);
        assert!(err.message().contains("port"));
    }

    #[test]
    fn test_prepare_passes_with_valid_templates() {
        let config = prepare(&Cli::default()).unwrap();
        assert_eq!(config.port, 8080);
    }
}
