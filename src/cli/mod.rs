//! CLI module for the archive server
//!
//! Parses flags, runs the startup checks and serves until Ctrl+C.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{init_tracing, load_config, prepare, run, serve};
pub use errors::{StartupError, StartupErrorCode, StartupResult};
