//! Galactic Archive entry point
//!
//! Delegates everything to `cli::run`, prints startup errors to stderr and
//! exits non-zero on failure.

use galactic_archive::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
