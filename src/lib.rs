//! galactic-archive - browse archival records by category
//!
//! Loads a JSON file of records, filters by category and renders the result
//! as HTML fragments for an htmx-driven page.

pub mod archive;
pub mod cli;
pub mod http_server;
