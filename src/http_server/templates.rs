//! Askama Templates
//!
//! `layout.html` is the page shell, `entries.html` the fragment swapped in by
//! htmx. Both are compiled from `templates/` into the binary.

use askama::Template;

use crate::archive::Record;

/// Categories offered as filter buttons in the page shell.
pub const CATEGORIES: &[&str] = &["planet", "artifact", "creed", "event"];

/// Page shell template.
#[derive(Template)]
#[template(path = "layout.html")]
pub struct LayoutTemplate {
    pub title: &'static str,
    pub categories: Vec<&'static str>,
}

impl LayoutTemplate {
    pub fn new() -> Self {
        Self {
            title: "Galactic Archive",
            categories: CATEGORIES.to_vec(),
        }
    }
}

impl Default for LayoutTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Entries fragment template.
#[derive(Template)]
#[template(path = "entries.html")]
pub struct EntriesTemplate {
    pub entries: Vec<Record>,
}

impl EntriesTemplate {
    pub fn new(entries: Vec<Record>) -> Self {
        Self { entries }
    }
}

/// Startup check: render both templates once before serving.
pub fn verify() -> askama::Result<()> {
    LayoutTemplate::new().render()?;
    EntriesTemplate::new(Vec::new()).render()?;
    Ok(())
}
