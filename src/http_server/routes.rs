//! Page and entries handlers

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};

use super::errors::HandlerError;
use super::state::AppState;
use super::templates::{EntriesTemplate, LayoutTemplate};

/// Renders the page shell. Never touches the data file.
pub async fn page() -> Result<Html<String>, HandlerError> {
    tracing::info!("rendering page shell");

    let html = LayoutTemplate::new().render()?;
    Ok(Html(html))
}

/// Renders the entries fragment for `?type=<category>`.
///
/// A missing `type` parameter is treated as the empty category. When the
/// parameter repeats, the first value wins.
pub async fn entries(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, HandlerError> {
    let category = params
        .into_iter()
        .find(|(key, _)| key == "type")
        .map(|(_, value)| value)
        .unwrap_or_default();

    let loader = state.loader().clone();
    let data_file = loader.path().display().to_string();
    let records = tokio::task::spawn_blocking(move || loader.load_by_type(&category)).await??;

    tracing::debug!(data_file = %data_file, count = records.len(), "entries loaded");

    let html = EntriesTemplate::new(records).render()?;
    Ok(Html(html))
}
