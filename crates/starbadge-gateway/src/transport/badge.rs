//! Badge handler.
//!
//! Responsibilities:
//! - Strip the route prefix from the raw path (no percent-decoding)
//! - Look up the metric through the configured `MetricSource`
//! - Humanize and render the SVG
//!
//! The response is always `200 OK`: upstream failures render as `0`.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::Instrument;

use starbadge_core::badge::{render, SVG_CONTENT_TYPE};
use starbadge_core::humanize;

use crate::app_state::AppState;
use crate::upstream::Fetched;

pub const BADGE_PREFIX: &str = "/github.com/";

/// Repository identifier: the path with the route prefix removed, verbatim.
pub fn repo_from_path(path: &str) -> &str {
    path.strip_prefix(BADGE_PREFIX).unwrap_or(path)
}

pub async fn badge(State(app): State<AppState>, uri: Uri) -> Response {
    let repo = repo_from_path(uri.path()).to_owned();
    let span = tracing::info_span!("badge", repo = %repo);
    serve_badge(app, repo).instrument(span).await
}

async fn serve_badge(app: AppState, repo: String) -> Response {
    let fetched = app.source().fetch(&repo).await;
    let shown = humanize(fetched.value());

    match &fetched {
        Fetched::Live(n) => tracing::info!(stars = n, %shown, "badge served"),
        Fetched::Fallback(e) => tracing::info!(reason = e.kind(), %shown, "badge served with fallback"),
    }

    (
        StatusCode::OK,
        [(CONTENT_TYPE, SVG_CONTENT_TYPE)],
        render(&shown),
    )
        .into_response()
}
