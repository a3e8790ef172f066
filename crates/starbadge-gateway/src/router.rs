//! Axum router wiring.
//!
//! Exposes the badge route only: `GET /github.com/<repo>`. The bare prefix
//! without its trailing slash redirects (301) to `/github.com/`.

use axum::{
    http::{header::LOCATION, StatusCode},
    routing::get,
    Router,
};

use crate::{app_state::AppState, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/github.com",
            get(|| async { (StatusCode::MOVED_PERMANENTLY, [(LOCATION, transport::badge::BADGE_PREFIX)]) }),
        )
        // empty repo id still renders (as 0)
        .route(transport::badge::BADGE_PREFIX, get(transport::badge::badge))
        .route("/github.com/*repo", get(transport::badge::badge))
        .with_state(state)
}
