use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// One parameterized scrape route covers every company; the per-company
/// paths the service historically exposed resolve through it.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/scrape/{company}", get(handlers::scrape_company))
        .route("/companies", get(handlers::list_companies))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
