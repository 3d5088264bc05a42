//! The Kelp server: a thin static-file host for the browser editor plus a
//! JSON adapter exposing schema-backed completion and hover.

mod api;
mod static_files;

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use kelp_schema::SchemaStore;

use static_files::StaticSite;

/// Shared per-process state: the immutable schema and the editor site root.
///
/// The schema is read-only after load, so concurrent requests share one
/// instance with no locking.
#[derive(Clone)]
pub struct AppState {
    pub(crate) schema: Arc<SchemaStore>,
    pub(crate) site: Arc<StaticSite>,
}

impl AppState {
    #[must_use]
    pub fn new(schema: SchemaStore, site_root: PathBuf) -> Self {
        Self {
            schema: Arc::new(schema),
            site: Arc::new(StaticSite::new(site_root)),
        }
    }
}

/// The full router: the API endpoints, with everything else falling through
/// to the static site.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/completion", post(api::completion))
        .route("/api/hover", post(api::hover))
        .fallback(static_files::serve)
        .with_state(state)
}
