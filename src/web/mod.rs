use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::music::Catalog;
use crate::settings::Settings;
use crate::GroupieError;

mod handlers;
mod templates;

/// Catalog shared by every handler, read-only once the server runs
pub type AppState = Arc<Catalog>;

pub fn router(catalog: AppState, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/loc", get(handlers::locations))
        .route("/dates", get(handlers::dates))
        .route("/rel", get(handlers::relations))
        .nest_service("/static", ServeDir::new(assets_dir))
        .fallback(handlers::not_found)
        .with_state(catalog)
}

/// Serves the catalog until the process is killed. Failing to bind is an error
pub async fn serve(catalog: Catalog, settings: &Settings) -> Result<(), GroupieError> {
    let app = router(Arc::new(catalog), &settings.assets_dir);
    let listener = tokio::net::TcpListener::bind(settings.listen_addr).await?;
    log::info!("server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
