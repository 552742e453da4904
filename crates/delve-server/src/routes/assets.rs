use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

// The web page calling /research, plus whatever it loads from the static directory
pub fn routes(static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
}
