// Export route modules
pub mod assets;
pub mod research;

use crate::state::AppState;
use axum::Router;
use std::path::Path;

// Function to configure all routes
pub fn configure(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(research::routes(state))
        .merge(assets::routes(static_dir))
}
