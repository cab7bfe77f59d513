use crate::modules::navigation::controller::{dashboard_shell, get_navigation};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_navigation_router() -> Router<AppState> {
    Router::new().route("/navigation", get(get_navigation))
}

/// Dashboard pages, mounted at the root so the guard sees full paths.
pub fn init_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_shell))
        .route("/dashboard/{*page}", get(dashboard_shell))
}
