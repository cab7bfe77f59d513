use crate::modules::roles::controller::{get_permissions, get_roles};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_roles_router() -> Router<AppState> {
    Router::new()
        .route("/roles", get(get_roles))
        .route("/permissions", get(get_permissions))
}
