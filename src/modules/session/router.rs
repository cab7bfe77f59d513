use crate::modules::session::controller::{check_permission, get_session};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_session_router() -> Router<AppState> {
    Router::new()
        .route("/session", get(get_session))
        .route("/permissions/check", post(check_permission))
}
