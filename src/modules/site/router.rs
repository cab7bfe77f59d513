use crate::modules::site::controller::{blog_public, home, login};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_site_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/blog-public", get(blog_public))
}
