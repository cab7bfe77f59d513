use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct PageResponse {
    pub page: String,
    pub message: String,
}

fn page(page: &str, message: &str) -> Json<PageResponse> {
    Json(PageResponse {
        page: page.to_string(),
        message: message.to_string(),
    })
}

/// Public home page
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Home page", body = PageResponse)),
    tag = "Site"
)]
pub async fn home() -> Json<PageResponse> {
    page("home", "Bienvenue")
}

/// Login page, target of unauthenticated dashboard requests
#[utoipa::path(
    get,
    path = "/login",
    responses((status = 200, description = "Login page", body = PageResponse)),
    tag = "Site"
)]
pub async fn login() -> Json<PageResponse> {
    page("login", "Veuillez vous connecter")
}

/// Public blog
#[utoipa::path(
    get,
    path = "/blog-public",
    responses((status = 200, description = "Public blog", body = PageResponse)),
    tag = "Site"
)]
pub async fn blog_public() -> Json<PageResponse> {
    page("blog-public", "Blog")
}
