use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::guard::route_guard;
use crate::middleware::session::load_session;
use crate::modules::navigation::router::{init_dashboard_router, init_navigation_router};
use crate::modules::roles::router::init_roles_router;
use crate::modules::session::router::init_session_router;
use crate::modules::site::router::init_site_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(init_site_router())
        .merge(init_dashboard_router())
        .nest(
            "/api",
            Router::new()
                .merge(init_session_router())
                .merge(init_roles_router())
                .merge(init_navigation_router()),
        )
        .with_state(state.clone())
        // Layers run bottom-up: the session is loaded before the guard reads it.
        .layer(middleware::from_fn_with_state(state.clone(), route_guard))
        .layer(middleware::from_fn_with_state(state.clone(), load_session))
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
}
