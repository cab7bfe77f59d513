use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use ministry::router::init_router;
use ministry::state::AppState;
use ministry_config::{CorsConfig, GuardConfig, SessionConfig};
use tower::ServiceExt;

#[allow(dead_code)]
pub const ADMIN_COOKIE: &str = r#"{"id":1,"name":"Admin","email":"admin@example.org","role":"admin"}"#;
#[allow(dead_code)]
pub const MONITEUR_COOKIE: &str = r#"{"id":2,"name":"Marc","email":"marc@example.org","role":"moniteur","permissions":["activites.view","activites.create"]}"#;

pub fn setup_test_app() -> axum::Router {
    setup_test_app_with(SessionConfig::default())
}

#[allow(dead_code)]
pub fn setup_test_app_with(session_config: SessionConfig) -> axum::Router {
    let state = AppState::new(&session_config, GuardConfig::default(), CorsConfig::default());
    init_router(state)
}

/// `Cookie` header value carrying `value` as the session cookie.
pub fn session_cookie(value: &str) -> String {
    format!("auth_user={}", urlencoding::encode(value))
}

pub async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = cookie {
        builder = builder.header(header::COOKIE, session_cookie(value));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Response is not JSON: {:?}",
            String::from_utf8_lossy(&body)
        )
    })
}
