mod common;

use axum::http::{StatusCode, header};
use common::{ADMIN_COOKIE, MONITEUR_COOKIE, body_json, send, setup_test_app, setup_test_app_with};
use ministry_auth::SessionCodec;
use ministry_config::SessionConfig;
use ministry_models::{Role, SessionUser};

fn location(response: &axum::http::Response<axum::body::Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn test_dashboard_without_cookie_redirects_to_login() {
    let response = send(setup_test_app(), "GET", "/dashboard/enfants", None, None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn test_dashboard_with_unparsable_cookie_redirects_to_login() {
    let response = send(setup_test_app(), "GET", "/dashboard", Some("not-json"), None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn test_dashboard_with_unknown_role_redirects_home() {
    for cookie in [r#"{"role":"pasteur"}"#, r#"{"id":1}"#, r#"{"id":"7","role":"moniteur"}"#] {
        let response = send(setup_test_app(), "GET", "/dashboard/enfants", Some(cookie), None).await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{cookie}");
        assert_eq!(location(&response), Some("/"), "{cookie}");
    }
}

#[tokio::test]
async fn test_dashboard_with_admin_cookie_passes_through() {
    let response = send(
        setup_test_app(),
        "GET",
        "/dashboard/activites",
        Some(ADMIN_COOKIE),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(location(&response), None);

    let body = body_json(response).await;
    assert_eq!(body["role_label"], "Administrateur");
    assert_eq!(body["navigation"].as_array().map(Vec::len), Some(12));
}

#[tokio::test]
async fn test_dashboard_root_with_super_admin_cookie_passes_through() {
    let response = send(
        setup_test_app(),
        "GET",
        "/dashboard",
        Some(r#"{"id":9,"role":"super_admin"}"#),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_dashboard_with_moniteur_cookie_redirects_home() {
    let response = send(
        setup_test_app(),
        "GET",
        "/dashboard/activites",
        Some(MONITEUR_COOKIE),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/"));
}

#[tokio::test]
async fn test_public_pages_ignore_cookie_state() {
    for cookie in [None, Some("not-json"), Some(MONITEUR_COOKIE), Some(ADMIN_COOKIE)] {
        let response = send(setup_test_app(), "GET", "/blog-public", cookie, None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(setup_test_app(), "GET", "/", cookie, None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_redirect_targets_are_public() {
    let response = send(setup_test_app(), "GET", "/login", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"], "login");
}

#[tokio::test]
async fn test_signed_mode_rejects_forged_plain_cookie() {
    let config = SessionConfig {
        signing_secret: Some("integration-secret".to_string()),
        ..SessionConfig::default()
    };

    let response = send(
        setup_test_app_with(config.clone()),
        "GET",
        "/dashboard",
        Some(ADMIN_COOKIE),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/login"));

    let token = SessionCodec::new(&config)
        .issue(&SessionUser::new(1, "Admin", "admin@example.org", Role::Admin))
        .unwrap();
    let response = send(
        setup_test_app_with(config),
        "GET",
        "/dashboard",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
