mod common;

use axum::http::StatusCode;
use common::{ADMIN_COOKIE, MONITEUR_COOKIE, body_json, send, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_session_requires_cookie() {
    let response = send(setup_test_app(), "GET", "/api/session", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Not authenticated");
}

#[tokio::test]
async fn test_session_with_garbage_cookie_is_unauthenticated() {
    let response = send(setup_test_app(), "GET", "/api/session", Some("not-json"), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_describes_user() {
    let response = send(setup_test_app(), "GET", "/api/session", Some(MONITEUR_COOKIE), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user"]["name"], "Marc");
    assert_eq!(body["user"]["role"], "moniteur");
    assert_eq!(body["role_label"], "Moniteur");
    assert_eq!(body["is_super"], false);
    assert_eq!(body["permissions"], json!(["activites.view", "activites.create"]));
}

#[tokio::test]
async fn test_permission_check_for_non_super_role() {
    let granted = send(
        setup_test_app(),
        "POST",
        "/api/permissions/check",
        Some(MONITEUR_COOKIE),
        Some(json!({ "permission": "activites.create" })),
    )
    .await;
    assert_eq!(granted.status(), StatusCode::OK);
    assert_eq!(body_json(granted).await["granted"], true);

    let denied = send(
        setup_test_app(),
        "POST",
        "/api/permissions/check",
        Some(MONITEUR_COOKIE),
        Some(json!({ "permission": "users.create" })),
    )
    .await;
    assert_eq!(body_json(denied).await["granted"], false);
}

#[tokio::test]
async fn test_permission_check_matches_unregistered_strings() {
    let cookie = r#"{"id":5,"role":"moniteur","permissions":["rapports.export","activites.edit"]}"#;

    for (permission, expected) in [
        ("rapports.export", true),
        ("activites.edit", true),
        ("rapports.view", false),
    ] {
        let response = send(
            setup_test_app(),
            "POST",
            "/api/permissions/check",
            Some(cookie),
            Some(json!({ "permission": permission })),
        )
        .await;
        assert_eq!(body_json(response).await["granted"], expected, "{permission}");
    }

    let session = send(setup_test_app(), "GET", "/api/session", Some(cookie), None).await;
    assert_eq!(
        body_json(session).await["permissions"],
        json!(["rapports.export", "activites.edit"])
    );
}

#[tokio::test]
async fn test_permission_check_super_role_and_anonymous() {
    let admin = send(
        setup_test_app(),
        "POST",
        "/api/permissions/check",
        Some(ADMIN_COOKIE),
        Some(json!({ "permission": "chorale.sing" })),
    )
    .await;
    assert_eq!(body_json(admin).await["granted"], true);

    let anonymous = send(
        setup_test_app(),
        "POST",
        "/api/permissions/check",
        None,
        Some(json!({ "permission": "salles.create" })),
    )
    .await;
    assert_eq!(anonymous.status(), StatusCode::OK);
    assert_eq!(body_json(anonymous).await["granted"], false);
}

#[tokio::test]
async fn test_permission_check_validates_body() {
    let too_short = send(
        setup_test_app(),
        "POST",
        "/api/permissions/check",
        Some(ADMIN_COOKIE),
        Some(json!({ "permission": "x" })),
    )
    .await;
    assert_eq!(too_short.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let missing = send(
        setup_test_app(),
        "POST",
        "/api/permissions/check",
        Some(ADMIN_COOKIE),
        Some(json!({})),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(missing).await["error"], "permission is required");
}

#[tokio::test]
async fn test_roles_require_users_create() {
    let forbidden = send(setup_test_app(), "GET", "/api/roles", Some(MONITEUR_COOKIE), None).await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let unauthorized = send(setup_test_app(), "GET", "/api/roles", None, None).await;
    assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

    let coordinator = r#"{"id":3,"role":"coordination","permissions":["users.create"]}"#;
    let allowed = send(setup_test_app(), "GET", "/api/roles", Some(coordinator), None).await;
    assert_eq!(allowed.status(), StatusCode::OK);

    let body = body_json(allowed).await;
    let roles = body.as_array().unwrap();
    assert_eq!(roles.len(), 8);
    assert_eq!(roles[1], json!({ "value": "super_admin", "label": "Super administrateur" }));
}

#[tokio::test]
async fn test_permission_registry_listing() {
    let response = send(setup_test_app(), "GET", "/api/permissions", Some(ADMIN_COOKIE), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let permissions: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(permissions.len(), 48);
    for observed in ["activites.create", "salles.create", "users.create", "videos.create"] {
        assert!(permissions.contains(&observed), "{observed}");
    }
}

#[tokio::test]
async fn test_navigation_follows_permissions() {
    let anonymous = send(setup_test_app(), "GET", "/api/navigation", None, None).await;
    assert_eq!(anonymous.status(), StatusCode::OK);
    assert_eq!(body_json(anonymous).await, json!([]));

    let moniteur = send(setup_test_app(), "GET", "/api/navigation", Some(MONITEUR_COOKIE), None).await;
    let body = body_json(moniteur).await;
    assert_eq!(
        body,
        json!([{
            "label": "Activités",
            "href": "/dashboard/activites",
            "resource": "activites",
            "can_create": true
        }])
    );
}
