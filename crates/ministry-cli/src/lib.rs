//! Operator commands behind `ministry-cli`.
//!
//! Each command renders its result as text so it can be asserted on without
//! spawning the binary.

use anyhow::{Context, Result};
use ministry_auth::{GuardState, SessionCodec, access, evaluate_guard};
use ministry_config::GuardConfig;
use ministry_models::{Role, SessionUser};

pub fn render_roles() -> String {
    Role::ALL
        .iter()
        .map(|role| format!("{:<14}{}", role.as_str(), role.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_check(codec: &SessionCodec, cookie: Option<&str>, permission: &str) -> String {
    let session = codec.current_user(cookie);
    let granted = access::can_named(session.as_ref(), permission);
    let who = session
        .as_ref()
        .map(|s| s.role_name())
        .unwrap_or("anonymous");

    format!(
        "{} {} for {}",
        permission,
        if granted { "granted" } else { "denied" },
        who
    )
}

pub fn render_guard(
    codec: &SessionCodec,
    config: &GuardConfig,
    path: &str,
    cookie: Option<&str>,
) -> String {
    if !config.is_protected(path) {
        return format!("{} allow (unprotected)", path);
    }

    let load = codec.load(cookie);
    let decision = evaluate_guard(path, &load, config);
    let state = GuardState::classify(&load).as_str();

    match decision.location(config) {
        None => format!("{} allow ({})", path, state),
        Some(location) => format!("{} redirect {} ({})", path, location, state),
    }
}

pub fn issue_cookie(codec: &SessionCodec, user_json: &str) -> Result<String> {
    let user: SessionUser =
        serde_json::from_str(user_json).context("--user must be a JSON user record")?;

    codec.issue(&user).map_err(|e| e.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ministry_config::SessionConfig;

    fn plain() -> SessionCodec {
        SessionCodec::new(&SessionConfig::default())
    }

    #[test]
    fn test_render_roles_lists_all_labels() {
        let output = render_roles();
        assert_eq!(output.lines().count(), Role::ALL.len());
        assert!(output.contains("chef_salle"));
        assert!(output.contains("Super administrateur"));
    }

    #[test]
    fn test_render_check() {
        let codec = plain();
        assert_eq!(
            render_check(&codec, Some(r#"{"role":"moniteur","permissions":["videos.create"]}"#), "videos.create"),
            "videos.create granted for moniteur"
        );
        assert_eq!(
            render_check(&codec, None, "videos.create"),
            "videos.create denied for anonymous"
        );
        assert_eq!(
            render_check(&codec, Some(r#"{"role":"super_admin"}"#), "whatever.else"),
            "whatever.else granted for super_admin"
        );
    }

    #[test]
    fn test_render_guard() {
        let codec = plain();
        let config = GuardConfig::default();

        assert_eq!(
            render_guard(&codec, &config, "/dashboard", None),
            "/dashboard redirect /login (no_cookie)"
        );
        assert_eq!(
            render_guard(&codec, &config, "/dashboard/enfants", Some(r#"{"role":"parent"}"#)),
            "/dashboard/enfants redirect / (cookie_valid_non_admin)"
        );
        assert_eq!(
            render_guard(&codec, &config, "/dashboard", Some(r#"{"role":"admin"}"#)),
            "/dashboard allow (cookie_valid_admin)"
        );
        assert_eq!(
            render_guard(&codec, &config, "/blog-public", None),
            "/blog-public allow (unprotected)"
        );
    }

    #[test]
    fn test_issue_cookie_signed() {
        let codec = SessionCodec::new(&SessionConfig {
            signing_secret: Some("cli-secret".to_string()),
            ..SessionConfig::default()
        });

        let token = issue_cookie(&codec, r#"{"id":4,"name":"Anne","role":"financier"}"#).unwrap();
        let session = codec.current_user(Some(&token)).unwrap();
        assert_eq!(session.role(), Some(Role::Financier));

        assert!(issue_cookie(&codec, "not-json").is_err());
    }
}
