use std::env;

pub const DEFAULT_COOKIE_NAME: &str = "auth_user";

/// Where the session lives and how it is trusted.
///
/// Without a `signing_secret` the cookie holds the user record as plain JSON
/// and is taken at face value. With one, the cookie must be a signed token
/// and is rejected when the signature or expiry does not check out.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub signing_secret: Option<String>,
    pub ttl_secs: i64,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            cookie_name: env::var("AUTH_COOKIE_NAME")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
            signing_secret: env::var("SESSION_SIGNING_SECRET")
                .ok()
                .filter(|s| !s.is_empty()),
            ttl_secs: env::var("SESSION_TTL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400), // 1 day
        }
    }

    pub fn is_signed(&self) -> bool {
        self.signing_secret.is_some()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            signing_secret: None,
            ttl_secs: 86400,
        }
    }
}
