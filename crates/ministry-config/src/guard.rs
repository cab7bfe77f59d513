use std::env;

#[derive(Clone, Debug)]
pub struct GuardConfig {
    pub protected_prefix: String,
    pub login_path: String,
    pub home_path: String,
}

impl GuardConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            protected_prefix: env::var("GUARD_PROTECTED_PREFIX")
                .map(|s| normalize_prefix(&s))
                .unwrap_or(defaults.protected_prefix),
            login_path: env::var("GUARD_LOGIN_PATH").unwrap_or(defaults.login_path),
            home_path: env::var("GUARD_HOME_PATH").unwrap_or(defaults.home_path),
        }
    }

    /// Whether `path` falls under the protected prefix.
    ///
    /// Matching is per path segment: with prefix `/dashboard`, both
    /// `/dashboard` and `/dashboard/enfants` match but `/dashboards` does not.
    pub fn is_protected(&self, path: &str) -> bool {
        let prefix = self.protected_prefix.as_str();
        if prefix == "/" {
            return true;
        }

        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            protected_prefix: "/dashboard".to_string(),
            login_path: "/login".to_string(),
            home_path: "/".to_string(),
        }
    }
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
