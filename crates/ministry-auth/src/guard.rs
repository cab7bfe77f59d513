//! Dashboard route guard.
//!
//! The guard only looks at requests under the protected prefix. For those,
//! the session cookie is classified into one of four states and each state
//! maps to a single decision:
//!
//! | State                   | Decision          |
//! |-------------------------|-------------------|
//! | `NoCookie`              | redirect to login |
//! | `CookieParseError`      | redirect to login |
//! | `CookieValidNonAdmin`   | redirect to home  |
//! | `CookieValidAdmin`      | allow             |
//!
//! Admin classification comes from [`access::dashboard_access`], the same
//! resolver that grants super roles every fine-grained permission.

use ministry_config::GuardConfig;

use crate::access;
use crate::codec::SessionLoad;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    NoCookie,
    CookieParseError,
    CookieValidNonAdmin,
    CookieValidAdmin,
}

impl GuardState {
    pub fn classify(load: &SessionLoad) -> Self {
        match load {
            SessionLoad::Missing => GuardState::NoCookie,
            SessionLoad::Invalid => GuardState::CookieParseError,
            SessionLoad::Valid(session) if access::dashboard_access(Some(session)) => {
                GuardState::CookieValidAdmin
            }
            SessionLoad::Valid(_) => GuardState::CookieValidNonAdmin,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GuardState::NoCookie => "no_cookie",
            GuardState::CookieParseError => "cookie_parse_error",
            GuardState::CookieValidNonAdmin => "cookie_valid_non_admin",
            GuardState::CookieValidAdmin => "cookie_valid_admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl GuardDecision {
    /// Redirect location for this decision, `None` when the request passes.
    pub fn location<'a>(&self, config: &'a GuardConfig) -> Option<&'a str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin => Some(config.login_path.as_str()),
            GuardDecision::RedirectToHome => Some(config.home_path.as_str()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GuardDecision::Allow => "allow",
            GuardDecision::RedirectToLogin => "redirect_login",
            GuardDecision::RedirectToHome => "redirect_home",
        }
    }
}

impl From<GuardState> for GuardDecision {
    fn from(state: GuardState) -> Self {
        match state {
            GuardState::NoCookie | GuardState::CookieParseError => GuardDecision::RedirectToLogin,
            GuardState::CookieValidNonAdmin => GuardDecision::RedirectToHome,
            GuardState::CookieValidAdmin => GuardDecision::Allow,
        }
    }
}

/// Decides what happens to a request for `path` carrying session `load`.
pub fn evaluate_guard(path: &str, load: &SessionLoad, config: &GuardConfig) -> GuardDecision {
    if !config.is_protected(path) {
        return GuardDecision::Allow;
    }

    GuardState::classify(load).into()
}
