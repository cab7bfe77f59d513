//! Session cookie codec.
//!
//! Two cookie formats are understood, chosen by [`SessionConfig`]:
//!
//! - **Plain**: the cookie holds the user record as JSON, optionally
//!   percent-encoded. Nothing is verified; whoever can write the cookie can
//!   claim any role. This matches what the dashboard frontend writes at login.
//! - **Signed**: the cookie holds an HS256 token whose claims are the user
//!   record plus `exp`/`iat`. Signature and expiry are checked on every read.
//!
//! Reading never fails outward. A value that cannot be decoded is logged and
//! treated exactly like a missing cookie by callers that only want a user.
//!
//! # Example
//!
//! ```ignore
//! use ministry_auth::{SessionCodec, SessionLoad};
//!
//! let codec = SessionCodec::new(&session_config);
//! match codec.load(cookie_value) {
//!     SessionLoad::Valid(session) => println!("role: {}", session.role_name()),
//!     SessionLoad::Invalid => println!("bad cookie"),
//!     SessionLoad::Missing => println!("anonymous"),
//! }
//! ```

use std::fmt;

use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ministry_config::SessionConfig;
use ministry_core::AppError;
use ministry_models::SessionUser;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::session::Session;

/// Claims of a signed session cookie.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(flatten)]
    user: SessionUser,
    exp: usize,
    iat: usize,
}

/// Outcome of reading the session cookie of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLoad {
    Missing,
    Invalid,
    Valid(Session),
}

impl SessionLoad {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionLoad::Valid(session) => Some(session),
            _ => None,
        }
    }

    pub fn into_session(self) -> Option<Session> {
        match self {
            SessionLoad::Valid(session) => Some(session),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct SessionCodec {
    cookie_name: String,
    signing_secret: Option<String>,
    ttl_secs: i64,
}

impl SessionCodec {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            cookie_name: config.cookie_name.clone(),
            signing_secret: config.signing_secret.clone(),
            ttl_secs: config.ttl_secs,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn is_signed(&self) -> bool {
        self.signing_secret.is_some()
    }

    /// Reads a raw cookie value, if the request carried one.
    pub fn load(&self, raw: Option<&str>) -> SessionLoad {
        let Some(raw) = raw else {
            return SessionLoad::Missing;
        };

        match self.decode(raw) {
            Ok(user) => SessionLoad::Valid(Session::from_user(user)),
            Err(err) => {
                warn!(
                    cookie = %self.cookie_name,
                    signed = self.is_signed(),
                    error = %format!("{:#}", err),
                    "Discarding unreadable session cookie"
                );
                SessionLoad::Invalid
            }
        }
    }

    /// The current user, or `None` when the cookie is absent or unreadable.
    pub fn current_user(&self, raw: Option<&str>) -> Option<Session> {
        self.load(raw).into_session()
    }

    /// Produces the cookie value for `user`.
    ///
    /// In plain mode this is the JSON record; callers setting it on a
    /// response should percent-encode it.
    pub fn issue(&self, user: &SessionUser) -> Result<String, AppError> {
        match &self.signing_secret {
            None => serde_json::to_string(user).map_err(|e| {
                AppError::internal_error(format!("Failed to serialize session: {}", e))
            }),
            Some(secret) => {
                let now = Utc::now().timestamp() as usize;
                let claims = SessionClaims {
                    user: user.clone(),
                    exp: now + self.ttl_secs.max(0) as usize,
                    iat: now,
                };

                encode(
                    &Header::default(),
                    &claims,
                    &EncodingKey::from_secret(secret.as_bytes()),
                )
                .map_err(|e| AppError::internal_error(format!("Failed to create session token: {}", e)))
            }
        }
    }

    fn decode(&self, raw: &str) -> Result<SessionUser> {
        let raw = raw.trim();
        if raw.is_empty() {
            anyhow::bail!("session cookie is empty");
        }

        match &self.signing_secret {
            None => decode_plain(raw),
            Some(secret) => decode_signed(raw, secret),
        }
    }
}

impl fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCodec")
            .field("cookie_name", &self.cookie_name)
            .field("signed", &self.is_signed())
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

fn decode_plain(raw: &str) -> Result<SessionUser> {
    match parse_record(raw) {
        Ok(user) => Ok(user),
        Err(err) if raw.contains('%') => {
            let decoded = urlencoding::decode(raw).context("session cookie is not valid UTF-8")?;
            parse_record(&decoded).with_context(|| format!("{:#}", err))
        }
        Err(err) => Err(err),
    }
}

/// Any JSON object is a user record; its fields are read leniently.
fn parse_record(text: &str) -> Result<SessionUser> {
    let value: serde_json::Value =
        serde_json::from_str(text).context("session cookie is not valid JSON")?;
    if !value.is_object() {
        anyhow::bail!("session cookie is not a JSON object");
    }

    serde_json::from_value(value).context("session cookie is not a user record")
}

fn decode_signed(raw: &str, secret: &str) -> Result<SessionUser> {
    let token = if raw.contains('%') {
        urlencoding::decode(raw)
            .context("session cookie is not valid UTF-8")?
            .into_owned()
    } else {
        raw.to_string()
    };

    decode::<SessionClaims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims.user)
    .context("session token is invalid or expired")
}
