use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use ministry_auth::Session;
use ministry_core::AppError;

use crate::middleware::session::session_load;
use crate::state::AppState;

/// The session of the request, if any. Never rejects.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<Session>);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let load = session_load(&parts.headers, &parts.extensions, state);
        Ok(CurrentSession(load.into_session()))
    }
}

/// Extractor that requires a readable session cookie.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Session);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_load(&parts.headers, &parts.extensions, state)
            .into_session()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized("Not authenticated"))
    }
}

/// Creates an extractor that rejects with 403 unless the session is granted
/// `$permission`.
#[macro_export]
macro_rules! require_permission {
    ($name:ident, $permission:path) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = ministry_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user =
                    $crate::middleware::auth::AuthUser::from_request_parts(parts, state).await?;

                let allowed = auth_user.0.can($permission);
                $crate::metrics::track_authorization_check(allowed, auth_user.0.role_name());

                if !allowed {
                    return Err(ministry_core::AppError::forbidden(format!(
                        "Access denied. Missing required permission: {}",
                        $permission
                    )));
                }

                Ok($name(auth_user))
            }
        }
    };
}

require_permission!(RequireUsersCreate, ministry_core::permissions::USERS_CREATE);
require_permission!(RequireRolesView, ministry_core::permissions::ROLES_VIEW);
