//! Dashboard route guard middleware.
//!
//! Runs before any handler. Requests outside the protected prefix pass
//! untouched; the rest are allowed or redirected according to
//! [`ministry_auth::evaluate_guard`].
//!
//! ```rust,ignore
//! use axum::{Router, middleware};
//! use crate::middleware::guard::route_guard;
//!
//! let app = Router::new()
//!     .nest("/dashboard", dashboard_routes)
//!     .layer(middleware::from_fn_with_state(state.clone(), route_guard));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use ministry_auth::{GuardState, evaluate_guard};
use tracing::{debug, info};

use crate::metrics::track_guard_decision;
use crate::middleware::session::session_load;
use crate::state::AppState;

pub async fn route_guard(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    if !state.guard_config.is_protected(&path) {
        return next.run(req).await;
    }

    let load = session_load(req.headers(), req.extensions(), &state);
    let decision = evaluate_guard(&path, &load, &state.guard_config);
    track_guard_decision(decision);

    match decision.location(&state.guard_config) {
        None => {
            debug!(path = %path, "Route guard allowed request");
            next.run(req).await
        }
        Some(location) => {
            info!(
                path = %path,
                state = GuardState::classify(&load).as_str(),
                location = %location,
                "Route guard redirected request"
            );
            Redirect::temporary(location).into_response()
        }
    }
}
