//! Per-request session context.
//!
//! [`load_session`] decodes the session cookie once and stores the resulting
//! [`SessionLoad`] in the request extensions. The guard and the extractors
//! read it from there through [`session_load`], which falls back to decoding
//! the cookie itself on routers mounted without the layer.

use axum::{
    extract::{Request, State},
    http::{Extensions, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use ministry_auth::SessionLoad;

use crate::metrics::track_session_rejected;
use crate::state::AppState;

pub async fn load_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let load = decode_from_headers(req.headers(), &state);
    req.extensions_mut().insert(load);
    next.run(req).await
}

pub fn session_load(headers: &HeaderMap, extensions: &Extensions, state: &AppState) -> SessionLoad {
    match extensions.get::<SessionLoad>() {
        Some(load) => load.clone(),
        None => decode_from_headers(headers, state),
    }
}

fn decode_from_headers(headers: &HeaderMap, state: &AppState) -> SessionLoad {
    let jar = CookieJar::from_headers(headers);
    let raw = jar
        .get(state.session_codec.cookie_name())
        .map(|cookie| cookie.value());

    let load = state.session_codec.load(raw);
    if load == SessionLoad::Invalid {
        track_session_rejected(state.session_codec.is_signed());
    }
    load
}
