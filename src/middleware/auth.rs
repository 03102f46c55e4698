use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use time::OffsetDateTime;

use crate::{
    auth::{TOKEN_COOKIE, cleared_cookie},
    error::AppError,
    routes::AppState,
};

/// Paths reachable without a session.
pub fn is_public(path: &str) -> bool {
    matches!(path, "/login" | "/api/login" | "/health" | "/ready") || path.starts_with("/static/")
}

/// Decides per request whether it may proceed.
///
/// A valid `token` cookie puts an [`crate::auth::AuthUser`] into the request
/// extensions. Without one, API calls get 401 and pages redirect to `/login`.
/// An invalid or expired cookie is cleared on the way out.
pub async fn auth_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    let mut stale_cookie = false;

    let user = match jar.get(TOKEN_COOKIE) {
        Some(cookie) => match state.keys.verify(cookie.value(), OffsetDateTime::now_utc()) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!(path = %path, "rejected session token: {e}");
                stale_cookie = true;
                None
            }
        },
        None => None,
    };

    let response = match user {
        Some(_) if path == "/login" => Redirect::to("/dashboard").into_response(),
        Some(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        None if is_public(&path) => next.run(req).await,
        None if path.starts_with("/api/") => AppError::Unauthorized.into_response(),
        None => Redirect::to("/login").into_response(),
    };

    // A handler that sets its own cookie (login) takes precedence.
    if stale_cookie && !response.headers().contains_key(header::SET_COOKIE) {
        return (jar.add(cleared_cookie()), response).into_response();
    }

    response
}
