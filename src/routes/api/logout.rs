use axum::{Json, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde_json::json;

use crate::auth::{AuthUser, cleared_cookie};

pub async fn action(user: AuthUser, jar: CookieJar) -> impl IntoResponse {
    tracing::info!(user_id = user.user_id, "user logged out");

    (
        jar.add(cleared_cookie()),
        Json(json!({ "message": "Logged out" })),
    )
}
