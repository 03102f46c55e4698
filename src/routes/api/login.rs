use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use hutbook_user::LoginInput;
use serde::Deserialize;
use serde_json::json;
use time::OffsetDateTime;

use crate::{
    auth::{AuthUser, session_cookie},
    error::AppError,
    routes::AppState,
};

#[derive(Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[tracing::instrument(skip_all)]
pub async fn action(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;

    let user = match state
        .user_command
        .login(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await
    {
        Ok(user) => AuthUser::from(user),
        Err(hutbook_shared::Error::User(_)) => return Err(AppError::InvalidCredentials),
        Err(e) => return Err(e.into()),
    };

    let token = state.keys.sign(&user, OffsetDateTime::now_utc())?;
    let cookie = session_cookie(
        token,
        state.keys.lifetime(),
        state.config.auth.secure_cookie,
    );

    tracing::info!(user_id = user.user_id, "user logged in");

    Ok((
        jar.add(cookie),
        Json(json!({ "message": "Login successful" })),
    ))
}
