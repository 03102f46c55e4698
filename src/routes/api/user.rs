use axum::Json;

use crate::auth::AuthUser;

pub async fn show(user: AuthUser) -> Json<AuthUser> {
    Json(user)
}
