use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    auth::TokenKeys,
    template::{NotFoundTemplate, Template},
};

mod api;
mod assets;
mod bookings;
mod dashboard;
mod health;
mod index;
mod login;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub keys: TokenKeys,
    pub user_command: hutbook_user::Command,
    pub booking_command: hutbook_booking::Command,
    pub booking_query: hutbook_booking::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, state: hutbook_shared::State) -> Self {
        Self {
            keys: TokenKeys::new(&config.auth.jwt_secret, config.auth.token_lifetime_seconds),
            user_command: hutbook_user::Command::new(state.clone()),
            booking_command: hutbook_booking::Command::new(state.clone()),
            booking_query: hutbook_booking::Query::new(state.clone()),
            pool: state.read_db,
            config,
        }
    }
}

pub async fn fallback(template: Template, uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response();
    }

    template.render_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page))
        .route("/login", get(login::page))
        .route("/dashboard", get(dashboard::page))
        .route("/bookings", get(bookings::page))
        .route("/api/login", post(api::login::action))
        .route("/api/logout", post(api::logout::action))
        .route("/api/user", get(api::user::show))
        .route(
            "/api/bookings",
            get(api::bookings::list).post(api::bookings::create),
        )
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            crate::middleware::auth_gate,
        ))
        .with_state(app_state)
}
