use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Errors returned by the JSON API.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<hutbook_shared::Error> for AppError {
    fn from(err: hutbook_shared::Error) -> Self {
        match err {
            hutbook_shared::Error::Validate(errors) => {
                AppError::Validation(first_message(&errors))
            }
            hutbook_shared::Error::User(msg) => AppError::Validation(msg),
            hutbook_shared::Error::NotFound => AppError::NotFound("Not found".to_string()),
            hutbook_shared::Error::Server(msg) => AppError::Internal(msg),
            hutbook_shared::Error::Unknown(err) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Picks one human readable message out of a validator report, preferring
/// the "required" message so a missing field is reported as such.
fn first_message(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let all = fields.iter().flat_map(|(_, errs)| errs.iter());
    let required = all.clone().find(|e| e.code == "required");

    required
        .or_else(|| all.clone().next())
        .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": INVALID_CREDENTIALS })),
            )
                .into_response(),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": NOT_AUTHENTICATED })),
            )
                .into_response(),
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Internal(details) => {
                tracing::error!("Internal error: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error", "details": details })),
                )
                    .into_response()
            }
        }
    }
}
