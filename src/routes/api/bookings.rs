use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hutbook_booking::CreateBookingInput;
use hutbook_shared::Day;
use serde::Deserialize;
use serde_json::json;

use crate::{auth::AuthUser, error::AppError, routes::AppState};

#[derive(Deserialize)]
pub struct ListQuery {
    pub id: Option<i64>,
}

/// Upcoming bookings, or a single one when `?id=` is given.
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;

    if let Some(id) = query.id {
        let Some(booking) = state.booking_query.find(id).await? else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };

        return Ok(Json(booking).into_response());
    }

    let today = Day::today(&state.config.calendar.timezone);
    let bookings = state.booking_query.list_upcoming(today).await?;

    Ok(Json(bookings).into_response())
}

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<CreateBookingInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = body?;
    let id = state.booking_command.create(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Booking created successfully",
            "bookingId": id,
        })),
    ))
}
