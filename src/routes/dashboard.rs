use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use hutbook_booking::{
    Stay,
    calendar::{self, Month, WEEKDAY_LABELS},
};
use hutbook_shared::{Day, booking::BookingType};
use serde::Deserialize;
use strum::VariantArray;

use crate::{
    auth::AuthUser,
    routes::AppState,
    template::{NotFoundTemplate, Template, filters},
};

#[derive(askama::Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub user: AuthUser,
    pub year: i32,
    pub months: Vec<Month>,
    pub weekdays: [&'static str; 7],
    pub booking_types: &'static [BookingType],
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub year: Option<i32>,
}

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub async fn page(
    template: Template,
    user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let today = Day::today(&state.config.calendar.timezone);
    let year = query.year.unwrap_or(today.date().year());

    let (Ok(from), Ok(until)) = (Day::from_ymd(year, 1, 1), Day::from_ymd(year, 12, 31)) else {
        return template.render_status(StatusCode::NOT_FOUND, NotFoundTemplate);
    };

    let bookings = crate::try_page_response!(state.booking_query.list_range(from, until), template);
    let stays: Vec<Stay> = bookings.iter().map(Stay::from).collect();

    let months = crate::try_page_response!(
        sync: calendar::year_overview(year, state.config.calendar.months, &stays, today.date()),
        template
    );

    template.render(DashboardTemplate {
        user,
        year,
        months,
        weekdays: WEEKDAY_LABELS,
        booking_types: BookingType::VARIANTS,
    })
}
