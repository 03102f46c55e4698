use axum::{extract::State, response::IntoResponse};
use hutbook_booking::Booking;
use hutbook_shared::Day;

use crate::{
    auth::AuthUser,
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "bookings.html")]
pub struct BookingsTemplate {
    pub user: AuthUser,
    pub bookings: Vec<Booking>,
}

pub async fn page(
    template: Template,
    user: AuthUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let today = Day::today(&state.config.calendar.timezone);
    let bookings = crate::try_page_response!(state.booking_query.list_upcoming(today), template);

    template.render(BookingsTemplate { user, bookings })
}
