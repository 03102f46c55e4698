use std::borrow::Cow;

use hutbook_db::table::Booking;
use hutbook_shared::{Day, booking::BookingType};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use time::OffsetDateTime;
use validator::{Validate, ValidationError};

const REQUIRED: &str = "All fields are required";

/// Body of `POST /api/bookings`. Every field is optional on the wire so a
/// missing one surfaces as a validation error instead of a parse failure.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingInput {
    #[validate(
        required(message = "All fields are required"),
        range(min = 1, message = "Invalid user")
    )]
    pub user_id: Option<i64>,
    #[validate(
        required(message = "All fields are required"),
        custom(function = "validate_day")
    )]
    pub check_in_date: Option<String>,
    #[validate(
        required(message = "All fields are required"),
        custom(function = "validate_day")
    )]
    pub check_out_date: Option<String>,
    #[validate(
        required(message = "All fields are required"),
        custom(function = "validate_booking_type")
    )]
    pub booking_type: Option<String>,
}

fn validate_day(value: &str) -> Result<(), ValidationError> {
    if value.parse::<Day>().is_ok() {
        return Ok(());
    }

    let mut error = ValidationError::new("invalid_date");
    error.message = Some(Cow::from("Dates must be given as YYYY-MM-DD"));
    Err(error)
}

fn validate_booking_type(value: &str) -> Result<(), ValidationError> {
    if value.parse::<BookingType>().is_ok() {
        return Ok(());
    }

    let mut error = ValidationError::new("invalid_booking_type");
    error.message = Some(Cow::from(
        "Booking type must be 'fixed' or 'reservation'",
    ));
    Err(error)
}

impl CreateBookingInput {
    fn into_parts(self) -> hutbook_shared::Result<(i64, Day, Day, BookingType)> {
        let (Some(user_id), Some(check_in), Some(check_out), Some(booking_type)) = (
            self.user_id,
            self.check_in_date,
            self.check_out_date,
            self.booking_type,
        ) else {
            hutbook_shared::user!("{REQUIRED}");
        };

        let check_in = check_in
            .parse::<Day>()
            .map_err(|e| hutbook_shared::Error::User(e.to_string()))?;
        let check_out = check_out
            .parse::<Day>()
            .map_err(|e| hutbook_shared::Error::User(e.to_string()))?;
        let booking_type = booking_type
            .parse::<BookingType>()
            .map_err(|e| hutbook_shared::Error::User(e.to_string()))?;

        Ok((user_id, check_in, check_out, booking_type))
    }
}

impl super::Command {
    /// Stores a booking and returns its id.
    ///
    /// Date order and overlap with other bookings are not checked; two
    /// concurrent requests for the same nights both succeed.
    #[tracing::instrument(skip_all)]
    pub async fn create(&self, input: CreateBookingInput) -> hutbook_shared::Result<i64> {
        input.validate()?;

        let (user_id, check_in, check_out, booking_type) = input.into_parts()?;
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let statement = Query::insert()
            .into_table(Booking::Table)
            .columns([
                Booking::UserId,
                Booking::CheckInDate,
                Booking::CheckOutDate,
                Booking::BookingType,
                Booking::CreatedAt,
            ])
            .values_panic([
                user_id.into(),
                check_in.to_string().into(),
                check_out.to_string().into(),
                booking_type.to_string().into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(
            booking_id = id,
            user_id,
            check_in = %check_in,
            check_out = %check_out,
            booking_type = %booking_type,
            "booking created"
        );

        Ok(id)
    }
}
