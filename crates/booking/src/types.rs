use hutbook_shared::{Day, booking::BookingType};
use serde::Serialize;
use time::Date;

/// A booking as returned to clients, joined with the owner's username.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub username: Option<String>,
    pub check_in_date: Day,
    pub check_out_date: Day,
    pub booking_type: BookingType,
}

impl Booking {
    pub fn stay(&self) -> Stay {
        Stay::new(self.check_in_date.date(), self.check_out_date.date())
    }

    pub fn nights(&self) -> i64 {
        (self.check_out_date.date() - self.check_in_date.date()).whole_days()
    }

    pub fn owner(&self) -> &str {
        self.username.as_deref().unwrap_or("-")
    }
}

/// The part of a booking the calendar cares about: the nights between
/// arrival and departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub check_in: Date,
    pub check_out: Date,
}

impl Stay {
    pub fn new(check_in: Date, check_out: Date) -> Self {
        Self {
            check_in,
            check_out,
        }
    }
}

impl From<&Booking> for Stay {
    fn from(value: &Booking) -> Self {
        value.stay()
    }
}
