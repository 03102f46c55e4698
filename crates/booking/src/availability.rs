//! Per-day booking status for the calendar.
//!
//! A stay covers the nights from `check_in` up to, but not including,
//! `check_out`. Arrival and departure are tracked as separate facets so a
//! turnover day (someone leaves, someone else arrives) shows both halves
//! instead of looking like a conflict.

use time::Date;

use crate::Stay;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayState {
    /// Some stay starts on this day.
    pub check_in: bool,
    /// Some stay ends on this day.
    pub check_out: bool,
    /// The night starting on this day is taken.
    pub fully_booked: bool,
}

/// What the calendar draws for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Free,
    CheckIn,
    CheckOut,
    Turnover,
    Booked,
}

impl DayState {
    pub fn is_free(&self) -> bool {
        !self.check_in && !self.check_out && !self.fully_booked
    }

    pub fn booked(&self) -> bool {
        self.fully_booked
    }

    /// A new stay may start on any day whose night is still open, including
    /// the departure day of a previous stay.
    pub fn can_check_in(&self) -> bool {
        !self.fully_booked
    }

    pub fn kind(&self) -> DayKind {
        match (self.check_in, self.check_out, self.fully_booked) {
            (true, true, _) => DayKind::Turnover,
            (true, false, _) => DayKind::CheckIn,
            (false, true, false) => DayKind::CheckOut,
            (false, _, true) => DayKind::Booked,
            (false, false, false) => DayKind::Free,
        }
    }
}

impl DayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayKind::Free => "free",
            DayKind::CheckIn => "check-in",
            DayKind::CheckOut => "check-out",
            DayKind::Turnover => "turnover",
            DayKind::Booked => "booked",
        }
    }
}

pub fn is_check_in(date: Date, stays: &[Stay]) -> bool {
    stays.iter().any(|s| s.check_in == date)
}

pub fn is_check_out(date: Date, stays: &[Stay]) -> bool {
    stays.iter().any(|s| s.check_out == date)
}

pub fn is_fully_booked(date: Date, stays: &[Stay]) -> bool {
    stays
        .iter()
        .any(|s| s.check_in <= date && date < s.check_out)
}

/// Linear scan over `stays`; callers render at most a year at a time.
pub fn day_state(date: Date, stays: &[Stay]) -> DayState {
    let mut state = DayState::default();

    for stay in stays {
        state.check_in |= stay.check_in == date;
        state.check_out |= stay.check_out == date;
        state.fully_booked |= stay.check_in <= date && date < stay.check_out;
    }

    state
}
