//! Month grids for the year overview. Weeks start on Monday.

use time::{Date, Month as MonthName};

use crate::{DayState, Stay, availability::day_state};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];

const MONTH_LABELS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: Date,
    pub state: DayState,
    pub is_today: bool,
}

impl DayCell {
    pub fn day(&self) -> u8 {
        self.date.day()
    }

    pub fn iso(&self) -> String {
        hutbook_shared::Day(self.date).to_string()
    }

    pub fn label(&self) -> String {
        hutbook_shared::Day(self.date).label()
    }

    pub fn selectable(&self) -> bool {
        self.state.can_check_in()
    }

    pub fn css_class(&self) -> String {
        let mut class = format!("day day--{}", self.state.kind().as_str());
        if self.is_today {
            class.push_str(" day--today");
        }
        class
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Month {
    pub year: i32,
    pub month: MonthName,
    /// Empty cells before the 1st so it lands in its weekday column.
    pub leading_blanks: u8,
    pub days: Vec<DayCell>,
}

impl Month {
    pub fn build(
        year: i32,
        month: MonthName,
        stays: &[Stay],
        today: Date,
    ) -> Result<Self, time::error::ComponentRange> {
        let first = Date::from_calendar_date(year, month, 1)?;
        let mut days = Vec::with_capacity(31);
        let mut current = Some(first);

        while let Some(date) = current.filter(|d| d.month() == month) {
            days.push(DayCell {
                date,
                state: day_state(date, stays),
                is_today: date == today,
            });
            current = date.next_day();
        }

        Ok(Self {
            year,
            month,
            leading_blanks: first.weekday().number_days_from_monday(),
            days,
        })
    }

    pub fn name(&self) -> &'static str {
        MONTH_LABELS[usize::from(u8::from(self.month)) - 1]
    }

    pub fn first(&self) -> Option<Date> {
        self.days.first().map(|d| d.date)
    }

    pub fn last(&self) -> Option<Date> {
        self.days.last().map(|d| d.date)
    }
}

/// `months` consecutive grids starting in January of `year`, capped at 12.
pub fn year_overview(
    year: i32,
    months: u8,
    stays: &[Stay],
    today: Date,
) -> Result<Vec<Month>, time::error::ComponentRange> {
    let mut grids = Vec::with_capacity(usize::from(months.min(12)));
    let mut month = MonthName::January;

    for _ in 0..months.min(12) {
        grids.push(Month::build(year, month, stays, today)?);
        month = month.next();
    }

    Ok(grids)
}
