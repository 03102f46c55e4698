use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{
    Date, Month, OffsetDateTime, UtcOffset,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};
use time_tz::{ToTimezone, timezones};

const ISO_DAY: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const LABEL_DAY: &[BorrowedFormatItem<'_>] = format_description!("[day].[month].[year]");

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("invalid date `{0}`, expected YYYY-MM-DD")]
pub struct ParseDayError(pub String);

/// A calendar day, stored and exchanged as `YYYY-MM-DD`.
///
/// ISO text sorts the same way as the dates themselves, which is what the
/// range filters on the `booking` table rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(pub Date);

impl Day {
    /// Current day on the wall clock of `timezone` (IANA name). Unknown names
    /// fall back to UTC.
    pub fn today(timezone: &str) -> Self {
        Self::in_timezone(OffsetDateTime::now_utc(), timezone)
    }

    pub fn in_timezone(at: OffsetDateTime, timezone: &str) -> Self {
        match timezones::get_by_name(timezone) {
            Some(tz) => Self(at.to_timezone(tz).date()),
            None => Self(at.to_offset(UtcOffset::UTC).date()),
        }
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, time::error::ComponentRange> {
        Ok(Self(Date::from_calendar_date(
            year,
            Month::try_from(month)?,
            day,
        )?))
    }

    pub fn date(&self) -> Date {
        self.0
    }

    /// `dd.MM.yyyy`, the format shown in the UI.
    pub fn label(&self) -> String {
        self.0.format(LABEL_DAY).unwrap_or_default()
    }
}

pub fn is_known_timezone(name: &str) -> bool {
    timezones::get_by_name(name).is_some()
}

impl From<Date> for Day {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.format(ISO_DAY).map_err(|_| fmt::Error)?;
        f.write_str(&value)
    }
}

impl FromStr for Day {
    type Err = ParseDayError;

    /// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, in which case the
    /// UTC calendar day is kept.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let err = || ParseDayError(value.to_owned());

        // `[year]` would take a leading sign
        if !value.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(err());
        }

        if value.len() > 10 {
            let at = OffsetDateTime::parse(value, &Rfc3339).map_err(|_| err())?;
            return Ok(Self(at.to_offset(UtcOffset::UTC).date()));
        }

        Date::parse(value, ISO_DAY).map(Self).map_err(|_| err())
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn parses_iso_day() {
        let day: Day = "2026-07-04".parse().unwrap();
        assert_eq!(day, Day::from_ymd(2026, 7, 4).unwrap());
        assert_eq!(day.to_string(), "2026-07-04");
        assert_eq!(day.label(), "04.07.2026");
    }

    #[test]
    fn pads_small_years() {
        let day = Day::from_ymd(202, 1, 9).unwrap();
        assert_eq!(day.to_string(), "0202-01-09");
        assert_eq!(day.label(), "09.01.0202");
    }

    #[test]
    fn parses_timestamp_as_utc_day() {
        let day: Day = "2026-07-03T22:00:00.000Z".parse().unwrap();
        assert_eq!(day.to_string(), "2026-07-03");

        let day: Day = "2026-07-04T00:30:00+02:00".parse().unwrap();
        assert_eq!(day.to_string(), "2026-07-03");
    }

    #[test]
    fn rejects_garbage() {
        for value in [
            "",
            "tomorrow",
            "2026-7-4",
            "2026-02-30",
            "2026-13-01",
            "2026-+7-04",
            "2026-07-+4",
            "+202-07-04",
            "+2026-07-04",
            "-2026-07-04",
            "20260704",
            "2026/07/04",
        ] {
            assert!(value.parse::<Day>().is_err(), "{value} should not parse");
        }
    }

    #[test]
    fn today_follows_timezone() {
        let late_evening = datetime!(2026-07-03 22:30 UTC);

        assert_eq!(
            Day::in_timezone(late_evening, "Europe/Berlin").to_string(),
            "2026-07-04"
        );
        assert_eq!(Day::in_timezone(late_evening, "UTC").to_string(), "2026-07-03");
        assert_eq!(
            Day::in_timezone(late_evening, "Nowhere/Atlantis").to_string(),
            "2026-07-03"
        );

        let winter = datetime!(2026-01-15 23:30 UTC);
        assert_eq!(
            Day::in_timezone(winter, "Europe/Berlin").to_string(),
            "2026-01-16"
        );
    }

    #[test]
    fn known_timezones() {
        assert!(is_known_timezone("Europe/Berlin"));
        assert!(!is_known_timezone("Europe/Hutbook"));
    }

    #[test]
    fn serde_uses_iso_text() {
        let day = Day::from_ymd(2026, 1, 9).unwrap();
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"2026-01-09\"");
        let back: Day = serde_json::from_str("\"2026-01-09\"").unwrap();
        assert_eq!(back, day);
    }
}
