//! Reference instants and calendar-day arithmetic
//!
//! Eligibility is decided on calendar dates, but callers hold instants.
//! This module bridges the two:
//! - [`AsOf`]: an explicit reference instant plus the timezone whose
//!   calendar decides what "today" is
//! - [`DateWindow`]: a half-open `[start, end)` range of calendar dates
//! - [`parse_iso_date`]: strict ISO-8601 date parsing that names the field
//!   it failed on

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use std::fmt;
use std::str::FromStr;

/// Timezone wrapper for organization jurisdictions
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Timezone::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Parses an IANA timezone name such as `America/Denver`
    pub fn parse(name: &str) -> Result<Self, TemporalError> {
        Tz::from_str(name.trim())
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Returns the local calendar date of a UTC instant
    pub fn date_of(&self, utc: DateTime<Utc>) -> NaiveDate {
        utc.with_timezone(&self.0).date_naive()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid window: start {start} must not be after end {end}")]
    InvalidWindow {
        start: String,
        end: String,
    },

    #[error("Malformed date in {field}: {value:?} is not an ISO-8601 calendar date")]
    MalformedDate {
        field: String,
        value: String,
    },

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Date arithmetic overflow")]
    Overflow,
}

impl TemporalError {
    /// Field the error refers to, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            TemporalError::MalformedDate { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// The reference instant every classification is computed against
///
/// The engine never reads the system clock; callers construct an `AsOf`
/// and pass it through. The calendar date in `timezone` is "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsOf {
    instant: DateTime<Utc>,
    #[serde(default)]
    timezone: Timezone,
}

impl AsOf {
    pub fn new(instant: DateTime<Utc>, timezone: Timezone) -> Self {
        Self { instant, timezone }
    }

    /// Reference instant evaluated on the UTC calendar
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self::new(instant, Timezone::default())
    }

    /// Midnight UTC at the start of `date`
    pub fn on(date: NaiveDate) -> Self {
        Self::utc(date.and_time(NaiveTime::MIN).and_utc())
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }

    /// Calendar date of the reference instant in its timezone
    pub fn date(&self) -> NaiveDate {
        self.timezone.date_of(self.instant)
    }

    /// Whole days from the reference date to `date`; negative when `date` is past
    pub fn days_until(&self, date: NaiveDate) -> i64 {
        days_between(self.date(), date)
    }

    /// The half-open window `[today, today + days)`
    pub fn window(&self, days: u32) -> Result<DateWindow, TemporalError> {
        DateWindow::following(self.date(), days)
    }
}

/// A half-open range of calendar dates `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// The window of `days` days beginning at `start`
    pub fn following(start: NaiveDate, days: u32) -> Result<Self, TemporalError> {
        let end = start
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or(TemporalError::Overflow)?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn days(&self) -> i64 {
        days_between(self.start, self.end)
    }
}

/// Signed number of whole calendar days from `from` to `to`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Parses a strict `YYYY-MM-DD` calendar date
///
/// `field` names the input being parsed so the error can point at it.
pub fn parse_iso_date(field: impl Into<String>, value: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| TemporalError::MalformedDate {
        field: field.into(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_as_of_date_follows_timezone() {
        // 03:00 UTC on Jan 2 is still Jan 1 in Denver
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 0, 0).unwrap();
        let denver = Timezone::parse("America/Denver").unwrap();

        assert_eq!(AsOf::utc(instant).date(), date(2024, 1, 2));
        assert_eq!(AsOf::new(instant, denver).date(), date(2024, 1, 1));
    }

    #[test]
    fn test_window_is_half_open() {
        let window = DateWindow::following(date(2024, 1, 1), 30).unwrap();

        assert!(window.contains(date(2024, 1, 1)));
        assert!(window.contains(date(2024, 1, 30)));
        assert!(!window.contains(date(2024, 1, 31)));
        assert_eq!(window.days(), 30);
    }

    #[test]
    fn test_parse_iso_date_names_field() {
        let err = parse_iso_date("insurance.expiration_date", "2024-02-30").unwrap_err();
        assert_eq!(err.field(), Some("insurance.expiration_date"));
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(date(2024, 1, 15), date(2023, 12, 1)), -45);
        assert_eq!(days_between(date(2024, 1, 10), date(2024, 1, 20)), 10);
    }
}
