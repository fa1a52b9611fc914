//! # Form Inputs
//!
//! Parsing and validation for the two fields of a debt submission.
//!
//! * **Principal**: a finite amount strictly greater than zero (e.g., `"100"`, `" 19.99 "`).
//! * **Owed date**: a calendar date (`"2024-01-31"`, read as UTC midnight)
//!   or a full RFC 3339 timestamp (`"2024-01-31T09:30:00+02:00"`).
//!
//! Nothing past this module has to check its inputs again.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::InputError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The original debt amount, before any penalty.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Principal(f64);

impl Principal {
    pub fn new(value: f64) -> Result<Self, InputError> {
        if !value.is_finite() {
            return Err(InputError::InvalidPrincipal {
                raw: value.to_string(),
            });
        }
        if value <= 0.0 {
            return Err(InputError::NonPositivePrincipal { value });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Principal {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed.parse().map_err(|_| InputError::InvalidPrincipal {
            raw: trimmed.to_string(),
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The instant the debt became due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OwedDate(DateTime<Utc>);

impl OwedDate {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn from_calendar_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn calendar_date(&self) -> NaiveDate {
        self.0.date_naive()
    }
}

impl FromStr for OwedDate {
    type Err = InputError;

    /// Accepts `YYYY-MM-DD` first, then RFC 3339.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InputError::MissingDate);
        }

        if let Some(date) = parse_calendar_date(trimmed) {
            return Ok(Self::from_calendar_date(date));
        }

        if let Some(instant) = parse_timestamp(trimmed) {
            return Ok(Self(instant));
        }

        Err(InputError::InvalidDate {
            raw: trimmed.to_string(),
        })
    }
}

fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Validates the raw text of both form fields.
///
/// A missing date is reported before anything is said about the amount.
pub fn parse_submission(principal: &str, owed_date: &str) -> Result<(Principal, OwedDate), InputError> {
    if owed_date.trim().is_empty() {
        return Err(InputError::MissingDate);
    }
    let principal: Principal = principal.parse()?;
    let owed_date: OwedDate = owed_date.parse()?;
    Ok((principal, owed_date))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
