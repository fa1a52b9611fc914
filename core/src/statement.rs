//! # Statement
//!
//! Renders a computed accrual as the sentence shown to the user, e.g.
//!
//! ```text
//! $100.00 owed on 6/1/2024 is now worth $103.00. Weeks late: 2 weeks, penalty applied (cumulative): $3.
//! ```
//!
//! Amounts use US dollar formatting; the penalty is printed as a bare number.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use debts_common::input::{OwedDate, Principal};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::accrual::AccrualResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statement {
    pub principal: Principal,
    pub owed_date: OwedDate,
    pub result: AccrualResult,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weeks = self.result.weeks_late;
        write!(
            f,
            "{} owed on {} is now worth {}. Weeks late: {} {}, penalty applied (cumulative): ${}.",
            format_usd(self.principal.value()),
            format_date(self.owed_date.calendar_date()),
            format_usd(self.result.accrued),
            weeks,
            pluralize_week(weeks),
            self.result.penalty
        )
    }
}

/// `$1,234.57` style: thousands separators, cents rounded half away from zero.
///
/// Rounding works on the exact decimal value of `amount`, so `0.015`
/// (stored as 0.01499...) shows as `$0.01`.
pub fn format_usd(amount: f64) -> String {
    let (dollars, cents) = dollars_and_cents(amount.abs());
    let sign = if amount < 0.0 && (dollars != "0" || cents != "00") { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(&dollars))
}

fn dollars_and_cents(magnitude: f64) -> (String, String) {
    match Decimal::from_f64_retain(magnitude) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            let text = format!("{rounded:.2}");
            match text.split_once('.') {
                Some((dollars, cents)) => (dollars.to_string(), cents.to_string()),
                None => (text, "00".to_string()),
            }
        }
        // Past Decimal's range every f64 is a whole number.
        None => (format!("{}", magnitude.trunc()), "00".to_string()),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `M/D/YYYY`, no zero padding.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

pub fn pluralize_week(count: u64) -> &'static str {
    if count == 1 { "week" } else { "weeks" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(3.0), "$3.00");
        assert_eq!(format_usd(19.999), "$20.00");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(999_999.994), "$999,999.99");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(-42.1), "-$42.10");
    }

    #[test]
    fn test_format_usd_rounds_exact_value() {
        // Both are stored just below the half cent
        assert_eq!(format_usd(0.015), "$0.01");
        assert_eq!(format_usd(1000.015), "$1,000.01");

        // Exactly representable ties go away from zero
        assert_eq!(format_usd(0.125), "$0.13");
        assert_eq!(format_usd(2.375), "$2.38");
    }

    #[test]
    fn test_format_usd_huge_amounts_keep_every_digit() {
        assert_eq!(format_usd(1e21), "$1,000,000,000,000,000,000,000.00");
        assert_eq!(format_usd(1e40), "$10,000,000,000,000,000,000,000,000,000,000,000,000,000.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("12345678"), "12,345,678");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "1/5/2024");
        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(format_date(date), "12/25/2023");
    }

    #[test]
    fn test_sentence() {
        let statement = Statement {
            principal: Principal::new(100.0).unwrap(),
            owed_date: OwedDate::from_calendar_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            result: AccrualResult { accrued: 103.0, weeks_late: 2, penalty: 3.0 },
        };
        assert_eq!(
            statement.to_string(),
            "$100.00 owed on 6/1/2024 is now worth $103.00. \
             Weeks late: 2 weeks, penalty applied (cumulative): $3."
        );
    }

    #[test]
    fn test_sentence_singular_week() {
        let statement = Statement {
            principal: Principal::new(1500.25).unwrap(),
            owed_date: OwedDate::from_calendar_date(NaiveDate::from_ymd_opt(2024, 2, 9).unwrap()),
            result: AccrualResult { accrued: 1501.25, weeks_late: 1, penalty: 1.0 },
        };
        assert_eq!(
            statement.to_string(),
            "$1,500.25 owed on 2/9/2024 is now worth $1,501.25. \
             Weeks late: 1 week, penalty applied (cumulative): $1."
        );
    }

    #[test]
    fn test_sentence_on_time() {
        let statement = Statement {
            principal: Principal::new(75.0).unwrap(),
            owed_date: OwedDate::from_calendar_date(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()),
            result: AccrualResult { accrued: 75.0, weeks_late: 0, penalty: 0.0 },
        };
        assert!(statement.to_string().ends_with("Weeks late: 0 weeks, penalty applied (cumulative): $0."));
    }
}
