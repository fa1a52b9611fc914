//! # Accrual Calculator
//!
//! A debt accrues nothing during its first seven days. After that, every full
//! week adds a penalty one dollar larger than the week before, so `n` weeks
//! late costs `1 + 2 + ... + n`.

use chrono::{DateTime, Utc};
use debts_common::input::{OwedDate, Principal};

pub const DAYS_PER_WEEK: f64 = 7.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccrualResult {
    /// Principal plus penalty.
    pub accrued: f64,
    pub weeks_late: u64,
    /// Always `weeks_late * (weeks_late + 1) / 2`.
    pub penalty: f64,
}

impl AccrualResult {
    fn on_time(principal: Principal) -> Self {
        Self {
            accrued: principal.value(),
            weeks_late: 0,
            penalty: 0.0,
        }
    }
}

/// Days between `owed` and `now`, fractional and unrounded.
///
/// Negative when the debt is not due yet.
pub fn elapsed_days(owed: OwedDate, now: DateTime<Utc>) -> f64 {
    (now - owed.instant()).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Sum of `1..=n`.
pub fn triangular(n: u64) -> u64 {
    if n % 2 == 0 {
        (n / 2).saturating_mul(n.saturating_add(1))
    } else {
        n.saturating_mul(n.div_ceil(2))
    }
}

pub fn compute_accrued(principal: Principal, owed: OwedDate, now: DateTime<Utc>) -> AccrualResult {
    let days = elapsed_days(owed, now);
    if days < DAYS_PER_WEEK {
        return AccrualResult::on_time(principal);
    }

    let weeks_late = (days / DAYS_PER_WEEK).floor() as u64;
    let penalty = triangular(weeks_late) as f64;

    AccrualResult {
        accrued: principal.value() + penalty,
        weeks_late,
        penalty,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
