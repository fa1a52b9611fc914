use chrono::{DateTime, Duration, TimeZone, Utc};
use debts_common::clock::FixedClock;
use debts_core::service::AccrualService;

pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
}

pub fn service_at(now: DateTime<Utc>) -> AccrualService {
    AccrualService::new(Box::new(FixedClock::new(now)))
}

/// RFC 3339 text for the instant `days` before `now`.
pub fn days_before(now: DateTime<Utc>, days: i64) -> String {
    (now - Duration::days(days)).to_rfc3339()
}
