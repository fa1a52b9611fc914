#![cfg(test)]
use chrono::{Duration, TimeZone, Utc};
use debts_common::error::{InputError, USER_MESSAGE};
use debts_core::startup;

use crate::utils::{days_before, reference_now, service_at};

/// A debt owed exactly two weeks ago: two weeks late, 1 + 2 in penalties.
#[test]
fn two_weeks_late() {
    let now = reference_now();
    let service = service_at(now);

    let statement = service.submit("100", &days_before(now, 14)).unwrap();

    assert_eq!(statement.result.weeks_late, 2);
    assert_eq!(statement.result.penalty, 3.0);
    assert_eq!(statement.result.accrued, 103.0);
}

#[test]
fn partial_weeks_are_dropped() {
    let now = reference_now();
    let statement = service_at(now).submit("50", &days_before(now, 20)).unwrap();

    assert_eq!(statement.result.weeks_late, 2);
    assert_eq!(statement.result.accrued, 53.0);
}

#[test]
fn first_week_is_free() {
    let now = reference_now();
    let statement = service_at(now).submit("75", &days_before(now, 3)).unwrap();

    assert_eq!(statement.result.weeks_late, 0);
    assert_eq!(statement.result.penalty, 0.0);
    assert_eq!(statement.result.accrued, 75.0);
}

#[test]
fn exactly_seven_days_is_one_week() {
    let now = reference_now();
    let statement = service_at(now).submit("20", &days_before(now, 7)).unwrap();

    assert_eq!(statement.result.weeks_late, 1);
    assert_eq!(statement.result.penalty, 1.0);
    assert_eq!(statement.result.accrued, 21.0);
}

#[test]
fn one_millisecond_short_of_a_week() {
    let now = reference_now();
    let owed = (now - Duration::days(7) + Duration::milliseconds(1)).to_rfc3339();
    let statement = service_at(now).submit("20", &owed).unwrap();

    assert_eq!(statement.result.weeks_late, 0);
    assert_eq!(statement.result.accrued, 20.0);
}

#[test]
fn accrued_always_principal_plus_penalty() {
    let now = reference_now();
    let service = service_at(now);

    for days in 0..400 {
        let statement = service.submit("123.45", &days_before(now, days)).unwrap();
        let weeks = statement.result.weeks_late;
        assert_eq!(statement.result.penalty, (weeks * (weeks + 1) / 2) as f64);
        assert_eq!(statement.result.accrued, 123.45 + statement.result.penalty);
    }
}

#[test]
fn sentence_for_calendar_date() {
    let service = service_at(Utc.with_ymd_and_hms(2024, 6, 15, 18, 30, 0).unwrap());

    let statement = service.submit("1000", "2024-05-01").unwrap();

    // 45.77 days
    assert_eq!(
        statement.to_string(),
        "$1,000.00 owed on 5/1/2024 is now worth $1,021.00. \
         Weeks late: 6 weeks, penalty applied (cumulative): $21."
    );
}

#[test]
fn invalid_submissions_share_one_message() {
    let service = service_at(reference_now());

    let cases = [("100", ""), ("", "2024-01-01"), ("-4", "2024-01-01"), ("9", "someday")];
    for (principal, owed) in cases {
        let err = service.submit(principal, owed).unwrap_err();
        assert_eq!(err.user_message(), USER_MESSAGE);
    }

    assert_eq!(service.submit("100", " "), Err(InputError::MissingDate));
}

#[tokio::test]
async fn failed_startup_task_leaves_calculation_alone() {
    let handle = startup::spawn_optional("broken", async {
        Err::<(), _>(anyhow::anyhow!("registration refused"))
    });

    let now = reference_now();
    let statement = service_at(now).submit("100", &days_before(now, 14)).unwrap();

    assert!(handle.await.is_ok());
    assert_eq!(statement.result.accrued, 103.0);
}
