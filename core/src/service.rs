//! # Accrual Service
//!
//! Implements the "submit the form" use case.
//!
//! Validation of the raw fields, reading the clock and computing the accrual
//! all happen here, in that order. The clock is read exactly once per
//! submission so a statement always describes a single instant.

use debts_common::clock::Clock;
use debts_common::error::InputError;
use debts_common::input::{self, OwedDate, Principal};
use tracing::debug;

use crate::accrual;
use crate::statement::Statement;

pub struct AccrualService {
    clock: Box<dyn Clock>,
}

impl AccrualService {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Validates the raw form fields and computes the statement.
    ///
    /// Nothing is remembered between calls.
    pub fn submit(&self, principal: &str, owed_date: &str) -> Result<Statement, InputError> {
        let (principal, owed_date) = input::parse_submission(principal, owed_date)?;
        Ok(self.compute(principal, owed_date))
    }

    pub fn compute(&self, principal: Principal, owed_date: OwedDate) -> Statement {
        let now = self.clock.now();
        let result = accrual::compute_accrued(principal, owed_date, now);
        debug!(
            principal = principal.value(),
            owed = %owed_date.instant(),
            %now,
            weeks_late = result.weeks_late,
            "computed accrual"
        );
        Statement {
            principal,
            owed_date,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use debts_common::clock::FixedClock;

    fn service() -> AccrualService {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        AccrualService::new(Box::new(FixedClock::new(now)))
    }

    #[test]
    fn submit_valid_form() {
        let statement = service().submit("100", "2024-06-01").unwrap();
        assert_eq!(statement.result.weeks_late, 2);
        assert_eq!(statement.result.penalty, 3.0);
        assert_eq!(statement.result.accrued, 103.0);
    }

    #[test]
    fn submit_rejects_bad_fields() {
        let service = service();
        assert_eq!(service.submit("100", ""), Err(InputError::MissingDate));
        assert!(service.submit("zero", "2024-06-01").is_err());
        assert!(service.submit("0", "2024-06-01").is_err());
        assert!(service.submit("10", "06/01/2024").is_err());
    }

    #[test]
    fn submissions_are_independent() {
        let service = service();
        let first = service.submit("100", "2024-06-01").unwrap();
        let _ = service.submit("5", "2020-01-01").unwrap();
        let again = service.submit("100", "2024-06-01").unwrap();
        assert_eq!(first, again);
    }
}
