//! # Debts Core
//!
//! * [`accrual`]: the weekly late-penalty calculation.
//! * [`statement`]: the sentence shown after a submission.
//! * [`service`]: ties input validation, the clock and the calculator together.
//! * [`startup`]: optional background work that must never affect a result.

pub mod accrual;
pub mod service;
pub mod startup;
pub mod statement;
