//! Shared types for the debts workspace.
//!
//! * [`input`]: validated form inputs ([`input::Principal`], [`input::OwedDate`]).
//! * [`clock`]: the source of "now" handed to the calculator.
//! * [`error`]: the validation error taxonomy.
//! * [`config`]: runtime settings collected from the command line.
//! * [`log`]: `success!` / `warn!` status macros.

pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod log;

#[doc(hidden)]
pub use tracing;
