//! Status macros shared by every crate in the workspace.
//!
//! They all go through `tracing`, so the CLI formatter decides how each one
//! looks. `success!` uses its own target so it can get a distinct symbol.

pub const SUCCESS_TARGET: &str = "debts::success";
pub const PRINT_TARGET: &str = "debts::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "debts::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
