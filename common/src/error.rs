use thiserror::Error;

/// Shown to the user for every rejected submission, whatever the cause.
pub const USER_MESSAGE: &str = "Please enter a valid amount and date.";

/// Why a submission was rejected before reaching the calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("no owed date was given")]
    MissingDate,
    #[error("amount is not a number: {raw:?}")]
    InvalidPrincipal { raw: String },
    #[error("amount must be greater than zero, got {value}")]
    NonPositivePrincipal { value: f64 },
    #[error("owed date is not a valid date: {raw:?}")]
    InvalidDate { raw: String },
}

impl InputError {
    /// The message meant for the person filling in the form.
    ///
    /// `Display` keeps the precise reason for the logs.
    pub fn user_message(&self) -> &'static str {
        USER_MESSAGE
    }
}
