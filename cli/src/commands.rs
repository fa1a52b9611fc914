pub mod accrue;
pub mod form;

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "debts")]
#[command(about = "What a late debt is worth today, one more dollar per week.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output; repeat (-qq) to print only the result
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Compute as of this RFC 3339 instant instead of the current time
    #[arg(long, global = true, value_name = "INSTANT")]
    pub now: Option<DateTime<Utc>>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the current value of a single debt
    #[command(alias = "a")]
    Accrue {
        /// Amount originally owed, e.g. 120.50
        principal: String,
        /// Date the debt was due, YYYY-MM-DD or RFC 3339
        owed_date: String,
    },
    /// Enter debts one after another on standard input
    #[command(alias = "f")]
    Form,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
