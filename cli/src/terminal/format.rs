use colored::*;
use debts_common::config::Config;
use debts_common::success;
use debts_core::statement::{self, Statement};

use crate::terminal::{colors, print};
use crate::mprint;

type Detail = (String, ColoredString);

pub fn statement_details(statement: &Statement) -> Vec<Detail> {
    let result = &statement.result;
    let penalty: ColoredString = if result.weeks_late == 0 {
        "none".normal()
    } else {
        statement::format_usd(result.penalty).color(colors::PENALTY)
    };

    vec![
        (
            "Amount".to_string(),
            statement::format_usd(statement.principal.value()).color(colors::MONEY),
        ),
        (
            "Owed".to_string(),
            statement::format_date(statement.owed_date.calendar_date()).normal(),
        ),
        (
            "Late".to_string(),
            format!(
                "{} {}",
                result.weeks_late,
                statement::pluralize_week(result.weeks_late)
            )
            .color(colors::ACCENT),
        ),
        ("Penalty".to_string(), penalty),
        (
            "Worth".to_string(),
            statement::format_usd(result.accrued).color(colors::MONEY).bold(),
        ),
    ]
}

/// How much of a statement gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Sentence plus the breakdown tree.
    Full,
    /// Sentence as a status line.
    Summary,
    /// Bare sentence, nothing else.
    Sentence,
}

impl Verbosity {
    pub fn from_quiet(q_level: u8) -> Self {
        match q_level {
            0 => Verbosity::Full,
            1 => Verbosity::Summary,
            _ => Verbosity::Sentence,
        }
    }
}

/// Prints a statement at the verbosity `cfg.quiet` asks for.
pub fn print_statement(statement: &Statement, cfg: &Config) {
    match Verbosity::from_quiet(cfg.quiet) {
        Verbosity::Sentence => print::print(&statement.to_string()),
        Verbosity::Summary => success!("{}", statement),
        Verbosity::Full => {
            print::print_status(statement.to_string());
            mprint!();
            print::as_tree_one_level(statement_details(statement));
        }
    }
}
