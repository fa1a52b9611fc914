//! Interactive form: amount, then date, then the statement, then start over.
//!
//! Each entry is computed from scratch and forgotten once printed.

use std::io::{self, BufRead, Write};

use colored::*;
use debts_common::config::Config;
use debts_core::service::AccrualService;
use tracing::{debug, error};

use crate::mprint;
use crate::terminal::{colors, format, print};

const AMOUNT_PROMPT: &str = "Amount owed: ";
const DATE_PROMPT: &str = "Owed on (YYYY-MM-DD): ";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormSummary {
    pub accepted: usize,
    pub rejected: usize,
}

pub fn form(service: &AccrualService, cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let summary = run_form(stdin.lock(), io::stdout(), service, cfg)?;

    if cfg.quiet == 0 {
        mprint!();
        print::header("session", cfg.quiet);
        let width = "Rejected".len();
        print::aligned_line("Accepted", width, summary.accepted.to_string());
        print::aligned_line("Rejected", width, summary.rejected.to_string().color(colors::PENALTY));
    }
    print::end_of_program(cfg.quiet);
    Ok(())
}

/// Runs the form until the input ends or an empty amount is entered.
pub fn run_form<R, W>(
    mut input: R,
    mut prompt: W,
    service: &AccrualService,
    cfg: &Config,
) -> anyhow::Result<FormSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = FormSummary::default();

    loop {
        let Some(amount) = read_field(&mut input, &mut prompt, AMOUNT_PROMPT)? else {
            break;
        };
        if amount.trim().is_empty() {
            break;
        }
        let Some(owed_date) = read_field(&mut input, &mut prompt, DATE_PROMPT)? else {
            break;
        };

        match service.submit(&amount, &owed_date) {
            Ok(statement) => {
                format::print_statement(&statement, cfg);
                summary.accepted += 1;
            }
            Err(err) => {
                debug!(%err, "rejected submission");
                error!("{}", err.user_message());
                summary.rejected += 1;
            }
        }
        mprint!();
    }

    Ok(summary)
}

fn read_field<R, W>(input: &mut R, prompt: &mut W, label: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(prompt, "{label}")?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
