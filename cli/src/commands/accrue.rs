use anyhow::Context;
use debts_common::config::Config;
use debts_core::service::AccrualService;
use tracing::debug;

use crate::terminal::{format, print};

pub fn accrue(
    principal: &str,
    owed_date: &str,
    service: &AccrualService,
    cfg: &Config,
) -> anyhow::Result<()> {
    let statement = match service.submit(principal, owed_date) {
        Ok(statement) => statement,
        Err(err) => {
            debug!(%err, "rejected submission");
            let message = err.user_message();
            return Err(err).context(message);
        }
    };

    format::print_statement(&statement, cfg);
    print::end_of_program(cfg.quiet);
    Ok(())
}
