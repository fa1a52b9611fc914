mod commands;
mod terminal;

use commands::{CommandLine, Commands, accrue, form};
use debts_common::clock::{Clock, FixedClock, SystemClock};
use debts_common::config::Config;
use debts_core::service::AccrualService;
use debts_core::startup;
use terminal::{detect, logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    let detect_handle = startup::spawn_optional("terminal-detect", detect::detect_terminal());

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        now: commands.now,
    };

    let clock: Box<dyn Clock> = match cfg.now {
        Some(now) => Box::new(FixedClock::new(now)),
        None => Box::new(SystemClock),
    };
    let service = AccrualService::new(clock);

    // Detection only decides whether to color output; its result is ignored.
    startup::settle("terminal-detect", detect_handle).await;
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Accrue { principal, owed_date } => {
            print::header("debt statement", cfg.quiet);
            accrue::accrue(&principal, &owed_date, &service, &cfg)
        }
        Commands::Form => {
            print::header("debt form", cfg.quiet);
            form::form(&service, &cfg)
        }
    }
}
