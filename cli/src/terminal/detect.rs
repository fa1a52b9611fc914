use anyhow::anyhow;
use console::Term;
use tracing::debug;

/// Turns colored output off when stdout cannot show it.
///
/// Run through `debts_core::startup::spawn_optional`; an error only means
/// the terminal could not be inspected.
pub async fn detect_terminal() -> anyhow::Result<()> {
    let term = Term::stdout();

    if !term.is_term() {
        colored::control::set_override(false);
        debug!("stdout is not a terminal, colors disabled");
        return Ok(());
    }

    let (rows, cols) = term
        .size_checked()
        .ok_or_else(|| anyhow!("unable to read terminal size"))?;

    if !term.features().colors_supported() {
        colored::control::set_override(false);
    }

    debug!(rows, cols, "terminal detected");
    Ok(())
}
