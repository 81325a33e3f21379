//! Line-driven input surface for one session.
//!
//! Each line read is one submission attempt. Lines starting with `?` list
//! matching route names and `:quit` leaves early. Reading stops as soon as
//! the session ends.

use crate::terminal::TerminalView;
use routle_core::{Outcome, Session, TurnError, MAX_GUESSES};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, instrument};

/// Maximum suggestions listed for one `?prefix` query.
pub const SUGGESTION_LIMIT: usize = 10;

const QUIT_COMMAND: &str = ":quit";

/// Runs the input loop until the session ends, input closes, or the player
/// quits.
///
/// Returns the session outcome, or `None` if it never finished.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    view: &mut TerminalView<W>,
) -> io::Result<Option<Outcome>> {
    let mut lines = input.lines();

    while !session.is_over() {
        let remaining = session.machine().map_or(MAX_GUESSES, |m| m.remaining());
        view.prompt(remaining)?;

        let Some(line) = lines.next() else {
            debug!("Input closed");
            break;
        };
        let line = line?;
        let text = line.trim();

        if text == QUIT_COMMAND {
            info!("Player quit");
            break;
        }

        if let Some(prefix) = text.strip_prefix('?') {
            let names = session
                .resolver()
                .map(|r| r.index().suggest(prefix.trim(), SUGGESTION_LIMIT))
                .unwrap_or_default();
            view.suggestions(&names)?;
            continue;
        }

        match session.submit_text(text, view) {
            Ok(outcome) => view.announce(&outcome)?,
            Err(TurnError::Guess(e)) => {
                error!(error = %e, "Guess rejected by state machine");
                view.notice(&e.to_string())?;
            }
            Err(e) => view.notice(&e.to_string())?,
        }
    }

    Ok(session.machine().and_then(|m| m.outcome()))
}
