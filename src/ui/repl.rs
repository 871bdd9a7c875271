//! Read-eval-print loop over any line source
//!
//! Generic over `BufRead`/`Write` so tests can script a whole game with a
//! `Cursor` and inspect the transcript.

use crate::command::events::GameState;
use crate::command::session::Session;
use crate::core::error::Result;
use crate::ui::text;
use std::io::{BufRead, Write};

/// Play until quit, defeat, or end of input. Returns the final state.
///
/// End of input leaves the state as `Playing`.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    output: &mut W,
) -> Result<GameState> {
    let mut buf = Vec::new();

    loop {
        if let Some(event) = session.check_defeat() {
            writeln!(output, "{}", text::render(&event))?;
        }
        if session.state().is_terminal() {
            break;
        }

        match session.pending_replacement() {
            Some(proposal) => write!(
                output,
                "{}",
                text::replacement_prompt(proposal.current(), proposal.candidate())
            )?,
            None => {
                writeln!(output, "{}", text::room_prompt(&session.current_room()?.name))?;
                write!(output, "> ")?;
            }
        }
        output.flush()?;

        // Invalid UTF-8 decodes lossily and reaches the parser as an unknown command
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("End of input");
            writeln!(output)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        for event in session.handle_line(&line)? {
            writeln!(output, "{}", text::render(&event))?;
        }
    }

    Ok(session.state())
}
