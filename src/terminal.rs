//! Terminal rendering of guess bars, the reveal gauge and announcements.

use crossterm::style::{Color, Stylize};
use routle_core::{Guess, ProgressSink, RevealSink, SubmitOutcome, MAX_GUESSES};
use std::io::{self, Write};
use tracing::{instrument, warn};

/// Draws session updates as plain text lines, optionally coloured.
#[derive(Debug)]
pub struct TerminalView<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Consumes the view and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Writes the session header.
    #[instrument(skip(self))]
    pub fn banner(&mut self, candidates: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "Guess the route! {} candidates, {} tries. Type ?prefix for suggestions, :quit to leave.",
            candidates, MAX_GUESSES
        )
    }

    /// Writes the input prompt.
    pub fn prompt(&mut self, remaining: usize) -> io::Result<()> {
        write!(self.out, "[{} left] > ", remaining)?;
        self.out.flush()
    }

    /// Writes a non-fatal notice such as a validation failure.
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(message, Color::Yellow);
        writeln!(self.out, "{}", line)
    }

    /// Writes a list of suggested route names.
    pub fn suggestions(&mut self, names: &[&str]) -> io::Result<()> {
        if names.is_empty() {
            return writeln!(self.out, "  (no matching routes)");
        }
        for name in names {
            writeln!(self.out, "  {}", name)?;
        }
        Ok(())
    }

    /// Writes the win or loss announcement for a terminal outcome.
    #[instrument(skip(self))]
    pub fn announce(&mut self, outcome: &SubmitOutcome) -> io::Result<()> {
        let line = match outcome {
            SubmitOutcome::Won { target_name } => self.paint(
                &format!("You got it! \"{}\" was correct!", target_name),
                Color::Green,
            ),
            SubmitOutcome::Lost { target_name } => self.paint(
                &format!("Oops, the correct answer was \"{}\".", target_name),
                Color::Red,
            ),
            SubmitOutcome::Continue { .. } | SubmitOutcome::AlreadyOver => return Ok(()),
        };
        writeln!(self.out, "{}", line)
    }

    fn write_bars(&mut self, history: &[Guess]) -> io::Result<()> {
        for slot in 0..MAX_GUESSES {
            let bar = match history.get(slot) {
                Some(guess) if guess.correct() => self.paint(guess.name(), Color::Green),
                Some(guess) => self.paint(guess.name(), Color::Red),
                None => String::new(),
            };
            writeln!(self.out, " {} | {}", slot + 1, bar)?;
        }
        Ok(())
    }

    fn write_gauge(&mut self, intensity: f64) -> io::Result<()> {
        let filled = (intensity * MAX_GUESSES as f64).round() as usize;
        let gauge: String = (0..MAX_GUESSES)
            .map(|i| if i < filled { '#' } else { '.' })
            .collect();
        writeln!(
            self.out,
            "map [{}] {:>3}%",
            gauge,
            (intensity * 100.0).round() as u32
        )
    }
}

impl<W: Write> ProgressSink for TerminalView<W> {
    fn show_history(&mut self, history: &[Guess]) {
        if let Err(e) = self.write_bars(history) {
            warn!(error = %e, "Failed to draw guess bars");
        }
    }
}

impl<W: Write> RevealSink for TerminalView<W> {
    fn set_reveal(&mut self, intensity: f64) {
        if let Err(e) = self.write_gauge(intensity) {
            warn!(error = %e, "Failed to draw reveal gauge");
        }
    }
}
