use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use unicode_width::UnicodeWidthStr;

use super::quote::format_quote;
use super::{INDENT, theme};
use crate::catalog::Quote;
use crate::config::SessionConfig;

/// Produces the session's terminal output.
///
/// Animation frames and the countdown share one line, overwritten with
/// `\r`; everything else is appended. Generic over the writer so tests
/// can capture output.
pub struct Renderer<W: Write = io::Stdout> {
    out: W,
}

impl Default for Renderer<io::Stdout> {
    fn default() -> Self {
        Self { out: io::stdout() }
    }
}

impl Renderer<io::Stdout> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: Write> Renderer<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { out: writer }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Clear the screen and home the cursor.
    pub fn clear(&mut self) {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0)).ok();
        self.out.flush().ok();
    }

    /// Show the startup quote box and its reflection prompt.
    pub fn render_quote(&mut self, quote: &Quote) {
        queue!(
            self.out,
            Print("\n"),
            Print(theme::accent().apply(format_quote(quote))),
            Print("\n"),
            Print(INDENT),
            Print("Take a moment to reflect on these words...\n"),
        )
        .ok();
        self.out.flush().ok();
    }

    /// Show the session header box and the interrupt hint.
    pub fn render_header(&mut self, config: &SessionConfig) {
        let lines = [
            "🧘 Mindful Breathing 🧘".to_string(),
            format!("Duration: {:>4} seconds", config.duration_secs),
            format!("Pattern: {}", config.pattern.name()),
            format!("Style: {}", config.style.name()),
        ];
        queue!(
            self.out,
            Print("\n"),
            Print(theme::accent().apply(boxed(&lines))),
            Print("\n"),
            Print(INDENT),
            Print("Press Ctrl+C to end early\n\n"),
        )
        .ok();
        self.out.flush().ok();
    }

    /// Draw one animation frame in place on the current line.
    pub fn render_frame(&mut self, label: &str, frame: &str) {
        queue!(
            self.out,
            Print("\r"),
            Clear(ClearType::UntilNewLine),
            Print(INDENT),
            Print(theme::accent().apply(format!("{label}: {frame}"))),
        )
        .ok();
        self.out.flush().ok();
    }

    /// Terminate the current phase's line.
    pub fn finish_phase(&mut self) {
        queue!(self.out, Print("\n")).ok();
        self.out.flush().ok();
    }

    /// Overwrite the current line with the seconds left in the session.
    pub fn render_remaining(&mut self, secs: u64) {
        let readout = format!("Remaining: {secs:>3}s ");
        queue!(
            self.out,
            Print("\r"),
            Clear(ClearType::UntilNewLine),
            Print(theme::countdown().apply(readout)),
        )
        .ok();
        self.out.flush().ok();
    }

    pub fn render_completed(&mut self) {
        queue!(
            self.out,
            Print(format!("\n\n{INDENT}🙏 Breathing exercise completed 🙏\n\n")),
        )
        .ok();
        self.out.flush().ok();
    }

    pub fn render_interrupted(&mut self) {
        queue!(
            self.out,
            Print(format!("\n\n{INDENT}🙏 Breathing exercise ended early 🙏\n\n")),
        )
        .ok();
        self.out.flush().ok();
    }
}

/// Frame `lines` in a left-aligned box with a three-column margin.
fn boxed(lines: &[String]) -> String {
    let longest = lines.iter().map(|line| line.as_str().width()).max().unwrap_or(0);
    let border: String = "─".repeat(longest + 6);
    let mut out = format!("{INDENT}╭{border}╮\n");
    for line in lines {
        let fill = " ".repeat(longest - line.as_str().width());
        out.push_str(&format!("{INDENT}│   {line}{fill}   │\n"));
    }
    out.push_str(&format!("{INDENT}╰{border}╯\n"));
    out
}
