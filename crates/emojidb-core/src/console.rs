//! Console output with optional colour.
//!
//! Everything user-facing goes through [`Console`] so tests can capture the
//! text without ANSI escapes.

use colored::Colorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Error,
    Warning,
    Success,
    Header,
    Dim,
}

/// Writer plus a colour switch.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    /// Stdout console. Colour still honours `NO_COLOR`/`CLICOLOR` and tty
    /// detection inside `colored`.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), true)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Console that never emits escape codes.
    pub fn plain(out: W) -> Self {
        Self::new(out, false)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Returns `text` wrapped in the escapes for `style` (or unchanged).
    pub fn paint(&self, style: Style, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match style {
            Style::Plain => text.to_string(),
            Style::Error => text.red().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Success => text.bright_green().to_string(),
            Style::Header => text.cyan().bold().to_string(),
            Style::Dim => text.bright_black().to_string(),
        }
    }

    /// Writes one styled line.
    pub fn line(&mut self, style: Style, text: &str) -> io::Result<()> {
        let painted = self.paint(style, text);
        writeln!(self.out, "{}", painted)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
