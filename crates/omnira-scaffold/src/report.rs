//! Human-readable progress lines
//!
//! Markers: `✓` success, `~` skipped, `✗` failure, `!` warning. Whether ANSI
//! colors are emitted is decided once by the caller and passed in.

use colored::{ColoredString, Colorize};
use std::io::{self, Write};

pub struct Reporter<W> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Hand back the writer (tests inspect what was printed)
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn marked(
        &mut self,
        marker: &str,
        style: fn(&str) -> ColoredString,
        message: &str,
    ) -> io::Result<()> {
        let marker = self.paint(marker, style);
        writeln!(self.out, "  {} {}", marker, message)
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        self.marked("✓", |s| s.green().bold(), message)
    }

    pub fn skipped(&mut self, message: &str) -> io::Result<()> {
        self.marked("~", |s| s.dimmed(), message)
    }

    pub fn failed(&mut self, message: &str) -> io::Result<()> {
        self.marked("✗", |s| s.red().bold(), message)
    }

    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        self.marked("!", |s| s.yellow().bold(), message)
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        self.marked("→", |s| s.blue(), message)
    }

    /// Bold section title with a blank line above it
    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        let title = self.paint(title, |s| s.bold());
        writeln!(self.out)?;
        writeln!(self.out, "  {}", title)
    }

    /// Aligned `label  value` pair, value highlighted
    pub fn field(&mut self, label: &str, value: &str) -> io::Result<()> {
        let value = self.paint(value, |s| s.cyan());
        writeln!(self.out, "    {:<10} {}", label, value)
    }

    /// Accent-colored banner line
    pub fn banner(&mut self, text: &str) -> io::Result<()> {
        let text = self.paint(text, |s| s.magenta().bold());
        writeln!(self.out)?;
        writeln!(self.out, "  {}", text)
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
