//! Colored terminal output.
//!
//! Everything goes to stderr so stdout stays free for rendered documents.

use std::fmt::Display;

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn line(&self, text: impl Display) {
        let _ = self.term.write_line(&text.to_string());
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        self.line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.line(Style::new().green().apply_to(msg));
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.line(Style::new().yellow().apply_to(msg));
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.line(Style::new().red().apply_to(msg));
    }

    /// Print a heading (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        self.line(Style::new().cyan().bold().apply_to(msg));
    }

    /// Print an indented `label: value` line with a dimmed label.
    pub(crate) fn entry(&self, label: &str, value: &str) {
        let label = Style::new().dim().apply_to(format!("{label}:"));
        self.line(format_args!("  {label} {value}"));
    }

    /// Print a separator line.
    pub(crate) fn separator(&self) {
        self.line("-".repeat(60));
    }
}
