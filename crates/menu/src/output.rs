//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Messages go to stderr; only command results go to stdout.
pub(crate) struct Output {
    term: Term,
    stdout: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            stdout: Term::stdout(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Write a command result to stdout, unstyled.
    pub(crate) fn result(&self, text: &str) -> std::io::Result<()> {
        self.stdout.write_str(text)?;
        self.stdout.flush()
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print each warning of a draw (yellow).
    pub(crate) fn warnings(&self, warnings: &[String]) {
        for warning in warnings {
            self.warning(&format!("warning: {warning}"));
        }
    }

    /// Print a menu summary line with the name highlighted (cyan bold).
    pub(crate) fn menu(&self, name: &str, depth: u32, items: usize) {
        let _ = self.term.write_line(&format!(
            "  {} (depth {depth}, {items} items)",
            self.cyan_bold.apply_to(name)
        ));
    }
}
