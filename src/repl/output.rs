//! Output rendering for the REPL.

use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};

/// Routes command output to the terminal.
///
/// Regular output is suppressed while a script is replaying; errors and the
/// script begin/end markers always reach the operator. The sink is passed
/// explicitly through dispatch rather than living in global state, so
/// quietness nests naturally with nested scripts.
#[derive(Default)]
pub struct OutputSink {
    script_depth: usize,
}

impl OutputSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_script(&mut self) {
        self.script_depth += 1;
    }

    pub fn leave_script(&mut self) {
        self.script_depth = self.script_depth.saturating_sub(1);
    }

    pub fn is_quiet(&self) -> bool {
        self.script_depth > 0
    }

    /// Print a plain line (suppressed during script replay).
    pub fn say(&self, msg: &str) {
        if !self.is_quiet() {
            println!("{msg}");
        }
    }

    /// Print a success line (suppressed during script replay).
    pub fn success(&self, msg: &str) {
        if !self.is_quiet() {
            println!("{} {}", "OK".green().bold(), msg);
        }
    }

    /// Print an error message to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", "Error:".red().bold(), msg);
    }

    /// Print an always-visible dimmed marker line.
    pub fn notice(&self, msg: &str) {
        println!("{}", msg.dimmed());
    }

    /// Print a formatted table with headers and rows (suppressed during
    /// script replay).
    pub fn table(&self, headers: &[&str], rows: Vec<Vec<String>>) {
        if self.is_quiet() {
            return;
        }
        if rows.is_empty() {
            println!("{}", "No results found.".dimmed());
            return;
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        println!("{table}");
    }
}
