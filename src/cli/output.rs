//! Terminal output for the desk-ticket CLI
//!
//! Human-readable output is coloured with `colored`; with `--json` every
//! command prints exactly one JSON document on stdout instead and the
//! human-oriented helpers become silent.

use crate::core::{Priority, Status, Ticket};
use crate::error::Result;
use chrono::{DateTime, Local, Utc};
use colored::{ColoredString, Colorize};
use serde::Serialize;

/// Output formatter shared by all command handlers
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color || json {
            colored::control::set_override(false);
        }
        Self { json }
    }

    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a value as pretty JSON on stdout
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{} {message}", "✓".green().bold());
        }
    }

    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Errors always go to stderr, even in JSON mode
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", "Error:".red().bold());
    }

    /// One-line summary used by `list`
    pub fn ticket_line(&self, ticket: &Ticket) -> String {
        let mut line = format!(
            "{}  {}  {}  {}",
            ticket.ticket_id.as_str().bold(),
            status_badge(ticket.status),
            priority_badge(ticket.priority),
            ticket.title
        );
        if !ticket.comments.is_empty() {
            let count = format!("  [{} comment(s)]", ticket.comments.len());
            line.push_str(&count.as_str().dimmed().to_string());
        }
        line
    }
}

/// Status coloured the way the help desk shows it
pub fn status_badge(status: Status) -> ColoredString {
    let label = status.label();
    match status {
        Status::Open => label.blue(),
        Status::InProgress => label.yellow(),
        Status::Resolved => label.green(),
        Status::Closed => label.bright_black(),
    }
}

pub fn priority_badge(priority: Priority) -> ColoredString {
    let label = priority.as_str();
    match priority {
        Priority::Low => label.green(),
        Priority::Medium => label.yellow(),
        Priority::High => label.truecolor(255, 140, 0),
        Priority::Critical => label.red().bold(),
    }
}

/// Local, human-friendly timestamp such as `Jan 15, 2024, 10:05 AM`
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}
