//! Command-line front end
//!
//! The CLI is the rendering layer and the identity stub. It parses
//! arguments, builds the acting [`crate::core::User`] from `--user`/`--role`
//! (or their environment variables), and hands off to the library.

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use crate::core::Role;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// desk-ticket - help-desk ticket tracker
#[derive(Parser, Debug)]
#[command(name = "desk-ticket", version, about = "Help-desk ticket tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the ticket record
    #[arg(long, global = true, env = "DESK_TICKET_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Acting username
    #[arg(long, global = true, env = "DESK_TICKET_USER")]
    pub user: Option<String>,

    /// Acting role (submitter or resolver)
    #[arg(long, global = true, env = "DESK_TICKET_ROLE", value_parser = parse_role)]
    pub role: Option<Role>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mint a throwaway identity for this session
    Login {
        /// Role to log in as (submitter or resolver)
        #[arg(value_name = "ROLE", value_parser = parse_role)]
        login_role: Role,
    },

    /// Open a new ticket
    New {
        /// Brief description of the issue
        #[arg(short, long)]
        title: Option<String>,

        /// Full description of the issue
        #[arg(short, long)]
        description: Option<String>,

        /// hardware, software, network, access or other
        #[arg(short, long)]
        category: Option<String>,

        /// low, medium, high or critical
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// List the tickets visible to you
    List {
        /// Case-insensitive text to look for in title, description or id
        #[arg(short, long, default_value = "")]
        search: String,

        /// Status filter, or "all"
        #[arg(long, default_value = "all")]
        status: String,

        /// Priority filter, or "all"
        #[arg(short, long, default_value = "all")]
        priority: String,
    },

    /// Show a ticket with its comments
    Show {
        /// Ticket ID (e.g. TKT-123456 or 123456)
        ticket: String,
    },

    /// Start work on an open ticket
    Start { ticket: String },

    /// Mark an in-progress ticket as resolved
    Resolve { ticket: String },

    /// Close a resolved ticket
    Close { ticket: String },

    /// Reopen an in-progress or resolved ticket
    Reopen { ticket: String },

    /// Add a comment to a ticket
    Comment {
        ticket: String,

        /// Comment text
        text: String,
    },
}

fn parse_role(value: &str) -> Result<Role, String> {
    value.parse().map_err(|e: crate::error::DeskTicketError| e.to_string())
}
