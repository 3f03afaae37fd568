//! desk-ticket - help-desk ticket tracker
//!
//! This is the main entry point for the desk-ticket CLI application.
//! It parses command-line arguments and dispatches to the command handlers.

use clap::Parser;
use desk_ticket::cli::handlers::{
    CreateParams, SessionOptions, handle_action_command, handle_comment_command,
    handle_list_command, handle_login_command, handle_new_command, handle_show_command,
};
use desk_ticket::cli::{Cli, Commands, OutputFormatter};
use desk_ticket::error::{DeskTicketError, Result};
use desk_ticket::workflow::Action;
use std::process;

fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
///
/// # Errors
///
/// Returns any error that occurs during command execution
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let session = SessionOptions {
        data_dir: cli.data_dir,
        user: cli.user,
        role: cli.role,
    };

    dispatch_command(cli.command, &session, formatter)
}

fn dispatch_command(
    command: Commands,
    session: &SessionOptions,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        Commands::Login { login_role } => handle_login_command(login_role, formatter),
        Commands::New {
            title,
            description,
            category,
            priority,
        } => handle_new_command(
            CreateParams {
                title,
                description,
                category,
                priority,
            },
            session,
            formatter,
        ),
        Commands::List {
            search,
            status,
            priority,
        } => handle_list_command(search, &status, &priority, session, formatter),
        Commands::Show { ticket } => handle_show_command(&ticket, session, formatter),
        Commands::Start { ticket } => {
            handle_action_command(&ticket, Action::Start, session, formatter)
        },
        Commands::Resolve { ticket } => {
            handle_action_command(&ticket, Action::Resolve, session, formatter)
        },
        Commands::Close { ticket } => {
            handle_action_command(&ticket, Action::Close, session, formatter)
        },
        Commands::Reopen { ticket } => {
            handle_action_command(&ticket, Action::Reopen, session, formatter)
        },
        Commands::Comment { ticket, text } => {
            handle_comment_command(&ticket, &text, session, formatter)
        },
    }
}

/// Print an error with its suggestions, and a JSON envelope in JSON mode
fn handle_error(error: &DeskTicketError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "error_type": format!("{error:?}"),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
