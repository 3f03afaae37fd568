//! Handler for the `login` command
//!
//! Login is a stub. It mints a random username for the chosen role and tells
//! the shell how to keep using it; nothing is verified or stored.

use crate::cli::output::OutputFormatter;
use crate::core::{Role, User};
use crate::error::Result;

/// Handle the `login` command
pub fn handle_login_command(role: Role, output: &OutputFormatter) -> Result<()> {
    let user = User::mint(role);

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "username": user.username,
            "role": user.role,
        }))?;
        return Ok(());
    }

    output.success(&format!("Logged in as {user}"));
    output.info("");
    output.info("To act as this user in your shell:");
    output.info(&format!("  export DESK_TICKET_USER={}", user.username));
    output.info(&format!("  export DESK_TICKET_ROLE={}", user.role));
    output.info("");
    output.info("Demo mode - usernames are generated, not authenticated");

    Ok(())
}
