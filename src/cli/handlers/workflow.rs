//! Handlers for lifecycle commands (start, resolve, close, reopen)
//!
//! These commands are resolver actions; each moves a ticket along exactly
//! one edge of the lifecycle.

use super::common::{HandlerContext, SessionOptions};
use crate::cli::output::OutputFormatter;
use crate::error::Result;
use crate::workflow::Action;

/// Handler for the `start`, `resolve`, `close` and `reopen` commands
///
/// # Arguments
///
/// * `reference` - Ticket ID or its numeric part
/// * `action` - Lifecycle action to apply
/// * `session` - Acting identity and data directory
/// * `output` - Output formatter for displaying results
///
/// # Errors
///
/// Returns an error if:
/// - No identity was supplied, or the identity is a submitter
/// - The ticket is not found
/// - The action is not allowed from the ticket's current status
/// - The ticket record cannot be saved
pub fn handle_action_command(
    reference: &str,
    action: Action,
    session: &SessionOptions,
    output: &OutputFormatter,
) -> Result<()> {
    let mut ctx = HandlerContext::new(session)?;
    let id = ctx.resolve_ticket_ref(reference);

    let previous = ctx.desk.get(&id, &ctx.user).map(|t| t.status).ok();
    let ticket = ctx.desk.apply(&id, action, &ctx.user)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "action": action.as_str(),
            "ticket": ticket,
        }))?;
        return Ok(());
    }

    let was = previous.map(|s| format!(" (was: {})", s.label())).unwrap_or_default();
    output.success(&format!(
        "Ticket {} is now {}{was}",
        ticket.ticket_id,
        ticket.status.label()
    ));

    if let Some(assignee) = &ticket.assigned_to {
        if action == Action::Start {
            output.info(&format!("Assigned to {assignee}"));
        }
    }

    Ok(())
}
