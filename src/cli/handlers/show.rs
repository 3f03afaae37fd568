//! Handler for the `show` command

use super::common::{HandlerContext, SessionOptions};
use crate::cli::output::{OutputFormatter, format_date, priority_badge, status_badge};
use crate::error::Result;

/// Handle the `show` command
///
/// Displays one ticket the acting user can see, its comment thread, and,
/// for resolvers, the lifecycle actions available from its current status.
pub fn handle_show_command(
    reference: &str,
    session: &SessionOptions,
    output: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(session)?;
    let id = ctx.resolve_ticket_ref(reference);
    let ticket = ctx.desk.get(&id, &ctx.user)?;

    let actions: Vec<&str> = if ctx.user.is_resolver() {
        ticket
            .status
            .available_transitions()
            .iter()
            .map(|target| ticket.status.action_name(*target))
            .collect()
    } else {
        Vec::new()
    };

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "ticket": ticket,
            "actions": actions,
        }))?;
        return Ok(());
    }

    output.info(&format!("{}  {}", ticket.ticket_id, ticket.title));
    output.info(&format!(
        "Status: {}  Priority: {}  Category: {}",
        status_badge(ticket.status),
        priority_badge(ticket.priority),
        ticket.category
    ));
    output.info(&format!("Submitted by: {}", ticket.submitted_by));
    output.info(&format!(
        "Assigned to: {}",
        ticket.assigned_to.as_deref().unwrap_or("unassigned")
    ));
    output.info(&format!("Created: {}", format_date(&ticket.created_at)));
    output.info(&format!("Updated: {}", format_date(&ticket.updated_at)));
    output.info("");
    output.info(&ticket.description);
    output.info("");

    output.info(&format!("Comments ({})", ticket.comments.len()));
    if ticket.comments.is_empty() {
        output.info("  No comments yet");
    }
    for comment in &ticket.comments {
        output.info(&format!(
            "  {} - {}",
            comment.author,
            format_date(&comment.timestamp)
        ));
        output.info(&format!("    {}", comment.text));
    }

    if !actions.is_empty() {
        output.info("");
        output.info(&format!("Actions: {}", actions.join(", ")));
    }

    Ok(())
}
