use super::common::{HandlerContext, SessionOptions};
use crate::cli::output::OutputFormatter;
use crate::error::Result;

/// Handle the `comment` command
///
/// Either role may comment, but only on tickets it can see.
pub fn handle_comment_command(
    reference: &str,
    text: &str,
    session: &SessionOptions,
    output: &OutputFormatter,
) -> Result<()> {
    let mut ctx = HandlerContext::new(session)?;
    let id = ctx.resolve_ticket_ref(reference);

    let ticket = ctx.desk.add_comment(&id, &ctx.user, text)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket_id": ticket.ticket_id,
            "comment": ticket.last_comment(),
        }))?;
    } else {
        output.success(&format!(
            "Comment added to {} ({} total)",
            ticket.ticket_id,
            ticket.comments.len()
        ));
    }

    Ok(())
}
