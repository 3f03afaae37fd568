//! Handler for the `list` command

use super::common::{HandlerContext, SessionOptions};
use crate::cli::output::OutputFormatter;
use crate::core::{Status, User};
use crate::error::Result;
use crate::visibility::{StatusCounts, ViewFilter};

/// Handle the `list` command
///
/// Prints the visible set for the acting user: their own tickets for a
/// submitter, every ticket for a resolver, narrowed by `search`, `status`
/// and `priority` (either of which may be "all"), newest first.
pub fn handle_list_command(
    search: String,
    status: &str,
    priority: &str,
    session: &SessionOptions,
    output: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(session)?;

    let filter = ViewFilter::default()
        .search(search)
        .status(status.parse()?)
        .priority(priority.parse()?);

    let tickets = ctx.desk.visible(&ctx.user, &filter);
    let counts = StatusCounts::tally(tickets.iter().copied());

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "tickets": tickets,
            "count": tickets.len(),
            "counts": counts,
        }))?;
        return Ok(());
    }

    if tickets.is_empty() {
        output.info("No tickets found");
        for line in empty_list_hint(&ctx.user, &filter) {
            output.info(line);
        }
        return Ok(());
    }

    for ticket in &tickets {
        output.info(&output.ticket_line(ticket));
    }

    let summary: Vec<String> = Status::ALL
        .iter()
        .filter(|status| counts.get(**status) > 0)
        .map(|status| format!("{} {}", counts.get(*status), status.label()))
        .collect();
    output.info("");
    output.info(&format!(
        "{} ticket(s): {}",
        counts.total(),
        summary.join(", ")
    ));

    Ok(())
}

/// Follow-up lines printed under "No tickets found"
fn empty_list_hint(user: &User, filter: &ViewFilter) -> &'static [&'static str] {
    if filter.is_active() {
        &["No tickets match your filters"]
    } else if user.is_resolver() {
        &["Nothing has been submitted yet"]
    } else {
        &[
            "Create your first ticket to get started:",
            "  desk-ticket new --title <TITLE> --description <DESCRIPTION>",
        ]
    }
}
