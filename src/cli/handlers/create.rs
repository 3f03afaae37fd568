//! Handler for the `new` command
//!
//! Title and description can come from flags or, when attached to a
//! terminal, from interactive prompts. Category and priority fall back to
//! the configured defaults.

use super::common::{HandlerContext, SessionOptions};
use crate::cli::output::OutputFormatter;
use crate::core::{Category, Priority};
use crate::error::Result;
use crate::interactive::InteractiveMode;
use crate::workflow::TicketDraft;
use std::io::IsTerminal;

/// Parameters for creating a ticket
#[derive(Debug, Clone, Default)]
pub struct CreateParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
}

/// Handle the `new` command
///
/// # Errors
///
/// Returns an error if:
/// - No identity was supplied, or the identity is a resolver
/// - The title or description is blank
/// - The category or priority is not recognised
/// - The ticket record cannot be saved
pub fn handle_new_command(
    params: CreateParams,
    session: &SessionOptions,
    output: &OutputFormatter,
) -> Result<()> {
    let mut ctx = HandlerContext::new(session)?;

    let category = match params.category.as_deref() {
        Some(value) => value.parse::<Category>()?,
        None => ctx.config.tickets.default_category,
    };
    let priority = match params.priority.as_deref() {
        Some(value) => value.parse::<Priority>()?,
        None => ctx.config.tickets.default_priority,
    };

    let missing = params.title.is_none() || params.description.is_none();
    let draft = if missing && !output.is_json() && std::io::stdin().is_terminal() {
        let data = InteractiveMode::new().complete_ticket(
            params.title,
            params.description,
            category,
            priority,
        )?;
        TicketDraft::new(data.title, data.description)
            .with_category(data.category)
            .with_priority(data.priority)
    } else {
        TicketDraft::new(
            params.title.unwrap_or_default(),
            params.description.unwrap_or_default(),
        )
        .with_category(category)
        .with_priority(priority)
    };

    let ticket = ctx.desk.create(draft, &ctx.user)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket": ticket,
        }))?;
    } else {
        output.success(&format!("Created ticket {}: {}", ticket.ticket_id, ticket.title));
        output.info(&format!(
            "Category: {}  Priority: {}",
            ticket.category, ticket.priority
        ));
    }

    Ok(())
}
