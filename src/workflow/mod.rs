//! Ticket lifecycle engine
//!
//! Creation, status transitions and comment threads. Every operation is a
//! pure function from the current collection to a [`Mutation`]: a complete
//! new collection in which exactly the target ticket differs, plus a copy of
//! that ticket. Nothing is persisted here; see [`crate::desk::Desk`] for the
//! save-then-commit protocol.
//!
//! ```text
//!         create (submitter)
//!            |
//!          [open] --start--> [in-progress] --resolve--> [resolved] --close--> [closed]
//!            ^________________________reopen______________________|
//! ```

use crate::core::{Category, Comment, CommentId, Priority, Status, Ticket, TicketId, User};
use crate::error::{DeskTicketError, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// User-supplied fields for a new ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

impl TicketDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: Category::default(),
            priority: Priority::default(),
        }
    }

    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)
    }
}

/// Result of a successful lifecycle operation
#[derive(Debug, Clone)]
pub struct Mutation {
    /// The full collection after the change
    pub tickets: Vec<Ticket>,
    /// The created or updated ticket, as it appears in `tickets`
    pub ticket: Ticket,
}

/// Named resolver actions, one per lifecycle edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Resolve,
    Close,
    Reopen,
}

impl Action {
    /// Status the action moves a ticket into
    pub const fn target(self) -> Status {
        match self {
            Self::Start => Status::InProgress,
            Self::Resolve => Status::Resolved,
            Self::Close => Status::Closed,
            Self::Reopen => Status::Open,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Resolve => "resolve",
            Self::Close => "close",
            Self::Reopen => "reopen",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DeskTicketError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "resolve" => Ok(Self::Resolve),
            "close" => Ok(Self::Close),
            "reopen" => Ok(Self::Reopen),
            _ => Err(DeskTicketError::InvalidInput(format!(
                "Unknown action '{s}'. Expected start, resolve, close or reopen"
            ))),
        }
    }
}

/// Create a ticket and prepend it to the collection.
///
/// Only submitters create tickets. The new ticket is open, unassigned, has
/// no comments, and carries an id not used by any ticket in `tickets`.
pub fn create(
    tickets: &[Ticket],
    draft: TicketDraft,
    actor: &User,
    id_prefix: &str,
    now: DateTime<Utc>,
) -> Result<Mutation> {
    if actor.is_resolver() {
        return Err(DeskTicketError::PermissionDenied(
            "only submitters can create tickets".to_string(),
        ));
    }
    draft.validate()?;

    let ticket = Ticket {
        ticket_id: TicketId::generate(id_prefix, now, tickets.iter().map(|t| &t.ticket_id)),
        title: draft.title,
        description: draft.description,
        category: draft.category,
        priority: draft.priority,
        status: Status::Open,
        submitted_by: actor.username.clone(),
        assigned_to: None,
        created_at: now,
        updated_at: now,
        comments: Vec::new(),
    };

    let mut updated = Vec::with_capacity(tickets.len() + 1);
    updated.push(ticket.clone());
    updated.extend_from_slice(tickets);

    Ok(Mutation {
        tickets: updated,
        ticket,
    })
}

/// Move a ticket along one lifecycle edge.
///
/// Only resolvers drive transitions. Starting an unassigned ticket assigns
/// it to the actor; no other edge touches the assignee.
pub fn transition(
    tickets: &[Ticket],
    id: &TicketId,
    target: Status,
    actor: &User,
    now: DateTime<Utc>,
) -> Result<Mutation> {
    if !actor.is_resolver() {
        return Err(DeskTicketError::PermissionDenied(
            "only resolvers can change ticket status".to_string(),
        ));
    }

    let index = position(tickets, id, actor)?;
    let current = &tickets[index];

    if !current.status.can_transition_to(target) {
        return Err(DeskTicketError::InvalidTransition {
            from: current.status,
            to: target,
        });
    }

    let mut ticket = current.clone();
    if current.status == Status::Open && target == Status::InProgress && ticket.assigned_to.is_none() {
        ticket.assigned_to = Some(actor.username.clone());
    }
    ticket.status = target;
    ticket.touch(now);

    Ok(replace(tickets, index, ticket))
}

/// Append a comment to a ticket the actor can see.
///
/// The text is stored as given; it only has to contain something other than
/// whitespace.
pub fn add_comment(
    tickets: &[Ticket],
    id: &TicketId,
    actor: &User,
    text: &str,
    now: DateTime<Utc>,
) -> Result<Mutation> {
    require_text("comment", text)?;

    let index = position(tickets, id, actor)?;
    let mut ticket = tickets[index].clone();

    let last = ticket.last_comment().map(|c| c.id);
    ticket.comments.push(Comment {
        id: CommentId::next(now, last),
        author: actor.username.clone(),
        text: text.to_string(),
        timestamp: now,
    });
    ticket.touch(now);

    Ok(replace(tickets, index, ticket))
}

/// Find a ticket by id among those visible to `actor`.
///
/// Tickets the actor may not observe are reported as missing.
pub fn find<'a>(tickets: &'a [Ticket], id: &TicketId, actor: &User) -> Result<&'a Ticket> {
    position(tickets, id, actor).map(|index| &tickets[index])
}

fn position(tickets: &[Ticket], id: &TicketId, actor: &User) -> Result<usize> {
    tickets
        .iter()
        .position(|t| &t.ticket_id == id && actor.can_see(t))
        .ok_or_else(|| DeskTicketError::TicketNotFound { id: id.to_string() })
}

fn replace(tickets: &[Ticket], index: usize, ticket: Ticket) -> Mutation {
    let mut updated = tickets.to_vec();
    updated[index] = ticket.clone();
    Mutation {
        tickets: updated,
        ticket,
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeskTicketError::validation(field));
    }
    Ok(())
}
