use super::{Category, Comment, CommentId, Priority, Status, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// Used for fixtures and for rehydrating tickets from other sources. Tickets
/// created through the workflow engine go through `workflow::create` instead,
/// which enforces validation and id uniqueness.
#[derive(Default)]
pub struct TicketBuilder {
    ticket_id: Option<TicketId>,
    title: Option<String>,
    description: Option<String>,
    category: Option<Category>,
    priority: Option<Priority>,
    status: Option<Status>,
    submitted_by: Option<String>,
    assigned_to: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    comments: Vec<Comment>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub fn ticket_id(mut self, id: TicketId) -> Self {
        self.ticket_id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn submitted_by(mut self, username: impl Into<String>) -> Self {
        self.submitted_by = Some(username.into());
        self
    }

    /// Set assignee
    #[must_use]
    pub fn assigned_to(mut self, username: impl Into<String>) -> Self {
        self.assigned_to = Some(username.into());
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set `updated_at` timestamp
    #[must_use]
    pub const fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Add a single comment
    #[must_use]
    pub fn comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// Build the ticket
    ///
    /// Missing timestamps default to now; `updated_at` is clamped so it is
    /// never earlier than `created_at`.
    pub fn build(self) -> Ticket {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        let updated_at = self.updated_at.unwrap_or(created_at).max(created_at);
        let ticket_id = self
            .ticket_id
            .unwrap_or_else(|| TicketId::generate("TKT", created_at, []));

        Ticket {
            ticket_id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            submitted_by: self.submitted_by.unwrap_or_default(),
            assigned_to: self.assigned_to,
            created_at,
            updated_at,
            comments: self.comments,
        }
    }
}

/// Builder for creating Comment instances
#[derive(Default)]
pub struct CommentBuilder {
    id: Option<CommentId>,
    author: Option<String>,
    text: Option<String>,
    timestamp: Option<DateTime<Utc>>,
}

impl CommentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn id(mut self, id: CommentId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Build the comment
    pub fn build(self) -> Comment {
        let timestamp = self.timestamp.unwrap_or_else(Utc::now);
        Comment {
            id: self.id.unwrap_or_else(|| CommentId::next(timestamp, None)),
            author: self.author.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
            timestamp,
        }
    }
}
