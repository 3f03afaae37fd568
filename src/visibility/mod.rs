//! Visibility and filter engine
//!
//! Computes the visible set: the tickets the current user may observe,
//! narrowed by a free-text search and optional status and priority filters,
//! newest first. The computation is a pure function of its inputs and keeps
//! no state between calls.

use crate::core::{Priority, Status, Ticket, User};
use crate::error::DeskTicketError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Either every value or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T> FromStr for Filter<T>
where
    T: FromStr<Err = DeskTicketError>,
{
    type Err = DeskTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

/// Everything the user can narrow the list by
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    /// Free text; empty means no search
    pub search: String,
    pub status: Filter<Status>,
    pub priority: Filter<Priority>,
}

impl ViewFilter {
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    #[must_use]
    pub const fn status(mut self, status: Filter<Status>) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: Filter<Priority>) -> Self {
        self.priority = priority;
        self
    }

    /// Whether any narrowing beyond role scope is in effect
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status != Filter::All || self.priority != Filter::All
    }
}

/// Tickets `user` may see that pass `filter`, newest first.
///
/// Pipeline: role scope, text search over title, description and ticket id
/// (case-insensitive substring, any field), status filter, priority filter,
/// then a stable sort on `created_at` descending so tickets created at the
/// same instant keep their collection order.
pub fn visible<'a>(tickets: &'a [Ticket], user: &User, filter: &ViewFilter) -> Vec<&'a Ticket> {
    let needle = filter.search.to_lowercase();

    let mut shown: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| user.can_see(t))
        .filter(|t| needle.is_empty() || t.matches_search(&needle))
        .filter(|t| filter.status.accepts(&t.status))
        .filter(|t| filter.priority.accepts(&t.priority))
        .collect();

    shown.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    shown
}

/// Per-status tally of a visible set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub open: usize,
    #[serde(rename = "in-progress")]
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

impl StatusCounts {
    pub fn tally<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut counts = Self::default();
        for ticket in tickets {
            match ticket.status {
                Status::Open => counts.open += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Resolved => counts.resolved += 1,
                Status::Closed => counts.closed += 1,
            }
        }
        counts
    }

    pub const fn total(&self) -> usize {
        self.open + self.in_progress + self.resolved + self.closed
    }

    pub const fn get(&self, status: Status) -> usize {
        match status {
            Status::Open => self.open,
            Status::InProgress => self.in_progress,
            Status::Resolved => self.resolved,
            Status::Closed => self.closed,
        }
    }
}
