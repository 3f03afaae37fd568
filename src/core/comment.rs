use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a comment within a ticket's thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(u64);

impl CommentId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Next id for a thread whose newest comment is `last`.
    ///
    /// Normally the creation time in milliseconds; bumped past `last` so ids
    /// within a thread are strictly increasing even when the clock stalls.
    pub fn next(now: DateTime<Utc>, last: Option<Self>) -> Self {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        match last {
            Some(Self(prev)) if prev >= millis => Self(prev.saturating_add(1)),
            _ => Self(millis),
        }
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in a ticket's append-only comment thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}
