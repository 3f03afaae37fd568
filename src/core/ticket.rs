use super::{Category, Comment, Priority, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Number of decimal digits in the numeric part of a ticket id
const ID_DIGITS: u32 = 6;
const ID_MODULUS: i64 = 10_i64.pow(ID_DIGITS);

/// Human-displayable ticket identifier such as `TKT-482913`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an id that does not collide with any of `existing`.
    ///
    /// The numeric suffix is taken from the last six digits of `now` in
    /// milliseconds. On collision the suffix is bumped, wrapping within six
    /// digits, until a free one is found.
    pub fn generate<'a>(
        prefix: &str,
        now: DateTime<Utc>,
        existing: impl IntoIterator<Item = &'a Self>,
    ) -> Self {
        let taken: HashSet<&str> = existing.into_iter().map(Self::as_str).collect();
        let mut suffix = now.timestamp_millis().rem_euclid(ID_MODULUS);

        for _ in 0..ID_MODULUS {
            let candidate = format!("{prefix}-{suffix:06}");
            if !taken.contains(candidate.as_str()) {
                return Self(candidate);
            }
            suffix = (suffix + 1) % ID_MODULUS;
        }

        // Every six-digit suffix is taken for this prefix; widen the number.
        let mut wide = ID_MODULUS;
        loop {
            let candidate = format!("{prefix}-{wide}");
            if !taken.contains(candidate.as_str()) {
                return Self(candidate);
            }
            wide += 1;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TicketId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A trackable issue record.
///
/// Field names on the wire are camelCase and match the persisted record
/// exactly: `ticketId, title, description, category, priority, status,
/// submittedBy, assignedTo, createdAt, updatedAt, comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
    pub submitted_by: String,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Ticket {
    /// Refresh `updated_at`, never moving it backwards
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at).max(self.created_at);
    }

    /// Case-insensitive substring match over title, description and id.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.ticket_id.as_str().to_lowercase().contains(needle)
    }

    pub fn last_comment(&self) -> Option<&Comment> {
        self.comments.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;
    use chrono::TimeZone;

    fn at_millis(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_generate_uses_last_six_digits() {
        let id = TicketId::generate("TKT", at_millis(1_700_000_123_456), []);
        assert_eq!(id.as_str(), "TKT-123456");
    }

    #[test]
    fn test_generate_pads_small_suffix() {
        let id = TicketId::generate("TKT", at_millis(1_700_000_000_042), []);
        assert_eq!(id.as_str(), "TKT-000042");
    }

    #[test]
    fn test_generate_skips_taken_ids() {
        let taken = [TicketId::new("TKT-123456"), TicketId::new("TKT-123457")];
        let id = TicketId::generate("TKT", at_millis(1_700_000_123_456), &taken);
        assert_eq!(id.as_str(), "TKT-123458");
    }

    #[test]
    fn test_generate_wraps_suffix() {
        let taken = [TicketId::new("TKT-999999")];
        let id = TicketId::generate("TKT", at_millis(1_700_000_999_999), &taken);
        assert_eq!(id.as_str(), "TKT-000000");
    }

    #[test]
    fn test_wire_field_names() {
        let ticket = TicketBuilder::new()
            .ticket_id(TicketId::new("TKT-000001"))
            .title("Printer jam")
            .description("Paper stuck")
            .submitted_by("worker_abcde")
            .build();

        let value = serde_json::to_value(&ticket).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "assignedTo",
                "category",
                "comments",
                "createdAt",
                "description",
                "priority",
                "status",
                "submittedBy",
                "ticketId",
                "title",
                "updatedAt",
            ]
        );
        assert!(object["assignedTo"].is_null());
        assert_eq!(object["ticketId"], "TKT-000001");
        assert_eq!(object["status"], "open");
    }

    #[test]
    fn test_touch_never_goes_backwards() {
        let created = at_millis(1_000_000);
        let mut ticket = TicketBuilder::new()
            .created_at(created)
            .updated_at(at_millis(2_000_000))
            .build();

        ticket.touch(at_millis(1_500_000));
        assert_eq!(ticket.updated_at, at_millis(2_000_000));

        ticket.touch(at_millis(3_000_000));
        assert_eq!(ticket.updated_at, at_millis(3_000_000));
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let ticket = TicketBuilder::new()
            .ticket_id(TicketId::new("TKT-555000"))
            .title("VPN drops")
            .description("Connection resets every hour")
            .build();

        assert!(ticket.matches_search("vpn"));
        assert!(ticket.matches_search("resets"));
        assert!(ticket.matches_search("tkt-555"));
        assert!(!ticket.matches_search("printer"));
    }
}
