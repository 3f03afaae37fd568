use crate::core::{Ticket, TicketId};
use crate::error::StoreError;
use std::collections::HashSet;
use std::sync::Arc;

/// Repository trait for the durable ticket collection
///
/// The collection is read and written as a whole. Implementations must make
/// `save` all-or-nothing: either the new collection replaces the old one, or
/// the old one is still what the next `load` returns.
#[cfg_attr(test, mockall::automock)]
pub trait TicketStore: Send + Sync {
    /// Loads the whole collection.
    ///
    /// An absent or unreadable record is "no prior data" and yields an empty
    /// collection; it is never reported as an error.
    fn load(&self) -> Vec<Ticket>;

    /// Replaces the whole collection
    fn save(&self, tickets: &[Ticket]) -> Result<(), StoreError>;
}

impl<T: TicketStore + ?Sized> TicketStore for Arc<T> {
    fn load(&self) -> Vec<Ticket> {
        (**self).load()
    }

    fn save(&self, tickets: &[Ticket]) -> Result<(), StoreError> {
        (**self).save(tickets)
    }
}

/// Serializes a collection into the persisted record format
pub fn encode_record(tickets: &[Ticket]) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(tickets)?)
}

/// Parses a persisted record.
///
/// Returns `None` when the record is not a valid ticket array. Duplicate
/// ticket ids are dropped after their first occurrence so the loaded
/// collection always has unique ids.
pub fn decode_record(raw: &str) -> Option<Vec<Ticket>> {
    let tickets: Vec<Ticket> = match serde_json::from_str(raw) {
        Ok(tickets) => tickets,
        Err(e) => {
            tracing::warn!("Discarding unreadable ticket record: {e}");
            return None;
        },
    };

    let total = tickets.len();
    let mut seen: HashSet<TicketId> = HashSet::with_capacity(total);
    let unique: Vec<Ticket> = tickets
        .into_iter()
        .filter(|t| seen.insert(t.ticket_id.clone()))
        .collect();

    if unique.len() != total {
        tracing::warn!(
            "Dropped {} ticket(s) with duplicate ids while loading",
            total - unique.len()
        );
    }

    Some(unique)
}
