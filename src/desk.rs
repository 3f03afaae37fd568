//! The ticket desk: one in-memory collection bound to one store
//!
//! [`Desk`] is the single owner of the ticket collection. Lifecycle
//! operations build a candidate collection, the store is asked to persist it,
//! and only when the save succeeds does the candidate replace the in-memory
//! collection. A failed save is reported and leaves both the durable record
//! and what `visible` returns exactly as they were.

use crate::core::{Status, Ticket, TicketId, User};
use crate::error::Result;
use crate::storage::TicketStore;
use crate::visibility::{self, ViewFilter};
use crate::workflow::{self, Action, Mutation, TicketDraft};
use chrono::{DateTime, Utc};

/// Default prefix for generated ticket ids
pub const DEFAULT_ID_PREFIX: &str = "TKT";

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Owner of the ticket collection for one session
pub struct Desk {
    store: Box<dyn TicketStore>,
    tickets: Vec<Ticket>,
    id_prefix: String,
    clock: Clock,
}

impl std::fmt::Debug for Desk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Desk")
            .field("store", &"Box<dyn TicketStore>")
            .field("tickets", &self.tickets.len())
            .field("id_prefix", &self.id_prefix)
            .finish_non_exhaustive()
    }
}

impl Desk {
    /// Open a desk over `store`, loading whatever it currently holds
    pub fn open(store: impl TicketStore + 'static) -> Self {
        let tickets = store.load();
        tracing::debug!("Desk opened with {} ticket(s)", tickets.len());
        Self {
            store: Box::new(store),
            tickets,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            clock: Box::new(Utc::now),
        }
    }

    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Replace the time source used to stamp mutations
    #[must_use]
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The committed collection, in storage order
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Discard the in-memory collection and read the store again
    pub fn reload(&mut self) {
        self.tickets = self.store.load();
    }

    /// Create a ticket on behalf of `actor`
    pub fn create(&mut self, draft: TicketDraft, actor: &User) -> Result<Ticket> {
        let mutation = workflow::create(&self.tickets, draft, actor, &self.id_prefix, (self.clock)())?;
        let ticket = self.commit(mutation)?;
        tracing::info!("{} created {}", actor.username, ticket.ticket_id);
        Ok(ticket)
    }

    /// Move a ticket to `target`
    pub fn transition(&mut self, id: &TicketId, target: Status, actor: &User) -> Result<Ticket> {
        let mutation = workflow::transition(&self.tickets, id, target, actor, (self.clock)())?;
        let ticket = self.commit(mutation)?;
        tracing::info!("{} moved {id} to {target}", actor.username);
        Ok(ticket)
    }

    /// Run a named resolver action
    pub fn apply(&mut self, id: &TicketId, action: Action, actor: &User) -> Result<Ticket> {
        self.transition(id, action.target(), actor)
    }

    pub fn add_comment(&mut self, id: &TicketId, actor: &User, text: &str) -> Result<Ticket> {
        let mutation = workflow::add_comment(&self.tickets, id, actor, text, (self.clock)())?;
        let ticket = self.commit(mutation)?;
        tracing::info!("{} commented on {id}", actor.username);
        Ok(ticket)
    }

    /// A single ticket, if `user` may see it
    pub fn get(&self, id: &TicketId, user: &User) -> Result<&Ticket> {
        workflow::find(&self.tickets, id, user)
    }

    pub fn visible(&self, user: &User, filter: &ViewFilter) -> Vec<&Ticket> {
        visibility::visible(&self.tickets, user, filter)
    }

    fn commit(&mut self, mutation: Mutation) -> Result<Ticket> {
        if let Err(e) = self.store.save(&mutation.tickets) {
            tracing::warn!("Save failed, keeping previous collection: {e}");
            return Err(e.into());
        }
        self.tickets = mutation.tickets;
        Ok(mutation.ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;
    use crate::error::{DeskTicketError, StoreError};
    use crate::storage::{MemoryStore, MockTicketStore};
    use crate::test_utils::{at, fixed_clock, resolver, submitter};
    use std::sync::Arc;

    fn shared_desk() -> (Arc<MemoryStore>, Desk) {
        let store = Arc::new(MemoryStore::new());
        let desk = Desk::open(Arc::clone(&store)).with_clock(fixed_clock(at(10, 0)));
        (store, desk)
    }

    #[test]
    fn test_create_persists_and_commits() {
        let (store, mut desk) = shared_desk();
        let alice = submitter("alice");

        let ticket = desk
            .create(TicketDraft::new("Laptop", "Battery swollen"), &alice)
            .unwrap();

        assert_eq!(desk.tickets(), std::slice::from_ref(&ticket));
        assert_eq!(store.load(), vec![ticket]);
    }

    #[test]
    fn test_failed_save_after_create_keeps_previous_state() {
        let (store, mut desk) = shared_desk();
        let alice = submitter("alice");
        desk.create(TicketDraft::new("First", "Kept"), &alice).unwrap();
        let before = desk.tickets().to_vec();

        store.set_fail_saves(true);
        let err = desk
            .create(TicketDraft::new("Second", "Lost"), &alice)
            .unwrap_err();

        assert!(matches!(err, DeskTicketError::Store(StoreError::Unavailable(_))));
        assert_eq!(desk.tickets(), before.as_slice());
        assert_eq!(store.load(), before);
        let shown = desk.visible(&alice, &ViewFilter::default());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "First");
    }

    #[test]
    fn test_failed_save_after_transition_keeps_status() {
        let (store, mut desk) = shared_desk();
        let ticket = desk
            .create(TicketDraft::new("Wifi", "Down"), &submitter("alice"))
            .unwrap();

        store.set_fail_saves(true);
        let result = desk.apply(&ticket.ticket_id, Action::Start, &resolver("ivan"));

        assert!(result.is_err());
        let current = desk.get(&ticket.ticket_id, &resolver("ivan")).unwrap();
        assert_eq!(current.status, Status::Open);
        assert!(current.assigned_to.is_none());
    }

    #[test]
    fn test_mock_store_save_failure() {
        let existing = TicketBuilder::new()
            .title("Existing")
            .description("Already there")
            .submitted_by("alice")
            .created_at(at(9, 0))
            .build();
        let loaded = vec![existing.clone()];

        let mut store = MockTicketStore::new();
        store.expect_load().times(1).return_once(move || loaded);
        store
            .expect_save()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("disk full".to_string())));

        let mut desk = Desk::open(store).with_clock(fixed_clock(at(10, 0)));
        let err = desk
            .add_comment(&existing.ticket_id, &submitter("alice"), "ping")
            .unwrap_err();

        assert!(err.is_recoverable());
        assert_eq!(desk.tickets(), &[existing]);
    }

    #[test]
    fn test_rejections_never_touch_store() {
        let mut store = MockTicketStore::new();
        store.expect_load().returning(Vec::new);
        store.expect_save().never();

        let mut desk = Desk::open(store);
        let alice = submitter("alice");

        assert!(desk.create(TicketDraft::new(" ", "x"), &alice).is_err());
        assert!(
            desk.transition(&TicketId::new("TKT-000001"), Status::Closed, &resolver("ivan"))
                .is_err()
        );
        assert!(desk.add_comment(&TicketId::new("TKT-000001"), &alice, "hi").is_err());
    }

    #[test]
    fn test_full_lifecycle() {
        let (_store, mut desk) = shared_desk();
        let alice = submitter("alice");
        let ivan = resolver("ivan");

        let id = desk
            .create(TicketDraft::new("Access", "Need VPN"), &alice)
            .unwrap()
            .ticket_id;
        desk.apply(&id, Action::Start, &ivan).unwrap();
        desk.add_comment(&id, &ivan, "Granted").unwrap();
        desk.apply(&id, Action::Resolve, &ivan).unwrap();
        let closed = desk.apply(&id, Action::Close, &ivan).unwrap();

        assert_eq!(closed.status, Status::Closed);
        assert_eq!(closed.assigned_to.as_deref(), Some("ivan"));
        assert_eq!(closed.comments.len(), 1);
        assert!(matches!(
            desk.apply(&id, Action::Reopen, &ivan),
            Err(DeskTicketError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_reload_reads_store() {
        let (store, mut desk) = shared_desk();
        let mut other = Desk::open(Arc::clone(&store));
        desk.create(TicketDraft::new("a", "b"), &submitter("alice"))
            .unwrap();

        assert!(other.tickets().is_empty());
        other.reload();
        assert_eq!(other.tickets().len(), 1);
    }

    #[test]
    fn test_custom_id_prefix() {
        let mut desk = Desk::open(MemoryStore::new()).with_id_prefix("HD");
        let ticket = desk
            .create(TicketDraft::new("a", "b"), &submitter("alice"))
            .unwrap();
        assert!(ticket.ticket_id.as_str().starts_with("HD-"));
    }
}
