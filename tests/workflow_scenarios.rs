//! End-to-end scenarios over the library API

use chrono::{DateTime, TimeZone, Utc};
use desk_ticket::DeskTicketError;
use desk_ticket::core::{Role, Status, Ticket, TicketBuilder, TicketId, User};
use desk_ticket::desk::Desk;
use desk_ticket::storage::{FileStorage, MemoryStore, TicketStore};
use desk_ticket::visibility::{ViewFilter, visible};
use desk_ticket::workflow::{self, TicketDraft};
use std::sync::Arc;
use tempfile::TempDir;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0)
        .single()
        .unwrap()
}

fn two_tickets() -> Vec<Ticket> {
    vec![
        TicketBuilder::new()
            .ticket_id(TicketId::new("TKT-000001"))
            .title("Monitor flickers")
            .description("Second screen flickers")
            .status(Status::Open)
            .submitted_by("alice")
            .created_at(at(10, 0))
            .build(),
        TicketBuilder::new()
            .ticket_id(TicketId::new("TKT-000002"))
            .title("Password reset")
            .description("Locked out")
            .status(Status::Resolved)
            .submitted_by("bob")
            .created_at(at(10, 5))
            .build(),
    ]
}

fn ids(tickets: &[&Ticket]) -> Vec<String> {
    tickets.iter().map(|t| t.ticket_id.to_string()).collect()
}

#[test]
fn test_resolver_sees_everything_newest_first() {
    let tickets = two_tickets();
    let staff = User::new("ivan", Role::Resolver);

    let shown = visible(&tickets, &staff, &ViewFilter::default());
    assert_eq!(ids(&shown), ["TKT-000002", "TKT-000001"]);
}

#[test]
fn test_submitter_sees_only_their_own() {
    let tickets = two_tickets();
    let alice = User::new("alice", Role::Submitter);

    let shown = visible(&tickets, &alice, &ViewFilter::default().search("password"));
    assert!(shown.is_empty());

    let shown = visible(&tickets, &alice, &ViewFilter::default());
    assert_eq!(ids(&shown), ["TKT-000001"]);
}

#[test]
fn test_open_ticket_cannot_jump_to_closed() {
    let tickets = two_tickets();
    let staff = User::new("ivan", Role::Resolver);

    let err = workflow::transition(
        &tickets,
        &TicketId::new("TKT-000001"),
        Status::Closed,
        &staff,
        at(11, 0),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        DeskTicketError::InvalidTransition {
            from: Status::Open,
            to: Status::Closed
        }
    ));
    assert_eq!(tickets, two_tickets());
}

#[test]
fn test_failed_save_after_create_leaves_collection_untouched() {
    let store = Arc::new(MemoryStore::new());
    store.save(&two_tickets()).unwrap();

    let mut desk = Desk::open(Arc::clone(&store)).with_clock(move || at(11, 0));
    let alice = User::new("alice", Role::Submitter);
    let staff = User::new("ivan", Role::Resolver);

    store.set_fail_saves(true);
    let err = desk
        .create(TicketDraft::new("Mouse dead", "No cursor"), &alice)
        .unwrap_err();
    assert!(matches!(err, DeskTicketError::Store(_)));
    assert!(err.is_recoverable());

    assert_eq!(store.load(), two_tickets());
    assert_eq!(desk.tickets(), two_tickets().as_slice());
    assert_eq!(
        ids(&desk.visible(&staff, &ViewFilter::default())),
        ["TKT-000002", "TKT-000001"]
    );
}

#[test]
fn test_file_record_survives_reopening() {
    let temp_dir = TempDir::new().unwrap();
    let alice = User::new("alice", Role::Submitter);
    let staff = User::new("ivan", Role::Resolver);

    let ticket = {
        let mut desk = Desk::open(FileStorage::new(temp_dir.path())).with_clock(move || at(9, 30));
        let ticket = desk
            .create(TicketDraft::new("Docking station", "USB ports dead"), &alice)
            .unwrap();
        desk.transition(&ticket.ticket_id, Status::InProgress, &staff)
            .unwrap();
        desk.add_comment(&ticket.ticket_id, &alice, "Thanks!").unwrap();
        ticket
    };

    let desk = Desk::open(FileStorage::new(temp_dir.path()));
    let reloaded = desk.get(&ticket.ticket_id, &alice).unwrap();
    assert_eq!(reloaded.status, Status::InProgress);
    assert_eq!(reloaded.assigned_to.as_deref(), Some("ivan"));
    assert_eq!(reloaded.comments.len(), 1);
    assert_eq!(reloaded.created_at, at(9, 30));
}
