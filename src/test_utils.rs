//! Test utilities for desk-ticket
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{Priority, Role, Status, Ticket, TicketBuilder, TicketId, User};
use crate::storage::{FileStorage, TicketStore};
use chrono::{DateTime, TimeZone, Utc};
use std::path::PathBuf;
use tempfile::TempDir;

/// A fixed instant on 2024-01-15 at `hour:minute` UTC
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0)
        .single()
        .expect("valid fixture time")
}

/// Clock that always reads `now`
pub fn fixed_clock(now: DateTime<Utc>) -> impl Fn() -> DateTime<Utc> + Send + Sync + 'static {
    move || now
}

pub fn submitter(name: &str) -> User {
    User::new(name, Role::Submitter)
}

pub fn resolver(name: &str) -> User {
    User::new(name, Role::Resolver)
}

/// Create a test ticket with default values
pub fn create_test_ticket(id: &str, submitted_by: &str, status: Status) -> Ticket {
    TicketBuilder::new()
        .ticket_id(TicketId::new(id))
        .title(format!("Ticket {id}"))
        .description(format!("Description for {id}"))
        .priority(Priority::Medium)
        .status(status)
        .submitted_by(submitted_by)
        .created_at(at(9, 0))
        .build()
}

/// Test fixture for a temporary data directory
pub struct TestProject {
    pub temp_dir: TempDir,
    pub data_dir: PathBuf,
    pub storage: FileStorage,
}

impl TestProject {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".desk-ticket");
        let storage = FileStorage::new(&data_dir);

        Self {
            temp_dir,
            data_dir,
            storage,
        }
    }

    /// A project whose record already holds `tickets`
    pub fn with_tickets(tickets: &[Ticket]) -> Self {
        let project = Self::new();
        project.storage.save(tickets).expect("Failed to save tickets");
        project
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_with_tickets() {
        let tickets = vec![
            create_test_ticket("TKT-000001", "alice", Status::Open),
            create_test_ticket("TKT-000002", "bob", Status::Closed),
        ];
        let project = TestProject::with_tickets(&tickets);

        assert!(project.data_dir.join("tickets.json").exists());
        assert_eq!(project.storage.load(), tickets);
    }

    #[test]
    fn test_fixture_time_ordering() {
        assert!(at(10, 5) > at(10, 0));
    }
}
