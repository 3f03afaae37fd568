//! desk-ticket - A small help-desk ticket tracker
//!
//! Two roles share one ticket collection:
//! - **submitters** open tickets and only ever see their own
//! - **resolvers** see every ticket and move it through its lifecycle
//!
//! Either role can comment on the tickets it can see.
//!
//! The crate is organised around three pieces:
//! - [`workflow`]: the lifecycle engine (create, transition, comment)
//! - [`visibility`]: role scoping, search, filters and ordering
//! - [`storage`]: the durable whole-collection record
//!
//! [`desk::Desk`] ties them together and only commits a change in memory
//! once the store has confirmed it.

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
// Allow some pedantic lints that don't improve code quality
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::module_name_repetitions)]

//! # Example
//!
//! ```rust,ignore
//! use desk_ticket::core::{Role, User};
//! use desk_ticket::desk::Desk;
//! use desk_ticket::storage::FileStorage;
//! use desk_ticket::visibility::ViewFilter;
//! use desk_ticket::workflow::{Action, TicketDraft};
//!
//! let mut desk = Desk::open(FileStorage::new(".desk-ticket"));
//!
//! let worker = User::mint(Role::Submitter);
//! let ticket = desk.create(TicketDraft::new("No wifi", "Laptop cannot connect"), &worker)?;
//!
//! let staff = User::mint(Role::Resolver);
//! desk.apply(&ticket.ticket_id, Action::Start, &staff)?;
//!
//! for ticket in desk.visible(&worker, &ViewFilter::default()) {
//!     println!("{} {}", ticket.ticket_id, ticket.status);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod desk;
pub mod error;
pub mod interactive;
pub mod storage;
pub mod visibility;
pub mod workflow;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{DeskTicketError, Result};
