//! Durable storage for the ticket collection
//!
//! The collection is persisted as one record and always read and written
//! whole. [`FileStorage`] is the production store; [`MemoryStore`] backs
//! tests and embedders that do not want a file.

mod file;
mod memory;
mod repository;

pub use file::{DEFAULT_RECORD_KEY, FileStorage};
pub use memory::MemoryStore;
pub use repository::{TicketStore, decode_record, encode_record};

#[cfg(test)]
pub use repository::MockTicketStore;
