//! Ticket domain model
//!
//! Entities shared by the workflow engine, the visibility engine and the
//! store: tickets, their comment threads, the closed vocabularies for status,
//! priority and category, and the session-scoped acting user.

mod builders;
mod comment;
mod status;
mod ticket;
mod user;

pub use builders::{CommentBuilder, TicketBuilder};
pub use comment::{Comment, CommentId};
pub use status::{Category, Priority, Status};
pub use ticket::{Ticket, TicketId};
pub use user::{Role, User};
