//! Command handlers
//!
//! One module per command group. Handlers open a [`common::HandlerContext`],
//! call into the library, and render the outcome through the
//! [`crate::cli::OutputFormatter`].

mod comment;
mod common;
mod create;
mod list;
mod login;
mod show;
mod workflow;

pub use comment::handle_comment_command;
pub use common::{HandlerContext, SessionOptions};
pub use create::{CreateParams, handle_new_command};
pub use list::handle_list_command;
pub use login::handle_login_command;
pub use show::handle_show_command;
pub use workflow::handle_action_command;
