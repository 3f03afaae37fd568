//! Error types for desk-ticket
//!
//! Every fallible operation in the crate returns [`Result`], whose error type
//! is [`DeskTicketError`]. Persistence failures are carried separately as
//! [`StoreError`] so callers can tell "nothing was written" apart from domain
//! rejections.

use crate::core::Status;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DeskTicketError>;

/// Failure while reading or writing the durable ticket record
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying file could not be written or replaced
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be serialized
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store refused the write (quota exceeded, read-only medium, ...)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Main error type for desk-ticket operations
#[derive(Debug, Error)]
pub enum DeskTicketError {
    /// A required field was empty or whitespace-only
    #[error("Validation failed: {field} must not be empty")]
    Validation { field: String },

    /// The requested status change is not an edge of the lifecycle
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: Status, to: Status },

    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// Persisting the collection failed; nothing was committed
    #[error("Failed to save tickets: {0}")]
    Store(#[from] StoreError),

    /// The acting role is not allowed to perform the operation
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Custom(String),
}

impl DeskTicketError {
    /// Shorthand for a validation failure on `field`
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    /// Message suitable for showing to the person at the terminal
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { field } => format!("Please fill in the {field}"),
            Self::InvalidTransition { from, to } => {
                format!("A ticket that is {from} cannot be moved to {to}")
            },
            Self::Store(_) => "Failed to save changes. Please try again.".to_string(),
            Self::NotLoggedIn => "You are not logged in".to_string(),
            _ => self.to_string(),
        }
    }

    /// Hints for recovering from the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotLoggedIn => vec![
                "Run 'desk-ticket login submitter' or 'desk-ticket login resolver'"
                    .to_string(),
                "Or pass --user <NAME> --role <ROLE> explicitly".to_string(),
            ],
            Self::InvalidTransition { from, .. } => {
                let targets: Vec<String> = from
                    .available_transitions()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                if targets.is_empty() {
                    vec![format!("A {from} ticket has no further transitions")]
                } else {
                    vec![format!("Allowed targets: {}", targets.join(", "))]
                }
            },
            Self::TicketNotFound { .. } => {
                vec!["Use 'desk-ticket list' to see the tickets visible to you".to_string()]
            },
            Self::Store(_) => vec![
                "Check that the data directory is writable".to_string(),
                "Your previous tickets are unchanged".to_string(),
            ],
            Self::Config(_) => {
                vec!["Check desk-ticket.toml and DESK_TICKET_* environment variables".to_string()]
            },
            _ => Vec::new(),
        }
    }

    /// Whether retrying the same request could succeed
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Io(_))
    }

    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<serde_json::Error> for DeskTicketError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<dialoguer::Error> for DeskTicketError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Custom(format!("Prompt failed: {err}"))
    }
}
