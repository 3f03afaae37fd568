use super::Ticket;
use crate::error::DeskTicketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the random part of a minted username
const MINTED_SUFFIX_LEN: usize = 5;

/// What an actor is allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Creates tickets and sees only their own
    Submitter,
    /// Sees every ticket and drives status transitions
    Resolver,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitter => "submitter",
            Self::Resolver => "resolver",
        }
    }

    /// Prefix for usernames minted by the login stub
    pub const fn username_prefix(self) -> &'static str {
        match self {
            Self::Submitter => "worker",
            Self::Resolver => "it_staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DeskTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "submitter" | "worker" => Ok(Self::Submitter),
            "resolver" | "it" | "it-staff" | "it_staff" => Ok(Self::Resolver),
            _ => Err(DeskTicketError::InvalidInput(format!(
                "Unknown role '{s}'. Expected 'submitter' or 'resolver'"
            ))),
        }
    }
}

/// The acting identity for one session. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub username: String,
    pub role: Role,
}

impl User {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    /// Mint a throwaway identity such as `worker_3f9a1`.
    ///
    /// This is the login stub: it proves nothing about who is at the
    /// keyboard.
    pub fn mint(role: Role) -> Self {
        let entropy = Uuid::new_v4().simple().to_string();
        let suffix = &entropy[..MINTED_SUFFIX_LEN];
        Self::new(format!("{}_{suffix}", role.username_prefix()), role)
    }

    pub const fn is_resolver(&self) -> bool {
        matches!(self.role, Role::Resolver)
    }

    /// Whether this user may observe `ticket`
    pub fn can_see(&self, ticket: &Ticket) -> bool {
        match self.role {
            Role::Resolver => true,
            Role::Submitter => ticket.submitted_by == self.username,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.role)
    }
}
