use crate::config::Config;
use crate::core::{Role, TicketId, User};
use crate::desk::Desk;
use crate::error::{DeskTicketError, Result};
use crate::storage::FileStorage;
use std::path::PathBuf;

/// Session settings taken from global flags and their environment variables
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub data_dir: Option<PathBuf>,
    pub user: Option<String>,
    pub role: Option<Role>,
}

impl SessionOptions {
    /// The acting identity, if both a name and a role were given
    pub fn identity(&self) -> Result<User> {
        match (&self.user, self.role) {
            (Some(name), Some(role)) if !name.trim().is_empty() => Ok(User::new(name.trim(), role)),
            (Some(_), None) => Err(DeskTicketError::InvalidInput(
                "--user requires --role (submitter or resolver)".to_string(),
            )),
            _ => Err(DeskTicketError::NotLoggedIn),
        }
    }
}

/// Common context for all handler operations
pub struct HandlerContext {
    pub desk: Desk,
    pub config: Config,
    pub user: User,
}

impl HandlerContext {
    /// Open the desk for the acting user.
    ///
    /// Fails with `NotLoggedIn` before touching storage when no identity was
    /// supplied.
    pub fn new(options: &SessionOptions) -> Result<Self> {
        let user = options.identity()?;
        let config = Config::load_or_default();

        let data_dir = options
            .data_dir
            .clone()
            .unwrap_or_else(|| config.storage.data_dir.clone());
        let storage = FileStorage::with_key(&data_dir, config.storage.record_key.clone());
        tracing::debug!("Using ticket record {}", storage.record_path().display());

        let desk = Desk::open(storage).with_id_prefix(config.tickets.id_prefix.clone());

        Ok(Self { desk, config, user })
    }

    /// Resolve a ticket reference to an id.
    ///
    /// Accepts the full id in any case (`tkt-123456`) or just its number
    /// (`123456`). Unknown references are passed through unchanged so the
    /// engine reports them as not found.
    pub fn resolve_ticket_ref(&self, reference: &str) -> TicketId {
        let reference = reference.trim();
        let prefixed = format!("{}-{reference}", self.config.tickets.id_prefix);

        self.desk
            .tickets()
            .iter()
            .map(|t| &t.ticket_id)
            .find(|id| {
                id.as_str().eq_ignore_ascii_case(reference) || id.as_str().eq_ignore_ascii_case(&prefixed)
            })
            .cloned()
            .unwrap_or_else(|| TicketId::new(reference))
    }
}
