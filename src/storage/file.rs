use super::repository::{TicketStore, decode_record, encode_record};
use crate::core::Ticket;
use crate::error::StoreError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Record key used when none is configured
pub const DEFAULT_RECORD_KEY: &str = "tickets";

/// File-based ticket storage
///
/// The whole collection lives in a single JSON file, `<key>.json`, inside the
/// data directory. Saves go through a temporary file in the same directory
/// that is renamed over the record, so readers never see a half-written file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_dir: PathBuf,
    key: String,
}

impl FileStorage {
    /// Create storage rooted at `base_dir` using the default record key
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self::with_key(base_dir, DEFAULT_RECORD_KEY)
    }

    pub fn with_key(base_dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            key: key.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the durable record
    pub fn record_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", self.key))
    }
}

impl TicketStore for FileStorage {
    fn load(&self) -> Vec<Ticket> {
        let path = self.record_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No ticket record at {}, starting fresh", path.display());
                return Vec::new();
            },
            Err(e) => {
                tracing::warn!("Could not read {}: {e}; starting fresh", path.display());
                return Vec::new();
            },
        };

        let tickets = decode_record(&raw).unwrap_or_default();
        tracing::debug!("Loaded {} ticket(s) from {}", tickets.len(), path.display());
        tickets
    }

    fn save(&self, tickets: &[Ticket]) -> Result<(), StoreError> {
        let encoded = encode_record(tickets)?;

        fs::create_dir_all(&self.base_dir)?;
        let mut staged = NamedTempFile::new_in(&self.base_dir)?;
        staged.write_all(encoded.as_bytes())?;
        staged.as_file().sync_all()?;

        let path = self.record_path();
        staged.persist(&path).map_err(|e| StoreError::Io(e.error))?;

        tracing::debug!("Saved {} ticket(s) to {}", tickets.len(), path.display());
        Ok(())
    }
}
