use super::repository::{TicketStore, decode_record, encode_record};
use crate::core::Ticket;
use crate::error::StoreError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// In-process ticket store
///
/// Keeps the encoded record rather than live tickets so loads and saves go
/// through the same wire format as [`super::FileStorage`]. Saves can be made
/// to fail on demand to exercise the commit-on-success path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Mutex<Option<String>>,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw record, which need not be valid
    pub fn with_record(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// The raw record as last written
    pub fn raw_record(&self) -> Option<String> {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TicketStore for MemoryStore {
    fn load(&self) -> Vec<Ticket> {
        let guard = self.record.lock().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_deref()
            .and_then(decode_record)
            .unwrap_or_default()
    }

    fn save(&self, tickets: &[Ticket]) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("quota exceeded".to_string()));
        }

        let encoded = encode_record(tickets)?;
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = Some(encoded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;

    #[test]
    fn test_empty_store_loads_nothing() {
        assert!(MemoryStore::new().load().is_empty());
    }

    #[test]
    fn test_corrupt_record_loads_empty() {
        let store = MemoryStore::with_record("[{\"broken\": true}]");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_failing_save_keeps_record() {
        let store = MemoryStore::new();
        let ticket = TicketBuilder::new().title("kept").build();
        store.save(std::slice::from_ref(&ticket)).unwrap();

        store.set_fail_saves(true);
        let err = store.save(&[]).unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert_eq!(store.load(), vec![ticket]);

        store.set_fail_saves(false);
        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
    }
}
