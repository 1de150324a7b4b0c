use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use crate::models::Record;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("offset out of range")]
    OutOfRange { offset: u64, len: u64 },
}

/// In-memory append-only record log.
///
/// Offsets are assigned by the log, starting at zero, with no gaps. Appends
/// take the write lock for the whole length-read/assign/push step, so two
/// concurrent callers never receive the same offset.
#[derive(Debug, Default)]
pub struct Log {
    records: RwLock<Vec<Record>>,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value and return the offset it was stored at.
    pub fn append(&self, value: Vec<u8>) -> u64 {
        // A push either completes or aborts, so a poisoned guard still
        // holds a consistent sequence.
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);

        let offset = records.len() as u64;
        records.push(Record { value, offset });

        tracing::debug!(offset, "appended record");
        offset
    }

    /// Read the record stored at `offset`.
    pub fn read(&self, offset: u64) -> Result<Record, LogError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);

        let len = records.len() as u64;
        usize::try_from(offset)
            .ok()
            .and_then(|idx| records.get(idx))
            .cloned()
            .ok_or(LogError::OutOfRange { offset, len })
    }

    /// Number of stored records, which is also the next offset to assign.
    pub fn len(&self) -> u64 {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
