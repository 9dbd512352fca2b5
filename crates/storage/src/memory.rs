use parking_lot::RwLock;

use casedb_core::Result;

use crate::Slot;

/// In-memory slot. Contents are gone when the slot is dropped.
///
/// The backend of choice for tests and throwaway sessions: maximum
/// isolation, no files, no cleanup.
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: RwLock<Option<String>>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.read().clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        *self.contents.write() = Some(contents.to_string());
        Ok(())
    }
}
