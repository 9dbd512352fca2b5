//! Storage layer for casedb
//!
//! A store's entire contents live in one named slot holding the JSON-encoded
//! report array. This crate defines the [`Slot`] port and its two backends:
//! - [`MemorySlot`]: in-process, nothing touches disk
//! - [`FileSlot`]: a single file, replaced wholesale on every write
//!
//! The slot is deliberately dumb: it moves strings, never inspects them.
//! What the string means is the store's business.

#![warn(missing_docs)]

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use casedb_core::Result;

/// A single named storage slot.
///
/// Each write replaces the whole slot, so every mutation is all-or-nothing
/// with respect to the persisted value. Implementations are internally
/// thread-safe, but read-modify-write sequences across concurrent users are
/// not serialized here.
pub trait Slot: Send + Sync {
    /// Current contents, or `None` if the slot has never been written.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the contents.
    fn write(&self, contents: &str) -> Result<()>;
}
