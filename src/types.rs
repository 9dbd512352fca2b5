//! Public types for the casedb API.
//!
//! Re-exports from the internal crates with a single clean surface.

// Record types
pub use casedb_core::report::{Report, ReportDraft, Status, StatusBreakdown};

// Identifier port
pub use casedb_core::id::{IdSource, SequencedIds, UuidIds, ID_PREFIX};

// Clock port and timestamp handling
pub use casedb_core::clock::{format_timestamp, parse_timestamp, Clock, FixedClock, SystemClock};

// Demo vocabulary
pub use casedb_core::demo::{DEMO_AGE_RANGE, DEMO_DESCRIPTION, DEMO_LOCATIONS, DEMO_NAMES};

// Storage port
pub use casedb_storage::{FileSlot, MemorySlot, Slot};
