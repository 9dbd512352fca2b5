//! Convenient imports for casedb.
//!
//! Re-exports the types most callers need so one import suffices:
//!
//! ```ignore
//! use casedb::prelude::*;
//!
//! let db = CaseDb::ephemeral();
//! db.create(ReportDraft::default())?;
//! ```

// Main entry point
pub use crate::db::{CaseDb, CaseDbBuilder};

// Error handling
pub use casedb_core::{Error, Result};

// Record types
pub use crate::types::{Report, ReportDraft, Status, StatusBreakdown};

// Re-export serde_json for convenience
pub use serde_json::json;
