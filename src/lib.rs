//! # casedb
//!
//! Embedded store for child-welfare case reports.
//!
//! casedb keeps the whole report collection in a single persisted slot as a
//! JSON array, newest first, and exposes a narrow contract over it: list,
//! create, status update, bulk import/export, synthetic demo batches.
//!
//! ## Quick Start
//!
//! ```ignore
//! use casedb::prelude::*;
//!
//! // File-backed store
//! let db = CaseDb::open("./cases.json");
//!
//! // Submit a report
//! let report = db.create(ReportDraft {
//!     name: "Amina Bello".into(),
//!     age: 8,
//!     location: "Wuse 2, Abuja".into(),
//!     description: "Left unattended overnight.".into(),
//!     ..Default::default()
//! })?;
//!
//! // Work the case
//! db.update_status(&report.id, Status::Investigating)?;
//!
//! // Dump and restore the whole collection
//! let payload = db.export_json()?;
//! db.replace_all(&payload)?;
//! ```
//!
//! ## Ports
//!
//! Storage, identifier assignment, and time are injected through
//! [`CaseDb::builder`], so tests run against an in-memory slot with a
//! deterministic id sequence and a pinned clock:
//!
//! ```ignore
//! let db = CaseDb::builder()
//!     .in_memory()
//!     .id_source(SequencedIds::new())
//!     .open();
//! ```

#![warn(missing_docs)]

mod db;
mod types;

pub mod prelude;
pub mod remote;

// Re-export main entry points
pub use db::{CaseDb, CaseDbBuilder};
pub use casedb_core::{Error, Result};

// Re-export types
pub use types::*;
