//! Core domain types for casedb
//!
//! This crate defines the fundamental pieces the store is built from:
//! - [`Report`]: a single child-welfare case record
//! - [`Status`]: workflow stage of a case
//! - [`Error`]: the canonical error taxonomy
//! - [`IdSource`] and [`Clock`]: injected ports for identifier assignment
//!   and timestamping, so stores are deterministic under test

#![warn(missing_docs)]

pub mod clock;
pub mod demo;
pub mod error;
pub mod id;
pub mod report;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use id::{IdSource, SequencedIds, UuidIds};
pub use report::{Report, ReportDraft, Status, StatusBreakdown};
