//! Alternate remote persistence backend.
//!
//! The hosted deployment of the original system kept its reports in a
//! remote document store instead of the local slot. That integration was
//! never wired into the primary flow, and it still is not: nothing in
//! [`crate::CaseDb`] touches this module. The trait documents the contract
//! a remote backend would have to meet, and [`MemoryRemote`] exists so code
//! written against it can be exercised without a network.

use std::cmp::Ordering;
use std::sync::Arc;

use parking_lot::RwLock;

use casedb_core::clock::{format_timestamp, parse_timestamp};
use casedb_core::{Clock, IdSource, Report, ReportDraft, Result, SystemClock, UuidIds};

/// Receipt for a successfully uploaded report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteReceipt {
    /// Identifier assigned by the remote store
    pub id: String,
}

/// A remote document store holding the report collection.
pub trait RemoteBackend: Send + Sync {
    /// Upload a single draft. The remote assigns the identifier and the
    /// creation timestamp, and the receipt carries the assigned id.
    fn upload_report(&self, draft: &ReportDraft) -> Result<RemoteReceipt>;

    /// Fetch every report, ordered by timestamp descending.
    fn fetch_all_reports(&self) -> Result<Vec<Report>>;
}

/// In-process [`RemoteBackend`].
pub struct MemoryRemote {
    reports: RwLock<Vec<Report>>,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
}

impl MemoryRemote {
    /// Empty backend with the default identifier source and clock.
    pub fn new() -> Self {
        Self::with_ports(Arc::new(UuidIds), Arc::new(SystemClock))
    }

    /// Empty backend with injected ports.
    pub fn with_ports(ids: Arc<dyn IdSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            reports: RwLock::new(Vec::new()),
            ids,
            clock,
        }
    }

    /// Backend pre-loaded with `reports`, for tests.
    pub fn seeded(reports: Vec<Report>) -> Self {
        let remote = Self::new();
        *remote.reports.write() = reports;
        remote
    }
}

impl Default for MemoryRemote {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteBackend for MemoryRemote {
    fn upload_report(&self, draft: &ReportDraft) -> Result<RemoteReceipt> {
        let report = draft.clone().into_report(
            self.ids.next_id(),
            format_timestamp(self.clock.now()),
        );
        let id = report.id.clone();
        self.reports.write().push(report);
        Ok(RemoteReceipt { id })
    }

    fn fetch_all_reports(&self) -> Result<Vec<Report>> {
        let mut reports = self.reports.read().clone();
        // Newest first; records with unreadable timestamps sort last
        reports.sort_by(|a, b| match (parse_timestamp(&a.timestamp), parse_timestamp(&b.timestamp)) {
            (Some(ta), Some(tb)) => tb.cmp(&ta),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        Ok(reports)
    }
}
