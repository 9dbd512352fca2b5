//! Main entry point for casedb.
//!
//! This module provides the `CaseDb` struct, the record-management contract
//! every caller goes through: one persisted JSON-array slot, identifier
//! assignment, point status updates, bulk replace.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use casedb_core::clock::format_timestamp;
use casedb_core::demo;
use casedb_core::{
    Clock, Error, IdSource, Report, ReportDraft, Result, Status, StatusBreakdown, SystemClock,
    UuidIds,
};
use casedb_storage::{FileSlot, MemorySlot, Slot};

/// The case-report store.
///
/// Create one with [`CaseDb::open`], [`CaseDb::ephemeral`] or
/// [`CaseDb::builder`].
///
/// # Example
///
/// ```ignore
/// use casedb::prelude::*;
///
/// let db = CaseDb::open("./cases.json");
///
/// let report = db.create(ReportDraft { name: "Amina Bello".into(), ..Default::default() })?;
/// db.update_status(&report.id, Status::Investigating)?;
///
/// assert_eq!(db.list()[0].id, report.id);
/// ```
///
/// The store assumes a single writer. Slot backends are internally
/// thread-safe, but concurrent `CaseDb` users racing on read-modify-write
/// operations must bring their own serialization.
pub struct CaseDb {
    slot: Arc<dyn Slot>,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
}

impl CaseDb {
    /// Open a store backed by the JSON file at `path`.
    ///
    /// The file is created on first write; until then the store lists as
    /// empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::builder().path(path).open()
    }

    /// Create an in-memory store with no disk I/O.
    ///
    /// All contents are lost when the store is dropped. Use for tests and
    /// throwaway sessions.
    pub fn ephemeral() -> Self {
        Self::builder().in_memory().open()
    }

    /// Create a builder for store configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let db = CaseDb::builder()
    ///     .path("./cases.json")
    ///     .id_source(SequencedIds::new())
    ///     .open();
    /// ```
    pub fn builder() -> CaseDbBuilder {
        CaseDbBuilder::new()
    }

    // =========================================================================
    // Record management
    // =========================================================================

    /// All records, newest first.
    ///
    /// Never fails: an absent or unreadable slot lists as empty, and so do
    /// contents that no longer decode as a report array. No distinction is
    /// made between "never written" and "empty".
    pub fn list(&self) -> Vec<Report> {
        let Some(raw) = self.read_slot() else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(reports) => reports,
            Err(e) => {
                warn!(error = %e, "slot contents undecodable, treating store as empty");
                Vec::new()
            }
        }
    }

    /// Create a new case from `draft`.
    ///
    /// Assigns a fresh identifier and a creation timestamp, prepends the
    /// record (so [`CaseDb::list`] stays newest-first), persists, and returns
    /// the fully populated record. Neither assigned field is ever changed
    /// afterwards. A slot read failure surfaces as [`Error::Storage`] and
    /// leaves the store untouched.
    pub fn create(&self, draft: ReportDraft) -> Result<Report> {
        let report = draft.into_report(
            self.ids.next_id(),
            format_timestamp(self.clock.now()),
        );
        let mut records = self.try_raw_records()?;
        records.insert(0, serde_json::to_value(&report)?);
        self.persist(&records)?;
        debug!(id = %report.id, "case created");
        Ok(report)
    }

    /// Replace the status of the case with `id`.
    ///
    /// Every other field, and every other record, is left untouched; order
    /// is preserved. An unknown `id` is a silent no-op by design, not an
    /// error. A slot read failure surfaces as [`Error::Storage`] and leaves
    /// the store untouched.
    pub fn update_status(&self, id: &str, status: Status) -> Result<()> {
        let mut records = self.try_raw_records()?;
        for record in &mut records {
            if let Some(object) = record.as_object_mut() {
                if object.get("id").and_then(Value::as_str) == Some(id) {
                    object.insert("status".into(), Value::String(status.as_str().into()));
                }
            }
        }
        self.persist(&records)?;
        debug!(%id, %status, "case status updated");
        Ok(())
    }

    /// Bulk import: replace the whole collection with `payload`.
    ///
    /// `payload` must parse as a JSON array; anything else fails with
    /// [`Error::MalformedImport`] and leaves the store unchanged. Element
    /// shape is not validated, and the payload is persisted verbatim.
    /// Returns the typed view of the imported records.
    pub fn replace_all(&self, payload: &str) -> Result<Vec<Report>> {
        let parsed: Value = serde_json::from_str(payload)
            .map_err(|e| Error::MalformedImport(e.to_string()))?;
        if !parsed.is_array() {
            return Err(Error::MalformedImport(format!(
                "expected a top-level array, got {}",
                json_type_name(&parsed)
            )));
        }
        self.slot.write(payload)?;
        debug!(count = parsed.as_array().map_or(0, Vec::len), "collection replaced by import");
        Ok(self.list())
    }

    /// Seed the store with `n` synthetic records, discarding prior contents.
    ///
    /// Names and locations cycle round-robin through the demo vocabulary;
    /// ages and statuses are random; timestamps step one hour backward from
    /// "now". Returns the batch, newest first.
    pub fn generate_demo_batch(&self, n: usize) -> Result<Vec<Report>> {
        let batch = demo::demo_batch(n, self.ids.as_ref(), self.clock.now());
        self.slot.write(&serde_json::to_string(&batch)?)?;
        debug!(count = batch.len(), "store seeded with demo batch");
        Ok(batch)
    }

    // =========================================================================
    // Import / export
    // =========================================================================

    /// The whole collection as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String> {
        // Dump the raw records so fields outside the report shape survive
        Ok(serde_json::to_string_pretty(&self.raw_records())?)
    }

    /// Export file name for today, `casedb_export_<YYYY-MM-DD>.json`.
    pub fn export_file_name(&self) -> String {
        format!("casedb_export_{}.json", self.clock.now().format("%Y-%m-%d"))
    }

    /// Write the pretty-printed export to a file.
    pub fn export_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let payload = self.export_json()?;
        std::fs::write(path, payload)?;
        Ok(())
    }

    /// Read a file's entire contents and [`CaseDb::replace_all`] with them.
    ///
    /// I/O failure surfaces as [`Error::Io`], parse failure as
    /// [`Error::MalformedImport`]; the store is unchanged on either.
    pub fn import_from_path(&self, path: impl AsRef<Path>) -> Result<Vec<Report>> {
        let payload = std::fs::read_to_string(path)?;
        self.replace_all(&payload)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Records whose name or location contains `query`, case-insensitively.
    ///
    /// An empty query returns everything, newest first.
    pub fn search(&self, query: &str) -> Vec<Report> {
        let reports = self.list();
        if query.is_empty() {
            return reports;
        }
        let needle = query.to_lowercase();
        reports
            .into_iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.location.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Per-status counts over the current collection.
    pub fn status_breakdown(&self) -> StatusBreakdown {
        StatusBreakdown::of(&self.list())
    }

    // =========================================================================
    // Slot access
    // =========================================================================

    /// Raw slot contents; read failures log and read as never-written.
    fn read_slot(&self) -> Option<String> {
        match self.slot.read() {
            Ok(contents) => contents,
            Err(e) => {
                warn!(error = %e, "slot read failed, treating store as empty");
                None
            }
        }
    }

    /// The stored array as raw JSON values, preserving fields the typed
    /// view does not know about.
    fn raw_records(&self) -> Vec<Value> {
        let Some(raw) = self.read_slot() else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "slot contents undecodable, treating store as empty");
                Vec::new()
            }
        }
    }

    /// Like `raw_records`, but a transient slot read failure propagates
    /// instead of reading as empty: a mutation must not rebuild the
    /// collection from nothing because the backend hiccuped. Corrupt
    /// contents still read as empty, matching `list`.
    fn try_raw_records(&self) -> Result<Vec<Value>> {
        let Some(raw) = self.slot.read()? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(error = %e, "slot contents undecodable, treating store as empty");
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, records: &[Value]) -> Result<()> {
        self.slot.write(&serde_json::to_string(records)?)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Builder for store configuration.
///
/// Unset ports fall back to the defaults: an in-memory slot, UUID-derived
/// identifiers, the system clock.
///
/// # Example
///
/// ```ignore
/// // Production: file-backed
/// let db = CaseDb::builder().path("./cases.json").open();
///
/// // Tests: deterministic everything
/// let db = CaseDb::builder()
///     .in_memory()
///     .id_source(SequencedIds::new())
///     .clock(FixedClock::new(some_instant))
///     .open();
/// ```
pub struct CaseDbBuilder {
    slot: Option<Arc<dyn Slot>>,
    ids: Option<Arc<dyn IdSource>>,
    clock: Option<Arc<dyn Clock>>,
}

impl CaseDbBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            slot: None,
            ids: None,
            clock: None,
        }
    }

    /// Back the store with the JSON file at `path`.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.slot = Some(Arc::new(FileSlot::new(path.as_ref())));
        self
    }

    /// Back the store with memory only (the default).
    pub fn in_memory(mut self) -> Self {
        self.slot = Some(Arc::new(MemorySlot::new()));
        self
    }

    /// Back the store with a caller-provided slot.
    pub fn slot(mut self, slot: Arc<dyn Slot>) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Use a caller-provided identifier source.
    pub fn id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Some(Arc::new(ids));
        self
    }

    /// Use a caller-provided clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Open the store.
    pub fn open(self) -> CaseDb {
        CaseDb {
            slot: self.slot.unwrap_or_else(|| Arc::new(MemorySlot::new())),
            ids: self.ids.unwrap_or_else(|| Arc::new(UuidIds)),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        }
    }
}

impl Default for CaseDbBuilder {
    fn default() -> Self {
        Self::new()
    }
}
