//! Record lifecycle: create, list, update.

use std::sync::Arc;

use casedb::prelude::*;
use casedb::{Slot, ID_PREFIX};

use crate::{deterministic_db, fresh_db, sample_draft};

#[test]
fn never_written_store_lists_empty() {
    let db = fresh_db();
    assert!(db.list().is_empty());
}

#[test]
fn create_returns_the_populated_record() {
    let db = deterministic_db();
    let report = db.create(sample_draft("Amina Bello")).unwrap();

    assert_eq!(report.id, "CASE-000001");
    assert_eq!(report.timestamp, "2024-06-01T12:00:00Z");
    assert_eq!(report.name, "Amina Bello");
    assert_eq!(report.age, 9);
    assert_eq!(report.location, "22 Gwarinpa, Abuja");
    assert_eq!(report.status, Status::Pending);
}

#[test]
fn create_persists_the_record() {
    let db = fresh_db();
    let report = db.create(sample_draft("Emeka Obi")).unwrap();
    assert_eq!(db.list(), vec![report]);
}

#[test]
fn default_ids_carry_the_canonical_prefix() {
    let db = fresh_db();
    let report = db.create(sample_draft("Zainab Musa")).unwrap();
    assert!(report.id.starts_with(ID_PREFIX));
    assert!(report.id.len() > ID_PREFIX.len());
}

#[test]
fn drafts_default_to_pending() {
    let db = fresh_db();
    let report = db.create(ReportDraft::default()).unwrap();
    assert_eq!(report.status, Status::Pending);
}

#[test]
fn update_status_changes_the_matching_record() {
    let db = fresh_db();
    let report = db.create(sample_draft("Tunde Adenuga")).unwrap();

    db.update_status(&report.id, Status::Resolved).unwrap();

    assert_eq!(db.list()[0].status, Status::Resolved);
}

#[test]
fn any_status_transition_is_allowed() {
    let db = fresh_db();
    let report = db.create(sample_draft("Halima Idris")).unwrap();

    // Forwards, backwards, and self-transitions all go through
    for status in [
        Status::Resolved,
        Status::Pending,
        Status::Investigating,
        Status::Investigating,
    ] {
        db.update_status(&report.id, status).unwrap();
        assert_eq!(db.list()[0].status, status);
    }
}

#[test]
fn update_status_on_unknown_id_is_a_noop() {
    let db = fresh_db();
    db.create(sample_draft("Ngozi Adichie")).unwrap();
    let before = db.list();

    db.update_status("CASE-NOSUCHCASE", Status::Resolved).unwrap();

    assert_eq!(db.list(), before);
}

#[test]
fn update_does_not_refresh_the_timestamp() {
    let db = deterministic_db();
    let report = db.create(sample_draft("Ifeanyi Ugwu")).unwrap();

    db.update_status(&report.id, Status::Investigating).unwrap();

    assert_eq!(db.list()[0].timestamp, report.timestamp);
}

/// Slot whose reads always fail, as a disabled or quota-starved backend would.
struct FailingReads;

impl Slot for FailingReads {
    fn read(&self) -> casedb::Result<Option<String>> {
        Err(Error::Storage("backend offline".into()))
    }

    fn write(&self, _contents: &str) -> casedb::Result<()> {
        Ok(())
    }
}

#[test]
fn mutations_fail_when_the_slot_cannot_be_read() {
    // A failed read must abort the mutation, not rewrite the collection
    // from nothing
    let db = CaseDb::builder().slot(Arc::new(FailingReads)).open();

    let err = db.create(sample_draft("Amina Bello")).unwrap_err();
    assert!(err.is_storage());

    let err = db.update_status("CASE-000001", Status::Resolved).unwrap_err();
    assert!(err.is_storage());

    // Reads stay infallible
    assert!(db.list().is_empty());
}
