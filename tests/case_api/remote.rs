//! The remote backend stub stays contract-compatible with the store.

use std::sync::Arc;

use casedb::prelude::*;
use casedb::remote::{MemoryRemote, RemoteBackend};
use casedb::{FixedClock, SequencedIds};

use crate::{pinned_now, sample_draft};

#[test]
fn upload_assigns_ids_like_the_store_does() {
    let remote = MemoryRemote::with_ports(
        Arc::new(SequencedIds::new()),
        Arc::new(FixedClock::new(pinned_now())),
    );

    let receipt = remote.upload_report(&sample_draft("Amina Bello")).unwrap();
    assert_eq!(receipt.id, "CASE-000001");

    let fetched = remote.fetch_all_reports().unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].id, receipt.id);
    assert_eq!(fetched[0].timestamp, "2024-06-01T12:00:00Z");
    assert_eq!(fetched[0].status, Status::Pending);
}

#[test]
fn fetched_records_decode_in_the_local_store() {
    // A collection fetched from the remote must import cleanly
    let remote = MemoryRemote::new();
    remote.upload_report(&sample_draft("Emeka Obi")).unwrap();
    remote.upload_report(&sample_draft("Fatima Yusuf")).unwrap();

    let fetched = remote.fetch_all_reports().unwrap();
    let payload = serde_json::to_string(&fetched).unwrap();

    let db = CaseDb::ephemeral();
    let imported = db.replace_all(&payload).unwrap();
    assert_eq!(imported, fetched);
}
