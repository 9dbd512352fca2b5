//! Synthetic demo batches.

use casedb::prelude::*;
use casedb::{DEMO_AGE_RANGE, DEMO_LOCATIONS, DEMO_NAMES, ID_PREFIX};

use crate::{deterministic_db, fresh_db, sample_draft};

#[test]
fn yields_exactly_n_records() {
    let db = fresh_db();
    let batch = db.generate_demo_batch(20).unwrap();
    assert_eq!(batch.len(), 20);
    assert_eq!(db.list(), batch);
}

#[test]
fn replaces_prior_contents() {
    let db = fresh_db();
    db.create(sample_draft("a real case")).unwrap();

    let batch = db.generate_demo_batch(5).unwrap();

    let listed = db.list();
    assert_eq!(listed, batch);
    assert!(listed.iter().all(|r| r.name != "a real case"));
}

#[test]
fn a_zero_batch_empties_the_store() {
    let db = fresh_db();
    db.create(sample_draft("gone after seeding")).unwrap();

    let batch = db.generate_demo_batch(0).unwrap();
    assert!(batch.is_empty());
    assert!(db.list().is_empty());
}

#[test]
fn records_draw_from_the_demo_vocabulary() {
    let db = fresh_db();
    for report in db.generate_demo_batch(20).unwrap() {
        assert!(DEMO_NAMES.contains(&report.name.as_str()));
        assert!(DEMO_LOCATIONS.contains(&report.location.as_str()));
        assert!(DEMO_AGE_RANGE.contains(&report.age));
        assert!(report.id.starts_with(ID_PREFIX));
        assert!(!report.description.is_empty());
    }
}

#[test]
fn names_cycle_round_robin() {
    let db = fresh_db();
    let batch = db.generate_demo_batch(7).unwrap();
    for (i, report) in batch.iter().enumerate() {
        assert_eq!(report.name, DEMO_NAMES[i]);
    }
}

#[test]
fn timestamps_step_backward_from_now() {
    let db = deterministic_db();
    let batch = db.generate_demo_batch(3).unwrap();

    assert_eq!(batch[0].timestamp, "2024-06-01T12:00:00Z");
    assert_eq!(batch[1].timestamp, "2024-06-01T11:00:00Z");
    assert_eq!(batch[2].timestamp, "2024-06-01T10:00:00Z");
}

#[test]
fn synthetic_ids_obey_the_uniqueness_invariant() {
    let db = fresh_db();
    let mut ids: Vec<_> = db
        .generate_demo_batch(40)
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 40);
}
