//! Dashboard read-side helpers: search and status breakdown.

use casedb::prelude::*;

use crate::{fresh_db, sample_draft};

#[test]
fn search_matches_name_case_insensitively() {
    let db = fresh_db();
    db.create(sample_draft("Amina Bello")).unwrap();
    db.create(sample_draft("Emeka Obi")).unwrap();

    let hits = db.search("amina");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Amina Bello");
}

#[test]
fn search_matches_location_too() {
    let db = fresh_db();
    db.create(sample_draft("Amina Bello")).unwrap();

    // sample_draft puts every case in Abuja
    assert_eq!(db.search("ABUJA").len(), 1);
    assert!(db.search("Lagos").is_empty());
}

#[test]
fn empty_query_returns_everything_newest_first() {
    let db = fresh_db();
    db.create(sample_draft("first")).unwrap();
    db.create(sample_draft("second")).unwrap();

    let all = db.search("");
    assert_eq!(all, db.list());
    assert_eq!(all[0].name, "second");
}

#[test]
fn breakdown_counts_match_the_collection() {
    let db = fresh_db();
    let a = db.create(sample_draft("a")).unwrap();
    let b = db.create(sample_draft("b")).unwrap();
    db.create(sample_draft("c")).unwrap();
    db.update_status(&a.id, Status::Resolved).unwrap();
    db.update_status(&b.id, Status::Investigating).unwrap();

    let breakdown = db.status_breakdown();
    assert_eq!(breakdown.total(), 3);
    assert_eq!(breakdown.pending, 1);
    assert_eq!(breakdown.investigating, 1);
    assert_eq!(breakdown.resolved, 1);
    assert_eq!(breakdown.percentage(Status::Pending), 33);
}

#[test]
fn breakdown_of_an_empty_store_is_zero() {
    let db = fresh_db();
    let breakdown = db.status_breakdown();
    assert_eq!(breakdown.total(), 0);
    assert_eq!(breakdown.percentage(Status::Resolved), 0);
}
