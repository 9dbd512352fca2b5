//! Case identifier assignment.
//!
//! Identifier generation sits behind the [`IdSource`] port so the id format
//! is decoupled from store logic and tests can substitute a deterministic
//! sequence. The canonical format is `CASE-` followed by ten uppercase hex
//! characters drawn from a UUID v4.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Prefix shared by every store-assigned case identifier.
pub const ID_PREFIX: &str = "CASE-";

/// Source of fresh case identifiers.
pub trait IdSource: Send + Sync {
    /// Produce the next identifier. Each call must yield a distinct value.
    fn next_id(&self) -> String;
}

/// Default identifier source, backed by UUID v4.
///
/// Ten hex characters carry 40 bits of randomness, so collisions are
/// practically impossible at single-tenant record counts. There is no
/// collision detection beyond that.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> String {
        let raw = Uuid::new_v4().simple().to_string();
        format!("{ID_PREFIX}{}", raw[..10].to_uppercase())
    }
}

/// Deterministic identifier source for tests: `CASE-000001`, `CASE-000002`, …
#[derive(Debug, Default)]
pub struct SequencedIds {
    issued: AtomicU64,
}

impl SequencedIds {
    /// Create a sequence starting at `CASE-000001`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequencedIds {
    fn next_id(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{ID_PREFIX}{n:06}")
    }
}
