//! Case report records.
//!
//! A [`Report`] is the sole entity in the system. The persisted form is a
//! JSON array of these objects, newest first. Records decode leniently,
//! field by field: imports are accepted on array shape alone, so a
//! loosely-shaped record must still decode into the typed view — one typed
//! record per stored element, never a whole-collection failure.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Workflow stage of a case.
///
/// Serialized as the literal variant name. Transitions are unconstrained:
/// any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Newly submitted, not yet looked at
    #[default]
    Pending,
    /// A case worker is actively on it
    Investigating,
    /// Closed out
    Resolved,
}

impl Status {
    /// All statuses, in workflow order.
    pub const ALL: [Status; 3] = [Status::Pending, Status::Investigating, Status::Resolved];

    /// The literal string this status serializes as.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Investigating => "Investigating",
            Status::Resolved => "Resolved",
        }
    }

    /// Parse a literal status string. `None` for anything unknown.
    pub fn parse(raw: &str) -> Option<Status> {
        match raw {
            "Pending" => Some(Status::Pending),
            "Investigating" => Some(Status::Investigating),
            "Resolved" => Some(Status::Resolved),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single child-welfare incident record.
///
/// `id` and `timestamp` are assigned by the store at creation and never
/// reassigned; status updates leave both untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Report {
    /// Opaque case identifier, unique within the store
    pub id: String,
    /// Name of the child concerned
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Free-text location of the incident
    pub location: String,
    /// Free-text account of the incident
    pub description: String,
    /// Current workflow stage
    pub status: Status,
    /// Creation time, canonically RFC 3339; treated as opaque on read
    pub timestamp: String,
}

// Stored records decode through `from_loose`, never field-strict serde: one
// odd field in one element must not fail the whole collection.
impl<'de> Deserialize<'de> for Report {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Report::from_loose(&Value::deserialize(deserializer)?))
    }
}

impl Report {
    /// Decode a stored record leniently.
    ///
    /// Every field falls back to its default when absent or wrong-typed.
    /// `age` additionally accepts numeric strings (legacy exports carry the
    /// form input verbatim), and an unknown status label reads as Pending.
    /// A non-object value decodes as an all-default record.
    pub fn from_loose(value: &Value) -> Report {
        let Some(object) = value.as_object() else {
            return Report::default();
        };
        Report {
            id: string_field(object.get("id")),
            name: string_field(object.get("name")),
            age: age_field(object.get("age")),
            location: string_field(object.get("location")),
            description: string_field(object.get("description")),
            status: object
                .get("status")
                .and_then(Value::as_str)
                .and_then(Status::parse)
                .unwrap_or_default(),
            timestamp: string_field(object.get("timestamp")),
        }
    }
}

fn string_field(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn age_field(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// A report as submitted, before the store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportDraft {
    /// Name of the child concerned
    #[serde(default)]
    pub name: String,
    /// Age in years
    #[serde(default)]
    pub age: u32,
    /// Free-text location of the incident
    #[serde(default)]
    pub location: String,
    /// Free-text account of the incident
    #[serde(default)]
    pub description: String,
    /// Initial workflow stage, Pending unless the caller says otherwise
    #[serde(default)]
    pub status: Status,
}

impl ReportDraft {
    /// Promote this draft to a full record with store-assigned fields.
    pub fn into_report(self, id: String, timestamp: String) -> Report {
        Report {
            id,
            name: self.name,
            age: self.age,
            location: self.location,
            description: self.description,
            status: self.status,
            timestamp,
        }
    }
}

/// Per-status counts over a report collection, for dashboard summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusBreakdown {
    /// Cases still pending
    pub pending: usize,
    /// Cases under investigation
    pub investigating: usize,
    /// Cases resolved
    pub resolved: usize,
}

impl StatusBreakdown {
    /// Tally the statuses of `reports`.
    pub fn of(reports: &[Report]) -> Self {
        let mut breakdown = StatusBreakdown::default();
        for report in reports {
            match report.status {
                Status::Pending => breakdown.pending += 1,
                Status::Investigating => breakdown.investigating += 1,
                Status::Resolved => breakdown.resolved += 1,
            }
        }
        breakdown
    }

    /// Total number of cases tallied.
    pub fn total(&self) -> usize {
        self.pending + self.investigating + self.resolved
    }

    /// Count for one status.
    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::Investigating => self.investigating,
            Status::Resolved => self.resolved,
        }
    }

    /// Share of `status` as a whole-number percentage.
    ///
    /// Returns 0 for an empty collection.
    pub fn percentage(&self, status: Status) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        ((self.count(status) * 100) as f64 / total as f64).round() as u32
    }
}
