//! Synthetic demo batches.
//!
//! Placeholder records for demonstrating the dashboard without real data.
//! Names and locations cycle round-robin through a fixed vocabulary; ages
//! and statuses are random; timestamps step one hour backward from "now" so
//! the batch is already in newest-first order.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::clock::format_timestamp;
use crate::id::IdSource;
use crate::report::{Report, Status};

/// Placeholder names cycled through a demo batch.
pub const DEMO_NAMES: [&str; 20] = [
    "Chinedu Okafor",
    "Fatima Yusuf",
    "Emeka Obi",
    "Amina Bello",
    "Tunde Adenuga",
    "Ngozi Adichie",
    "Oluwaseun Ajayi",
    "Zainab Musa",
    "Kelechi Iheanacho",
    "Bisi Akande",
    "Ifeanyi Ugwu",
    "Halima Idris",
    "Damilola Ade",
    "Uche Jombo",
    "Sani Abubakar",
    "Funke Akindele",
    "Segun Arinze",
    "Patience Ozokwor",
    "Genevieve Nnaji",
    "Mikel Obi",
];

/// Placeholder locations cycled through a demo batch.
pub const DEMO_LOCATIONS: [&str; 5] = [
    "14 Nnobi Street, Enugu",
    "22 Gwarinpa, Abuja",
    "10 Ajah, Lagos",
    "5 Sabon Gari, Kano",
    "18 Ring Road, Ibadan",
];

/// Description carried by every synthetic record.
pub const DEMO_DESCRIPTION: &str = "This is a pre-generated demo report for \
    testing the administrative interface and dashboard functionality.";

/// Age range for synthetic records, inclusive.
pub const DEMO_AGE_RANGE: std::ops::RangeInclusive<u32> = 3..=15;

/// Build `n` synthetic reports, newest first.
///
/// Identifiers come from `ids` so synthetic records obey the same
/// uniqueness invariant as real ones.
pub fn demo_batch(n: usize, ids: &dyn IdSource, now: DateTime<Utc>) -> Vec<Report> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|i| Report {
            id: ids.next_id(),
            name: DEMO_NAMES[i % DEMO_NAMES.len()].to_string(),
            age: rng.gen_range(DEMO_AGE_RANGE),
            location: DEMO_LOCATIONS[i % DEMO_LOCATIONS.len()].to_string(),
            description: DEMO_DESCRIPTION.to_string(),
            status: Status::ALL[rng.gen_range(0..Status::ALL.len())],
            timestamp: format_timestamp(now - Duration::hours(i as i64)),
        })
        .collect()
}
