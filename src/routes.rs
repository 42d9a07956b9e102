//! Static route data: the supported cities and one-way distances between them
//!
//! Distances are curated per unordered city pair; lookup is symmetric and an
//! absent pair is an expected outcome ("no pricing data yet"), not an error.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Cities with fare coverage, in display order.
///
/// The destination select on the frontend defaults to the second entry.
pub const CITIES: [&str; 9] = [
    "Delhi",
    "Mumbai",
    "Bengaluru",
    "Chennai",
    "Hyderabad",
    "Kolkata",
    "Jaipur",
    "Pune",
    "siwan",
];

/// One-way distances in kilometers, keyed by canonical city pair.
static DISTANCES_KM: LazyLock<HashMap<String, u32>> = LazyLock::new(|| {
    [
        (("Delhi", "Mumbai"), 1400),
        (("Delhi", "Bengaluru"), 2150),
        (("Delhi", "Chennai"), 2190),
        (("Delhi", "Hyderabad"), 1550),
        (("Delhi", "Kolkata"), 1500),
        (("Mumbai", "Bengaluru"), 980),
        (("Mumbai", "Chennai"), 1330),
        (("Mumbai", "Hyderabad"), 710),
        (("Mumbai", "Kolkata"), 2020),
        (("Bengaluru", "Chennai"), 400),
        (("Bengaluru", "Hyderabad"), 570),
        (("Bengaluru", "Kolkata"), 1870),
        (("Chennai", "Hyderabad"), 630),
        (("Chennai", "Kolkata"), 1650),
        (("Hyderabad", "Kolkata"), 1480),
        (("Delhi", "Jaipur"), 270),
        (("Delhi", "Pune"), 1450),
        (("Mumbai", "Pune"), 150),
        (("Bengaluru", "Pune"), 840),
        (("Hyderabad", "Pune"), 560),
        (("Delhi", "siwan"), 990),
        (("Mumbai", "siwan"), 1700),
        (("Bengaluru", "siwan"), 2000),
        (("Chennai", "siwan"), 1800),
        (("Hyderabad", "siwan"), 1500),
    ]
    .into_iter()
    .map(|((a, b), km)| (route_key(a, b), km))
    .collect()
});

/// Build the canonical lookup key for an unordered city pair.
///
/// The pair is sorted lexicographically so that (A, B) and (B, A) resolve
/// to the same entry.
fn route_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{a}|{b}")
    } else {
        format!("{b}|{a}")
    }
}

/// Look up the one-way distance between two cities.
///
/// Returns `None` when the pair has no curated distance, including the
/// degenerate case of both arguments naming the same city.
#[must_use]
pub fn lookup_distance(a: &str, b: &str) -> Option<u32> {
    DISTANCES_KM.get(&route_key(a, b)).copied()
}
