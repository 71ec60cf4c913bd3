//! Point-coverage analysis over a classified working set.
//!
//! "Covered" means within the coverage radius of at least one registered
//! business in the same zone.  The analysis reports the records that are
//! not.  That count is an upper bound on the number of additional
//! registrations a zone needs, not a minimum dominating set; the dashboard
//! reads it as "businesses still out of reach".

use zm_core::{Business, BusinessId, ZoneId};

#[cfg(feature = "fx-hash")]
type IdSet = rustc_hash::FxHashSet<BusinessId>;
#[cfg(not(feature = "fx-hash"))]
type IdSet = std::collections::HashSet<BusinessId>;

/// Coverage radius of the Lagos deployment: registering a business is taken
/// to make its 3 km neighbourhood reachable for follow-up visits.
pub const DEFAULT_COVERAGE_RADIUS_M: f64 = 3_000.0;

/// Ids of the businesses in `zone` that no registered business covers,
/// in working-set order.
///
/// Rules, in the order they apply:
///
/// * Only records whose `zone` matches take part at all.
/// * Anchors are the registered records in the zone.  With no anchors
///   nothing can be covered, so the whole zone population is returned.
/// * Otherwise a record is covered when some anchor lies within `radius_m`
///   metres, boundary inclusive.  Anchors cover themselves at distance
///   zero.
/// * A duplicate id is processed once; later occurrences are skipped
///   whether the first was covered or not.
///
/// `radius_m` is applied as given: zero covers only coincident points, and
/// a negative radius covers nothing (then even the anchors are reported).
pub fn uncovered(businesses: &[Business], zone: ZoneId, radius_m: f64) -> Vec<BusinessId> {
    let anchors: Vec<&Business> = businesses
        .iter()
        .filter(|b| b.zone == zone && b.registered)
        .collect();

    let mut seen = IdSet::default();
    let mut out = Vec::new();

    for b in businesses.iter().filter(|b| b.zone == zone) {
        if !seen.insert(b.id) {
            continue;
        }
        let covered = anchors
            .iter()
            .any(|a| a.pos.distance_m(b.pos) <= radius_m);
        if !covered {
            out.push(b.id);
        }
    }

    out
}

/// Number of businesses in `zone` that no registered business covers.
///
/// Equivalent to `uncovered(businesses, zone, radius_m).len()`.
pub fn uncovered_count(businesses: &[Business], zone: ZoneId, radius_m: f64) -> usize {
    uncovered(businesses, zone, radius_m).len()
}
