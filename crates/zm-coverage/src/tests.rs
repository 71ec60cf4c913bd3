//! Unit tests for zm-coverage.

use zm_core::{Business, BusinessId, Coordinate, ZoneId};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Record with an explicit zone, bypassing classification.
fn biz(id: u32, lat: f64, lon: f64, zone: u16, registered: bool) -> Business {
    Business {
        id: BusinessId(id),
        name: format!("biz-{id}"),
        pos: Coordinate::new(lat, lon),
        zone: ZoneId(zone),
        registered,
    }
}

fn ids(v: &[u32]) -> Vec<BusinessId> {
    v.iter().copied().map(BusinessId).collect()
}

// ── Coverage analysis ─────────────────────────────────────────────────────────

#[cfg(test)]
mod analyzer {
    use super::*;
    use crate::{DEFAULT_COVERAGE_RADIUS_M, uncovered, uncovered_count};

    // 0.01 degrees of latitude ≈ 1.1 km at any longitude.

    #[test]
    fn no_anchors_counts_whole_zone() {
        let set: Vec<Business> =
            (0..5).map(|i| biz(i, 6.50 + 0.001 * i as f64, 3.35, 0, false)).collect();
        assert_eq!(uncovered(&set, ZoneId(0), DEFAULT_COVERAGE_RADIUS_M), ids(&[0, 1, 2, 3, 4]));
        // The radius is irrelevant when there is nothing to cover with.
        assert_eq!(uncovered_count(&set, ZoneId(0), 0.0), 5);
    }

    #[test]
    fn single_anchor_covers_zone() {
        let set = vec![
            biz(1, 6.50, 3.35, 0, true),
            biz(2, 6.51, 3.35, 0, false), // ~1.1 km out
            biz(3, 6.50, 3.36, 0, false), // ~1.1 km out
        ];
        assert!(uncovered(&set, ZoneId(0), DEFAULT_COVERAGE_RADIUS_M).is_empty());
    }

    #[test]
    fn far_record_is_uncovered() {
        let set = vec![
            biz(1, 6.50, 3.35, 0, true),
            biz(2, 6.51, 3.35, 0, false), // ~1.1 km
            biz(3, 6.54, 3.35, 0, false), // ~4.4 km
        ];
        assert_eq!(uncovered(&set, ZoneId(0), DEFAULT_COVERAGE_RADIUS_M), ids(&[3]));
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let anchor = biz(1, 6.50, 3.35, 0, true);
        let target = biz(2, 6.52, 3.35, 0, false);
        let d = anchor.pos.distance_m(target.pos);
        let set = vec![anchor, target];

        assert!(uncovered(&set, ZoneId(0), d).is_empty());
        assert_eq!(uncovered(&set, ZoneId(0), d - 0.001), ids(&[2]));
    }

    #[test]
    fn anchors_cover_themselves() {
        let set = vec![biz(1, 6.50, 3.35, 0, true)];
        assert!(uncovered(&set, ZoneId(0), DEFAULT_COVERAGE_RADIUS_M).is_empty());
    }

    #[test]
    fn anchors_in_other_zones_never_cover() {
        // Same coordinates, wrong zone: no coverage crosses zone lines.
        let set = vec![
            biz(1, 6.50, 3.35, 1, true),
            biz(2, 6.50, 3.35, 0, false),
        ];
        assert_eq!(uncovered(&set, ZoneId(0), DEFAULT_COVERAGE_RADIUS_M), ids(&[2]));
    }

    #[test]
    fn out_of_zone_records_not_reported() {
        let set = vec![
            biz(1, 6.50, 3.35, 0, false),
            biz(2, 6.90, 3.35, 2, false),
        ];
        assert_eq!(uncovered(&set, ZoneId(0), DEFAULT_COVERAGE_RADIUS_M), ids(&[1]));
    }

    #[test]
    fn duplicate_id_counted_once() {
        // Two far records share an id: one entry in the result.
        let set = vec![
            biz(1, 6.50, 3.35, 0, true),
            biz(7, 6.54, 3.35, 0, false),
            biz(7, 6.55, 3.35, 0, false),
        ];
        assert_eq!(uncovered(&set, ZoneId(0), DEFAULT_COVERAGE_RADIUS_M), ids(&[7]));
    }

    #[test]
    fn duplicate_of_covered_id_skipped() {
        // First occurrence is covered; the far second occurrence must not
        // resurrect the id.
        let set = vec![
            biz(1, 6.50, 3.35, 0, true),
            biz(7, 6.505, 3.35, 0, false),
            biz(7, 6.55, 3.35, 0, false),
        ];
        assert!(uncovered(&set, ZoneId(0), DEFAULT_COVERAGE_RADIUS_M).is_empty());
    }

    #[test]
    fn negative_radius_covers_nothing() {
        let set = vec![
            biz(1, 6.50, 3.35, 0, true),
            biz(2, 6.50, 3.35, 0, false),
        ];
        assert_eq!(uncovered(&set, ZoneId(0), -1.0), ids(&[1, 2]));
    }

    #[test]
    fn zero_radius_covers_coincident_only() {
        let set = vec![
            biz(1, 6.50, 3.35, 0, true),
            biz(2, 6.50, 3.35, 0, false),
            biz(3, 6.5001, 3.35, 0, false), // ~11 m out
        ];
        assert_eq!(uncovered(&set, ZoneId(0), 0.0), ids(&[3]));
    }

    #[test]
    fn result_keeps_working_set_order() {
        let set = vec![
            biz(9, 6.50, 3.35, 0, false),
            biz(2, 6.51, 3.35, 0, false),
            biz(5, 6.52, 3.35, 0, false),
        ];
        assert_eq!(uncovered(&set, ZoneId(0), DEFAULT_COVERAGE_RADIUS_M), ids(&[9, 2, 5]));
    }

    #[test]
    fn default_radius_is_three_km() {
        assert_eq!(DEFAULT_COVERAGE_RADIUS_M, 3_000.0);
    }
}

// ── Registration stats ────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use super::*;
    use crate::RegistrationStats;

    #[test]
    fn tallies_with_zone_breakdown() {
        let set = vec![
            biz(1, 6.50, 3.35, 0, true),
            biz(2, 6.51, 3.35, 0, true),
            biz(3, 6.52, 3.35, 0, false),
            biz(4, 6.43, 3.42, 1, true),
            biz(5, 6.44, 3.42, 1, false),
            biz(6, 6.45, 3.42, 1, false),
        ];
        let s = RegistrationStats::for_zone(&set, ZoneId(0));
        assert_eq!(s.total, 6);
        assert_eq!(s.registered, 3);
        assert_eq!(s.zone_total, 3);
        assert_eq!(s.zone_registered, 2);
        assert_eq!(s.total_pct(), 50);
        assert_eq!(s.zone_pct(), 67);
    }

    #[test]
    fn percentages_round_to_whole() {
        let set = vec![
            biz(1, 6.50, 3.35, 0, true),
            biz(2, 6.51, 3.35, 0, false),
            biz(3, 6.52, 3.35, 0, false),
        ];
        let s = RegistrationStats::for_zone(&set, ZoneId(0));
        assert_eq!(s.total_pct(), 33);
        assert_eq!(s.zone_pct(), 33);
    }

    #[test]
    fn empty_set_is_all_zero() {
        let s = RegistrationStats::for_zone(&[], ZoneId(0));
        assert_eq!(s, RegistrationStats::default());
        assert_eq!(s.total_pct(), 0);
        assert_eq!(s.zone_pct(), 0);
    }

    #[test]
    fn empty_zone_has_zero_zone_pct() {
        let set = vec![biz(1, 6.50, 3.35, 0, true)];
        let s = RegistrationStats::for_zone(&set, ZoneId(3));
        assert_eq!(s.total_pct(), 100);
        assert_eq!(s.zone_total, 0);
        assert_eq!(s.zone_pct(), 0);
    }

    #[test]
    fn overall_skips_the_zone_breakdown() {
        let set = vec![
            biz(1, 6.50, 3.35, 0, true),
            biz(2, 6.51, 3.35, 1, false),
        ];
        let s = RegistrationStats::overall(&set);
        assert_eq!(s.total, 2);
        assert_eq!(s.registered, 1);
        assert_eq!(s.zone_total, 0);
        assert_eq!(s.total_pct(), 50);
    }
}
