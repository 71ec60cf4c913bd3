//! Registration tallies for the dashboard panel.

use zm_core::{Business, ZoneId};

/// Registration counts over one working set, with a breakdown for the
/// active zone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistrationStats {
    pub total:           usize,
    pub registered:      usize,
    pub zone_total:      usize,
    pub zone_registered: usize,
}

impl RegistrationStats {
    /// Tally `businesses` with no zone breakdown (zone fields stay 0).
    pub fn overall(businesses: &[Business]) -> Self {
        Self {
            total: businesses.len(),
            registered: businesses.iter().filter(|b| b.registered).count(),
            zone_total: 0,
            zone_registered: 0,
        }
    }

    /// Tally `businesses`, taking the zone breakdown over `zone`.
    pub fn for_zone(businesses: &[Business], zone: ZoneId) -> Self {
        let mut stats = Self::default();
        for b in businesses {
            stats.total += 1;
            if b.registered {
                stats.registered += 1;
            }
            if b.zone == zone {
                stats.zone_total += 1;
                if b.registered {
                    stats.zone_registered += 1;
                }
            }
        }
        stats
    }

    /// Registered share of the whole set, rounded to a whole percent.
    /// 0 for an empty set.
    pub fn total_pct(&self) -> u32 {
        pct(self.registered, self.total)
    }

    /// Registered share of the zone, rounded to a whole percent.  0 for an
    /// empty zone.
    pub fn zone_pct(&self) -> u32 {
        pct(self.zone_registered, self.zone_total)
    }
}

fn pct(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        (part as f64 / whole as f64 * 100.0).round() as u32
    }
}
