//! Route planning trait and the greedy nearest-neighbour default.
//!
//! # Pluggability
//!
//! Callers plan through the [`RoutePlanner`] trait, so the heuristic can be
//! swapped (2-opt improvement, a solver for small pools) without touching
//! call sites.  The default [`NearestNeighborPlanner`] matches what field
//! teams expect: "go to the closest place you haven't visited yet".

use zm_core::{Business, BusinessId};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of planning: stop ids in visiting order, with per-leg and
/// total distances.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Stops in visiting order, the start first.  No id appears twice.
    pub stops: Vec<BusinessId>,
    /// `leg_m[i]` is the distance in metres from stop `i-1` to stop `i`;
    /// `leg_m[0]` is 0.  Always the same length as `stops`.
    pub leg_m: Vec<f64>,
    /// Sum of `leg_m`.
    pub total_m: f64,
}

impl Route {
    /// Route with no stops at all, for when no start business is available.
    pub fn empty() -> Self {
        Self {
            stops:   Vec::new(),
            leg_m:   Vec::new(),
            total_m: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of stops, start included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Stops paired with the distance travelled to reach each.
    pub fn legs(&self) -> impl Iterator<Item = (BusinessId, f64)> + '_ {
        self.stops.iter().copied().zip(self.leg_m.iter().copied())
    }
}

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Pluggable planning strategy.
///
/// `target_stops` counts the start itself; values below 1 are treated as 1.
/// Implementations must return a route that begins with `start.id`, visits
/// no id twice, and has at most `target_stops` stops (fewer when the pool
/// runs out).
///
/// Implementations are `Send + Sync` so one planner instance can serve
/// concurrent sessions.
pub trait RoutePlanner: Send + Sync {
    fn plan(&self, start: &Business, pool: &[Business], target_stops: usize) -> Route;
}

// ── NearestNeighborPlanner ────────────────────────────────────────────────────

/// Greedy nearest-neighbour construction.
///
/// From the current position, append the closest not-yet-visited candidate
/// until the target stop count is reached or the pool is exhausted.  Ties go
/// to the earlier pool entry, so planning is deterministic for a fixed pool
/// order.  The result is an open path (no return to the start) and an
/// approximation with no optimality bound.
pub struct NearestNeighborPlanner;

impl RoutePlanner for NearestNeighborPlanner {
    fn plan(&self, start: &Business, pool: &[Business], target_stops: usize) -> Route {
        let target_stops = target_stops.max(1);

        let mut route = Route {
            stops:   vec![start.id],
            leg_m:   vec![0.0],
            total_m: 0.0,
        };

        // Pool entries sharing the start id are the start under another
        // reference; visiting them would repeat the first stop.
        let mut remaining: Vec<&Business> =
            pool.iter().filter(|b| b.id != start.id).collect();

        let mut current = start.pos;

        while route.stops.len() < target_stops && !remaining.is_empty() {
            let mut best = 0;
            let mut best_d = f64::INFINITY;
            for (i, b) in remaining.iter().enumerate() {
                let d = current.distance_m(b.pos);
                // Strict `<` keeps the earliest candidate on ties.
                if d < best_d {
                    best = i;
                    best_d = d;
                }
            }

            // Order-preserving removal: later ties must still resolve by
            // the original pool order.
            let next = remaining.remove(best);
            route.stops.push(next.id);
            route.leg_m.push(best_d);
            route.total_m += best_d;
            current = next.pos;
        }

        route
    }
}
