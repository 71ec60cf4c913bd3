//! Stop-by-stop progress through a planned route.

use zm_core::BusinessId;

use crate::Route;

/// Cursor over a route's stops, recording completions in visit order.
///
/// The cursor owns no business state: registering or verifying the business
/// behind the current stop stays with the caller, which typically flips
/// `Business::registered` and then calls
/// [`complete_current`](RouteProgress::complete_current).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteProgress {
    stops:     Vec<BusinessId>,
    completed: Vec<BusinessId>,
}

impl RouteProgress {
    /// Fresh cursor at the first stop of `route`.
    pub fn new(route: &Route) -> Self {
        Self {
            stops:     route.stops.clone(),
            completed: Vec::with_capacity(route.stops.len()),
        }
    }

    /// The stop awaiting completion; `None` once the route is done (or was
    /// empty to begin with).
    pub fn current(&self) -> Option<BusinessId> {
        self.stops.get(self.completed.len()).copied()
    }

    /// Record the current stop as completed and advance.
    ///
    /// Returns the completed id, or `None` when every stop is already
    /// completed.  Completions happen in visit order, so
    /// [`completed`](RouteProgress::completed) is always a prefix of the
    /// route's stops.
    pub fn complete_current(&mut self) -> Option<BusinessId> {
        let id = self.current()?;
        self.completed.push(id);
        Some(id)
    }

    /// Completed stop ids, in completion order.
    pub fn completed(&self) -> &[BusinessId] {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Stops not yet completed, the current one first.
    pub fn upcoming(&self) -> &[BusinessId] {
        &self.stops[self.completed.len()..]
    }

    /// Total number of stops in the underlying route.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// `true` once every stop is completed.  Trivially true for an empty
    /// route.
    pub fn is_done(&self) -> bool {
        self.completed.len() == self.stops.len()
    }
}
