//! `zm-route` — visiting-order planning for field registration runs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`planner`]  | `Route`, `RoutePlanner`, `NearestNeighborPlanner`   |
//! | [`progress`] | `RouteProgress`                                     |

pub mod planner;
pub mod progress;


pub use planner::{NearestNeighborPlanner, Route, RoutePlanner};
pub use progress::RouteProgress;
