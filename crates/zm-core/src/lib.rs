//! `zm-core` — foundational types for the `zonemap` registration toolkit.
//!
//! This crate is a dependency of every other `zm-*` crate.  It intentionally
//! has no `zm-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `BusinessId`, `ZoneId`                                |
//! | [`geo`]      | `Coordinate`, haversine distance                      |
//! | [`business`] | `Business` record                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod business;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use business::Business;
pub use geo::Coordinate;
pub use ids::{BusinessId, ZoneId};
