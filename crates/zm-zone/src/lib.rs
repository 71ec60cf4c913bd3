//! `zm-zone` — zone definitions, classification, and the zone-table loader.
//!
//! # Crate layout
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`set`]    | `ZoneDef`, `ZoneSet`, classification          |
//! | [`loader`] | `load_zones_csv`, `load_zones_reader`         |
//! | [`error`]  | `ZoneError`, `ZoneResult<T>`                  |
//!
//! # Classification contract (summary)
//!
//! A coordinate is assigned to the configured zone whose centroid is nearest
//! by great-circle distance.  Invalid coordinates (non-finite or outside
//! WGS-84 range) classify as `ZoneId::UNKNOWN` without touching the distance
//! formula.  Equidistant centroids resolve to the earlier table row, so
//! classification is deterministic for a fixed table.

pub mod error;
pub mod loader;
pub mod set;


pub use error::{ZoneError, ZoneResult};
pub use loader::{load_zones_csv, load_zones_reader};
pub use set::{UNKNOWN_ZONE_NAME, ZoneDef, ZoneSet};
