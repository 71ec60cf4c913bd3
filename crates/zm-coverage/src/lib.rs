//! `zm-coverage` — which businesses can a registered anchor reach.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`analyzer`] | `uncovered`, `uncovered_count`, default radius    |
//! | [`stats`]    | `RegistrationStats`                               |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the duplicate-id guard.   |
//! | `serde`   | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod analyzer;
pub mod stats;

#[cfg(test)]
mod tests;

pub use analyzer::{DEFAULT_COVERAGE_RADIUS_M, uncovered, uncovered_count};
pub use stats::RegistrationStats;
