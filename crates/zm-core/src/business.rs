//! The business record shared by every `zm-*` crate.

use crate::{BusinessId, Coordinate, ZoneId};

/// One business in a working set.
///
/// Records are caller-owned plain data: uploads produce them, maps and
/// tables render them, and the `zm-*` algorithms only read coordinates,
/// zone, and registration state.  Zone labels are written back by
/// `ZoneSet::assign` in `zm-zone`; nothing here is computed at
/// construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Business {
    pub id: BusinessId,
    /// Display name, carried for tables and route narration.  Never read by
    /// the algorithms.
    pub name: String,
    pub pos: Coordinate,
    /// `ZoneId::UNKNOWN` until classified, and again after classification
    /// when the coordinates are invalid.
    pub zone: ZoneId,
    /// A registered business anchors coverage for its neighbourhood.
    pub registered: bool,
}

impl Business {
    /// Unclassified, unregistered record.
    pub fn new(id: BusinessId, name: impl Into<String>, pos: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            pos,
            zone: ZoneId::UNKNOWN,
            registered: false,
        }
    }
}
