//! Zone table and nearest-centroid classification.

use zm_core::{Business, Coordinate, ZoneId};

/// Zone name reported for `ZoneId::UNKNOWN` and any id outside the table.
pub const UNKNOWN_ZONE_NAME: &str = "unknown";

/// One configured zone: a short label, the local-government region it
/// serves, and the centroid used for nearest-distance classification.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneDef {
    pub name: String,
    pub region: String,
    pub centroid: Coordinate,
}

/// An ordered zone table.
///
/// Order is the tie-break rule: a coordinate equidistant from two centroids
/// goes to the earlier definition.  Callers control the order by controlling
/// the table (the CSV loader preserves row order).
///
/// `ZoneSet::new` trusts its input; validation (finite centroids, unique
/// names) happens at the configuration boundary in [`crate::loader`].
#[derive(Clone, Debug, Default)]
pub struct ZoneSet {
    defs: Vec<ZoneDef>,
}

impl ZoneSet {
    /// Construct a table from `defs`, preserving their order.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `defs` holds more than 65,535 definitions,
    /// the widest table a `ZoneId` can index.
    pub fn new(defs: Vec<ZoneDef>) -> Self {
        debug_assert!(
            defs.len() <= u16::MAX as usize,
            "zone table exceeds ZoneId's index range"
        );
        Self { defs }
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn defs(&self) -> &[ZoneDef] {
        &self.defs
    }

    /// Definitions paired with their ids, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, &ZoneDef)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, d)| (ZoneId(i as u16), d))
    }

    /// The definition behind `id`, if it names a configured zone.
    pub fn get(&self, id: ZoneId) -> Option<&ZoneDef> {
        self.defs.get(id.index())
    }

    /// Display name for `id`.  The sentinel and out-of-table ids both render
    /// as [`UNKNOWN_ZONE_NAME`].
    pub fn name_of(&self, id: ZoneId) -> &str {
        self.get(id).map_or(UNKNOWN_ZONE_NAME, |d| d.name.as_str())
    }

    /// First definition with the given name, if any.
    pub fn id_of(&self, name: &str) -> Option<ZoneId> {
        self.defs
            .iter()
            .position(|d| d.name == name)
            .map(|i| ZoneId(i as u16))
    }

    /// Assign `pos` to the zone with the nearest centroid.
    ///
    /// Returns [`ZoneId::UNKNOWN`] when the coordinate fails
    /// `Coordinate::is_valid` or when the table is empty.  Ties go to the
    /// earlier definition.
    pub fn classify(&self, pos: Coordinate) -> ZoneId {
        if !pos.is_valid() {
            return ZoneId::UNKNOWN;
        }

        let mut best = ZoneId::UNKNOWN;
        let mut best_d = f64::INFINITY;
        for (i, def) in self.defs.iter().enumerate() {
            let d = pos.distance_m(def.centroid);
            // Strict `<` keeps the earliest definition on ties, and a NaN
            // distance from a malformed centroid can never become the
            // minimum.  (`Iterator::min_by` keeps the *last* minimum, so a
            // combinator here would silently flip the tie-break rule.)
            if d < best_d {
                best = ZoneId(i as u16);
                best_d = d;
            }
        }
        best
    }

    /// Like [`ZoneSet::classify`] but resolves the display name, for
    /// callers that only want the label.
    pub fn classify_name(&self, pos: Coordinate) -> &str {
        self.name_of(self.classify(pos))
    }

    /// Classify every record in place: the write-back after an upload.
    ///
    /// Records whose coordinates fail validation end up in
    /// `ZoneId::UNKNOWN`, same as a single `classify` call would report.
    pub fn assign(&self, businesses: &mut [Business]) {
        for b in businesses.iter_mut() {
            b.zone = self.classify(b.pos);
        }
    }
}
