//! CSV zone-table loader.
//!
//! # CSV format
//!
//! One row per zone.  Row order is preserved and doubles as the
//! classification tie-break order.
//!
//! ```csv
//! zone,region,lat,lon
//! A,Ikeja,6.6018,3.3515
//! B,Surulere,6.5003,3.3545
//! ```
//!
//! Centroids must be finite and in WGS-84 range; zone names must be unique.
//! Both checks live here rather than in `ZoneSet::new`: tables built in code
//! are trusted, tables crossing the config boundary are not.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use zm_core::Coordinate;

use crate::ZoneError;
use crate::set::{ZoneDef, ZoneSet};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ZoneRecord {
    zone:   String,
    region: String,
    lat:    f64,
    lon:    f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ZoneSet`] from a CSV file, preserving row order.
pub fn load_zones_csv(path: &Path) -> Result<ZoneSet, ZoneError> {
    let file = std::fs::File::open(path).map_err(ZoneError::Io)?;
    load_zones_reader(file)
}

/// Like [`load_zones_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) and for tables embedded in
/// a binary.
pub fn load_zones_reader<R: Read>(reader: R) -> Result<ZoneSet, ZoneError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut defs: Vec<ZoneDef> = Vec::new();

    for result in csv_reader.deserialize::<ZoneRecord>() {
        let row = result.map_err(|e| ZoneError::Parse(e.to_string()))?;

        let centroid = Coordinate::new(row.lat, row.lon);
        if !centroid.is_valid() {
            return Err(ZoneError::InvalidCentroid {
                name: row.zone,
                lat:  row.lat,
                lon:  row.lon,
            });
        }
        if defs.iter().any(|d| d.name == row.zone) {
            return Err(ZoneError::DuplicateZone(row.zone));
        }

        defs.push(ZoneDef {
            name: row.zone,
            region: row.region,
            centroid,
        });
    }

    Ok(ZoneSet::new(defs))
}
