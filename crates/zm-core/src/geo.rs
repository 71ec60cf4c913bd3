//! Geographic coordinate type and great-circle distance.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Working sets are UI-scale
//! (hundreds to low thousands of records), so the memory savings of single
//! precision would buy nothing, and double precision keeps the haversine
//! terms well-conditioned at the sub-kilometre separations the coverage
//! radius compares against.

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` when both components are finite and in WGS-84 range
    /// (latitude −90..=90, longitude −180..=180).
    ///
    /// Zone classification sends anything that fails this gate to the
    /// "unknown" zone instead of feeding it to the distance formula.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Spherical-Earth approximation (mean radius 6 371 km), within ~0.5 %
    /// of the true geodesic distance, which is plenty for a 3 km coverage
    /// radius and street-level route legs.  Exactly symmetric: the formula
    /// sees only squared coordinate differences and the product of both
    /// latitude cosines.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
