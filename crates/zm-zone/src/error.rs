use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("zone table parse error: {0}")]
    Parse(String),

    #[error("zone {name:?} has an invalid centroid ({lat}, {lon})")]
    InvalidCentroid { name: String, lat: f64, lon: f64 },

    #[error("duplicate zone name {0:?}")]
    DuplicateZone(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ZoneResult<T> = Result<T, ZoneError>;
