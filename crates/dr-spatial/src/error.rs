//! Spatial-subsystem error type.

use thiserror::Error;

use dr_core::GeoCoord;

/// Errors produced by `dr-spatial`.
///
/// `Io` and `Parse` are load failures: the map that produced them holds no
/// usable data.  `NotRoutable` and `NoRoute` are per-query outcomes.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("coordinate {coord} is not the start of any street segment")]
    NotRoutable { coord: GeoCoord },

    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoCoord, to: GeoCoord },

    #[error("map data line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpatialError {
    /// `true` if the error came from reading or parsing map data.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, SpatialError::Parse { .. } | SpatialError::Io(_))
    }
}

pub type SpatialResult<T> = Result<T, SpatialError>;
