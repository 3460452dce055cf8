use thiserror::Error;

use dr_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("routing failed: {0}")]
    Spatial(#[from] SpatialError),

    #[error("deliveries line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DeliveryResult<T> = Result<T, DeliveryError>;
