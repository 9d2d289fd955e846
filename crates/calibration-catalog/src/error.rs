//! Catalog error types

use calibration_types::CalibrationError;
use thiserror::Error;

use crate::integrity::IntegrityReport;

/// Errors from loading configuration or assembling a catalog.
///
/// The accessor and guard operations themselves never fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Types(#[from] CalibrationError),

    #[error("catalog failed referential integrity: {0}")]
    Integrity(IntegrityReport),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
