use thiserror::Error;

use crate::binning::BinningError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("wavelength must be a positive finite number, got {0}")]
    InvalidWavelength(f64),

    #[error("Invalid binning: {0}")]
    Binning(#[from] BinningError),
}
