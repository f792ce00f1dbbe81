//! Batch processing of sounding documents into Rayleigh reports.

use std::path::Path;

use thiserror::Error;

pub mod batch_process;
pub mod sounding;

pub use batch_process::{BatchProcessor, ProcessedSounding, RayleighReport};
pub use sounding::SoundingDocument;

use crate::binning::BinningError;
use crate::profile::ProfileError;
use crate::rayleigh::RayleighError;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid profile pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read a matched path: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("No sounding documents match '{0}'")]
    NoProfiles(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Rayleigh(#[from] RayleighError),

    #[error(transparent)]
    Binning(#[from] BinningError),
}

pub fn is_supported_file_type(path: &Path) -> bool {
    matches!(path.extension().and_then(|ext| ext.to_str()), Some("json"))
}

pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "profile".to_string())
}
