//! Error types for export/import operations

use thiserror::Error;

/// Errors from the portability layer
///
/// Version and validation failures abort the import atomically; no
/// partial merge ever reaches the store.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The export's major version doesn't match this importer
    #[error("Unsupported export version '{found}' (supported major version: {supported})")]
    VersionMismatch {
        /// Version string found in the export
        found: String,
        /// Major version this importer supports
        supported: u32,
    },

    /// The export failed structural validation
    #[error("Invalid export data: {0}")]
    Validation(String),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
