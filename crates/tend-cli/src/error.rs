//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Roster error (capacity, lookups)
    #[error(transparent)]
    Store(#[from] tend_store::StoreError),

    /// Durable storage error
    #[error(transparent)]
    Persistence(#[from] tend_store::PersistenceError),

    /// Scheduler error
    #[error(transparent)]
    Scheduler(#[from] tend_scheduler::SchedulerError),

    /// Export/import error
    #[error(transparent)]
    Exchange(#[from] tend_exchange::ExchangeError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
