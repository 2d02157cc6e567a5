//! Error types for scheduler operations

use thiserror::Error;

/// Errors from nudge responses and worker operation
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// A response action delegated to the roster and the roster refused
    #[error(transparent)]
    Store(#[from] tend_store::StoreError),

    /// A nudge referenced a friend no longer in the roster
    #[error("Nudge target no longer exists: {0}")]
    StaleNudge(tend_domain::FriendId),
}
