//! Error types for the DM adapter.

use damask_core::DialectError;
use thiserror::Error;

/// Errors from DM dialect operations.
#[derive(Debug, Error)]
pub enum DmError {
    /// Rendering or validation error from the dialect contract.
    #[error(transparent)]
    Dialect(#[from] DialectError),

    /// Database error from sqlx, surfaced unchanged.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type alias for DM adapter operations.
pub type Result<T> = std::result::Result<T, DmError>;
