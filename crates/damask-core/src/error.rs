//! Error types for the dialect contract.

use thiserror::Error;

/// Errors produced while rendering dialect SQL.
#[derive(Debug, Error)]
pub enum DialectError {
    /// A field's runtime kind has no column-type mapping.
    ///
    /// This is a schema-definition bug surfaced during the host's
    /// schema-generation pass, not a steady-state runtime condition.
    #[error("no column type for field '{field}' of kind {kind}")]
    UnsupportedFieldType {
        /// Name of the offending field.
        field: String,
        /// The unmappable runtime kind.
        kind: String,
    },

    /// A limit value could not be parsed as an integer.
    #[error("invalid limit value: {0}")]
    InvalidLimit(String),

    /// An offset value could not be parsed as an integer.
    #[error("invalid offset value: {0}")]
    InvalidOffset(String),

    /// An identifier contains characters outside the engine's grammar.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
