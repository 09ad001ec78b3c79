//! Error types for dialect resolution.

use thiserror::Error;

/// Errors raised while selecting a dialect.
///
/// SQL generation itself never fails; only configuration can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    /// A dialect was requested by a name outside the supported set.
    #[error("unknown SQL dialect '{name}' (expected one of: mysql, postgresql, sqlite)")]
    UnknownDialect {
        /// The name as given by the caller.
        name: String,
    },
}

/// Result type alias for dialect resolution.
pub type Result<T> = std::result::Result<T, DialectError>;
