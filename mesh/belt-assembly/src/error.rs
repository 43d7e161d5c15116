//! Error types for line assembly operations.

use thiserror::Error;

/// Result type for line assembly operations.
pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Errors that can occur during line assembly operations.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Line has no connections.
    #[error("Cannot perform operation on a line with no connections")]
    EmptyLine,

    /// Geometry was requested for a line still being drawn.
    #[error("Cannot batch geometry for an unfinished line")]
    LineNotFinished,

    /// Route resolution failed.
    #[error("Route resolution failed: {0}")]
    Route(#[from] belt_route::RouteError),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
