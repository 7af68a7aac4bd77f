//! Error types for pipeline evaluation.

use thiserror::Error;

/// Main error type for pipeline operations.
///
/// Every terminal operation returns [`StreamResult`]; an error aborts the
/// evaluation in progress rather than yielding a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// A cursor element was requested without a preceding successful
    /// advance — `next` called before `has_next` returned `true`, or
    /// called twice for one advance.
    #[error("cursor element requested without a successful advance")]
    EmptyIteratorAccess,

    /// A materialization buffer outgrew the configured bound.
    #[error("materialized buffer exceeded the configured capacity of {limit} elements")]
    CapacityExceeded { limit: usize },
}

/// Result type for pipeline operations.
pub type StreamResult<T> = Result<T, StreamError>;
