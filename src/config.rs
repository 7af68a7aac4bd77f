//! Configuration types for pipeline evaluation.

/// Buffer configuration for pull-pipeline materialization.
///
/// Each realization of a pull pipeline materializes stage results into
/// in-memory buffers; `initial_capacity` pre-sizes those buffers and
/// `max_capacity` bounds them. Exceeding the bound aborts the terminal
/// evaluation with [`crate::StreamError::CapacityExceeded`].
#[derive(Debug, Clone)]
pub struct BufferConfig {
    pub initial_capacity: usize,
    pub max_capacity: Option<usize>,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            max_capacity: None,
        }
    }
}

impl BufferConfig {
    /// An unbounded config that pre-sizes buffers to `capacity`.
    pub fn with_initial_capacity(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            ..Self::default()
        }
    }

    /// A config that refuses to materialize more than `limit` elements.
    pub fn bounded(limit: usize) -> Self {
        Self {
            initial_capacity: 0,
            max_capacity: Some(limit),
        }
    }
}
