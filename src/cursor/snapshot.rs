use crate::error::{StreamError, StreamResult};

use super::Cursor;

/// Owning snapshot cursor.
///
/// Stores a private copy of the source sequence at construction, so its
/// lifetime is independent of the storage it was built from. `reset`
/// re-derives the position from the private copy, never from the original.
#[derive(Debug, Clone)]
pub struct SnapshotCursor<T> {
    data: Vec<T>,
    position: usize,
    fetched: Option<T>,
}

impl<T> SnapshotCursor<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            position: 0,
            fetched: None,
        }
    }

    /// Snapshot the remainder of another cursor. The source is left
    /// exhausted; the snapshot is positioned at its own first element.
    pub fn from_cursor(source: &mut (dyn Cursor<T> + '_)) -> StreamResult<Self> {
        Ok(Self::new(super::drain(source)?))
    }

    /// Number of elements in the snapshot.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Clone> Cursor<T> for SnapshotCursor<T> {
    fn has_next(&mut self) -> bool {
        let has_more = self.position < self.data.len();
        if has_more {
            self.fetched = Some(self.data[self.position].clone());
            self.position += 1;
        }
        has_more
    }

    fn next(&mut self) -> StreamResult<T> {
        self.fetched.take().ok_or(StreamError::EmptyIteratorAccess)
    }

    fn reset(&mut self) {
        self.position = 0;
        self.fetched = None;
    }
}
