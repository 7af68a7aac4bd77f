use crate::error::{StreamError, StreamResult};

use super::Cursor;

/// Borrowing cursor over caller-owned storage.
///
/// Holds `&[T]`; the borrow checker guarantees the storage outlives the
/// cursor. For a cursor whose lifetime is independent of the source, use
/// [`super::SnapshotCursor`].
#[derive(Debug, Clone)]
pub struct SliceCursor<'d, T> {
    data: &'d [T],
    position: usize,
    fetched: Option<T>,
}

impl<'d, T> SliceCursor<'d, T> {
    pub fn new(data: &'d [T]) -> Self {
        Self {
            data,
            position: 0,
            fetched: None,
        }
    }
}

impl<'d, T: Clone> Cursor<T> for SliceCursor<'d, T> {
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
