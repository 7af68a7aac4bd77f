//! Pull-based cursor contract over bounded in-memory sources.
//!
//! A [`Cursor`] is the minimal traversal capability every pipeline source
//! must provide: advance-and-cache (`has_next`), retrieve (`next`), rewind
//! (`reset`), and drain (`for_each_remaining`). Two concrete cursors cover
//! the two ownership modes: [`SliceCursor`] borrows caller-owned storage,
//! [`SnapshotCursor`] owns a private copy taken at construction.

mod slice;
mod snapshot;

pub use slice::SliceCursor;
pub use snapshot::SnapshotCursor;

use crate::error::StreamResult;

/// A resettable pull cursor over a sequence of elements.
///
/// `has_next` uses pre-fetch semantics: it reports whether an element is
/// available and, as a side effect, caches that element and advances the
/// position. Callers must strictly alternate `has_next`/`next`; calling
/// `has_next` twice without an intervening `next` advances twice and
/// overwrites the cached element.
pub trait Cursor<T> {
    /// Check whether the source has a further element, caching it for the
    /// following `next` call.
    fn has_next(&mut self) -> bool;

    /// Return the element cached by the most recent successful `has_next`.
    ///
    /// Fails with [`crate::StreamError::EmptyIteratorAccess`] when no
    /// cached element exists — `has_next` was never called, returned
    /// `false`, or its element was already taken.
    fn next(&mut self) -> StreamResult<T>;

    /// Reposition the cursor to the first element without changing the
    /// underlying data; re-enables a full traversal.
    fn reset(&mut self);

    /// Drain every remaining element through `consumer`. Terminal: does
    /// not reset first, and leaves the cursor exhausted.
    fn for_each_remaining(&mut self, consumer: &mut dyn FnMut(T)) {
        while self.has_next() {
            match self.next() {
                Ok(element) => consumer(element),
                Err(_) => break,
            }
        }
    }
}

/// Drain the remainder of a cursor into a vector.
pub(crate) fn drain<T>(cursor: &mut (dyn Cursor<T> + '_)) -> StreamResult<Vec<T>> {
    let mut out = Vec::new();
    while cursor.has_next() {
        out.push(cursor.next()?);
    }
    Ok(out)
}
