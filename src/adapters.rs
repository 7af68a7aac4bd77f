//! Thin streamable wrappers over standard containers.
//!
//! Each adapter dereferences to the wrapped container and adds the two
//! pipeline capabilities: a fresh cursor positioned at the start, and a
//! stream pre-wired to one. Both hand out *owning snapshots* — the
//! returned cursor or pipeline replays the contents as of the call and is
//! unaffected by later mutation of the container. To borrow instead of
//! snapshot, use [`Stream::from_slice`] directly.

use std::collections::{BTreeSet, VecDeque};
use std::ops::{Deref, DerefMut};

use crate::cursor::SnapshotCursor;
use crate::stream::Stream;

/// A container whose contents can feed a pipeline.
pub trait Streamable<T: Clone + 'static> {
    /// A fresh cursor over a snapshot of the contents, positioned at the
    /// first element.
    fn cursor(&self) -> SnapshotCursor<T>;

    /// A pipeline pre-wired to a fresh cursor.
    fn stream(&self) -> Stream<'static, T, T>;
}

/// Streamable vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SVec<T>(pub Vec<T>);

impl<T> Deref for SVec<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for SVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for SVec<T> {
    fn from(container: Vec<T>) -> Self {
        SVec(container)
    }
}

impl<T: Clone + 'static> Streamable<T> for SVec<T> {
    fn cursor(&self) -> SnapshotCursor<T> {
        SnapshotCursor::new(self.0.clone())
    }

    fn stream(&self) -> Stream<'static, T, T> {
        Stream::from_cursor(self.cursor())
    }
}

/// Streamable double-ended queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SDeque<T>(pub VecDeque<T>);

impl<T> Deref for SDeque<T> {
    type Target = VecDeque<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for SDeque<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<VecDeque<T>> for SDeque<T> {
    fn from(container: VecDeque<T>) -> Self {
        SDeque(container)
    }
}

impl<T: Clone + 'static> Streamable<T> for SDeque<T> {
    fn cursor(&self) -> SnapshotCursor<T> {
        SnapshotCursor::new(self.0.iter().cloned().collect())
    }

    fn stream(&self) -> Stream<'static, T, T> {
        Stream::from_cursor(self.cursor())
    }
}

/// Streamable ordered set; streams its elements in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SSet<T>(pub BTreeSet<T>);

impl<T> Deref for SSet<T> {
    type Target = BTreeSet<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for SSet<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<BTreeSet<T>> for SSet<T> {
    fn from(container: BTreeSet<T>) -> Self {
        SSet(container)
    }
}

impl<T: Clone + 'static> Streamable<T> for SSet<T> {
    fn cursor(&self) -> SnapshotCursor<T> {
        SnapshotCursor::new(self.0.iter().cloned().collect())
    }

    fn stream(&self) -> Stream<'static, T, T> {
        Stream::from_cursor(self.cursor())
    }
}
