//! The push pipeline for unbounded sources.

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

use crate::collector::Collector;
use crate::cursor::{Cursor, SliceCursor, SnapshotCursor};
use crate::error::StreamResult;

use super::chain::{
    FilterStage, FixedWindowStage, FlatMapStage, LimitStage, MapStage, SkipStage,
    SlidingWindowStage, SourceStage, StageChain,
};

/// A push-driven pipeline over a source of `B` elements, currently
/// emitting elements of type `T`.
///
/// A `UbStream` value describes a chain of typed stages plus a shared
/// handle to the source. Deriving a new pipeline wraps the chain without
/// mutating the parent, so several pipelines can branch from one prefix
/// and share the source safely: every terminal call assembles a fresh
/// sink chain (fresh counters and window buffers), resets the shared
/// source, and pushes every element through — the value itself stays
/// reusable afterwards.
pub struct UbStream<'s, T, B = T> {
    source: Rc<RefCell<dyn Cursor<B> + 's>>,
    chain: Rc<dyn StageChain<T, B> + 's>,
}

impl<'s, B: 's> UbStream<'s, B, B> {
    /// Pipeline over an owned sequence.
    pub fn new(items: Vec<B>) -> Self
    where
        B: Clone,
    {
        Self::from_cursor(SnapshotCursor::new(items))
    }

    /// Pipeline borrowing caller-owned storage.
    pub fn from_slice(items: &'s [B]) -> Self
    where
        B: Clone,
    {
        Self::from_cursor(SliceCursor::new(items))
    }

    /// Pipeline over any cursor implementation.
    pub fn from_cursor(cursor: impl Cursor<B> + 's) -> Self {
        UbStream {
            source: Rc::new(RefCell::new(cursor)),
            chain: Rc::new(SourceStage),
        }
    }
}

impl<'s, T: 's, B: 's> UbStream<'s, T, B> {
    fn derive<E>(&self, chain: Rc<dyn StageChain<E, B> + 's>) -> UbStream<'s, E, B> {
        UbStream {
            source: Rc::clone(&self.source),
            chain,
        }
    }

    /// Transform every element through `mapper`.
    pub fn map<E: 's, F>(&self, mapper: F) -> UbStream<'s, E, B>
    where
        F: Fn(T) -> E + 's,
    {
        self.derive(Rc::new(MapStage {
            prev: Rc::clone(&self.chain),
            mapper,
        }))
    }

    /// Replace each container-valued element with its items, mapped
    /// through `mapper` and forwarded individually.
    pub fn flatten<E: 's, F>(&self, mapper: F) -> UbStream<'s, E, B>
    where
        T: IntoIterator,
        F: Fn(T::Item) -> E + 's,
    {
        self.derive(Rc::new(FlatMapStage {
            prev: Rc::clone(&self.chain),
            mapper,
        }))
    }

    /// Keep only the elements satisfying `predicate`.
    pub fn filter<P>(&self, predicate: P) -> UbStream<'s, T, B>
    where
        P: Fn(&T) -> bool + 's,
    {
        self.derive(Rc::new(FilterStage {
            prev: Rc::clone(&self.chain),
            predicate,
        }))
    }

    /// Forward at most `count` elements, then drop the rest.
    pub fn limit(&self, count: usize) -> UbStream<'s, T, B> {
        self.derive(Rc::new(LimitStage {
            prev: Rc::clone(&self.chain),
            limit: count,
        }))
    }

    /// Drop the first `count` elements.
    pub fn skip(&self, count: usize) -> UbStream<'s, T, B> {
        self.derive(Rc::new(SkipStage {
            prev: Rc::clone(&self.chain),
            count,
        }))
    }

    /// Overlapping windows of `window_size` advancing one element at a
    /// time, emitted as owned snapshots. A size of zero emits nothing.
    pub fn sliding(&self, window_size: usize) -> UbStream<'s, Vec<T>, B>
    where
        T: Clone,
    {
        self.derive(Rc::new(SlidingWindowStage {
            prev: Rc::clone(&self.chain),
            size: window_size,
        }))
    }

    /// Non-overlapping (tumbling) windows of `window_size`; a trailing
    /// partial window is dropped.
    pub fn fixed(&self, window_size: usize) -> UbStream<'s, Vec<T>, B> {
        self.derive(Rc::new(FixedWindowStage {
            prev: Rc::clone(&self.chain),
            size: window_size,
        }))
    }

    /// Drive the pipeline: assemble a fresh sink chain ending in
    /// `consumer`, reset the shared source, and push every element
    /// through it.
    pub fn for_each<F>(&self, consumer: F) -> StreamResult<()>
    where
        F: FnMut(T),
    {
        let mut consumer = consumer;
        let mut feed = self.chain.attach(Box::new(move |value| consumer(value)));
        let mut source = self.source.borrow_mut();
        source.reset();
        let mut fed = 0usize;
        while source.has_next() {
            feed(source.next()?);
            fed += 1;
        }
        trace!("push pipeline drained {fed} source element(s)");
        Ok(())
    }

    /// Drive the pipeline into a vector.
    pub fn to_vec(&self) -> StreamResult<Vec<T>> {
        let mut out = Vec::new();
        self.for_each(|value| out.push(value))?;
        Ok(out)
    }

    /// First emitted element, `None` when the pipeline emits nothing.
    pub fn head(&self) -> StreamResult<Option<T>> {
        Ok(self.to_vec()?.into_iter().next())
    }

    /// Last emitted element, `None` when the pipeline emits nothing.
    pub fn tail(&self) -> StreamResult<Option<T>> {
        Ok(self.to_vec()?.into_iter().last())
    }

    /// First emitted element satisfying `predicate`, if any.
    pub fn find<P>(&self, predicate: P) -> StreamResult<Option<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self
            .to_vec()?
            .into_iter()
            .find(|element| predicate(element)))
    }

    /// Largest emitted element by natural order.
    pub fn max(&self) -> StreamResult<Option<T>>
    where
        T: Ord,
    {
        Ok(self.to_vec()?.into_iter().max())
    }

    /// Smallest emitted element by natural order.
    pub fn min(&self) -> StreamResult<Option<T>>
    where
        T: Ord,
    {
        Ok(self.to_vec()?.into_iter().min())
    }

    /// Whether every emitted element satisfies `predicate`; `true` when
    /// nothing is emitted.
    pub fn all_match<P>(&self, predicate: P) -> StreamResult<bool>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.to_vec()?.iter().all(|element| predicate(element)))
    }

    /// Whether any emitted element satisfies `predicate`.
    pub fn any_match<P>(&self, predicate: P) -> StreamResult<bool>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.to_vec()?.iter().any(|element| predicate(element)))
    }

    /// Whether no emitted element satisfies `predicate`.
    pub fn none_match<P>(&self, predicate: P) -> StreamResult<bool>
    where
        P: Fn(&T) -> bool,
    {
        Ok(!self.any_match(predicate)?)
    }

    /// Drive the pipeline, then run `collector`'s three-phase reduction
    /// over everything it emitted.
    pub fn collect<A, R>(&self, collector: &Collector<T, A, R>) -> StreamResult<R> {
        Ok(collector.apply(self.to_vec()?))
    }
}
