//! The pull pipeline: a replayable, lazily-composed stream over a bounded
//! cursor source.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;
use std::ops::Add;
use std::rc::Rc;

use itertools::Itertools;
use log::trace;

use crate::collector::Collector;
use crate::config::BufferConfig;
use crate::cursor::{Cursor, SliceCursor, SnapshotCursor};
use crate::error::{StreamError, StreamResult};

use super::stage::{self, Comparator, Stage};

/// Shared handle to a pipeline's source cursor. Sibling streams derived
/// from one source share the same mutable cursor; each terminal call
/// resets it before driving, so sequential terminal calls are safe while
/// interleaved ones are not.
pub type SharedCursor<'s, S> = Rc<RefCell<dyn Cursor<S> + 's>>;

type Realize<'s, S, T> =
    Rc<dyn Fn(&mut (dyn Cursor<S> + 's), &BufferConfig) -> StreamResult<Vec<T>> + 's>;

/// A sequence of elements supporting composable aggregate operations.
///
/// A `Stream` value only *describes* a pipeline: a source cursor plus the
/// transformations composed so far. Nothing touches the source until a
/// terminal operation runs; each terminal operation resets the source and
/// re-drives the whole chain, so the value stays reusable and two terminal
/// calls independently observe the full source.
///
/// Intermediate operations borrow `&self` and return a new `Stream`, so a
/// pipeline can be branched into siblings at any point. Each stage fully
/// materializes its input buffer before the next stage runs; the pipeline
/// is lazy in *when* it executes, not element-at-a-time fused.
pub struct Stream<'s, T, S = T> {
    source: SharedCursor<'s, S>,
    realize: Realize<'s, S, T>,
    stages: Vec<Stage<'s, T>>,
    config: BufferConfig,
}

fn drain_guarded<S>(
    source: &mut (dyn Cursor<S> + '_),
    config: &BufferConfig,
) -> StreamResult<Vec<S>> {
    let mut out = Vec::with_capacity(config.initial_capacity);
    while source.has_next() {
        out.push(source.next()?);
        if let Some(limit) = config.max_capacity {
            if out.len() > limit {
                return Err(StreamError::CapacityExceeded { limit });
            }
        }
    }
    Ok(out)
}

impl<'s, S: 's> Stream<'s, S, S> {
    /// Stream over an owned sequence.
    pub fn of(items: Vec<S>) -> Self
    where
        S: Clone,
    {
        Self::from_cursor(SnapshotCursor::new(items))
    }

    /// Stream borrowing caller-owned storage; the storage must outlive
    /// the stream.
    pub fn from_slice(items: &'s [S]) -> Self
    where
        S: Clone,
    {
        Self::from_cursor(SliceCursor::new(items))
    }

    /// Stream over any cursor implementation.
    pub fn from_cursor(cursor: impl Cursor<S> + 's) -> Self {
        Self::from_shared(Rc::new(RefCell::new(cursor)))
    }

    /// Stream over an already-shared cursor handle.
    pub fn from_shared(source: SharedCursor<'s, S>) -> Self {
        let realize: Realize<'s, S, S> = Rc::new(|source, config| drain_guarded(source, config));
        Stream {
            source,
            realize,
            stages: Vec::new(),
            config: BufferConfig::default(),
        }
    }
}

impl<'s, T: 's, S: 's> Stream<'s, T, S> {
    /// Replace the buffer configuration used when this pipeline (and any
    /// stream derived from it) materializes.
    pub fn with_buffer_config(&self, config: BufferConfig) -> Self {
        Stream {
            source: Rc::clone(&self.source),
            realize: Rc::clone(&self.realize),
            stages: self.stages.clone(),
            config,
        }
    }

    fn with_stage(&self, stage: Stage<'s, T>) -> Self {
        let mut stages = self.stages.clone();
        stages.push(stage);
        Stream {
            source: Rc::clone(&self.source),
            realize: Rc::clone(&self.realize),
            stages,
            config: self.config.clone(),
        }
    }

    /// Transform every element through `mapper`.
    ///
    /// Folds the pipeline so far into a new realization: the upstream is
    /// materialized, any deferred stages replayed, then `mapper` applied
    /// element-wise.
    pub fn map<E: 's, F>(&self, mapper: F) -> Stream<'s, E, S>
    where
        F: Fn(T) -> E + 's,
    {
        let previous = Rc::clone(&self.realize);
        let pending = self.stages.clone();
        let realize: Realize<'s, S, E> = Rc::new(move |source, config| {
            let mut items = previous(source, config)?;
            for stage in &pending {
                items = stage::run(stage, items);
            }
            Ok(items.into_iter().map(&mapper).collect())
        });
        Stream {
            source: Rc::clone(&self.source),
            realize,
            stages: Vec::new(),
            config: self.config.clone(),
        }
    }

    /// Keep only the elements satisfying `predicate`.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 's,
    {
        self.with_stage(Stage::Filter(Rc::new(predicate)))
    }

    /// Truncate the pipeline to at most `count` elements. The upstream is
    /// still drained in full; truncation happens on the realized buffer.
    pub fn limit(&self, count: usize) -> Self {
        self.with_stage(Stage::Limit(count))
    }

    /// Discard the first `count` elements.
    pub fn skip(&self, count: usize) -> Self {
        self.with_stage(Stage::Skip(count))
    }

    /// Sort by natural order.
    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        self.sorted_by(|a: &T, b: &T| a.cmp(b))
    }

    /// Sort by `comparator`.
    pub fn sorted_by<C>(&self, comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 's,
    {
        self.with_stage(Stage::Sorted(Rc::new(comparator)))
    }

    /// Unique elements in sorted order (ordered-set semantics — encounter
    /// order is *not* preserved).
    pub fn distinct(&self) -> Self
    where
        T: Ord,
    {
        let natural: Comparator<'s, T> = Rc::new(|a: &T, b: &T| a.cmp(b));
        self.with_stage(Stage::Distinct(natural))
    }

    /// All elements in reverse encounter order.
    pub fn reverse(&self) -> Self {
        self.with_stage(Stage::Reverse)
    }

    /// Reset the shared source and run the composed pipeline to a buffer.
    fn drive(&self) -> StreamResult<Vec<T>> {
        let mut source = self.source.borrow_mut();
        source.reset();
        trace!("driving pull pipeline: {} deferred stage(s)", self.stages.len());
        let mut items = (self.realize)(&mut *source, &self.config)?;
        for stage in &self.stages {
            items = stage::run(stage, items);
        }
        Ok(items)
    }

    /// Materialize into a vector.
    pub fn to_vec(&self) -> StreamResult<Vec<T>> {
        self.drive()
    }

    /// Materialize into a linked list.
    pub fn to_list(&self) -> StreamResult<LinkedList<T>> {
        Ok(self.drive()?.into_iter().collect())
    }

    /// Materialize into a deque.
    pub fn to_deque(&self) -> StreamResult<VecDeque<T>> {
        Ok(self.drive()?.into_iter().collect())
    }

    /// Materialize into an ordered set.
    pub fn to_set(&self) -> StreamResult<BTreeSet<T>>
    where
        T: Ord,
    {
        Ok(self.drive()?.into_iter().collect())
    }

    /// Materialize into a hash set.
    pub fn to_unordered_set(&self) -> StreamResult<HashSet<T>>
    where
        T: Eq + Hash,
    {
        Ok(self.drive()?.into_iter().collect())
    }

    /// Number of elements the pipeline produces.
    pub fn count(&self) -> StreamResult<usize> {
        Ok(self.drive()?.len())
    }

    /// Left fold in encounter order, seeded with `identity`.
    pub fn reduce<F>(&self, identity: T, accumulator: F) -> StreamResult<T>
    where
        F: Fn(T, T) -> T,
    {
        Ok(self.drive()?.into_iter().fold(identity, accumulator))
    }

    /// Sum of all elements, starting from the default value.
    pub fn sum(&self) -> StreamResult<T>
    where
        T: Add<Output = T> + Default,
    {
        self.reduce(T::default(), |a, b| a + b)
    }

    /// Largest element by natural order, `None` when the pipeline is empty.
    pub fn max(&self) -> StreamResult<Option<T>>
    where
        T: Ord,
    {
        Ok(self.drive()?.into_iter().max())
    }

    /// Smallest element by natural order, `None` when the pipeline is empty.
    pub fn min(&self) -> StreamResult<Option<T>>
    where
        T: Ord,
    {
        Ok(self.drive()?.into_iter().min())
    }

    /// First element, `None` when the pipeline is empty.
    pub fn head(&self) -> StreamResult<Option<T>> {
        Ok(self.drive()?.into_iter().next())
    }

    /// Last element, `None` when the pipeline is empty.
    pub fn tail(&self) -> StreamResult<Option<T>> {
        Ok(self.drive()?.into_iter().last())
    }

    /// First element satisfying `predicate`, if any.
    pub fn find<P>(&self, predicate: P) -> StreamResult<Option<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.drive()?.into_iter().find(|element| predicate(element)))
    }

    /// Whether every element satisfies `predicate`; `true` on an empty
    /// pipeline. The pipeline is evaluated in full either way.
    pub fn all_match<P>(&self, predicate: P) -> StreamResult<bool>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.drive()?.iter().all(|element| predicate(element)))
    }

    /// Whether any element satisfies `predicate`; `false` on an empty
    /// pipeline.
    pub fn any_match<P>(&self, predicate: P) -> StreamResult<bool>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.drive()?.iter().any(|element| predicate(element)))
    }

    /// Whether no element satisfies `predicate`.
    pub fn none_match<P>(&self, predicate: P) -> StreamResult<bool>
    where
        P: Fn(&T) -> bool,
    {
        Ok(!self.any_match(predicate)?)
    }

    /// Apply a side-effecting `consumer` to every element.
    pub fn for_each<F>(&self, mut consumer: F) -> StreamResult<()>
    where
        F: FnMut(T),
    {
        for element in self.drive()? {
            consumer(element);
        }
        Ok(())
    }

    /// Bucket elements by `discriminator`. Within each bucket, elements
    /// keep their encounter order.
    pub fn grouped_by<K, D>(&self, discriminator: D) -> StreamResult<HashMap<K, Vec<T>>>
    where
        K: Hash + Eq,
        D: Fn(&T) -> K,
    {
        Ok(self
            .drive()?
            .into_iter()
            .map(|element| (discriminator(&element), element))
            .into_group_map())
    }

    /// Materialize, then run `collector`'s three-phase reduction.
    pub fn collect<A, R>(&self, collector: &Collector<T, A, R>) -> StreamResult<R> {
        Ok(collector.apply(self.drive()?))
    }

    /// Snapshot the *remaining* elements of the source into a [`View`],
    /// a self-contained replayable stream source independent of the
    /// original storage's lifetime. Does not reset the source first.
    pub fn view(&self) -> StreamResult<View<S>> {
        let mut source = self.source.borrow_mut();
        Ok(View::new(crate::cursor::drain(&mut *source)?))
    }
}

/// An owned snapshot of a stream source.
///
/// Copies the source's remaining elements into private storage at
/// construction; [`View::stream`] then yields pipelines that replay the
/// snapshot without any tie to the original source.
pub struct View<S> {
    cursor: Rc<RefCell<SnapshotCursor<S>>>,
}

impl<S> View<S> {
    fn new(items: Vec<S>) -> Self {
        View {
            cursor: Rc::new(RefCell::new(SnapshotCursor::new(items))),
        }
    }

    /// A stream over the snapshot.
    pub fn stream(&self) -> Stream<'static, S, S>
    where
        S: Clone + 'static,
    {
        Stream::from_shared(Rc::clone(&self.cursor) as Rc<RefCell<dyn Cursor<S>>>)
    }
}
