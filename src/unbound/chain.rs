//! Typed stage links for the push pipeline.
//!
//! A link, given the sink that consumes its output type, produces a sink
//! that consumes the base (source) element type by threading values
//! through every upstream link. Composition is resolved at
//! pipeline-construction time through the types, so there is no runtime
//! value casting and no cast-failure path.
//!
//! Per-stage state — limit/skip counters, window buffers — lives inside
//! the sink built by `attach`, never in the link itself. Every drive of a
//! pipeline therefore starts from fresh state, and pipelines branched
//! from a shared prefix cannot contaminate each other.

use std::collections::VecDeque;
use std::mem;
use std::rc::Rc;

/// A typed link in a push pipeline: `Out` is the element type this link
/// emits, `Base` the source element type the assembled sink consumes.
pub(crate) trait StageChain<Out, Base> {
    fn attach<'a>(&'a self, down: Box<dyn FnMut(Out) + 'a>) -> Box<dyn FnMut(Base) + 'a>
    where
        Out: 'a;
}

/// Chain head: source elements pass straight through.
pub(crate) struct SourceStage;

impl<Base> StageChain<Base, Base> for SourceStage {
    fn attach<'a>(&'a self, down: Box<dyn FnMut(Base) + 'a>) -> Box<dyn FnMut(Base) + 'a>
    where
        Base: 'a,
    {
        down
    }
}

/// Transform each value and forward it.
pub(crate) struct MapStage<'s, In, Base, F> {
    pub(crate) prev: Rc<dyn StageChain<In, Base> + 's>,
    pub(crate) mapper: F,
}

impl<'s, In, Out, Base, F> StageChain<Out, Base> for MapStage<'s, In, Base, F>
where
    F: Fn(In) -> Out,
{
    fn attach<'a>(&'a self, mut down: Box<dyn FnMut(Out) + 'a>) -> Box<dyn FnMut(Base) + 'a>
    where
        Out: 'a,
    {
        let mapper = &self.mapper;
        self.prev.attach(Box::new(move |value| down(mapper(value))))
    }
}

/// For container-valued input, forward each mapped item individually.
pub(crate) struct FlatMapStage<'s, In, Base, F> {
    pub(crate) prev: Rc<dyn StageChain<In, Base> + 's>,
    pub(crate) mapper: F,
}

impl<'s, In, Out, Base, F> StageChain<Out, Base> for FlatMapStage<'s, In, Base, F>
where
    In: IntoIterator,
    F: Fn(In::Item) -> Out,
{
    fn attach<'a>(&'a self, mut down: Box<dyn FnMut(Out) + 'a>) -> Box<dyn FnMut(Base) + 'a>
    where
        Out: 'a,
    {
        let mapper = &self.mapper;
        self.prev.attach(Box::new(move |container: In| {
            for element in container {
                down(mapper(element));
            }
        }))
    }
}

/// Forward only values satisfying the predicate.
pub(crate) struct FilterStage<'s, In, Base, P> {
    pub(crate) prev: Rc<dyn StageChain<In, Base> + 's>,
    pub(crate) predicate: P,
}

impl<'s, In, Base, P> StageChain<In, Base> for FilterStage<'s, In, Base, P>
where
    P: Fn(&In) -> bool,
{
    fn attach<'a>(&'a self, mut down: Box<dyn FnMut(In) + 'a>) -> Box<dyn FnMut(Base) + 'a>
    where
        In: 'a,
    {
        let predicate = &self.predicate;
        self.prev.attach(Box::new(move |value| {
            if predicate(&value) {
                down(value);
            }
        }))
    }
}

/// Forward while the per-drive counter is below the bound, then drop
/// everything silently.
pub(crate) struct LimitStage<'s, In, Base> {
    pub(crate) prev: Rc<dyn StageChain<In, Base> + 's>,
    pub(crate) limit: usize,
}

impl<'s, In, Base> StageChain<In, Base> for LimitStage<'s, In, Base> {
    fn attach<'a>(&'a self, mut down: Box<dyn FnMut(In) + 'a>) -> Box<dyn FnMut(Base) + 'a>
    where
        In: 'a,
    {
        let limit = self.limit;
        let mut forwarded = 0usize;
        self.prev.attach(Box::new(move |value| {
            if forwarded < limit {
                forwarded += 1;
                down(value);
            }
        }))
    }
}

/// Drop the first `count` values, forward the rest.
pub(crate) struct SkipStage<'s, In, Base> {
    pub(crate) prev: Rc<dyn StageChain<In, Base> + 's>,
    pub(crate) count: usize,
}

impl<'s, In, Base> StageChain<In, Base> for SkipStage<'s, In, Base> {
    fn attach<'a>(&'a self, mut down: Box<dyn FnMut(In) + 'a>) -> Box<dyn FnMut(Base) + 'a>
    where
        In: 'a,
    {
        let count = self.count;
        let mut dropped = 0usize;
        self.prev.attach(Box::new(move |value| {
            if dropped < count {
                dropped += 1;
            } else {
                down(value);
            }
        }))
    }
}

/// Overlapping windows: once the buffer reaches `size`, emit a snapshot
/// and evict only the oldest element (step = 1).
pub(crate) struct SlidingWindowStage<'s, In, Base> {
    pub(crate) prev: Rc<dyn StageChain<In, Base> + 's>,
    pub(crate) size: usize,
}

impl<'s, In, Base> StageChain<Vec<In>, Base> for SlidingWindowStage<'s, In, Base>
where
    In: Clone,
{
    fn attach<'a>(&'a self, mut down: Box<dyn FnMut(Vec<In>) + 'a>) -> Box<dyn FnMut(Base) + 'a>
    where
        Vec<In>: 'a,
    {
        let size = self.size;
        let mut window: VecDeque<In> = VecDeque::with_capacity(size);
        self.prev.attach(Box::new(move |value| {
            if size == 0 {
                return;
            }
            window.push_back(value);
            if window.len() == size {
                down(window.iter().cloned().collect());
                window.pop_front();
            }
        }))
    }
}

/// Tumbling windows: emit the whole buffer at `size` and start over. A
/// trailing partial window is dropped.
pub(crate) struct FixedWindowStage<'s, In, Base> {
    pub(crate) prev: Rc<dyn StageChain<In, Base> + 's>,
    pub(crate) size: usize,
}

impl<'s, In, Base> StageChain<Vec<In>, Base> for FixedWindowStage<'s, In, Base> {
    fn attach<'a>(&'a self, mut down: Box<dyn FnMut(Vec<In>) + 'a>) -> Box<dyn FnMut(Base) + 'a>
    where
        Vec<In>: 'a,
    {
        let size = self.size;
        let mut window: Vec<In> = Vec::with_capacity(size);
        self.prev.attach(Box::new(move |value| {
            if size == 0 {
                return;
            }
            window.push(value);
            if window.len() == size {
                down(mem::take(&mut window));
            }
        }))
    }
}
