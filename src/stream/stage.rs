//! Deferred pipeline stages and their interpreter.
//!
//! Every same-type transformation a pull pipeline defers is one of the
//! tagged variants below; a terminal operation replays them in order
//! through [`run`]. Type-changing boundaries (`map`) are composed into the
//! realization function instead, so a stage never changes element type.

use std::cmp::Ordering;
use std::rc::Rc;

pub(crate) type Predicate<'s, T> = Rc<dyn Fn(&T) -> bool + 's>;
pub(crate) type Comparator<'s, T> = Rc<dyn Fn(&T, &T) -> Ordering + 's>;

pub(crate) enum Stage<'s, T> {
    Filter(Predicate<'s, T>),
    Limit(usize),
    Skip(usize),
    Sorted(Comparator<'s, T>),
    Distinct(Comparator<'s, T>),
    Reverse,
}

impl<'s, T> Clone for Stage<'s, T> {
    fn clone(&self) -> Self {
        match self {
            Stage::Filter(predicate) => Stage::Filter(Rc::clone(predicate)),
            Stage::Limit(count) => Stage::Limit(*count),
            Stage::Skip(count) => Stage::Skip(*count),
            Stage::Sorted(comparator) => Stage::Sorted(Rc::clone(comparator)),
            Stage::Distinct(comparator) => Stage::Distinct(Rc::clone(comparator)),
            Stage::Reverse => Stage::Reverse,
        }
    }
}

/// Apply one stage to a fully materialized buffer.
///
/// `Limit` truncates and `Skip` drops against the realized buffer; the
/// upstream has already been drained in full by the time a stage runs.
pub(crate) fn run<T>(stage: &Stage<'_, T>, mut items: Vec<T>) -> Vec<T> {
    match stage {
        Stage::Filter(predicate) => {
            items.retain(|element| predicate(element));
            items
        }
        Stage::Limit(count) => {
            items.truncate(*count);
            items
        }
        Stage::Skip(count) => {
            if *count >= items.len() {
                Vec::new()
            } else {
                items.split_off(*count)
            }
        }
        Stage::Sorted(comparator) => {
            items.sort_by(|a, b| comparator(a, b));
            items
        }
        Stage::Distinct(comparator) => {
            // Ordered-set semantics: sorted unique elements, not encounter
            // order.
            items.sort_by(|a, b| comparator(a, b));
            items.dedup_by(|a, b| comparator(a, b) == Ordering::Equal);
            items
        }
        Stage::Reverse => {
            items.reverse();
            items
        }
    }
}
