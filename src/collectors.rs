//! A catalog of prebuilt [`Collector`] instances.
//!
//! Everything here is an instantiation of the supplier/accumulator/
//! finisher contract — no new machinery. Empty-input behavior is fixed per
//! collector and documented on each function: collectors that reduce to a
//! scalar return a documented default ([`averaging`] → `0.0`, [`joining`]
//! → `prefix + suffix`) and collectors that reduce to a single element
//! return `Option` ([`reducing`], [`max_by`], [`min_by`]).

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

use itertools::Itertools;

use crate::collector::Collector;

/// Mean of the mapped values. Empty input yields `0.0`.
pub fn averaging<T, F>(mapper: F) -> Collector<T, (f64, usize), f64>
where
    T: 'static,
    F: Fn(&T) -> f64 + 'static,
{
    Collector::of(
        || (0.0, 0),
        move |(sum, count), element| {
            *sum += mapper(&element);
            *count += 1;
        },
        |(sum, count)| if count == 0 { 0.0 } else { sum / count as f64 },
    )
}

/// Number of input elements.
pub fn counting<T: 'static>() -> Collector<T, usize, usize> {
    Collector::of(|| 0, |count, _| *count += 1, |count| count)
}

/// Sum of the mapped integer values.
pub fn summing_i64<T, F>(mapper: F) -> Collector<T, i64, i64>
where
    T: 'static,
    F: Fn(&T) -> i64 + 'static,
{
    Collector::of(|| 0, move |sum, element| *sum += mapper(&element), |sum| sum)
}

/// Sum of the mapped floating-point values.
pub fn summing_f64<T, F>(mapper: F) -> Collector<T, f64, f64>
where
    T: 'static,
    F: Fn(&T) -> f64 + 'static,
{
    Collector::of(
        || 0.0,
        move |sum, element| *sum += mapper(&element),
        |sum| sum,
    )
}

/// Wrap `collector`'s finisher with an additional transform.
pub fn collecting_and_then<T, A, R, RR>(
    collector: Collector<T, A, R>,
    mapper: impl Fn(R) -> RR + 'static,
) -> Collector<T, A, RR>
where
    T: 'static,
    A: 'static,
    R: 'static,
    RR: 'static,
{
    let Collector {
        supplier,
        accumulator,
        finisher,
    } = collector;
    Collector {
        supplier,
        accumulator,
        finisher: Box::new(move |container| mapper(finisher(container))),
    }
}

/// Bucket elements by `classifier` into key → elements, preserving
/// encounter order within each bucket.
pub fn grouping_by<T, K, C>(classifier: C) -> Collector<T, Vec<(K, T)>, HashMap<K, Vec<T>>>
where
    T: 'static,
    K: Hash + Eq + 'static,
    C: Fn(&T) -> K + 'static,
{
    Collector::of(
        Vec::new,
        move |pairs, element| {
            let key = classifier(&element);
            pairs.push((key, element));
        },
        |pairs| pairs.into_iter().into_group_map(),
    )
}

/// Bucket elements by `classifier`, then reduce each bucket through
/// `downstream` (cascaded two-level reduction).
pub fn grouping_by_with<T, K, C, A, R>(
    classifier: C,
    downstream: Collector<T, A, R>,
) -> Collector<T, Vec<(K, T)>, HashMap<K, R>>
where
    T: 'static,
    K: Hash + Eq + 'static,
    C: Fn(&T) -> K + 'static,
    A: 'static,
    R: 'static,
{
    Collector::of(
        Vec::new,
        move |pairs, element| {
            let key = classifier(&element);
            pairs.push((key, element));
        },
        move |pairs| {
            pairs
                .into_iter()
                .into_group_map()
                .into_iter()
                .map(|(key, bucket)| (key, downstream.apply(bucket)))
                .collect()
        },
    )
}

fn partition<T, P>(buffer: Vec<T>, predicate: &P) -> HashMap<bool, Vec<T>>
where
    P: Fn(&T) -> bool,
{
    let mut result: HashMap<bool, Vec<T>> = HashMap::new();
    result.insert(true, Vec::new());
    result.insert(false, Vec::new());
    for element in buffer {
        result.entry(predicate(&element)).or_default().push(element);
    }
    result
}

/// Binary partition by `predicate`. Both buckets are always present, even
/// when empty.
pub fn partitioning_by<T, P>(predicate: P) -> Collector<T, Vec<T>, HashMap<bool, Vec<T>>>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    Collector::of(
        Vec::new,
        |buffer, element| buffer.push(element),
        move |buffer| partition(buffer, &predicate),
    )
}

/// Binary partition with each bucket reduced through `downstream`. An
/// empty bucket feeds the downstream an empty input.
pub fn partitioning_by_with<T, P, A, R>(
    predicate: P,
    downstream: Collector<T, A, R>,
) -> Collector<T, Vec<T>, HashMap<bool, R>>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
    A: 'static,
    R: 'static,
{
    Collector::of(
        Vec::new,
        |buffer, element| buffer.push(element),
        move |buffer| {
            partition(buffer, &predicate)
                .into_iter()
                .map(|(key, bucket)| (key, downstream.apply(bucket)))
                .collect()
        },
    )
}

/// Concatenate strings separated by `delimiter`.
pub fn joining(delimiter: &str) -> Collector<String, Vec<String>, String> {
    joining_with(delimiter, "", "")
}

/// Concatenate strings separated by `delimiter`, wrapped in `prefix` and
/// `suffix`. Empty input yields `prefix + suffix`.
pub fn joining_with(
    delimiter: &str,
    prefix: &str,
    suffix: &str,
) -> Collector<String, Vec<String>, String> {
    let delimiter = delimiter.to_owned();
    let prefix = prefix.to_owned();
    let suffix = suffix.to_owned();
    Collector::of(
        Vec::new,
        |parts: &mut Vec<String>, element| parts.push(element),
        move |parts| format!("{prefix}{}{suffix}", parts.join(delimiter.as_str())),
    )
}

/// Largest element by `comparator`, `None` on empty input. The first of
/// several equal maxima wins.
pub fn max_by<T, C>(comparator: C) -> Collector<T, Option<T>, Option<T>>
where
    T: 'static,
    C: Fn(&T, &T) -> Ordering + 'static,
{
    Collector::of(
        || None,
        move |best: &mut Option<T>, element| {
            let replace = match best {
                Some(current) => comparator(&element, current) == Ordering::Greater,
                None => true,
            };
            if replace {
                *best = Some(element);
            }
        },
        |best| best,
    )
}

/// Smallest element by `comparator`, `None` on empty input.
pub fn min_by<T, C>(comparator: C) -> Collector<T, Option<T>, Option<T>>
where
    T: 'static,
    C: Fn(&T, &T) -> Ordering + 'static,
{
    Collector::of(
        || None,
        move |best: &mut Option<T>, element| {
            let replace = match best {
                Some(current) => comparator(&element, current) == Ordering::Less,
                None => true,
            };
            if replace {
                *best = Some(element);
            }
        },
        |best| best,
    )
}

/// Adapt elements through `mapper` before feeding `downstream`.
pub fn mapping<T, U, A, R, F>(mapper: F, downstream: Collector<U, A, R>) -> Collector<T, A, R>
where
    T: 'static,
    U: 'static,
    A: 'static,
    R: 'static,
    F: Fn(T) -> U + 'static,
{
    let Collector {
        supplier,
        accumulator,
        finisher,
    } = downstream;
    Collector {
        supplier,
        accumulator: Box::new(move |container, element| accumulator(container, mapper(element))),
        finisher,
    }
}

/// Materialize into a vector (the identity collector).
pub fn to_vec<T: 'static>() -> Collector<T, Vec<T>, Vec<T>> {
    Collector::of(
        Vec::new,
        |buffer: &mut Vec<T>, element| buffer.push(element),
        |buffer| buffer,
    )
}

/// Materialize into an ordered set.
pub fn to_set<T>() -> Collector<T, BTreeSet<T>, BTreeSet<T>>
where
    T: Ord + 'static,
{
    Collector::of(
        BTreeSet::new,
        |set: &mut BTreeSet<T>, element| {
            set.insert(element);
        },
        |set| set,
    )
}

/// Materialize into a copy of `seed`, extended with every element.
pub fn to_container<T, C>(seed: C) -> Collector<T, C, C>
where
    T: 'static,
    C: Clone + Extend<T> + 'static,
{
    Collector::of(
        move || seed.clone(),
        |container: &mut C, element| container.extend(std::iter::once(element)),
        |container| container,
    )
}

/// Build a key → value map. Duplicate keys are last-write-wins: a later
/// element silently overwrites an earlier one.
pub fn to_map<T, K, V, KM, VM>(
    key_mapper: KM,
    value_mapper: VM,
) -> Collector<T, Vec<T>, BTreeMap<K, V>>
where
    T: 'static,
    K: Ord + 'static,
    V: 'static,
    KM: Fn(&T) -> K + 'static,
    VM: Fn(&T) -> V + 'static,
{
    Collector::of(
        Vec::new,
        |buffer: &mut Vec<T>, element| buffer.push(element),
        move |buffer| {
            let mut result = BTreeMap::new();
            for element in &buffer {
                result.insert(key_mapper(element), value_mapper(element));
            }
            result
        },
    )
}

/// Build a key → value map, combining values that share a key: per-key
/// values are collected in encounter order, then left-folded through
/// `merge` seeded with the first value.
pub fn to_map_merging<T, K, V, KM, VM, M>(
    key_mapper: KM,
    value_mapper: VM,
    merge: M,
) -> Collector<T, Vec<T>, BTreeMap<K, V>>
where
    T: 'static,
    K: Ord + 'static,
    V: 'static,
    KM: Fn(&T) -> K + 'static,
    VM: Fn(&T) -> V + 'static,
    M: Fn(V, V) -> V + 'static,
{
    Collector::of(
        Vec::new,
        |buffer: &mut Vec<T>, element| buffer.push(element),
        move |buffer| {
            let mut grouped: BTreeMap<K, Vec<V>> = BTreeMap::new();
            for element in &buffer {
                grouped
                    .entry(key_mapper(element))
                    .or_default()
                    .push(value_mapper(element));
            }
            grouped
                .into_iter()
                .filter_map(|(key, values)| {
                    values.into_iter().reduce(&merge).map(|merged| (key, merged))
                })
                .collect()
        },
    )
}

/// Fold the input through `operation`; `None` on empty input.
pub fn reducing<T, F>(operation: F) -> Collector<T, Vec<T>, Option<T>>
where
    T: 'static,
    F: Fn(T, T) -> T + 'static,
{
    Collector::of(
        Vec::new,
        |buffer: &mut Vec<T>, element| buffer.push(element),
        move |buffer| buffer.into_iter().reduce(&operation),
    )
}

/// Fold the input through `operation`, seeded with `identity`.
pub fn reducing_from<T, F>(identity: T, operation: F) -> Collector<T, Vec<T>, T>
where
    T: Clone + 'static,
    F: Fn(T, T) -> T + 'static,
{
    Collector::of(
        Vec::new,
        |buffer: &mut Vec<T>, element| buffer.push(element),
        move |buffer| buffer.into_iter().fold(identity.clone(), &operation),
    )
}
