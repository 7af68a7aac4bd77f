use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

use rivulet::{BufferConfig, Stream, StreamError};

#[test]
fn transformed_stream_reduces_and_stays_reusable() {
    let stream = Stream::of(vec![1, 2, 3, 4, 5]);
    let doubled = stream.map(|x| x * 2);

    assert_eq!(doubled.reduce(0, |a, b| a + b).unwrap(), 30);
    // the same value keeps working after a terminal call
    assert_eq!(doubled.limit(2).reduce(0, |a, b| a + b).unwrap(), 6);
    assert_eq!(doubled.map(|x| format!("{x}!")).head().unwrap(), Some("2!".to_string()));
}

#[test]
fn filtered_stream_materializes_into_every_container() {
    let stream = Stream::of(vec![1, 2, 3, 4, 5]);
    let filtered = stream.map(|x| x * 2).filter(|x| *x > 4);

    assert_eq!(filtered.to_vec().unwrap(), vec![6, 8, 10]);
    assert_eq!(filtered.to_set().unwrap(), BTreeSet::from([6, 8, 10]));
    assert_eq!(filtered.to_unordered_set().unwrap(), HashSet::from([6, 8, 10]));
    assert_eq!(filtered.to_list().unwrap(), LinkedList::from([6, 8, 10]));
    assert_eq!(filtered.to_deque().unwrap(), VecDeque::from([6, 8, 10]));
    // replay: the earlier terminal calls did not consume the pipeline
    assert_eq!(filtered.to_vec().unwrap(), vec![6, 8, 10]);
    assert_eq!(filtered.reduce(0, |a, b| a + b).unwrap(), 24);
}

#[test]
fn sorted_orders_by_comparator() {
    let stream = Stream::of(vec![121, 12, 123, 41, 59]);

    assert_eq!(
        stream.sorted_by(|a, b| b.cmp(a)).to_vec().unwrap(),
        vec![123, 121, 59, 41, 12]
    );
    assert_eq!(stream.sorted().to_vec().unwrap(), vec![12, 41, 59, 121, 123]);
}

#[test]
fn distinct_returns_sorted_unique_elements() {
    let stream = Stream::of(vec![1, 2, 3, 4, 5, 2, 3, 4, 5]);
    assert_eq!(stream.distinct().to_vec().unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn skip_drops_leading_elements() {
    let stream = Stream::of(vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(stream.skip(2).to_vec().unwrap(), vec![3, 4, 5, 6, 7]);
    assert_eq!(stream.skip(9).to_vec().unwrap(), Vec::<i32>::new());
}

#[test]
fn aggregate_terminals() {
    let stream = Stream::of(vec![21, 20, 10, 16, 40, 50]);

    assert_eq!(stream.sum().unwrap(), 157);
    assert_eq!(stream.reverse().to_vec().unwrap(), vec![50, 40, 16, 10, 20, 21]);
    assert_eq!(stream.max().unwrap(), Some(50));
    assert_eq!(stream.min().unwrap(), Some(10));
    assert_eq!(stream.count().unwrap(), 6);
}

#[test]
fn empty_stream_terminals() {
    let stream = Stream::of(Vec::<i32>::new());

    assert_eq!(stream.sum().unwrap(), 0);
    assert_eq!(stream.to_vec().unwrap(), Vec::<i32>::new());
    assert_eq!(stream.reverse().to_vec().unwrap(), Vec::<i32>::new());
    assert_eq!(stream.max().unwrap(), None);
    assert_eq!(stream.min().unwrap(), None);
    assert_eq!(stream.head().unwrap(), None);
    assert_eq!(stream.tail().unwrap(), None);
    assert!(stream.all_match(|x| *x > 0).unwrap());
    assert!(!stream.any_match(|x| *x > 0).unwrap());
}

#[test]
fn searching_and_matching() {
    let stream = Stream::of(vec![1, 2, 3, 4, 5]);

    assert_eq!(stream.head().unwrap(), Some(1));
    assert_eq!(stream.tail().unwrap(), Some(5));
    assert_eq!(stream.find(|x| *x > 3).unwrap(), Some(4));
    assert_eq!(stream.find(|x| *x > 9).unwrap(), None);
    assert!(stream.all_match(|x| *x > 0).unwrap());
    assert!(stream.any_match(|x| *x > 4).unwrap());
    assert!(stream.none_match(|x| *x > 5).unwrap());
}

#[test]
fn for_each_visits_in_encounter_order() {
    let stream = Stream::of(vec![3, 1, 2]);
    let mut seen = Vec::new();
    stream.for_each(|x| seen.push(x)).unwrap();
    assert_eq!(seen, vec![3, 1, 2]);
}

#[test]
fn grouped_by_buckets_preserve_encounter_order() {
    let stream = Stream::of(vec![12, 12, 13, 13, 5, 4, 5, 5, 5, 5, 4]);
    let groups = stream.grouped_by(|x| x.to_string()).unwrap();

    assert_eq!(groups.len(), 4);
    assert_eq!(groups["5"].len(), 5);
    assert_eq!(groups["13"].len(), 2);
    assert_eq!(groups["12"].len(), 2);
    assert_eq!(groups["4"], vec![4, 4]);
}

#[test]
fn sibling_pipelines_share_one_source_safely() {
    let base = Stream::of(vec![1, 2, 3, 4, 5]);
    let evens = base.filter(|x| x % 2 == 0);
    let odds = base.filter(|x| x % 2 == 1);

    assert_eq!(evens.to_vec().unwrap(), vec![2, 4]);
    assert_eq!(odds.to_vec().unwrap(), vec![1, 3, 5]);
    assert_eq!(base.to_vec().unwrap(), vec![1, 2, 3, 4, 5]);
    // and again, in a different order
    assert_eq!(odds.sum().unwrap(), 9);
    assert_eq!(evens.sum().unwrap(), 6);
}

#[test]
fn view_outlives_the_original_source() {
    let view = {
        let data = vec![3, 1, 2];
        let stream = Stream::from_slice(&data);
        stream.view().unwrap()
    };

    assert_eq!(view.stream().sorted().to_vec().unwrap(), vec![1, 2, 3]);
    // the snapshot replays like any other source
    assert_eq!(view.stream().to_vec().unwrap(), vec![3, 1, 2]);
}

#[test]
fn view_snapshots_only_the_remaining_elements() {
    let stream = Stream::of(vec![1, 2, 3]);
    // a terminal call leaves the shared source exhausted
    stream.to_vec().unwrap();
    assert_eq!(stream.view().unwrap().stream().count().unwrap(), 0);
}

#[test]
fn bounded_buffer_config_rejects_oversized_sources() {
    let stream =
        Stream::of(vec![1, 2, 3, 4, 5]).with_buffer_config(BufferConfig::bounded(3));
    assert_eq!(stream.to_vec(), Err(StreamError::CapacityExceeded { limit: 3 }));

    let small = Stream::of(vec![1, 2]).with_buffer_config(BufferConfig::bounded(3));
    assert_eq!(small.to_vec().unwrap(), vec![1, 2]);
}

#[test]
fn borrowed_sources_work_like_owned_ones() {
    let data = vec![5, 4, 3, 2, 1];
    let stream = Stream::from_slice(&data);
    assert_eq!(stream.sorted().to_vec().unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(stream.sum().unwrap(), 15);
}
