use std::collections::BTreeSet;

use rivulet::adapters::{SDeque, SSet, SVec, Streamable};
use rivulet::Cursor;

#[test]
fn svec_streams_its_contents() {
    let numbers = SVec(vec![1, 2, 3, 4, 5]);
    assert_eq!(numbers.stream().map(|x| x * 2).sum().unwrap(), 30);
    assert_eq!(numbers.len(), 5); // deref to the wrapped container
}

#[test]
fn adapter_streams_are_snapshots() {
    let mut numbers = SVec(vec![1, 2, 3]);
    let stream = numbers.stream();
    numbers.push(4);

    assert_eq!(stream.to_vec().unwrap(), vec![1, 2, 3]);
    assert_eq!(numbers.stream().to_vec().unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn adapter_cursors_start_at_the_first_element() {
    let numbers = SDeque(std::collections::VecDeque::from([7, 8, 9]));
    let mut cursor = numbers.cursor();

    assert!(cursor.has_next());
    assert_eq!(cursor.next().unwrap(), 7);

    // every call hands out a fresh cursor
    let mut second = numbers.cursor();
    assert!(second.has_next());
    assert_eq!(second.next().unwrap(), 7);
}

#[test]
fn sset_streams_in_order() {
    let set = SSet(BTreeSet::from([3, 1, 2]));
    assert_eq!(set.stream().to_vec().unwrap(), vec![1, 2, 3]);
}
