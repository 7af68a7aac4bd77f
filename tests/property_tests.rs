use std::collections::BTreeSet;

use quickcheck::quickcheck;
use rivulet::{collectors, Stream, UbStream};

quickcheck! {
    fn map_matches_plain_iteration(xs: Vec<i32>) -> bool {
        let expected: Vec<i64> = xs.iter().map(|&x| x as i64 * 2).collect();
        Stream::of(xs).map(|x| x as i64 * 2).to_vec() == Ok(expected)
    }

    fn terminal_calls_replay_independently(xs: Vec<i32>) -> bool {
        let stream = Stream::of(xs.clone());
        let first = stream.to_vec().unwrap();
        let count = stream.count().unwrap();
        let second = stream.to_vec().unwrap();
        first == xs && second == xs && count == xs.len()
    }

    fn distinct_is_the_sorted_unique_set(xs: Vec<i32>) -> bool {
        let expected: Vec<i32> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        Stream::of(xs).distinct().to_vec() == Ok(expected)
    }

    fn limit_and_skip_partition_the_input(xs: Vec<i32>, n: usize) -> bool {
        let n = n % (xs.len() + 1);
        let stream = Stream::of(xs.clone());
        let mut rebuilt = stream.limit(n).to_vec().unwrap();
        rebuilt.extend(stream.skip(n).to_vec().unwrap());
        rebuilt == xs
    }

    fn reverse_is_an_involution(xs: Vec<i32>) -> bool {
        Stream::of(xs.clone()).reverse().reverse().to_vec() == Ok(xs)
    }

    fn identity_collector_returns_its_input(xs: Vec<String>) -> bool {
        collectors::to_vec().apply(xs.clone()) == xs
    }

    fn grouping_by_preserves_every_element(xs: Vec<u8>) -> bool {
        let groups = collectors::grouping_by(|x: &u8| *x % 3).apply(xs.clone());
        groups.values().map(Vec::len).sum::<usize>() == xs.len()
    }

    fn sliding_windows_have_exact_size_and_count(xs: Vec<u8>) -> bool {
        let windows = UbStream::new(xs.clone()).sliding(3).to_vec().unwrap();
        let expected = xs.len().saturating_sub(2);
        windows.len() == expected && windows.iter().all(|w| w.len() == 3)
    }

    fn fixed_windows_flatten_back_to_the_even_prefix(xs: Vec<i32>) -> bool {
        let keep = xs.len() - xs.len() % 2;
        let flattened = UbStream::new(xs.clone()).fixed(2).flatten(|x| x).to_vec().unwrap();
        flattened[..] == xs[..keep]
    }

    fn push_and_pull_pipelines_agree(xs: Vec<i32>) -> bool {
        let pull = Stream::of(xs.clone()).map(|x| x as i64 + 1).to_vec().unwrap();
        let push = UbStream::new(xs).map(|x| x as i64 + 1).to_vec().unwrap();
        pull == push
    }
}
