use crate::{Stream, StreamBuilder};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Windows per the rule: full windows at multiples of `step`, then one
/// partial window if the last full window (or none at all) left uncovered
/// elements and the next offset is still in range.
fn model_sliding(items: &[u8], size: usize, step: usize) -> Vec<Vec<u8>> {
    let n = items.len();
    let mut windows = Vec::new();
    let mut offset = 0;
    while offset + size <= n {
        windows.push(items[offset..offset + size].to_vec());
        offset += step;
    }
    let covered = if windows.is_empty() {
        0
    } else {
        offset - step + size
    };
    if covered < n && offset < n {
        windows.push(items[offset..].to_vec());
    }
    windows
}

fn naive_index_of_slice(items: &[u8], pattern: &[u8], from: usize) -> Option<usize> {
    if from > items.len() {
        return None;
    }
    if pattern.is_empty() {
        return Some(from);
    }
    (from..items.len()).find(|&p| items[p..].starts_with(pattern))
}

fn to_vecs(s: &Stream<Stream<u8>>) -> Vec<Vec<u8>> {
    s.iter().map(|w| w.to_vec()).collect()
}

/// Every size-`k` choice of positions, as values, in positional order,
/// keeping the first occurrence of each value sequence.
fn model_combinations(items: &[u8], k: usize) -> Vec<Vec<u8>> {
    fn choose(items: &[u8], k: usize, start: usize, current: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..items.len() {
            current.push(items[i]);
            choose(items, k, i + 1, current, out);
            current.pop();
        }
    }
    let mut all = Vec::new();
    choose(items, k, 0, &mut Vec::new(), &mut all);
    let mut seen = BTreeSet::new();
    all.retain(|c| seen.insert(c.clone()));
    all
}

proptest! {
    /// Concatenation matches slice concatenation.
    #[test]
    fn prop_concat(a in any::<Vec<u8>>(), b in any::<Vec<u8>>()) {
        let s = Stream::from(a.clone()).concat(&Stream::from(b.clone()));
        let expected: Vec<u8> = a.into_iter().chain(b).collect();
        prop_assert_eq!(s.to_vec(), expected);
    }

    /// take/skip agree with slicing, on lazy and forced sources alike.
    #[test]
    fn prop_take_skip(items in any::<Vec<u8>>(), n in 0usize..40) {
        let lazy = Stream::from_iter_lazy(items.clone());
        let forced = Stream::from(items.clone());
        let cut = n.min(items.len());
        for s in [lazy, forced] {
            prop_assert_eq!(s.take(n).to_vec(), items[..cut].to_vec());
            prop_assert_eq!(s.skip(n).to_vec(), items[cut..].to_vec());
        }
    }

    /// Sliding windows match the window model.
    #[test]
    fn prop_sliding(items in prop::collection::vec(any::<u8>(), 0..30), size in 1usize..8, step in 1usize..8) {
        let s = Stream::from(items.clone()).sliding(size, step).unwrap();
        prop_assert_eq!(to_vecs(&s), model_sliding(&items, size, step));
    }

    /// Grouped windows match `chunks`.
    #[test]
    fn prop_grouped(items in prop::collection::vec(any::<u8>(), 0..30), size in 1usize..8) {
        let s = Stream::from(items.clone()).grouped(size).unwrap();
        let expected: Vec<Vec<u8>> = items.chunks(size).map(|c| c.to_vec()).collect();
        prop_assert_eq!(to_vecs(&s), expected);
    }

    /// KMP search agrees with a naive search over a small alphabet.
    #[test]
    fn prop_index_of_slice(
        items in prop::collection::vec(0u8..3, 0..40),
        pattern in prop::collection::vec(0u8..3, 0..5),
        from in 0usize..45,
    ) {
        let s = Stream::from_iter_lazy(items.clone());
        prop_assert_eq!(
            s.index_of_slice(&pattern, from),
            naive_index_of_slice(&items, &pattern, from)
        );
    }

    /// A substring taken from the source is found at or before where it was
    /// taken.
    #[test]
    fn prop_index_of_slice_finds_substring(
        items in prop::collection::vec(0u8..4, 1..40),
        start in 0usize..40,
        len in 1usize..6,
    ) {
        let start = start % items.len();
        let end = (start + len).min(items.len());
        let pattern = &items[start..end];
        let found = Stream::from(items.clone()).index_of_slice(pattern, 0);
        prop_assert!(matches!(found, Some(p) if p <= start));
        let p = found.unwrap();
        prop_assert_eq!(&items[p..p + pattern.len()], pattern);
    }

    /// Backward slice search agrees with a naive scan.
    #[test]
    fn prop_last_index_of_slice(
        items in prop::collection::vec(0u8..3, 0..30),
        pattern in prop::collection::vec(0u8..3, 0..4),
        end in 0usize..35,
    ) {
        let expected = if pattern.len() > items.len() {
            None
        } else {
            (0..=end.min(items.len() - pattern.len()))
                .rev()
                .find(|&p| items[p..].starts_with(&pattern))
        };
        prop_assert_eq!(Stream::from(items).last_index_of_slice(&pattern, end), expected);
    }

    /// Combinations match brute force with duplicates removed.
    #[test]
    fn prop_combinations(items in prop::collection::vec(0u8..4, 0..7), k in 0usize..4) {
        let combos = Stream::from(items.clone()).combinations(k);
        prop_assert_eq!(to_vecs(&combos), model_combinations(&items, k));
    }

    /// Permutations are distinct, and there is one per arrangement of the
    /// multiset.
    #[test]
    fn prop_permutations(items in prop::collection::vec(0u8..3, 0..6)) {
        let perms = to_vecs(&Stream::from(items.clone()).permutations());
        let unique: BTreeSet<Vec<u8>> = perms.iter().cloned().collect();
        prop_assert_eq!(unique.len(), perms.len());

        let mut sorted = items.clone();
        sorted.sort_unstable();
        for p in &perms {
            let mut q = p.clone();
            q.sort_unstable();
            prop_assert_eq!(&q, &sorted);
        }

        let factorial = |n: usize| (1..=n).product::<usize>();
        let mut counts = [0usize; 3];
        for &x in &items {
            counts[x as usize] += 1;
        }
        let expected = factorial(items.len()) / counts.iter().map(|&c| factorial(c)).product::<usize>();
        prop_assert_eq!(perms.len(), expected);
    }

    /// scan yields n + 1 prefix sums; scan_right yields n + 1 suffix sums.
    #[test]
    fn prop_scans(items in any::<Vec<u8>>()) {
        let s = Stream::from(items.clone());
        let left = s.scan(0u32, |acc, x| acc + u32::from(*x)).to_vec();
        let right = s.scan_right(0u32, |x, acc| u32::from(*x) + acc).to_vec();

        prop_assert_eq!(left.len(), items.len() + 1);
        prop_assert_eq!(right.len(), items.len() + 1);
        for i in 0..=items.len() {
            let prefix: u32 = items[..i].iter().map(|&x| u32::from(x)).sum();
            let suffix: u32 = items[i..].iter().map(|&x| u32::from(x)).sum();
            prop_assert_eq!(left[i], prefix);
            prop_assert_eq!(right[i], suffix);
        }
    }

    /// patch matches `Vec::splice`.
    #[test]
    fn prop_patch(
        items in any::<Vec<u8>>(),
        replacement in any::<Vec<u8>>(),
        from in 0usize..20,
        replaced in 0usize..20,
    ) {
        let patched = Stream::from(items.clone())
            .patch(from, &Stream::from(replacement.clone()), replaced)
            .to_vec();
        let mut expected = items.clone();
        let start = from.min(expected.len());
        let end = (start + replaced).min(expected.len());
        expected.splice(start..end, replacement);
        prop_assert_eq!(patched, expected);
    }

    /// Builder output is the concatenation of its parts.
    #[test]
    fn prop_builder(parts in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..4), 0..6)) {
        let mut builder = StreamBuilder::new();
        for (i, part) in parts.iter().enumerate() {
            let part = part.clone();
            if i % 2 == 0 {
                builder.append_stream(Stream::from(part));
            } else {
                builder.append_lazy(move || Stream::from(part.clone()));
            }
        }
        let expected: Vec<u8> = parts.concat();
        prop_assert_eq!(builder.to_stream().to_vec(), expected);
    }

    /// Forcing through `iter` makes the size definite; a fresh lazy stream
    /// of two or more elements is not.
    #[test]
    fn prop_definite_size(items in prop::collection::vec(any::<u8>(), 2..20)) {
        let s = Stream::from_iter_lazy(items.clone());
        prop_assert!(!s.has_definite_size());
        prop_assert!(!s.is_tail_forced());
        prop_assert_eq!(s.len(), items.len());
        prop_assert!(s.has_definite_size());
    }

    /// reverse twice is identity; distinct keeps first occurrences.
    #[test]
    fn prop_reverse_distinct(items in any::<Vec<u8>>()) {
        let s = Stream::from(items.clone());
        prop_assert_eq!(s.reverse().reverse().to_vec(), items.clone());

        let mut seen = BTreeSet::new();
        let expected: Vec<u8> = items.iter().copied().filter(|x| seen.insert(*x)).collect();
        prop_assert_eq!(s.distinct().to_vec(), expected);
    }
}

/// Bolero fuzz test: windowing and searching never panic.
#[cfg(test)]
#[test]
fn fuzz_no_panic() {
    bolero::check!()
        .with_type::<(Vec<u8>, u8, u8)>()
        .for_each(|(input, size, step)| {
            let s = Stream::from_iter_lazy(input.clone());
            let size = usize::from(*size % 8) + 1;
            let step = usize::from(*step % 8) + 1;

            let windows = s.sliding(size, step).unwrap();
            let total: usize = windows.iter().map(|w| w.len()).sum();
            assert!(total >= input.len() || step > size);

            let pattern: Vec<u8> = input.iter().copied().take(size).collect();
            assert_eq!(s.index_of_slice(&pattern, 0), Some(0));
            let _ = s.last_index_of_slice(&pattern, usize::MAX);
            let _ = s.to_string();
        });
}

/// Bolero fuzz test: a stream always agrees with the vector it came from.
#[cfg(test)]
#[test]
fn fuzz_roundtrip() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let lazy = Stream::from_iter_lazy(input.clone());
        let forced: Stream<u8> = input.iter().copied().collect();

        assert_eq!(lazy, forced);
        assert_eq!(lazy.len(), input.len());
        assert_eq!(lazy.clone().into_iter().collect::<Vec<_>>(), *input);
        assert_eq!(forced.reverse().to_vec(), input.iter().rev().copied().collect::<Vec<_>>());
    });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_model_sliding_matches_documented_cases() {
        let items: Vec<u8> = (0..6).collect();
        assert_eq!(model_sliding(&items, 3, 2), vec![vec![0, 1, 2], vec![2, 3, 4], vec![4, 5]]);
        let items: Vec<u8> = (0..8).collect();
        assert_eq!(model_sliding(&items, 2, 4), vec![vec![0, 1], vec![4, 5]]);
    }

    #[test]
    fn test_model_combinations() {
        let items = b"abbbc".to_vec();
        let combos: Vec<String> = model_combinations(&items, 2)
            .into_iter()
            .map(|c| String::from_utf8(c).unwrap())
            .collect();
        assert_eq!(combos, vec!["ab", "ac", "bb", "bc"]);
    }
}
