//! Lazy combinations and permutations that never repeat a value-equal
//! result when the source contains duplicates.

use crate::stream::Stream;
use ahash::AHashSet as HashSet;
use std::hash::Hash;

impl<T: Hash + Eq + Clone + 'static> Stream<T> {
    /// Every combination of `size` elements, in positional order.
    ///
    /// A combination is built from each suffix whose head has not started an
    /// earlier suffix, followed by the combinations of `size - 1` elements of
    /// that suffix's tail. `size == 0` yields one empty combination.
    ///
    /// ```
    /// use stream_rs::Stream;
    ///
    /// let letters: Stream<char> = "abbbc".chars().collect();
    /// let combos: Vec<String> = letters
    ///     .combinations(2)
    ///     .iter()
    ///     .map(|c| c.iter().collect())
    ///     .collect();
    /// assert_eq!(combos, vec!["ab", "ac", "bb", "bc"]);
    /// ```
    pub fn combinations(&self, size: usize) -> Stream<Stream<T>> {
        if size == 0 {
            return Stream::single(Stream::empty());
        }
        distinct_head_suffixes(self.clone(), HashSet::new()).flat_map(move |suffix| {
            match suffix.cell() {
                None => Stream::empty(),
                Some(cons) => {
                    let head = cons.head.clone();
                    cons.tail()
                        .combinations(size - 1)
                        .map(move |rest| rest.prepend(head.clone()))
                }
            }
        })
    }

    /// Every distinct permutation.
    ///
    /// For each distinct value in order of first appearance, removes its
    /// first occurrence and prefixes it to every permutation of the rest.
    pub fn permutations(&self) -> Stream<Stream<T>> {
        if self.is_empty() {
            return Stream::single(Stream::empty());
        }
        let source = self.clone();
        self.distinct().flat_map(move |elem| {
            let first = elem.clone();
            source
                .remove(elem)
                .permutations()
                .map(move |rest| rest.prepend(first.clone()))
        })
    }
}

/// Non-empty suffixes of `source` whose head value was not seen at the head
/// of an earlier suffix.
fn distinct_head_suffixes<T: Hash + Eq + Clone + 'static>(
    mut source: Stream<T>,
    mut seen: HashSet<T>,
) -> Stream<Stream<T>> {
    loop {
        let next = match source.cell() {
            None => return Stream::empty(),
            Some(cons) if seen.insert(cons.head.clone()) => {
                let suffix = source.clone();
                return Stream::cons(suffix, move || {
                    distinct_head_suffixes(source.tail_or_empty(), seen)
                });
            }
            Some(cons) => cons.tail().clone(),
        };
        source = next;
    }
}
