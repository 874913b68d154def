//! Element, predicate and sub-sequence search, plus copying into buffers.
//!
//! Forward searches stop at the first match and run forever on an infinite
//! stream without one. Backward (`last_*`) searches count the stream first
//! and never return on an infinite one.

use crate::error::{Result, StreamError};
use crate::iter::Cursor;
use crate::stream::Stream;

impl<T> Stream<T> {
    /// Returns true if any element equals `elem`.
    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == elem)
    }

    /// The first element satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|x| predicate(x))
    }

    /// Returns true if any element satisfies `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns true if every element satisfies `predicate`.
    pub fn forall<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Position of the first element at or after `from` equal to `elem`.
    pub fn index_of(&self, elem: &T, from: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_where(|x| x == elem, from)
    }

    /// Position of the first element at or after `from` satisfying
    /// `predicate`.
    pub fn index_where<P>(&self, mut predicate: P, from: usize) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .enumerate()
            .skip(from)
            .find(|(_, x)| predicate(x))
            .map(|(i, _)| i)
    }

    /// Like [`Stream::index_where`], inspecting at most `count` elements.
    pub fn index_where_within<P>(&self, mut predicate: P, from: usize, count: usize) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .enumerate()
            .skip(from)
            .take(count)
            .find(|(_, x)| predicate(x))
            .map(|(i, _)| i)
    }

    /// Position of the last element at or before `end` equal to `elem`.
    pub fn last_index_of(&self, elem: &T, end: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        self.last_index_where(|x| x == elem, end)
    }

    /// Position of the last element at or before `end` satisfying
    /// `predicate`.
    pub fn last_index_where<P>(&self, predicate: P, end: usize) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.last_index_where_within(predicate, end, usize::MAX)
    }

    /// Like [`Stream::last_index_where`], inspecting at most `count`
    /// elements ending at `end`.
    ///
    /// The stream is counted first so the scan can run forward over the
    /// window `[end + 1 - count, end]`.
    pub fn last_index_where_within<P>(&self, mut predicate: P, end: usize, count: usize) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let len = self.len();
        log::trace!("counted {} elements for a backward search", len);
        if len == 0 || count == 0 {
            return None;
        }
        let end = end.min(len - 1);
        let begin = end + 1 - count.min(end + 1);
        self.iter()
            .enumerate()
            .skip(begin)
            .take(end + 1 - begin)
            .filter(|(_, x)| predicate(x))
            .last()
            .map(|(i, _)| i)
    }

    /// Position of the first occurrence of `pattern` starting at or after
    /// `from`, found with Knuth-Morris-Pratt.
    ///
    /// The stream is read once, forward, through a [`Cursor`]; nothing is
    /// re-read after a partial match fails. An empty pattern matches at
    /// `from` when `from` is within `0..=len`.
    pub fn index_of_slice(&self, pattern: &[T], from: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut start = self;
        for _ in 0..from {
            start = start.cell()?.tail();
        }

        match pattern {
            [] => Some(from),
            [only] => start.index_of(only, 0).map(|i| i + from),
            _ => kmp_search(Cursor::new(start.clone()), pattern).map(|i| i + from),
        }
    }

    /// Position of the last occurrence of `pattern` starting at or before
    /// `end`. Forces the whole stream.
    pub fn last_index_of_slice(&self, pattern: &[T], end: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        let elems: Vec<&T> = self.iter().collect();
        log::trace!("materialized {} elements for a backward slice search", elems.len());
        let n = elems.len();
        let m = pattern.len();
        if m > n {
            return None;
        }
        let last_start = end.min(n - m);
        (0..=last_start).rev().find(|&p| {
            elems[p..p + m]
                .iter()
                .zip(pattern)
                .all(|(a, b)| *a == b)
        })
    }

    /// Returns true if `pattern` occurs as a contiguous run.
    pub fn contains_slice(&self, pattern: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.index_of_slice(pattern, 0).is_some()
    }

    /// Returns true if the stream begins with `prefix`. Forces at most
    /// `prefix.len()` elements.
    pub fn starts_with(&self, prefix: &[T]) -> bool
    where
        T: PartialEq,
    {
        let mut elems = self.iter();
        prefix.iter().all(|p| elems.next() == Some(p))
    }

    /// Returns true if the stream ends with `suffix`. Forces the whole
    /// stream.
    pub fn ends_with(&self, suffix: &[T]) -> bool
    where
        T: PartialEq,
    {
        let len = self.len();
        len >= suffix.len() && self.skip_ref(len - suffix.len()).iter().eq(suffix.iter())
    }

    /// Copies up to `count` elements, starting at stream position `index`,
    /// into `dest` starting at `dest_index`. Returns how many were copied:
    /// `min(count, elements remaining, dest.len() - dest_index)`.
    ///
    /// Forces only the elements it copies.
    pub fn copy_to(&self, dest: &mut [T], index: usize, dest_index: usize, count: usize) -> Result<usize>
    where
        T: Clone,
    {
        if dest_index > dest.len() {
            return Err(StreamError::invalid(
                "dest_index",
                format!("{} is past the end of a buffer of length {}", dest_index, dest.len()),
            ));
        }
        let room = count.min(dest.len() - dest_index);
        let mut copied = 0;
        for (slot, elem) in dest[dest_index..dest_index + room]
            .iter_mut()
            .zip(self.iter().skip(index))
        {
            *slot = elem.clone();
            copied += 1;
        }
        Ok(copied)
    }

    /// Fills `dest` from the start of the stream. Returns how many elements
    /// were copied.
    pub fn copy_to_slice(&self, dest: &mut [T]) -> usize
    where
        T: Clone,
    {
        let mut copied = 0;
        for (slot, elem) in dest.iter_mut().zip(self.iter()) {
            *slot = elem.clone();
            copied += 1;
        }
        copied
    }

    fn skip_ref(&self, n: usize) -> &Stream<T> {
        let mut current = self;
        for _ in 0..n {
            match current.cell() {
                Some(cons) => current = cons.tail(),
                None => break,
            }
        }
        current
    }
}

/// `table[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
fn partial_match_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut matched = 0;
    for i in 1..pattern.len() {
        while matched > 0 && pattern[i] != pattern[matched] {
            matched = table[matched - 1];
        }
        if pattern[i] == pattern[matched] {
            matched += 1;
        }
        table[i] = matched;
    }
    table
}

/// Offset, relative to the cursor's start, of the first match of a
/// non-empty `pattern`.
fn kmp_search<T: PartialEq>(mut cursor: Cursor<T>, pattern: &[T]) -> Option<usize> {
    let table = partial_match_table(pattern);
    let mut matched = 0;
    let mut position = 0;

    while cursor.advance() {
        let elem = cursor.current()?;
        while matched > 0 && *elem != pattern[matched] {
            matched = table[matched - 1];
        }
        if *elem == pattern[matched] {
            matched += 1;
        }
        if matched == pattern.len() {
            return Some(position + 1 - pattern.len());
        }
        position += 1;
    }
    None
}
