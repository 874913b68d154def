//! Folds and scans.
//!
//! `fold` walks iteratively; `fold_right` and `reduce_right` recurse once per
//! element and are only safe on streams short enough for the call stack.

use crate::error::{Result, StreamError};
use crate::stream::Stream;

impl<T> Stream<T> {
    /// Accumulates from the left. Never returns on an infinite stream.
    pub fn fold<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        let mut acc = seed;
        for elem in self.iter() {
            acc = f(acc, elem);
        }
        acc
    }

    /// Accumulates from the right as `f(head, tail.fold_right(seed, f))`.
    ///
    /// Recursion depth equals the stream length.
    pub fn fold_right<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        fold_right_from(self, seed, &mut f)
    }

    /// Left fold seeded with the first element.
    pub fn reduce<F>(&self, mut f: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let cons = self.cell().ok_or(StreamError::ReduceOnEmpty)?;
        Ok(cons.tail().fold(cons.head.clone(), &mut f))
    }

    /// Right fold seeded with the last element.
    ///
    /// Recursion depth equals the stream length.
    pub fn reduce_right<F>(&self, mut f: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(&T, T) -> T,
    {
        fn reduce_from<T: Clone, F: FnMut(&T, T) -> T>(s: &Stream<T>, f: &mut F) -> Option<T> {
            let cons = s.cell()?;
            Some(match reduce_from(cons.tail(), f) {
                None => cons.head.clone(),
                Some(acc) => f(&cons.head, acc),
            })
        }
        reduce_from(self, &mut f).ok_or(StreamError::ReduceOnEmpty)
    }
}

fn fold_right_from<T, A, F>(s: &Stream<T>, seed: A, f: &mut F) -> A
where
    F: FnMut(&T, A) -> A,
{
    match s.cell() {
        None => seed,
        Some(cons) => {
            let acc = fold_right_from(cons.tail(), seed, f);
            f(&cons.head, acc)
        }
    }
}

impl<T: 'static> Stream<T> {
    /// Lazy left scan: `seed`, then every intermediate fold state.
    ///
    /// A stream of `n` elements scans to `n + 1` states.
    pub fn scan<A, F>(&self, seed: A, mut f: F) -> Stream<A>
    where
        A: Clone + 'static,
        F: FnMut(&A, &T) -> A + 'static,
    {
        let source = self.clone();
        Stream::cons(seed.clone(), move || match source.cell() {
            None => Stream::empty(),
            Some(cons) => {
                let next = f(&seed, &cons.head);
                cons.tail().scan(next, f)
            }
        })
    }

    /// Right scan: the fold state for every suffix, longest first, ending
    /// with `seed`.
    ///
    /// Forces the whole stream up front; never returns on an infinite one.
    pub fn scan_right<A, F>(&self, seed: A, mut f: F) -> Stream<A>
    where
        A: Clone,
        F: FnMut(&T, A) -> A,
    {
        let elems: Vec<&T> = self.iter().collect();
        log::trace!("materialized {} elements for scan_right", elems.len());

        let mut acc = seed.clone();
        let mut states = Stream::single(seed);
        for elem in elems.into_iter().rev() {
            acc = f(elem, acc);
            states = Stream::cons_forced(acc.clone(), states);
        }
        states
    }
}
