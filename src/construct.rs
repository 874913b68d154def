//! Factories deriving streams from iterators, ranges and generative rules.

use crate::error::{Result, StreamError};
use crate::stream::Stream;
use num_traits::{CheckedAdd, Num};

impl<T: 'static> Stream<T> {
    /// Wraps an iterator lazily.
    ///
    /// The first element is pulled immediately to decide emptiness; each
    /// further element is pulled when the preceding tail is forced. The
    /// source is consumed exactly once no matter how often the stream is
    /// traversed.
    pub fn from_iter_lazy<I>(iter: I) -> Stream<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let mut iter = iter.into_iter();
        match iter.next() {
            None => Stream::empty(),
            Some(head) => Stream::cons(head, move || Stream::from_iter_lazy(iter)),
        }
    }

    /// Builds a stream from a seed and a step that either yields the next
    /// element and state or ends the stream.
    pub fn unfold<S, F>(state: S, mut step: F) -> Stream<T>
    where
        S: 'static,
        F: FnMut(S) -> Option<(T, S)> + 'static,
    {
        match step(state) {
            None => Stream::empty(),
            Some((head, state)) => Stream::cons(head, move || Stream::unfold(state, step)),
        }
    }

    /// `n` elements produced by calling `generate` once per element, in
    /// order, as the stream is forced.
    pub fn fill_with<F>(n: usize, mut generate: F) -> Stream<T>
    where
        F: FnMut() -> T + 'static,
    {
        if n == 0 {
            return Stream::empty();
        }
        Stream::cons(generate(), move || Stream::fill_with(n - 1, generate))
    }

    /// An infinite stream of values produced by `generate`.
    pub fn continually_with<F>(mut generate: F) -> Stream<T>
    where
        F: FnMut() -> T + 'static,
    {
        Stream::cons(generate(), move || Stream::continually_with(generate))
    }

    /// `n` elements where element `i` is `f(i)`.
    pub fn tabulate<F>(n: usize, f: F) -> Stream<T>
    where
        F: FnMut(usize) -> T + 'static,
    {
        fn from_index<T: 'static, F: FnMut(usize) -> T + 'static>(
            index: usize,
            n: usize,
            mut f: F,
        ) -> Stream<T> {
            if index >= n {
                return Stream::empty();
            }
            Stream::cons(f(index), move || from_index(index + 1, n, f))
        }
        from_index(0, n, f)
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// The infinite stream `start, f(start), f(f(start)), ...`.
    pub fn iterate<F>(start: T, mut f: F) -> Stream<T>
    where
        F: FnMut(&T) -> T + 'static,
    {
        Stream::cons(start.clone(), move || {
            let next = f(&start);
            Stream::iterate(next, f)
        })
    }

    /// `start` repeated `n` times.
    pub fn fill(n: usize, elem: T) -> Stream<T> {
        if n == 0 {
            return Stream::empty();
        }
        Stream::cons(elem.clone(), move || Stream::fill(n - 1, elem))
    }

    /// `elem` repeated forever.
    pub fn continually(elem: T) -> Stream<T> {
        Stream::cons(elem.clone(), move || Stream::continually(elem))
    }
}

impl<T: Num + CheckedAdd + PartialOrd + Copy + 'static> Stream<T> {
    /// The half-open range `start..end` counting up by one.
    pub fn range(start: T, end: T) -> Stream<T> {
        range_from(start, end, T::one())
    }

    /// The half-open range from `start` towards `end` in increments of
    /// `step`. A negative step counts down and stops above `end`.
    ///
    /// The range also ends where the next value would overflow `T`.
    pub fn range_step(start: T, end: T, step: T) -> Result<Stream<T>> {
        if step.is_zero() {
            return Err(StreamError::invalid("step", "must not be zero"));
        }
        Ok(range_from(start, end, step))
    }
}

fn range_from<T: Num + CheckedAdd + PartialOrd + Copy + 'static>(
    start: T,
    end: T,
    step: T,
) -> Stream<T> {
    let ascending = step > T::zero();
    let in_range = if ascending { start < end } else { start > end };
    if !in_range {
        return Stream::empty();
    }
    Stream::cons(start, move || match start.checked_add(&step) {
        Some(next) => range_from(next, end, step),
        None => Stream::empty(),
    })
}

impl<T> FromIterator<T> for Stream<T> {
    /// Collects eagerly into a fully forced stream.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items.into()
    }
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(items: Vec<T>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(Stream::empty(), |tail, head| Stream::cons_forced(head, tail))
    }
}
