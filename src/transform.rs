//! Element-wise transformations. Each result is as lazy as the source: a
//! head is computed when its node is created, a tail when it is forced.

use crate::stream::Stream;
use ahash::AHashSet as HashSet;
use std::hash::Hash;

impl<T: 'static> Stream<T> {
    /// Applies `f` to every element.
    pub fn map<U, F>(&self, mut f: F) -> Stream<U>
    where
        U: 'static,
        F: FnMut(&T) -> U + 'static,
    {
        match self.cell() {
            None => Stream::empty(),
            Some(cons) => {
                let head = f(&cons.head);
                let source = self.clone();
                Stream::cons(head, move || source.tail_or_empty().map(f))
            }
        }
    }

    /// Maps and filters in one pass.
    ///
    /// Forces the source up to its first mapped element; never returns if an
    /// infinite source maps nothing.
    pub fn filter_map<U, F>(&self, mut f: F) -> Stream<U>
    where
        U: 'static,
        F: FnMut(&T) -> Option<U> + 'static,
    {
        let mut source = self.clone();
        loop {
            let next = match source.cell() {
                None => return Stream::empty(),
                Some(cons) => match f(&cons.head) {
                    Some(head) => {
                        return Stream::cons(head, move || source.tail_or_empty().filter_map(f))
                    }
                    None => cons.tail().clone(),
                },
            };
            source = next;
        }
    }

    /// Maps every element to a stream and concatenates the results.
    ///
    /// Inner streams are consumed lazily; the source advances only once the
    /// current inner stream is exhausted.
    pub fn flat_map<U, F>(&self, mut f: F) -> Stream<U>
    where
        U: Clone + 'static,
        F: FnMut(&T) -> Stream<U> + 'static,
    {
        let mut source = self.clone();
        loop {
            let next = match source.cell() {
                None => return Stream::empty(),
                Some(cons) => {
                    let inner = f(&cons.head);
                    if !inner.is_empty() {
                        return inner.concat_with(move || source.tail_or_empty().flat_map(f));
                    }
                    cons.tail().clone()
                }
            };
            source = next;
        }
    }

    /// Pairs elements positionally, stopping at the shorter stream.
    pub fn zip<U: Clone + 'static>(&self, other: &Stream<U>) -> Stream<(T, U)>
    where
        T: Clone,
    {
        self.zip_with(other, |a, b| (a.clone(), b.clone()))
    }

    /// Combines elements positionally, stopping at the shorter stream.
    pub fn zip_with<U, R, F>(&self, other: &Stream<U>, mut f: F) -> Stream<R>
    where
        U: 'static,
        R: 'static,
        F: FnMut(&T, &U) -> R + 'static,
    {
        match (self.cell(), other.cell()) {
            (Some(a), Some(b)) => {
                let head = f(&a.head, &b.head);
                let left = self.clone();
                let right = other.clone();
                Stream::cons(head, move || {
                    left.tail_or_empty().zip_with(&right.tail_or_empty(), f)
                })
            }
            _ => Stream::empty(),
        }
    }

    /// Pairs each element with its position.
    pub fn zip_with_index(&self) -> Stream<(T, usize)>
    where
        T: Clone,
    {
        fn from_index<T: Clone + 'static>(source: &Stream<T>, index: usize) -> Stream<(T, usize)> {
            match source.cell() {
                None => Stream::empty(),
                Some(cons) => {
                    let source = source.clone();
                    Stream::cons((cons.head.clone(), index), move || {
                        from_index(&source.tail_or_empty(), index + 1)
                    })
                }
            }
        }
        from_index(self, 0)
    }

    /// Keeps elements satisfying `predicate`.
    ///
    /// Forces the source up to its first match; never returns if an infinite
    /// source has none.
    pub fn filter<P>(&self, mut predicate: P) -> Stream<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool + 'static,
    {
        self.filter_map(move |x| predicate(x).then(|| x.clone()))
    }

    /// Keeps at most the first `n` elements. Forces nothing beyond them.
    pub fn take(&self, n: usize) -> Stream<T>
    where
        T: Clone,
    {
        match self.cell() {
            Some(cons) if n > 0 => {
                let source = self.clone();
                Stream::cons(cons.head.clone(), move || {
                    if n == 1 {
                        Stream::empty()
                    } else {
                        source.tail_or_empty().take(n - 1)
                    }
                })
            }
            _ => Stream::empty(),
        }
    }

    /// Keeps the longest prefix whose elements satisfy `predicate`.
    pub fn take_while<P>(&self, mut predicate: P) -> Stream<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool + 'static,
    {
        match self.cell() {
            Some(cons) if predicate(&cons.head) => {
                let source = self.clone();
                Stream::cons(cons.head.clone(), move || {
                    source.tail_or_empty().take_while(predicate)
                })
            }
            _ => Stream::empty(),
        }
    }

    /// Drops the first `n` elements, forcing `n` tails immediately.
    pub fn skip(&self, n: usize) -> Stream<T> {
        let mut current = self;
        for _ in 0..n {
            match current.cell() {
                Some(cons) => current = cons.tail(),
                None => break,
            }
        }
        current.clone()
    }

    /// Drops the longest prefix whose elements satisfy `predicate`.
    pub fn skip_while<P>(&self, mut predicate: P) -> Stream<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self;
        while let Some(cons) = current.cell() {
            if !predicate(&cons.head) {
                break;
            }
            current = cons.tail();
        }
        current.clone()
    }

    /// Reverses the stream into a fully forced one.
    ///
    /// Never returns on an infinite stream.
    pub fn reverse(&self) -> Stream<T>
    where
        T: Clone,
    {
        let mut reversed = Stream::empty();
        let mut count = 0usize;
        for elem in self.iter() {
            reversed = Stream::cons_forced(elem.clone(), reversed);
            count += 1;
        }
        log::trace!("materialized {} elements for reverse", count);
        reversed
    }
}

impl<T: Hash + Eq + Clone + 'static> Stream<T> {
    /// Keeps the first occurrence of every value, lazily.
    pub fn distinct(&self) -> Stream<T> {
        distinct_from(self.clone(), HashSet::new())
    }
}

fn distinct_from<T: Hash + Eq + Clone + 'static>(
    mut source: Stream<T>,
    mut seen: HashSet<T>,
) -> Stream<T> {
    loop {
        let next = match source.cell() {
            None => return Stream::empty(),
            Some(cons) if seen.insert(cons.head.clone()) => {
                let head = cons.head.clone();
                return Stream::cons(head, move || distinct_from(source.tail_or_empty(), seen));
            }
            Some(cons) => cons.tail().clone(),
        };
        source = next;
    }
}

impl<A: Clone + 'static, B: Clone + 'static> Stream<(A, B)> {
    /// Splits a stream of pairs into two lazy streams.
    pub fn unzip(&self) -> (Stream<A>, Stream<B>) {
        (self.map(|(a, _)| a.clone()), self.map(|(_, b)| b.clone()))
    }
}
