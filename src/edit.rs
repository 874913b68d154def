//! Structural edits producing new streams that share what they can with the
//! source.

use crate::stream::Stream;
use std::rc::Rc;

impl<T: 'static> Stream<T> {
    /// Appends the stream produced by `other` once `self` is exhausted.
    ///
    /// `other` is not called until traversal reaches the end of `self`.
    pub fn concat_with<F>(&self, other: F) -> Stream<T>
    where
        T: Clone,
        F: FnOnce() -> Stream<T> + 'static,
    {
        match self.cell() {
            None => other(),
            Some(cons) => {
                let source = self.clone();
                Stream::cons(cons.head.clone(), move || {
                    source.tail_or_empty().concat_with(other)
                })
            }
        }
    }

    /// Appends `other` once `self` is exhausted.
    pub fn concat(&self, other: &Stream<T>) -> Stream<T>
    where
        T: Clone,
    {
        let other = other.clone();
        self.concat_with(move || other)
    }

    /// Appends a single element.
    pub fn append(&self, elem: T) -> Stream<T>
    where
        T: Clone,
    {
        self.concat_with(move || Stream::single(elem))
    }

    /// Prepends a single element, sharing `self` as the tail.
    pub fn prepend(&self, elem: T) -> Stream<T> {
        Stream::cons_forced(elem, self.clone())
    }

    /// Removes the first element equal to `elem`. Without a match the
    /// result has the same elements as `self`.
    pub fn remove(&self, elem: &T) -> Stream<T>
    where
        T: Clone + PartialEq,
    {
        match self.cell() {
            None => Stream::empty(),
            Some(cons) if cons.head == *elem => cons.tail().clone(),
            Some(cons) => {
                let source = self.clone();
                let elem = elem.clone();
                Stream::cons(cons.head.clone(), move || {
                    source.tail_or_empty().remove(&elem)
                })
            }
        }
    }

    /// Replaces the element at `index`. An index past the end leaves the
    /// elements unchanged.
    pub fn updated(&self, index: usize, elem: T) -> Stream<T>
    where
        T: Clone,
    {
        match self.cell() {
            None => Stream::empty(),
            Some(_) if index == 0 => {
                let source = self.clone();
                Stream::cons(elem, move || source.tail_or_empty())
            }
            Some(cons) => {
                let source = self.clone();
                Stream::cons(cons.head.clone(), move || {
                    source.tail_or_empty().updated(index - 1, elem)
                })
            }
        }
    }

    /// Extends the stream with copies of `elem` until it has at least `len`
    /// elements.
    pub fn pad_to(&self, len: usize, elem: T) -> Stream<T>
    where
        T: Clone,
    {
        if len == 0 {
            return self.clone();
        }
        match self.cell() {
            None => Stream::fill(len, elem),
            Some(cons) => {
                let source = self.clone();
                Stream::cons(cons.head.clone(), move || {
                    source.tail_or_empty().pad_to(len - 1, elem)
                })
            }
        }
    }

    /// Replaces `replaced` elements starting at `from` with `replacement`.
    pub fn patch(&self, from: usize, replacement: &Stream<T>, replaced: usize) -> Stream<T>
    where
        T: Clone,
    {
        let source = self.clone();
        let replacement = replacement.clone();
        self.take(from).concat_with(move || {
            replacement.concat_with(move || source.skip(from.saturating_add(replaced)))
        })
    }

    /// Elements with positions in `from..until`.
    ///
    /// Forces `from` tails immediately.
    pub fn slice(&self, from: usize, until: usize) -> Stream<T>
    where
        T: Clone,
    {
        self.skip(from).take(until.saturating_sub(from))
    }

    /// `(take(n), skip(n))`.
    pub fn split_at(&self, n: usize) -> (Stream<T>, Stream<T>)
    where
        T: Clone,
    {
        (self.take(n), self.skip(n))
    }

    /// `(take_while(p), skip_while(p))`.
    pub fn span<P>(&self, predicate: P) -> (Stream<T>, Stream<T>)
    where
        T: Clone,
        P: Fn(&T) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        let prefix_predicate = Rc::clone(&predicate);
        (
            self.take_while(move |x| prefix_predicate(x)),
            self.skip_while(|x| predicate(x)),
        )
    }

    /// `(filter(p), filter(!p))`, both lazy.
    pub fn partition<P>(&self, predicate: P) -> (Stream<T>, Stream<T>)
    where
        T: Clone,
        P: Fn(&T) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        let rejected = Rc::clone(&predicate);
        (
            self.filter(move |x| predicate(x)),
            self.filter(move |x| !rejected(x)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn stream(items: &[i32]) -> Stream<i32> {
        items.to_vec().into()
    }

    #[test]
    fn test_concat() {
        assert_eq!(stream(&[1, 2]).concat(&stream(&[3, 4])).to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(Stream::empty().concat(&stream(&[5, 6])).to_vec(), vec![5, 6]);
        assert_eq!(stream(&[5, 6]).concat(&Stream::empty()).to_vec(), vec![5, 6]);
    }

    #[test]
    fn test_concat_empty_left_shares() {
        let right = stream(&[1]);
        assert!(Stream::empty().concat(&right).ptr_eq(&right));
    }

    #[test]
    fn test_concat_with_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let s = stream(&[1, 2]).concat_with(move || {
            counter.set(counter.get() + 1);
            Stream::single(3)
        });

        assert_eq!(s.get(1), Some(&2));
        assert_eq!(calls.get(), 0);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_concat_infinite_left() {
        let s = Stream::continually(0).concat_with(|| panic!("never reached"));
        assert_eq!(s.take(3).to_vec(), vec![0, 0, 0]);
    }

    #[test]
    fn test_append_prepend() {
        let s = stream(&[2, 3]);
        assert_eq!(s.append(4).to_vec(), vec![2, 3, 4]);
        let prepended = s.prepend(1);
        assert_eq!(prepended.to_vec(), vec![1, 2, 3]);
        assert!(prepended.tail().unwrap().ptr_eq(&s));
    }

    #[test]
    fn test_remove() {
        let s = stream(&[1, 2, 3, 2]);
        assert_eq!(s.remove(&2).to_vec(), vec![1, 3, 2]);
        assert_eq!(s.remove(&9).to_vec(), vec![1, 2, 3, 2]);
        assert_eq!(s.remove(&1).to_vec(), vec![2, 3, 2]);
        assert!(Stream::<i32>::empty().remove(&1).is_empty());
    }

    #[test]
    fn test_remove_infinite() {
        let s = Stream::iterate(0, |x| x + 1).remove(&2);
        assert_eq!(s.take(4).to_vec(), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_updated() {
        let s = stream(&[1, 2, 3]);
        assert_eq!(s.updated(1, 20).to_vec(), vec![1, 20, 3]);
        assert_eq!(s.updated(0, 10).to_vec(), vec![10, 2, 3]);
        assert_eq!(s.updated(7, 0).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_pad_to() {
        assert_eq!(stream(&[1]).pad_to(3, 0).to_vec(), vec![1, 0, 0]);
        assert_eq!(stream(&[1, 2, 3]).pad_to(2, 0).to_vec(), vec![1, 2, 3]);
        assert_eq!(Stream::empty().pad_to(2, 9).to_vec(), vec![9, 9]);
    }

    #[test]
    fn test_patch() {
        let s = stream(&[0, 1, 2, 3, 4]);
        assert_eq!(s.patch(1, &stream(&[9, 9, 9]), 2).to_vec(), vec![0, 9, 9, 9, 3, 4]);
        assert_eq!(s.patch(0, &Stream::empty(), 5).to_vec(), Vec::<i32>::new());
        assert_eq!(s.patch(10, &stream(&[7]), 1).to_vec(), vec![0, 1, 2, 3, 4, 7]);
    }

    #[test]
    fn test_slice_and_split_at() {
        let s = Stream::range(0, 10);
        assert_eq!(s.slice(2, 5).to_vec(), vec![2, 3, 4]);
        assert!(s.slice(5, 2).is_empty());

        let (front, back) = s.split_at(3);
        assert_eq!(front.to_vec(), vec![0, 1, 2]);
        assert_eq!(back.head(), Ok(&3));
    }

    #[test]
    fn test_span_and_partition() {
        let s = stream(&[1, 2, 5, 1, 7]);
        let (small, rest) = s.span(|x| *x < 3);
        assert_eq!(small.to_vec(), vec![1, 2]);
        assert_eq!(rest.to_vec(), vec![5, 1, 7]);

        let (odd, even) = s.partition(|x| x % 2 == 1);
        assert_eq!(odd.to_vec(), vec![1, 5, 1, 7]);
        assert_eq!(even.to_vec(), vec![2]);
    }
}
