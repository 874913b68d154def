use crate::error::{Result, StreamError};
use crate::thunk::Thunk;
use std::rc::Rc;

/// A persistent, lazily evaluated, memoizing linked sequence.
///
/// A stream is either empty or a cons cell holding an evaluated head and a
/// memoized thunk producing the rest. Cloning a stream clones a handle, never
/// the nodes, so derived streams share suffixes freely.
pub struct Stream<T> {
    pub(crate) node: Node<T>,
}

/// Tagged sum underlying every stream.
pub(crate) enum Node<T> {
    Empty,
    Cons(Rc<Cons<T>>),
}

/// One link of the chain.
pub(crate) struct Cons<T> {
    pub(crate) head: T,
    pub(crate) tail: Thunk<Stream<T>>,
}

impl<T> Cons<T> {
    /// Forces and borrows the tail.
    #[inline]
    pub(crate) fn tail(&self) -> &Stream<T> {
        self.tail.force()
    }
}

/// How far the already-forced prefix of a stream reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Frontier {
    /// The forced prefix ends in the empty stream.
    Empty,
    /// The forced prefix ends at a tail that was never forced.
    Unforced,
    /// The forced prefix loops back on itself.
    Cycle,
}

impl<T> Stream<T> {
    /// The empty stream. Allocates nothing.
    pub const fn empty() -> Self {
        Self { node: Node::Empty }
    }

    /// Builds a cons cell whose tail is computed on first access.
    ///
    /// `tail` is not called here.
    pub fn cons<F>(head: T, tail: F) -> Self
    where
        F: FnOnce() -> Stream<T> + 'static,
    {
        Self::from_cons(Cons {
            head,
            tail: Thunk::new(tail),
        })
    }

    /// Builds a cons cell whose tail is already known.
    pub fn cons_forced(head: T, tail: Stream<T>) -> Self {
        Self::from_cons(Cons {
            head,
            tail: Thunk::forced(tail),
        })
    }

    /// A one-element, fully forced stream.
    pub fn single(head: T) -> Self {
        Self::cons_forced(head, Self::empty())
    }

    fn from_cons(cons: Cons<T>) -> Self {
        Self {
            node: Node::Cons(Rc::new(cons)),
        }
    }

    #[inline]
    pub(crate) fn cell(&self) -> Option<&Cons<T>> {
        match &self.node {
            Node::Empty => None,
            Node::Cons(cons) => Some(cons),
        }
    }

    /// Returns true for the empty stream.
    pub fn is_empty(&self) -> bool {
        matches!(self.node, Node::Empty)
    }

    /// The first element.
    pub fn head(&self) -> Result<&T> {
        self.head_option()
            .ok_or(StreamError::EmptyAccess { operation: "head" })
    }

    /// The first element, or `None` when empty.
    pub fn head_option(&self) -> Option<&T> {
        self.cell().map(|cons| &cons.head)
    }

    /// The rest of the stream, forcing it if needed.
    ///
    /// Repeated calls return the same node.
    pub fn tail(&self) -> Result<Stream<T>> {
        self.tail_option()
            .ok_or(StreamError::EmptyAccess { operation: "tail" })
    }

    /// The rest of the stream, or `None` when empty.
    pub fn tail_option(&self) -> Option<Stream<T>> {
        self.cell().map(|cons| cons.tail().clone())
    }

    /// The rest of the stream, or the empty stream when empty.
    pub(crate) fn tail_or_empty(&self) -> Stream<T> {
        self.tail_option().unwrap_or_default()
    }

    /// Returns true if the tail has been evaluated. Never forces.
    ///
    /// The empty stream has no tail and reports `false`.
    pub fn is_tail_forced(&self) -> bool {
        self.cell().is_some_and(|cons| cons.tail.is_forced())
    }

    /// Returns true if the already-forced prefix reaches the end.
    ///
    /// Walks only through tails that were forced earlier and never forces a
    /// new one. A forced cycle is infinite and reports `false`.
    pub fn has_definite_size(&self) -> bool {
        self.walk_forced(|_| ()) == Frontier::Empty
    }

    /// Visits every head of the forced prefix and reports where it stopped.
    ///
    /// Uses a tortoise/hare pair so a forced cycle terminates the walk.
    /// Heads inside a cycle may be visited more than once before the cycle
    /// is detected.
    pub(crate) fn walk_forced<'a>(&'a self, mut visit: impl FnMut(&'a T)) -> Frontier {
        let mut slow = self;
        let mut fast = self;
        let mut steps = 0usize;

        loop {
            let Some(cons) = fast.cell() else {
                return Frontier::Empty;
            };
            visit(&cons.head);
            let Some(next) = cons.tail.get() else {
                return Frontier::Unforced;
            };
            fast = next;
            steps += 1;

            if steps % 2 == 0 {
                if let Some(next) = slow.cell().and_then(|cons| cons.tail.get()) {
                    slow = next;
                }
            }
            if fast.ptr_eq(slow) {
                return Frontier::Cycle;
            }
        }
    }

    /// Forces every tail and returns a handle to the same stream.
    ///
    /// Never returns on an infinite stream.
    pub fn force(&self) -> Stream<T> {
        let forced = self.iter().count();
        log::trace!("forced stream of {} elements", forced);
        self.clone()
    }

    /// Number of elements. Forces the whole stream.
    ///
    /// Never returns on an infinite stream.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The element at `index`, forcing up to it.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// The last element. Forces the whole stream.
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns true if both handles point at the same node.
    ///
    /// Two empty streams are never the same node.
    pub fn ptr_eq(&self, other: &Stream<T>) -> bool {
        match (&self.node, &other.node) {
            (Node::Cons(a), Node::Cons(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Detaches the forced tail when this handle is the node's only owner.
    fn take_unshared_tail(&mut self) -> Option<Stream<T>> {
        match &mut self.node {
            Node::Empty => None,
            Node::Cons(cons) => Rc::get_mut(cons)?.tail.take(),
        }
    }
}

impl<T: Clone> Stream<T> {
    /// Copies the elements into a vector. Forces the whole stream.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        let node = match &self.node {
            Node::Empty => Node::Empty,
            Node::Cons(cons) => Node::Cons(Rc::clone(cons)),
        };
        Self { node }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Stream<T> {
    /// Unlinks unshared forced nodes one at a time so that dropping a long
    /// chain does not recurse once per node.
    fn drop(&mut self) {
        let mut next = self.take_unshared_tail();
        while let Some(mut stream) = next {
            next = stream.take_unshared_tail();
        }
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    /// Element-wise comparison. Forces both streams as far as needed and
    /// never returns for two equal infinite streams.
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stream<T> {}
