use crate::stream::{Cons, Stream};

/// Single-pass forward cursor over a stream.
///
/// Holds only the node it is positioned on. Each `advance` overwrites that
/// handle with the node's tail, so visited nodes become collectible as soon
/// as nothing else refers to them.
pub struct Cursor<T> {
    node: Stream<T>,
    started: bool,
}

impl<T> Cursor<T> {
    /// Positions a cursor before the first element of `stream`.
    pub fn new(stream: Stream<T>) -> Self {
        Self {
            node: stream,
            started: false,
        }
    }

    /// Moves to the next element, forcing one tail if needed.
    ///
    /// Returns false once the stream is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.started {
            let next = match self.node.cell() {
                Some(cons) => cons.tail().clone(),
                None => return false,
            };
            self.node = next;
        } else {
            self.started = true;
        }
        !self.node.is_empty()
    }

    /// The element under the cursor; `None` before the first `advance` and
    /// after exhaustion.
    pub fn current(&self) -> Option<&T> {
        if self.started {
            self.node.head_option()
        } else {
            None
        }
    }

    /// The unvisited remainder, starting at the current element.
    pub fn remaining(&self) -> &Stream<T> {
        &self.node
    }
}

/// Borrowing iterator yielding `&T`.
///
/// A tail is forced only when the element after it is requested, so taking
/// `n` elements forces `n - 1` tails. The borrow keeps the starting node,
/// and therefore every visited node, alive. Use [`IntoIter`] to walk without
/// retention.
pub struct Iter<'a, T> {
    node: &'a Stream<T>,
    yielded: Option<&'a Cons<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(previous) = self.yielded.take() {
            self.node = previous.tail();
        }
        let cons = self.node.cell()?;
        self.yielded = Some(cons);
        Some(&cons.head)
    }
}

/// Owning iterator yielding clones of the elements, built on [`Cursor`].
pub struct IntoIter<T> {
    cursor: Cursor<T>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.advance() {
            self.cursor.current().cloned()
        } else {
            None
        }
    }
}

impl<T> Stream<T> {
    /// Returns a borrowing iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self,
            yielded: None,
        }
    }

    /// Returns a cursor positioned before the first element.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self.clone())
    }
}

impl<T: Clone> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            cursor: Cursor::new(self),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
