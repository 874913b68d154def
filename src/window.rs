//! Windowing: sliding and grouped windows, tails and inits.

use crate::error::{Result, StreamError};
use crate::stream::Stream;

impl<T: Clone + 'static> Stream<T> {
    /// Lazy stream of windows of `size` elements whose starts are `step`
    /// apart.
    ///
    /// Each window is copied into a fully forced stream when its node is
    /// created. A window shorter than `size` is produced only when it holds
    /// elements no earlier window has covered, so a trailing window that
    /// starts past the end contributes nothing.
    ///
    /// ```
    /// use stream_rs::Stream;
    ///
    /// let windows = Stream::range(0, 6).sliding(3, 2).unwrap();
    /// let windows: Vec<Vec<i32>> = windows.iter().map(|w| w.to_vec()).collect();
    /// assert_eq!(windows, vec![vec![0, 1, 2], vec![2, 3, 4], vec![4, 5]]);
    /// ```
    pub fn sliding(&self, size: usize, step: usize) -> Result<Stream<Stream<T>>> {
        if size == 0 {
            return Err(StreamError::invalid("size", "must be positive"));
        }
        if step == 0 {
            return Err(StreamError::invalid("step", "must be positive"));
        }
        Ok(windows_from(self.clone(), size, step, 0))
    }

    /// Non-overlapping windows of `size` elements; the last may be shorter.
    pub fn grouped(&self, size: usize) -> Result<Stream<Stream<T>>> {
        self.sliding(size, size)
    }

    /// Every suffix, from the whole stream down to the empty one.
    pub fn tails(&self) -> Stream<Stream<T>> {
        if self.is_empty() {
            return Stream::single(Stream::empty());
        }
        let rest = self.clone();
        Stream::cons(self.clone(), move || rest.tail_or_empty().tails())
    }

    /// Every non-empty suffix.
    pub fn non_empty_tails(&self) -> Stream<Stream<T>> {
        if self.is_empty() {
            return Stream::empty();
        }
        let rest = self.clone();
        Stream::cons(self.clone(), move || rest.tail_or_empty().non_empty_tails())
    }

    /// Every prefix, longest first, ending with the empty stream.
    ///
    /// Counts the stream up front; never returns on an infinite one.
    pub fn inits(&self) -> Stream<Stream<T>> {
        let len = self.len();
        let source = self.clone();
        Stream::tabulate(len + 1, move |i| source.take(len - i))
    }
}

/// Windows starting at `source`; `seen` is how many of its leading elements
/// the previous window already covered.
fn windows_from<T: Clone + 'static>(
    source: Stream<T>,
    size: usize,
    step: usize,
    seen: usize,
) -> Stream<Stream<T>> {
    let window: Vec<T> = source.iter().take(size).cloned().collect();
    let len = window.len();
    if len <= seen {
        return Stream::empty();
    }
    Stream::cons(Stream::from(window), move || {
        if len < size {
            Stream::empty()
        } else {
            windows_from(source.skip(step), size, step, len.saturating_sub(step))
        }
    })
}
