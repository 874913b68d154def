use crate::stream::Stream;
use once_cell::unsync::OnceCell;
use std::rc::Rc;

/// A settable slot holding a stream that is defined in terms of itself.
///
/// Closures capture a clone of the slot before the stream exists and read it
/// only when their thunk is forced, by which time the slot has been bound.
/// A stream tied this way references itself and is never reclaimed.
pub struct Deferred<T> {
    slot: Rc<OnceCell<Stream<T>>>,
}

impl<T> Deferred<T> {
    /// Creates an unbound slot.
    pub fn new() -> Self {
        Self {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// Binds the slot. Fails, handing the stream back, if already bound.
    pub fn bind(&self, stream: Stream<T>) -> Result<(), Stream<T>> {
        self.slot.set(stream)?;
        log::debug!("bound deferred stream");
        Ok(())
    }

    /// Returns true once the slot has been bound.
    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The bound stream, or `None` before binding.
    pub fn try_get(&self) -> Option<Stream<T>> {
        self.slot.get().cloned()
    }

    /// The bound stream.
    ///
    /// # Panics
    ///
    /// Panics if the slot has not been bound yet, which means a closure
    /// capturing it was forced while the stream was still being defined.
    pub fn get(&self) -> Stream<T> {
        match self.slot.get() {
            Some(stream) => stream.clone(),
            None => panic!("deferred stream read before it was bound"),
        }
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stream<T> {
    /// Ties a knot: `define` receives a slot that will hold the stream it
    /// returns.
    ///
    /// ```
    /// use stream_rs::Stream;
    ///
    /// let fibs = Stream::recursive(|fibs| {
    ///     let fibs = fibs.clone();
    ///     Stream::cons(0u64, move || {
    ///         Stream::cons(1, move || {
    ///             let fibs = fibs.get();
    ///             let rest = fibs.tail().unwrap_or_default();
    ///             fibs.zip_with(&rest, |a: &u64, b: &u64| a + b)
    ///         })
    ///     })
    /// });
    /// assert_eq!(fibs.take(8).to_vec(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
    /// ```
    pub fn recursive<F>(define: F) -> Stream<T>
    where
        F: FnOnce(&Deferred<T>) -> Stream<T>,
    {
        let slot = Deferred::new();
        let stream = define(&slot);
        // A fresh slot is only bound here.
        let _ = slot.bind(stream.clone());
        stream
    }
}
