use once_cell::unsync::OnceCell;
use std::cell::Cell;
use std::fmt;
use std::thread;

type Init<V> = Box<dyn FnOnce() -> V>;

/// Where the closure of a thunk is in its life.
enum State<V> {
    Pending(Init<V>),
    Running,
    Done,
    /// The closure panicked; there is nothing left to run.
    Poisoned,
}

/// Marks the state poisoned if the closure unwinds.
struct PoisonOnUnwind<'a, V>(&'a Cell<State<V>>);

impl<V> Drop for PoisonOnUnwind<'_, V> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.set(State::Poisoned);
        }
    }
}

/// A suspended computation that runs at most once and caches its result.
///
/// The state machine is `Pending(init) -> Running -> Done`, with
/// `Running -> Poisoned` when `init` panics. A closure that tries to force
/// the very thunk it is computing finds it `Running` and panics instead of
/// evaluating twice.
pub struct Thunk<V> {
    value: OnceCell<V>,
    state: Cell<State<V>>,
}

impl<V> Thunk<V> {
    /// Creates an unforced thunk. `init` is not called here.
    pub fn new<F>(init: F) -> Self
    where
        F: FnOnce() -> V + 'static,
    {
        Self {
            value: OnceCell::new(),
            state: Cell::new(State::Pending(Box::new(init))),
        }
    }

    /// Creates a thunk that is already forced to `value`.
    pub fn forced(value: V) -> Self {
        Self {
            value: OnceCell::from(value),
            state: Cell::new(State::Done),
        }
    }

    /// Returns true once the value has been computed. Never forces.
    pub fn is_forced(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns the cached value without forcing.
    pub fn get(&self) -> Option<&V> {
        self.value.get()
    }

    /// Returns the value, computing and caching it on the first call.
    ///
    /// A panic inside the closure propagates unchanged and leaves the thunk
    /// poisoned.
    ///
    /// # Panics
    ///
    /// Panics if called re-entrantly from inside this thunk's own closure,
    /// or again after that closure panicked.
    pub fn force(&self) -> &V {
        self.value.get_or_init(|| match self.state.replace(State::Running) {
            State::Pending(init) => {
                let guard = PoisonOnUnwind(&self.state);
                let value = init();
                drop(guard);
                self.state.set(State::Done);
                value
            }
            State::Poisoned => {
                self.state.set(State::Poisoned);
                panic!("stream tail forced again after its generator panicked")
            }
            State::Running | State::Done => {
                panic!("stream tail forced re-entrantly while it was being evaluated")
            }
        })
    }

    /// Removes the cached value, leaving the thunk unusable.
    ///
    /// Only used while tearing a node down.
    pub(crate) fn take(&mut self) -> Option<V> {
        self.value.take()
    }

    /// Consumes the thunk and returns the value if it was forced.
    pub fn into_inner(self) -> Option<V> {
        self.value.into_inner()
    }
}

impl<V: fmt::Debug> fmt::Debug for Thunk<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Thunk").field(value).finish(),
            None => f.write_str("Thunk(<unforced>)"),
        }
    }
}
