//! # stream-rs - Lazy, Memoizing Streams
//!
//! A persistent linked sequence whose head is known eagerly and whose tail
//! is computed on first access and then cached. Streams can describe
//! infinite series while holding in memory only the part that has been
//! observed.
//!
//! Every node is immutable once built:
//! 1. **Laziness**: a tail is not computed until something asks for it
//! 2. **Memoization**: a tail is computed at most once and every later
//!    access returns the same node
//! 3. **Sharing**: derived streams reuse the nodes of their sources
//!
//! ## Example
//!
//! ```
//! use stream_rs::Stream;
//!
//! let naturals = Stream::iterate(0u64, |n| n + 1);
//! let squares = naturals.map(|n| n * n).filter(|n| n % 2 == 1);
//!
//! assert_eq!(squares.take(4).to_vec(), vec![1, 9, 25, 49]);
//! // Only the observed prefix was forced.
//! assert_eq!(squares.to_string(), "Stream(1, 9, 25, 49, ?)");
//! ```
//!
//! ## Termination
//!
//! Operations that need the whole stream (`len`, `fold`, `reverse`,
//! `scan_right`, `join`, the `last_*` searches) never return on an infinite
//! stream. Bound the input with `take` first.

mod builder;
mod combinatorics;
mod construct;
mod deferred;
mod edit;
mod error;
mod fold;
mod format;
mod iter;
mod search;
mod stream;
mod thunk;
mod transform;
mod window;

#[cfg(test)]
mod tests;

pub use builder::StreamBuilder;
pub use deferred::Deferred;
pub use error::{Result, StreamError};
pub use iter::{Cursor, IntoIter, Iter};
pub use stream::Stream;
pub use thunk::Thunk;
