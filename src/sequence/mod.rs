//! Immutable, value-isolated sequences.
//!
//! - [`ImmutableSequence`]: the container
//! - [`ImmutableSequenceIterator`]: iterator yielding copies of its elements
//! - [`ListMut`]: the in-place list interface, which the container rejects
//!
//! # Isolation
//!
//! A sequence never hands out a reference to an element it stores, and never
//! stores a value the caller can still reach:
//!
//! ```rust
//! use isoseq::sequence;
//!
//! let mut source = vec![vec![1, 2, 3]];
//! let sequence = sequence![source[0].clone()].unwrap();
//!
//! source[0].push(4);
//! let mut read = sequence.get(0).unwrap();
//! read.push(5);
//!
//! assert_eq!(sequence.get(0).unwrap(), vec![1, 2, 3]);
//! ```
//!
//! # Concurrency
//!
//! A sequence has no interior mutability of its own. It is `Send` and `Sync`
//! exactly when its element and copier types are, and concurrent reads of
//! one instance need no external locking.
//!
//! A `Mutex` or `RwLock` inside a stored element can only be reached by the
//! sequence's own copies, so reads wait for it briefly rather than failing.
//! Values coming in from the caller are different: their locks are only
//! tried, and a lock held elsewhere fails the copy with
//! [`CopyError::Locked`](crate::error::CopyError::Locked).

mod immutable_sequence;
mod list_mut;

pub use immutable_sequence::ImmutableSequence;
pub use immutable_sequence::ImmutableSequenceIterator;
pub use list_mut::ListMut;

use crate::copy::StructuralCopier;

static_assertions::assert_impl_all!(ImmutableSequence<i32>: Send, Sync);
static_assertions::assert_impl_all!(ImmutableSequence<String, StructuralCopier>: Send, Sync);
static_assertions::assert_impl_all!(ImmutableSequence<std::sync::Arc<std::sync::Mutex<i32>>>: Send, Sync);
static_assertions::assert_not_impl_any!(ImmutableSequence<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(ImmutableSequence<std::cell::Cell<i32>>: Sync);
