//! # isoseq
//!
//! An immutable, value-isolated sequence container.
//!
//! ## Overview
//!
//! [`ImmutableSequence`](sequence::ImmutableSequence) is a list whose stored
//! contents can never be observed to change, and whose elements are never
//! aliased with data the caller holds or receives:
//!
//! - **Copy on ingress**: construction and `insert` deep-copy their inputs
//! - **Copy on egress**: `get` and iteration return deep copies
//! - **Non-destructive updates**: `insert`, `delete` and `sorted_by` return
//!   new sequences and leave the receiver untouched
//! - **Rejected in-place mutation**: the [`ListMut`](sequence::ListMut)
//!   entry points always fail with
//!   [`UnsupportedOperationError`](error::UnsupportedOperationError)
//!
//! Duplication is performed by a [`DeepCopier`](copy::DeepCopier) chosen per
//! sequence. The default, [`StructuralCopier`](copy::StructuralCopier),
//! relies on the [`DeepCopy`](copy::DeepCopy) trait, so element types that
//! cannot be isolated are rejected at compile time.
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(DeepCopy)]` (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for sequences and the
//!   [`SerdeCopier`](copy::SerdeCopier)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use isoseq::prelude::*;
//!
//! let numbers = sequence![1, 2, 3].unwrap();
//!
//! assert_eq!(numbers.insert(4).unwrap().to_vec().unwrap(), vec![1, 2, 3, 4]);
//! assert_eq!(numbers.delete(0).unwrap().to_vec().unwrap(), vec![2, 3]);
//! assert_eq!(numbers.delete(usize::MAX).unwrap(), numbers);
//! assert_eq!(
//!     numbers.sorted_by(|left, right| right.cmp(left)).unwrap().to_vec().unwrap(),
//!     vec![3, 2, 1]
//! );
//! assert!(numbers.get(3).is_err());
//! assert_eq!(numbers.to_vec().unwrap(), vec![1, 2, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets `#[derive(DeepCopy)]` refer to `::isoseq` from inside this crate.
extern crate self as isoseq;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and the `sequence!` macro.
///
/// # Usage
///
/// ```rust
/// use isoseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::copy::{DeepCopier, DeepCopy, FnCopier, StructuralCopier};
    pub use crate::error::{CopyError, IndexError, SequenceError, UnsupportedOperationError};
    pub use crate::sequence;
    pub use crate::sequence::{ImmutableSequence, ListMut};

    #[cfg(feature = "serde")]
    pub use crate::copy::SerdeCopier;
}

#[macro_use]
mod macros;

pub mod copy;
pub mod error;
pub mod sequence;
