//! Value-isolating duplication.
//!
//! This module provides the two halves of the copy boundary used by
//! [`ImmutableSequence`](crate::sequence::ImmutableSequence):
//!
//! - [`DeepCopy`]: a type-level capability, "this value can be duplicated
//!   with no shared mutable sub-structure"
//! - [`DeepCopier`]: the collaborator a sequence is parameterized over,
//!   which performs the duplication on every boundary crossing
//!
//! Three copiers are provided:
//!
//! - [`StructuralCopier`]: delegates to [`DeepCopy`] (the default)
//! - [`FnCopier`]: wraps a closure
//! - [`SerdeCopier`]: round-trips through `serde_json` values (requires the
//!   `serde` feature)
//!
//! # Why not `Clone`?
//!
//! `Clone` on `Rc<RefCell<T>>` returns a second handle to the same cell, so
//! a "copy" made with `Clone` can still observe mutations of the original.
//! [`DeepCopy`] allocates fresh storage for every owned indirection.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use isoseq::copy::DeepCopy;
//!
//! let original = Rc::new(RefCell::new(vec![1, 2, 3]));
//! let copy = original.deep_copy().unwrap();
//!
//! original.borrow_mut().push(4);
//! assert_eq!(*copy.borrow(), vec![1, 2, 3]);
//! assert!(!Rc::ptr_eq(&original, &copy));
//! ```

mod impls;
#[cfg(feature = "serde")]
mod serde_copier;
pub(crate) mod traversal;

use std::fmt;

use crate::error::CopyError;

#[cfg(feature = "serde")]
pub use serde_copier::SerdeCopier;

#[cfg(feature = "derive")]
pub use isoseq_derive::DeepCopy;

/// A value that can be duplicated with no shared mutable state.
///
/// After `let copy = value.deep_copy()?`, no mutation performed through
/// `value` (including through interior mutability) is observable through
/// `copy`, and vice versa.
///
/// Types holding handles that cannot be duplicated (for example `Weak`
/// pointers or raw pointers) do not implement this trait, so storing them in
/// a sequence using [`StructuralCopier`] fails to compile.
///
/// A value that reaches itself through `Rc` or `Arc` fails to copy with
/// [`CopyError::Unsupported`] instead of recursing without end. Handles
/// shared between two places inside one value are split: each place gets
/// its own allocation.
///
/// # Deriving
///
/// With the `derive` feature, `#[derive(DeepCopy)]` generates a field-wise
/// implementation:
///
/// ```rust
/// # #[cfg(feature = "derive")]
/// # {
/// use isoseq::copy::DeepCopy;
///
/// #[derive(Debug, PartialEq, DeepCopy)]
/// struct Account {
///     owner: String,
///     balances: Vec<i64>,
/// }
///
/// let account = Account { owner: "alice".to_string(), balances: vec![10, 20] };
/// assert_eq!(account.deep_copy().unwrap(), account);
/// # }
/// ```
pub trait DeepCopy: Sized {
    /// Returns a value-isolated duplicate of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] when some part of the value cannot be read
    /// without blocking or without sharing state.
    fn deep_copy(&self) -> Result<Self, CopyError>;
}

/// Produces value-isolated duplicates of `T`.
///
/// A sequence holds its copier by value and hands a clone of it to every
/// sequence it derives, so each container carries its own copier rather
/// than consulting shared process-wide state.
///
/// Implementations with internal mutable state must be safe to call from
/// every thread the owning sequence is shared with.
pub trait DeepCopier<T> {
    /// Duplicates a single value.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if `value` has a shape this copier cannot
    /// duplicate.
    fn copy(&self, value: &T) -> Result<T, CopyError>;

    /// Duplicates every value in order.
    ///
    /// Equivalent to mapping [`copy`](Self::copy) over `values`; stops at
    /// the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`CopyError`] encountered.
    fn copy_all(&self, values: &[T]) -> Result<Vec<T>, CopyError> {
        values.iter().map(|value| self.copy(value)).collect()
    }
}

/// Copier backed by the [`DeepCopy`] trait.
///
/// Stateless and zero-sized; the default copier of
/// [`ImmutableSequence`](crate::sequence::ImmutableSequence).
///
/// # Examples
///
/// ```rust
/// use isoseq::copy::{DeepCopier, StructuralCopier};
///
/// let copier = StructuralCopier;
/// assert_eq!(copier.copy(&vec![1, 2]).unwrap(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StructuralCopier;

impl<T: DeepCopy> DeepCopier<T> for StructuralCopier {
    #[inline]
    fn copy(&self, value: &T) -> Result<T, CopyError> {
        value.deep_copy()
    }
}

/// Copier backed by a closure.
///
/// Useful when `T` is a foreign type that does not implement
/// [`DeepCopy`], or when copying must be restricted further.
///
/// # Examples
///
/// ```rust
/// use isoseq::copy::{DeepCopier, FnCopier};
/// use isoseq::error::CopyError;
///
/// let copier = FnCopier::new(|value: &i32| {
///     if *value < 0 {
///         Err(CopyError::unsupported::<i32>("negative values are rejected"))
///     } else {
///         Ok(*value)
///     }
/// });
///
/// assert_eq!(copier.copy(&3), Ok(3));
/// assert!(copier.copy(&-1).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct FnCopier<F> {
    function: F,
}

impl<F> FnCopier<F> {
    /// Wraps `function` as a copier.
    #[inline]
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<T, F> DeepCopier<T> for FnCopier<F>
where
    F: Fn(&T) -> Result<T, CopyError>,
{
    #[inline]
    fn copy(&self, value: &T) -> Result<T, CopyError> {
        (self.function)(value)
    }
}

impl<F> fmt::Debug for FnCopier<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FnCopier").finish_non_exhaustive()
    }
}
