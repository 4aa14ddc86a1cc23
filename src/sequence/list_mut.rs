//! The conventional mutable-list interface.
//!
//! [`ListMut`] describes the in-place operations callers expect from a
//! growable list. `Vec<T>` implements it by mutating itself.
//! [`ImmutableSequence`] implements it by rejecting every call with
//! [`UnsupportedOperationError`], so code written against the familiar
//! interface fails loudly instead of silently operating on a copy.
//!
//! # Examples
//!
//! ```rust
//! use isoseq::sequence;
//! use isoseq::sequence::ListMut;
//!
//! fn sort_in_place<L: ListMut<i32>>(list: &mut L) -> Result<(), L::Error> {
//!     list.sort()
//! }
//!
//! let mut vector = vec![3, 1, 2];
//! sort_in_place(&mut vector).unwrap();
//! assert_eq!(vector, vec![1, 2, 3]);
//!
//! let mut immutable = sequence![3, 1, 2].unwrap();
//! assert!(sort_in_place(&mut immutable).is_err());
//! assert_eq!(immutable.to_vec().unwrap(), vec![3, 1, 2]);
//! ```

use std::cmp::Ordering;
use std::convert::Infallible;

use super::ImmutableSequence;
use crate::error::UnsupportedOperationError;

/// In-place list operations.
pub trait ListMut<T> {
    /// Error returned when the operation is not available.
    type Error;

    /// Appends `value` to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the list cannot be mutated.
    fn push(&mut self, value: T) -> Result<(), Self::Error>;

    /// Removes and returns the element at `index`, or `None` if `index` is
    /// out of bounds.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the list cannot be mutated.
    fn remove(&mut self, index: usize) -> Result<Option<T>, Self::Error>;

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the list cannot be mutated.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Sorts the list in place with `comparator`.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the list cannot be mutated.
    fn sort_by<F>(&mut self, comparator: F) -> Result<(), Self::Error>
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts the list in place in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the list cannot be mutated.
    fn sort(&mut self) -> Result<(), Self::Error>
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp)
    }
}

impl<T> ListMut<T> for Vec<T> {
    type Error = Infallible;

    fn push(&mut self, value: T) -> Result<(), Self::Error> {
        Self::push(self, value);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Option<T>, Self::Error> {
        Ok((index < self.len()).then(|| Self::remove(self, index)))
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Self::clear(self);
        Ok(())
    }

    fn sort_by<F>(&mut self, comparator: F) -> Result<(), Self::Error>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_by(comparator);
        Ok(())
    }
}

const fn reject(operation: &'static str, alternative: &'static str) -> UnsupportedOperationError {
    UnsupportedOperationError {
        operation,
        alternative,
    }
}

fn rejected<R>(error: UnsupportedOperationError) -> Result<R, UnsupportedOperationError> {
    tracing::warn!(
        operation = error.operation,
        alternative = error.alternative,
        "rejected in-place mutation of immutable sequence"
    );
    Err(error)
}

impl<T, C> ListMut<T> for ImmutableSequence<T, C> {
    type Error = UnsupportedOperationError;

    fn push(&mut self, _value: T) -> Result<(), Self::Error> {
        rejected(reject("push", "insert"))
    }

    fn remove(&mut self, _index: usize) -> Result<Option<T>, Self::Error> {
        rejected(reject("remove", "delete"))
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        rejected(reject("clear", "ImmutableSequence::new"))
    }

    fn sort_by<F>(&mut self, _comparator: F) -> Result<(), Self::Error>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        rejected(reject("sort_by", "sorted_by"))
    }

    fn sort(&mut self) -> Result<(), Self::Error>
    where
        T: Ord,
    {
        rejected(reject("sort", "sorted"))
    }
}
