//! Error types for immutable sequences.
//!
//! Three failure kinds can surface from an [`ImmutableSequence`]:
//!
//! - [`IndexError`]: an indexed read outside `[0, len())`
//! - [`CopyError`]: a value could not be duplicated without sharing state
//! - [`UnsupportedOperationError`]: an in-place mutation was requested
//!
//! [`SequenceError`] unifies the first two for operations that can fail
//! either way.
//!
//! [`ImmutableSequence`]: crate::sequence::ImmutableSequence

use std::fmt;

/// Represents a read outside the bounds of a sequence.
///
/// Only [`ImmutableSequence::get`](crate::sequence::ImmutableSequence::get)
/// produces this error. Deleting at an out-of-range index is not an error.
///
/// # Examples
///
/// ```rust
/// use isoseq::error::IndexError;
///
/// let error = IndexError { index: 5, length: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "index 5 is out of bounds for sequence of length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexError {
    /// The index that was requested.
    pub index: usize,
    /// The length of the sequence at the time of the request.
    pub length: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "index {} is out of bounds for sequence of length {}",
            self.index, self.length
        )
    }
}

impl std::error::Error for IndexError {}

/// Represents a failure to produce a value-isolated duplicate.
///
/// Raised by a [`DeepCopier`](crate::copy::DeepCopier) or a
/// [`DeepCopy`](crate::copy::DeepCopy) implementation when the value (or
/// something it contains) cannot be duplicated without either sharing
/// mutable state or blocking.
///
/// # Examples
///
/// ```rust
/// use isoseq::error::CopyError;
///
/// let error = CopyError::Borrowed { type_name: "RefCell<i32>" };
/// assert_eq!(
///     format!("{error}"),
///     "cannot copy RefCell<i32>: value is mutably borrowed"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CopyError {
    /// A `RefCell` was mutably borrowed while being copied.
    Borrowed {
        /// Name of the type that could not be read.
        type_name: &'static str,
    },
    /// A lock was held elsewhere while being copied.
    Locked {
        /// Name of the type that could not be read.
        type_name: &'static str,
    },
    /// A lock was poisoned by a panicking writer.
    Poisoned {
        /// Name of the type that could not be read.
        type_name: &'static str,
    },
    /// A serialization round-trip failed.
    Serialization {
        /// Name of the type being copied.
        type_name: &'static str,
        /// Message reported by the serializer.
        message: String,
    },
    /// The value has a shape the copier does not support, for example a
    /// reference cycle.
    Unsupported {
        /// Name of the type being copied.
        type_name: &'static str,
        /// Why the value could not be copied.
        reason: String,
    },
}

impl CopyError {
    /// Creates a [`CopyError::Unsupported`] for type `T`.
    ///
    /// Intended for hand-written [`DeepCopy`](crate::copy::DeepCopy) and
    /// [`DeepCopier`](crate::copy::DeepCopier) implementations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::error::CopyError;
    ///
    /// let error = CopyError::unsupported::<u8>("handles cannot be duplicated");
    /// assert_eq!(format!("{error}"), "cannot copy u8: handles cannot be duplicated");
    /// ```
    #[must_use]
    pub fn unsupported<T: ?Sized>(reason: impl Into<String>) -> Self {
        Self::Unsupported {
            type_name: std::any::type_name::<T>(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the type that failed to copy.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Borrowed { type_name }
            | Self::Locked { type_name }
            | Self::Poisoned { type_name }
            | Self::Serialization { type_name, .. }
            | Self::Unsupported { type_name, .. } => type_name,
        }
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrowed { type_name } => {
                write!(formatter, "cannot copy {type_name}: value is mutably borrowed")
            }
            Self::Locked { type_name } => {
                write!(formatter, "cannot copy {type_name}: lock is held elsewhere")
            }
            Self::Poisoned { type_name } => {
                write!(formatter, "cannot copy {type_name}: lock is poisoned")
            }
            Self::Serialization { type_name, message } => {
                write!(formatter, "cannot copy {type_name}: round-trip failed: {message}")
            }
            Self::Unsupported { type_name, reason } => {
                write!(formatter, "cannot copy {type_name}: {reason}")
            }
        }
    }
}

impl std::error::Error for CopyError {}

/// Represents a request for in-place mutation of an immutable sequence.
///
/// Always raised by the [`ListMut`](crate::sequence::ListMut) entry points
/// of [`ImmutableSequence`](crate::sequence::ImmutableSequence), never
/// conditionally.
///
/// # Examples
///
/// ```rust
/// use isoseq::error::UnsupportedOperationError;
///
/// let error = UnsupportedOperationError {
///     operation: "sort_by",
///     alternative: "sorted_by",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "sort_by mutates in place and is not supported by ImmutableSequence. Use sorted_by() instead."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsupportedOperationError {
    /// The rejected mutating operation.
    pub operation: &'static str,
    /// The non-destructive operation to call instead.
    pub alternative: &'static str,
}

impl fmt::Display for UnsupportedOperationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} mutates in place and is not supported by ImmutableSequence. Use {}() instead.",
            self.operation, self.alternative
        )
    }
}

impl std::error::Error for UnsupportedOperationError {}

/// Errors from sequence reads, which can fail on bounds or on copying.
///
/// # Examples
///
/// ```rust
/// use isoseq::error::{IndexError, SequenceError};
///
/// let error = SequenceError::from(IndexError { index: 3, length: 3 });
/// assert!(matches!(error, SequenceError::Index(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SequenceError {
    /// The requested index was out of bounds.
    Index(IndexError),
    /// The element could not be copied out.
    Copy(CopyError),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(error) => write!(formatter, "{error}"),
            Self::Copy(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Index(error) => Some(error),
            Self::Copy(error) => Some(error),
        }
    }
}

impl From<IndexError> for SequenceError {
    fn from(error: IndexError) -> Self {
        Self::Index(error)
    }
}

impl From<CopyError> for SequenceError {
    fn from(error: CopyError) -> Self {
        Self::Copy(error)
    }
}
