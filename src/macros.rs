//! The `sequence!` construction macro.

/// Creates an [`ImmutableSequence`](crate::sequence::ImmutableSequence) from
/// a list of values.
///
/// Expands to [`ImmutableSequence::from_slice`], so every value is deep
/// copied and the result is a `Result<ImmutableSequence<T>, CopyError>`.
///
/// # Syntax
///
/// - `sequence![]` - An empty sequence
/// - `sequence![a, b, c]` - A sequence of `a`, `b`, `c` in that order
///
/// # Examples
///
/// ```rust
/// use isoseq::sequence;
/// use isoseq::sequence::ImmutableSequence;
///
/// let numbers = sequence![1, 2, 3].unwrap();
/// assert_eq!(numbers.len(), 3);
///
/// let empty: ImmutableSequence<String> = sequence![].unwrap();
/// assert!(empty.is_empty());
/// ```
///
/// [`ImmutableSequence::from_slice`]: crate::sequence::ImmutableSequence::from_slice
#[macro_export]
macro_rules! sequence {
    () => {
        ::core::result::Result::<_, $crate::error::CopyError>::Ok(
            $crate::sequence::ImmutableSequence::new(),
        )
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::ImmutableSequence::from_slice(&[$($element),+])
    };
}
