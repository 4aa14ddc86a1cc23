//! Immutable, value-isolated sequence.
//!
//! This module provides [`ImmutableSequence`], an ordered container whose
//! contents never change after construction and never alias caller data.
//!
//! # Overview
//!
//! Every element crossing the container boundary is duplicated through the
//! sequence's [`DeepCopier`]:
//!
//! - on the way in (construction and [`insert`](ImmutableSequence::insert))
//! - on the way out ([`get`](ImmutableSequence::get), iteration)
//!
//! Operations that would mutate a conventional list return a new sequence
//! with its own backing store instead. Each of them copies the whole store,
//! so they are O(n).
//!
//! # Examples
//!
//! ```rust
//! use isoseq::sequence;
//!
//! let numbers = sequence![1, 2, 3].unwrap();
//!
//! let extended = numbers.insert(4).unwrap();
//! assert_eq!(extended.to_vec().unwrap(), vec![1, 2, 3, 4]);
//!
//! let shortened = numbers.delete(0).unwrap();
//! assert_eq!(shortened.to_vec().unwrap(), vec![2, 3]);
//!
//! let descending = numbers.sorted_by(|left, right| right.cmp(left)).unwrap();
//! assert_eq!(descending.to_vec().unwrap(), vec![3, 2, 1]);
//!
//! // The receiver is never modified
//! assert_eq!(numbers.to_vec().unwrap(), vec![1, 2, 3]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::copy::traversal;
use crate::copy::{DeepCopier, DeepCopy, StructuralCopier};
use crate::error::{CopyError, IndexError, SequenceError};

/// An immutable sequence that deep-copies every element crossing its
/// boundary.
///
/// The copier `C` is chosen per instance and passed on to every sequence
/// derived from this one. It defaults to [`StructuralCopier`], which uses
/// the [`DeepCopy`] trait.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `new`       | O(1)       |
/// | `len`       | O(1)       |
/// | `get`       | O(copy(T)) |
/// | `insert`    | O(n)       |
/// | `delete`    | O(n)       |
/// | `sorted_by` | O(n log n) |
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use isoseq::sequence::ImmutableSequence;
///
/// let shared = Rc::new(RefCell::new(vec![1, 2, 3]));
/// let sequence = ImmutableSequence::from_slice(&[Rc::clone(&shared)]).unwrap();
///
/// // Mutating the caller's value is not visible through the sequence
/// shared.borrow_mut().push(4);
/// assert_eq!(sequence.get(0).unwrap().borrow().len(), 3);
///
/// // Mutating a returned value is not visible either
/// let returned = sequence.get(0).unwrap();
/// returned.borrow_mut().clear();
/// assert_eq!(sequence.get(0).unwrap().borrow().len(), 3);
/// ```
pub struct ImmutableSequence<T, C = StructuralCopier> {
    /// Deep copies owned by this sequence alone. Never mutated.
    elements: Vec<T>,
    copier: C,
}

impl<T> ImmutableSequence<T> {
    /// Creates an empty sequence using [`StructuralCopier`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::sequence::ImmutableSequence;
    ///
    /// let sequence: ImmutableSequence<i32> = ImmutableSequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_copier(StructuralCopier)
    }
}

impl<T: DeepCopy> ImmutableSequence<T> {
    /// Creates a sequence holding deep copies of `items`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if any item cannot be copied. No sequence is
    /// produced in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::from_slice(&["a".to_string(), "b".to_string()]).unwrap();
    /// assert_eq!(sequence.len(), 2);
    /// ```
    pub fn from_slice(items: &[T]) -> Result<Self, CopyError> {
        Self::from_slice_with(items, StructuralCopier)
    }

    /// Creates a sequence from any iterator of values.
    ///
    /// The values are copied even though they are passed by value, because
    /// they may still share state with something the caller holds.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if any value cannot be copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::from_values(1..=4).unwrap();
    /// assert_eq!(sequence.to_vec().unwrap(), vec![1, 2, 3, 4]);
    /// ```
    pub fn from_values<I>(values: I) -> Result<Self, CopyError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_values_with(values, StructuralCopier)
    }
}

impl<T, C> ImmutableSequence<T, C> {
    /// Creates an empty sequence that will copy with `copier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::copy::StructuralCopier;
    /// use isoseq::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::<u8, _>::with_copier(StructuralCopier);
    /// assert_eq!(sequence.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_copier(copier: C) -> Self {
        Self {
            elements: Vec::new(),
            copier,
        }
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements. Alias of [`len`](Self::len).
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Wraps elements that are already exclusively owned copies.
    const fn from_copies(elements: Vec<T>, copier: C) -> Self {
        Self { elements, copier }
    }
}

impl<T, C> ImmutableSequence<T, C>
where
    C: DeepCopier<T> + Clone,
{
    /// Creates a sequence holding copies of `items` made with `copier`.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if `copier` fails on any item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::copy::FnCopier;
    /// use isoseq::error::CopyError;
    /// use isoseq::sequence::ImmutableSequence;
    ///
    /// let even_only = FnCopier::new(|value: &i32| {
    ///     if value % 2 == 0 {
    ///         Ok(*value)
    ///     } else {
    ///         Err(CopyError::unsupported::<i32>("odd"))
    ///     }
    /// });
    ///
    /// assert!(ImmutableSequence::from_slice_with(&[2, 4], even_only).is_ok());
    /// assert!(ImmutableSequence::from_slice_with(&[2, 3], even_only).is_err());
    /// ```
    pub fn from_slice_with(items: &[T], copier: C) -> Result<Self, CopyError> {
        let elements = copier.copy_all(items).inspect_err(log_copy_failure)?;
        tracing::trace!(length = elements.len(), "constructed immutable sequence");
        Ok(Self::from_copies(elements, copier))
    }

    /// Creates a sequence from an iterator of values, copying with `copier`.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if `copier` fails on any value.
    pub fn from_values_with<I>(values: I, copier: C) -> Result<Self, CopyError>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        Self::from_slice_with(&values, copier)
    }

    /// Returns a deep copy of the element at `index`.
    ///
    /// Mutating the returned value has no effect on the sequence.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::Index`] if `index >= len()`
    /// - [`SequenceError::Copy`] if the element cannot be copied
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::error::{IndexError, SequenceError};
    /// use isoseq::sequence;
    ///
    /// let sequence = sequence![10, 20].unwrap();
    /// assert_eq!(sequence.get(1), Ok(20));
    /// assert_eq!(
    ///     sequence.get(2),
    ///     Err(SequenceError::Index(IndexError { index: 2, length: 2 }))
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<T, SequenceError> {
        let element = self.elements.get(index).ok_or_else(|| {
            tracing::debug!(index, length = self.len(), "read outside sequence bounds");
            IndexError {
                index,
                length: self.len(),
            }
        })?;
        Ok(self.copy_out(element)?)
    }

    /// Returns a deep copy of the first element, or `None` if empty.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if the element cannot be copied.
    pub fn first(&self) -> Result<Option<T>, CopyError> {
        self.elements
            .first()
            .map(|element| self.copy_out(element))
            .transpose()
    }

    /// Returns a deep copy of the last element, or `None` if empty.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if the element cannot be copied.
    pub fn last(&self) -> Result<Option<T>, CopyError> {
        self.elements
            .last()
            .map(|element| self.copy_out(element))
            .transpose()
    }

    /// Returns a new sequence with a copy of `value` appended.
    ///
    /// Accepts either `T` or `&T`. The receiver is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if `value` or an existing element cannot be
    /// copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::sequence;
    ///
    /// let sequence = sequence![1, 2, 3].unwrap();
    /// let extended = sequence.insert(4).unwrap();
    ///
    /// assert_eq!(extended.len(), 4);
    /// assert_eq!(extended.get(3), Ok(4));
    /// assert_eq!(sequence.len(), 3);
    /// ```
    pub fn insert<V>(&self, value: V) -> Result<Self, CopyError>
    where
        V: Borrow<T>,
    {
        let appended = self
            .copier
            .copy(value.borrow())
            .inspect_err(log_copy_failure)?;
        let mut elements = Vec::with_capacity(self.len() + 1);
        elements.extend(self.copy_store()?);
        elements.push(appended);
        Ok(Self::from_copies(elements, self.copier.clone()))
    }

    /// Returns a new sequence without the element at `index`.
    ///
    /// An `index` outside `[0, len())` is not an error: the result is a
    /// full copy of this sequence, same length and same order. Unlike
    /// [`get`](Self::get), which rejects such an index.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if a remaining element cannot be copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::sequence;
    ///
    /// let sequence = sequence!['a', 'b', 'c'].unwrap();
    /// assert_eq!(sequence.delete(1).unwrap().to_vec().unwrap(), vec!['a', 'c']);
    /// assert_eq!(sequence.delete(7).unwrap().to_vec().unwrap(), vec!['a', 'b', 'c']);
    /// ```
    pub fn delete(&self, index: usize) -> Result<Self, CopyError> {
        if index >= self.len() {
            tracing::trace!(
                index,
                length = self.len(),
                "delete outside sequence bounds, returning full copy"
            );
            return self.try_clone();
        }
        let _waiting = traversal::wait_for_locks();
        let elements = self
            .elements
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, element)| self.copier.copy(element))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(log_copy_failure)?;
        Ok(Self::from_copies(elements, self.copier.clone()))
    }

    /// Returns a new sequence with the elements ordered by `comparator`.
    ///
    /// The sort is stable: elements the comparator considers equal keep
    /// their relative order. The comparator only ever sees scratch copies,
    /// never the stored elements of either sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if an element cannot be copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::sequence;
    ///
    /// let sequence = sequence![(1, 'a'), (0, 'b'), (1, 'c')].unwrap();
    /// let sorted = sequence.sorted_by(|left, right| left.0.cmp(&right.0)).unwrap();
    /// assert_eq!(sorted.to_vec().unwrap(), vec![(0, 'b'), (1, 'a'), (1, 'c')]);
    /// ```
    pub fn sorted_by<F>(&self, comparator: F) -> Result<Self, CopyError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut scratch = self.copy_store()?;
        scratch.sort_by(comparator);
        let _waiting = traversal::wait_for_locks();
        let elements = self
            .copier
            .copy_all(&scratch)
            .inspect_err(log_copy_failure)?;
        Ok(Self::from_copies(elements, self.copier.clone()))
    }

    /// Returns a new sequence sorted by a key extracted from each element.
    ///
    /// Stable, like [`sorted_by`](Self::sorted_by).
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if an element cannot be copied.
    pub fn sorted_by_key<K, F>(&self, mut key: F) -> Result<Self, CopyError>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sorted_by(|left, right| key(left).cmp(&key(right)))
    }

    /// Returns a new sequence in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if an element cannot be copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::sequence;
    ///
    /// let sequence = sequence![3, 2, 1].unwrap();
    /// assert_eq!(sequence.sorted().unwrap().to_vec().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn sorted(&self) -> Result<Self, CopyError>
    where
        T: Ord,
    {
        self.sorted_by(Ord::cmp)
    }

    /// Returns the index of the first element satisfying `predicate`.
    ///
    /// The predicate is evaluated on a fresh copy of each element, so it
    /// cannot retain a handle into the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if an element cannot be copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::sequence;
    ///
    /// let sequence = sequence![1, 3, 3, 5].unwrap();
    /// assert_eq!(sequence.position(|value| *value == 3), Ok(Some(1)));
    /// assert_eq!(sequence.position(|value| *value > 9), Ok(None));
    /// ```
    pub fn position<P>(&self, mut predicate: P) -> Result<Option<usize>, CopyError>
    where
        P: FnMut(&T) -> bool,
    {
        for (index, element) in self.elements.iter().enumerate() {
            if predicate(&self.copy_out(element)?) {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Returns `true` if some element equals `value`.
    ///
    /// Like [`position`](Self::position), the comparison runs on copies, so
    /// a `PartialEq` reaching through interior mutability never touches the
    /// stored elements.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if an element cannot be copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::sequence;
    ///
    /// let sequence = sequence![1, 2, 3].unwrap();
    /// assert_eq!(sequence.contains(&2), Ok(true));
    /// assert_eq!(sequence.contains(&5), Ok(false));
    /// ```
    pub fn contains(&self, value: &T) -> Result<bool, CopyError>
    where
        T: PartialEq,
    {
        self.position(|element| element == value)
            .map(|found| found.is_some())
    }

    /// Returns an independent sequence with the same contents.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if an element cannot be copied.
    pub fn try_clone(&self) -> Result<Self, CopyError> {
        Ok(Self::from_copies(self.copy_store()?, self.copier.clone()))
    }

    /// Returns copies of all elements, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError`] if an element cannot be copied.
    pub fn to_vec(&self) -> Result<Vec<T>, CopyError> {
        self.copy_store()
    }

    /// Returns an iterator yielding a fresh copy of each element.
    ///
    /// The iterator is finite and can be restarted by cloning it or by
    /// calling `iter` again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoseq::sequence;
    ///
    /// let sequence = sequence![1, 2, 3].unwrap();
    /// let squares: Vec<i32> = sequence
    ///     .iter()
    ///     .map(|element| element.map(|value| value * value))
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(squares, vec![1, 4, 9]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ImmutableSequenceIterator<'_, T, C> {
        ImmutableSequenceIterator {
            elements: self.elements.iter(),
            copier: &self.copier,
        }
    }

    /// Copies an element this sequence owns.
    fn copy_out(&self, element: &T) -> Result<T, CopyError> {
        let _waiting = traversal::wait_for_locks();
        self.copier.copy(element).inspect_err(log_copy_failure)
    }

    fn copy_store(&self) -> Result<Vec<T>, CopyError> {
        let _waiting = traversal::wait_for_locks();
        self.copier
            .copy_all(&self.elements)
            .inspect_err(log_copy_failure)
    }
}

fn log_copy_failure(error: &CopyError) {
    tracing::debug!(%error, "deep copy failed");
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator yielding deep copies of the elements of an
/// [`ImmutableSequence`].
///
/// Each item is copied independently when it is produced, so a failure on
/// one element does not prevent reading the others.
pub struct ImmutableSequenceIterator<'a, T, C> {
    elements: std::slice::Iter<'a, T>,
    copier: &'a C,
}

impl<T, C: DeepCopier<T>> Iterator for ImmutableSequenceIterator<'_, T, C> {
    type Item = Result<T, CopyError>;

    fn next(&mut self) -> Option<Self::Item> {
        let _waiting = traversal::wait_for_locks();
        self.elements.next().map(|element| self.copier.copy(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T, C: DeepCopier<T>> DoubleEndedIterator for ImmutableSequenceIterator<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let _waiting = traversal::wait_for_locks();
        self.elements
            .next_back()
            .map(|element| self.copier.copy(element))
    }
}

impl<T, C: DeepCopier<T>> ExactSizeIterator for ImmutableSequenceIterator<'_, T, C> {
    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T, C: DeepCopier<T>> FusedIterator for ImmutableSequenceIterator<'_, T, C> {}

impl<T, C> Clone for ImmutableSequenceIterator<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            copier: self.copier,
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, C: Default> Default for ImmutableSequence<T, C> {
    #[inline]
    fn default() -> Self {
        Self::with_copier(C::default())
    }
}

/// Consumes the sequence, yielding its elements.
///
/// Nothing is copied: the sequence owned its elements exclusively and no
/// longer exists afterwards.
impl<T, C> IntoIterator for ImmutableSequence<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a ImmutableSequence<T, C>
where
    C: DeepCopier<T> + Clone,
{
    type Item = Result<T, CopyError>;
    type IntoIter = ImmutableSequenceIterator<'a, T, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: DeepCopy> TryFrom<&[T]> for ImmutableSequence<T> {
    type Error = CopyError;

    fn try_from(items: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(items)
    }
}

impl<T: DeepCopy> TryFrom<Vec<T>> for ImmutableSequence<T> {
    type Error = CopyError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_slice(&items)
    }
}

/// Sequences nest: copying the outer sequence copies every inner element.
impl<T, C> DeepCopy for ImmutableSequence<T, C>
where
    C: DeepCopier<T> + Clone,
{
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.try_clone()
    }
}

// `PartialEq`, `Hash`, `Debug` and `Display` cannot report copy failures, so
// they hand the element type's own impl a shared reference to each stored
// element. An impl that mutates through interior mutability from `&self`
// can therefore reach the stored state; `contains` and `position` run on
// copies instead.

/// Compares elements only; the copiers are not part of the value.
impl<T: PartialEq, C> PartialEq for ImmutableSequence<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, C> Eq for ImmutableSequence<T, C> {}

impl<T: Hash, C> Hash for ImmutableSequence<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ImmutableSequence<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for ImmutableSequence<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C> serde::Serialize for ImmutableSequence<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ImmutableSequenceVisitor<T, C> {
    marker: std::marker::PhantomData<(T, C)>,
}

#[cfg(feature = "serde")]
impl<T, C> ImmutableSequenceVisitor<T, C> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::de::Visitor<'de> for ImmutableSequenceVisitor<T, C>
where
    T: serde::Deserialize<'de>,
    C: Default,
{
    type Value = ImmutableSequence<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        // Freshly deserialized values are owned by nobody else.
        Ok(ImmutableSequence::from_copies(elements, C::default()))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for ImmutableSequence<T, C>
where
    T: serde::Deserialize<'de>,
    C: Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ImmutableSequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
