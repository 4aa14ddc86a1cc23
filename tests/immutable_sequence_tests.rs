//! Unit tests for ImmutableSequence.
//!
//! These tests exercise the public surface the way a caller would: values
//! go in, copies come out, and nothing the caller does afterwards is
//! visible inside the sequence.

use isoseq::copy::{DeepCopy, FnCopier};
use isoseq::error::{CopyError, IndexError, SequenceError};
use isoseq::sequence;
use isoseq::sequence::{ImmutableSequence, ListMut};
use rstest::{fixture, rstest};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

#[fixture]
fn values() -> ImmutableSequence<i32> {
    sequence![1, 2, 3].unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_size_matches_number_of_constructor_inputs(values: ImmutableSequence<i32>) {
    assert_eq!(values.size(), 3);
}

#[rstest]
fn test_inserted_values_match_sequence_state(values: ImmutableSequence<i32>) {
    for (index, expected) in [1, 2, 3].into_iter().enumerate() {
        assert_eq!(values.get(index), Ok(expected));
    }
}

#[rstest]
fn test_mutating_source_after_construction_is_invisible() {
    let mut source = vec![vec![1, 2, 3]];
    let sequence = ImmutableSequence::from_slice(&source).unwrap();

    source[0].push(4);

    assert_eq!(sequence.get(0), Ok(vec![1, 2, 3]));
}

#[rstest]
fn test_shared_handles_are_split_on_construction() {
    let shared = Rc::new(RefCell::new(0));
    let sequence = ImmutableSequence::from_slice(&[Rc::clone(&shared), Rc::clone(&shared)]).unwrap();

    *shared.borrow_mut() = 1;
    let first = sequence.get(0).unwrap();
    *first.borrow_mut() = 2;

    assert_eq!(*sequence.get(0).unwrap().borrow(), 0);
    assert_eq!(*sequence.get(1).unwrap().borrow(), 0);
}

// =============================================================================
// get
// =============================================================================

#[rstest]
fn test_editing_returned_value_does_not_modify_sequence() {
    let sequence = ImmutableSequence::from_slice(&[vec![1, 2, 3]]).unwrap();

    let mut returned = sequence.get(0).unwrap();
    returned.push(0);

    assert_eq!(sequence.get(0).unwrap().len(), 3);
}

#[rstest]
#[case(3)]
#[case(1_000)]
#[case(usize::MAX)]
fn test_get_outside_bounds_fails(values: ImmutableSequence<i32>, #[case] index: usize) {
    assert_eq!(
        values.get(index),
        Err(SequenceError::Index(IndexError { index, length: 3 }))
    );
}

// =============================================================================
// insert
// =============================================================================

#[rstest]
fn test_insert_creates_a_new_sequence(values: ImmutableSequence<i32>) {
    let extended = values.insert(4).unwrap();
    assert_ne!(extended, values);
}

#[rstest]
fn test_insert_does_not_modify_original() {
    let single = sequence![1].unwrap();
    let extended = single.insert(4).unwrap();

    assert_eq!(single.len(), 1);
    assert_eq!(extended.len(), 2);
}

#[rstest]
fn test_inserted_elements_are_placed_last(values: ImmutableSequence<i32>) {
    let extended = values.insert(4).unwrap();
    assert_eq!(extended.get(extended.len() - 1), Ok(4));
    assert_eq!(extended.last(), Ok(Some(4)));
}

#[rstest]
fn test_integers_are_not_converted(values: ImmutableSequence<i32>) {
    let extended = values.insert(4).unwrap();
    let integers: Vec<i32> = extended.iter().collect::<Result<_, _>>().unwrap();
    assert_eq!(integers, vec![1, 2, 3, 4]);
}

// =============================================================================
// delete
// =============================================================================

#[rstest]
fn test_delete_shrinks_sequence(values: ImmutableSequence<i32>) {
    let shortened = values.delete(0).unwrap();
    assert_eq!(shortened.len(), 2);
    assert_eq!(shortened.to_vec(), Ok(vec![2, 3]));
}

#[rstest]
fn test_delete_does_not_modify_original(values: ImmutableSequence<i32>) {
    let _ = values.delete(0).unwrap();
    assert_eq!(values.len(), 3);
}

#[rstest]
fn test_delete_outside_sequence_is_a_no_op(values: ImmutableSequence<i32>) {
    let unchanged = values.delete(usize::MAX).unwrap();
    assert_eq!(unchanged.to_vec(), Ok(vec![1, 2, 3]));
}

#[rstest]
fn test_delete_is_lenient_where_get_is_strict(values: ImmutableSequence<i32>) {
    assert!(values.get(3).is_err());
    assert_eq!(values.delete(3).unwrap(), values);
}

// =============================================================================
// sorted
// =============================================================================

#[rstest]
fn test_sort_results_in_sorted_sequence(values: ImmutableSequence<i32>) {
    let reversed = values.sorted_by(|left, right| right.cmp(left)).unwrap();

    assert_eq!(reversed.get(0), Ok(3));
    assert_eq!(reversed.get(1), Ok(2));
    assert_eq!(reversed.get(2), Ok(1));
}

#[rstest]
fn test_sort_does_not_modify_source(values: ImmutableSequence<i32>) {
    let _ = values.sorted_by(|left, right| right.cmp(left)).unwrap();

    assert_eq!(values.get(0), Ok(1));
    assert_eq!(values.get(1), Ok(2));
    assert_eq!(values.get(2), Ok(3));
}

#[rstest]
fn test_in_place_sort_is_rejected(mut values: ImmutableSequence<i32>) {
    let error = values.sort().unwrap_err();

    assert_eq!(error.operation, "sort");
    assert_eq!(error.alternative, "sorted");
    assert_eq!(values.to_vec(), Ok(vec![1, 2, 3]));
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_sorted_iteration_works_as_on_regular_lists() {
    let sequence = sequence![3, 2, 1].unwrap();
    let mut collected: Vec<i32> = sequence.iter().collect::<Result<_, _>>().unwrap();
    collected.sort_unstable();

    assert_eq!(collected, vec![1, 2, 3]);
}

#[rstest]
fn test_map_and_filter_work_as_on_regular_lists(values: ImmutableSequence<i32>) {
    let collected: Vec<i32> = values
        .iter()
        .map(|element| element.map(|value| value * value))
        .filter(|element| element.as_ref().is_ok_and(|value| *value < 8))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(collected, vec![1, 4]);
}

#[rstest]
fn test_for_loop_over_reference() {
    let sequence = sequence!["a".to_string(), "b".to_string()].unwrap();
    let mut joined = String::new();
    for element in &sequence {
        joined.push_str(&element.unwrap());
    }
    assert_eq!(joined, "ab");
}

// =============================================================================
// Copier failures
// =============================================================================

#[rstest]
fn test_failing_copier_blocks_insert_only() {
    let limited = FnCopier::new(|value: &u32| {
        if *value > 100 {
            Err(CopyError::unsupported::<u32>("too large"))
        } else {
            Ok(*value)
        }
    });
    let sequence = ImmutableSequence::from_slice_with(&[1_u32, 2], limited).unwrap();

    assert!(sequence.insert(500_u32).is_err());
    assert_eq!(sequence.insert(50_u32).unwrap().to_vec(), Ok(vec![1, 2, 50]));
    assert_eq!(sequence.to_vec(), Ok(vec![1, 2]));
}

#[rstest]
fn test_derived_sequences_keep_their_copier() {
    let non_negative = FnCopier::new(|value: &i64| {
        if *value < 0 {
            Err(CopyError::unsupported::<i64>("negative"))
        } else {
            Ok(*value)
        }
    });
    let sequence = ImmutableSequence::from_slice_with(&[3_i64, 1], non_negative).unwrap();
    let sorted = sequence.sorted().unwrap();

    assert!(sorted.insert(-1_i64).is_err());
}

/// Singly linked node that can be made to point at itself.
struct Link {
    value: i32,
    next: Option<Rc<RefCell<Link>>>,
}

impl DeepCopy for Link {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        Ok(Self {
            value: self.value,
            next: self.next.deep_copy()?,
        })
    }
}

fn link(value: i32) -> Rc<RefCell<Link>> {
    Rc::new(RefCell::new(Link { value, next: None }))
}

#[rstest]
fn test_self_referencing_value_fails_to_copy() {
    let node = link(1);
    node.borrow_mut().next = Some(Rc::clone(&node));

    let result = ImmutableSequence::from_slice(&[Rc::clone(&node)]);

    assert!(matches!(
        result,
        Err(CopyError::Unsupported { reason, .. }) if reason == "cyclic reference"
    ));
    node.borrow_mut().next = None;
}

#[rstest]
fn test_longer_cycle_fails_to_insert() {
    let first = link(1);
    let second = link(2);
    first.borrow_mut().next = Some(Rc::clone(&second));
    second.borrow_mut().next = Some(Rc::clone(&first));
    let sequence = ImmutableSequence::from_slice(&[link(0)]).unwrap();

    assert!(matches!(
        sequence.insert(&first),
        Err(CopyError::Unsupported { .. })
    ));
    assert_eq!(sequence.len(), 1);
    second.borrow_mut().next = None;
}

#[rstest]
fn test_chain_copies_after_failed_cycle() {
    let looped = link(1);
    looped.borrow_mut().next = Some(Rc::clone(&looped));
    assert!(ImmutableSequence::from_slice(&[Rc::clone(&looped)]).is_err());
    looped.borrow_mut().next = None;

    let head = link(1);
    let tail = link(2);
    head.borrow_mut().next = Some(Rc::clone(&tail));

    let sequence = ImmutableSequence::from_slice(&[head, Rc::clone(&tail)]).unwrap();
    tail.borrow_mut().value = 20;

    let copy = sequence.get(0).unwrap();
    let copied_tail = copy.borrow().next.clone().unwrap();
    assert_eq!(copied_tail.borrow().value, 2);
    assert_eq!(sequence.get(1).unwrap().borrow().value, 2);
}

#[rstest]
fn test_lock_held_by_caller_fails_instead_of_waiting() {
    let shared = Arc::new(Mutex::new(1));
    let _guard = shared.lock().unwrap();

    let result = ImmutableSequence::from_slice(&[Arc::clone(&shared)]);

    assert!(matches!(result, Err(CopyError::Locked { .. })));
}

#[rstest]
fn test_contains_compares_copies() {
    let sequence = ImmutableSequence::from_slice(&[vec![1], vec![2, 3]]).unwrap();

    assert_eq!(sequence.contains(&vec![2, 3]), Ok(true));
    assert_eq!(sequence.contains(&vec![4]), Ok(false));
}

// =============================================================================
// End-to-end
// =============================================================================

#[rstest]
fn test_end_to_end_example() {
    let sequence = ImmutableSequence::from_slice(&[1, 2, 3]).unwrap();

    assert_eq!(sequence.insert(4).unwrap().to_vec(), Ok(vec![1, 2, 3, 4]));
    assert_eq!(sequence.to_vec(), Ok(vec![1, 2, 3]));
    assert_eq!(sequence.delete(0).unwrap().to_vec(), Ok(vec![2, 3]));
    assert_eq!(sequence.delete(usize::MAX).unwrap().to_vec(), Ok(vec![1, 2, 3]));
    assert_eq!(
        sequence
            .sorted_by(|left, right| right.cmp(left))
            .unwrap()
            .to_vec(),
        Ok(vec![3, 2, 1])
    );
    assert_eq!(sequence.to_vec(), Ok(vec![1, 2, 3]));
}
