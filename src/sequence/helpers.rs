//! Ordering, minimum and reversal helpers over slices.

use core::cmp::Ordering;

use crate::diagnostics::debug_event;
use crate::error::{AlgoError, AlgoResult};

/// Returns the left index of the first adjacent pair that is out of order.
///
/// A pair `(seq[i], seq[i + 1])` is out of order when `seq[i] <= seq[i + 1]`
/// does not hold. Incomparable pairs (e.g. involving `NaN`) count as out of
/// order.
pub fn first_unordered_index<T: PartialOrd>(seq: &[T]) -> Option<usize> {
    let index = seq.windows(2).position(|pair| {
        !matches!(
            pair[0].partial_cmp(&pair[1]),
            Some(Ordering::Less | Ordering::Equal)
        )
    })?;
    debug_event!(index, "sequence not ordered");
    Some(index)
}

/// Returns `true` iff the sequence is in non-descending order.
///
/// Empty and single-element sequences are ordered.
#[inline]
pub fn is_ordered<T: PartialOrd>(seq: &[T]) -> bool {
    first_unordered_index(seq).is_none()
}

/// Finds the smallest element and the index of its leftmost occurrence.
///
/// # Errors
/// Returns [`AlgoError::EmptyInput`] if `seq` is empty.
pub fn find_smallest<T: PartialOrd + Clone>(seq: &[T]) -> AlgoResult<(T, usize)> {
    let (first, rest) = seq.split_first().ok_or(AlgoError::EmptyInput)?;

    let mut smallest = first;
    let mut index_smallest = 0;
    for (offset, element) in rest.iter().enumerate() {
        // Strict comparison keeps the leftmost minimum.
        if element < smallest {
            smallest = element;
            index_smallest = offset + 1;
        }
    }

    Ok((smallest.clone(), index_smallest))
}

/// Reverses the sequence in place.
#[inline]
pub fn reverse_sequence<T>(seq: &mut [T]) {
    seq.reverse();
}

/// Returns a reversed copy of the sequence, leaving the input untouched.
///
/// An ascending sequence comes back descending.
pub fn reversed<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}
