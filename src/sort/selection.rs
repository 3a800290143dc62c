//! Selection sort.

use crate::sequence::find_smallest;

/// Sorts by repeatedly extracting the leftmost minimum of the unsorted rest.
///
/// Works on a copy of `seq`; the output is built by appending each extracted
/// minimum while the working copy shrinks. Ties are resolved leftmost-first,
/// so equal elements keep their relative order.
///
/// # Complexity
/// O(n²) comparisons, O(n) extra space.
pub fn selection_sort<T: PartialOrd + Clone>(seq: &[T]) -> Vec<T> {
    let mut unsorted = seq.to_vec();
    let mut sorted = Vec::with_capacity(unsorted.len());

    // `find_smallest` only fails once the working copy is empty.
    while let Ok((smallest, index)) = find_smallest(&unsorted) {
        sorted.push(smallest);
        unsorted.remove(index);
    }

    sorted
}
