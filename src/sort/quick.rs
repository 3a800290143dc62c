//! Middle-pivot quicksort.

/// Recursive quicksort with a deterministic middle pivot.
///
/// The pivot is `seq[len / 2]`. Elements strictly less than the pivot form
/// the left partition; every other element except the pivot itself forms the
/// right one, so duplicates of the pivot always land on the right. The result
/// is `quicksort(left) ++ [pivot] ++ quicksort(right)`.
///
/// Allocates new partitions on every call (not in place).
///
/// # Complexity
/// O(n log n) on average, O(n²) in the worst case (e.g. all-equal input,
/// where every element falls into the right partition).
pub fn quicksort<T: PartialOrd + Clone>(seq: &[T]) -> Vec<T> {
    if seq.len() < 2 {
        return seq.to_vec();
    }

    let pivot_index = seq.len() / 2;
    let pivot = &seq[pivot_index];

    let mut left = Vec::new();
    let mut right = Vec::new();
    for (index, element) in seq.iter().enumerate() {
        if index == pivot_index {
            continue;
        }
        if element < pivot {
            left.push(element.clone());
        } else {
            right.push(element.clone());
        }
    }

    let mut sorted = quicksort(&left);
    sorted.reserve(right.len() + 1);
    sorted.push(pivot.clone());
    sorted.extend(quicksort(&right));
    sorted
}
