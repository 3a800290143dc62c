//! Sorting algorithms.
//!
//! Both sorts return a new `Vec` and leave the caller's slice untouched.
//!
//! - `selection`: O(n²) selection sort built on [`find_smallest`](crate::sequence::find_smallest)
//! - `quick`: recursive middle-pivot quicksort

pub mod quick;
pub mod selection;

pub use quick::quicksort;
pub use selection::selection_sort;
