//! Sequence helpers shared by the sorting and searching algorithms.
//!
//! These are the leaf routines of the crate: an ordering check, a minimum
//! finder and reversal. They operate on plain slices and only require
//! `PartialOrd` (and `Clone` where an owned value is returned).

pub mod helpers;

pub use helpers::{find_smallest, first_unordered_index, is_ordered, reverse_sequence, reversed};
