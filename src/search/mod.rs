//! Searching over ordered sequences.

pub mod binary;

pub use binary::{binary_search, SearchOutcome};
