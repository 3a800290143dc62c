//! # `algolab` - Classic Algorithms Toolkit
//!
//! A small toolkit of classic algorithms over in-memory sequences and
//! adjacency mappings. Every routine is an independent, stateless function:
//! inputs are borrowed for the duration of a call and nothing is retained.
//!
//! ## Contents
//!
//! - **Sequence helpers** ([`sequence`]): ordering check, minimum finder, reversal
//! - **Sorting** ([`sort`]): selection sort and middle-pivot quicksort
//! - **Searching** ([`search`]): binary search with precondition checking
//! - **Graphs** ([`graph`]): breadth-first search and weighted shortest path
//!
//! ## Error Handling
//!
//! Invalid input is reported through [`AlgoError`] rather than panics or
//! printed messages: empty input, unordered input to a search, negative edge
//! weights and unreachable targets each have their own variant.
//!
//! ## Diagnostics
//!
//! With the `tracing` feature enabled, the algorithms emit `debug` and `trace`
//! events (ordering violations, rejected inputs, edge relaxations).
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use algolab::{binary_search, dijkstra_shortest_path, quicksort, SearchOutcome};
//!
//! let sorted = quicksort(&[9, 1, 5, 3, 7]);
//! assert_eq!(sorted, [1, 3, 5, 7, 9]);
//! assert_eq!(binary_search(&sorted, &5), Ok(SearchOutcome::Found(2)));
//!
//! let graph = HashMap::from([
//!     ("A", vec![("B", 1), ("C", 4)]),
//!     ("B", vec![("C", 1)]),
//!     ("C", vec![]),
//! ]);
//! let path = dijkstra_shortest_path(&graph, &"A", &"C")?;
//! assert_eq!(path.nodes, ["A", "B", "C"]);
//! assert_eq!(path.cost, 2);
//! # Ok::<(), algolab::AlgoError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::implicit_hasher)]

mod diagnostics;

pub mod error;
pub mod graph;
pub mod search;
pub mod sequence;
pub mod sort;

#[cfg(feature = "proptest")]
pub mod strategies;

pub use error::{AlgoError, AlgoResult};
pub use graph::{
    breadth_first_find, breadth_first_search, dijkstra_shortest_path, validate_weights,
    AdjacencyMap, Bfs, EdgeWeight, ShortestPath, WeightedAdjacencyMap,
};
pub use search::{binary_search, SearchOutcome};
pub use sequence::{find_smallest, first_unordered_index, is_ordered, reverse_sequence, reversed};
pub use sort::{quicksort, selection_sort};
