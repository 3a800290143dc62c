//! Graph traversals over caller-owned adjacency mappings.
//!
//! Graph algorithms are organized by concern:
//! - `adjacency`: graph representations and weight validation
//! - `traversal`: breadth-first search
//! - `shortest_path`: weighted shortest path by FIFO relaxation
//! - `weight`: overflow-aware edge weight arithmetic

pub mod adjacency;
pub mod shortest_path;
pub mod traversal;
pub mod weight;

pub use adjacency::{validate_weights, AdjacencyMap, WeightedAdjacencyMap};
pub use shortest_path::{dijkstra_shortest_path, ShortestPath};
pub use traversal::{breadth_first_find, breadth_first_search, Bfs};
pub use weight::EdgeWeight;
