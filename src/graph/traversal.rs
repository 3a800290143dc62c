//! Breadth-first traversal over an [`AdjacencyMap`].
//!
//! Nodes are marked visited when they are dequeued, not when they are
//! enqueued. A node can therefore sit in the queue several times before it is
//! first processed; every copy after the first is dropped on dequeue.

use core::hash::Hash;
use std::collections::{HashSet, VecDeque};

use super::adjacency::AdjacencyMap;

/// An iterator for Breadth-First Search (BFS).
///
/// Yields each reachable node exactly once, in FIFO visitation order.
/// Uses an internal `VecDeque` work queue and a `HashSet` of visited nodes.
pub struct Bfs<'g, N> {
    graph: &'g AdjacencyMap<N>,
    visited: HashSet<N>,
    queue: VecDeque<N>,
}

impl<'g, N> Bfs<'g, N>
where
    N: Eq + Hash + Clone,
{
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// `start` does not need to be a key of `graph`; it is then a node with
    /// no neighbors.
    pub fn new(graph: &'g AdjacencyMap<N>, start: N) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(start);
        Self {
            graph,
            visited: HashSet::new(),
            queue,
        }
    }

    /// Returns `true` if `node` has already been yielded.
    #[inline]
    pub fn is_visited(&self, node: &N) -> bool {
        self.visited.contains(node)
    }
}

impl<N> Iterator for Bfs<'_, N>
where
    N: Eq + Hash + Clone,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.queue.pop_front()?;
            if !self.visited.insert(node.clone()) {
                continue;
            }

            if let Some(neighbors) = self.graph.get(&node) {
                for neighbor in neighbors {
                    if !self.visited.contains(neighbor) {
                        self.queue.push_back(neighbor.clone());
                    }
                }
            }

            return Some(node);
        }
    }
}

/// Returns every node reachable from `start`, in BFS visitation order.
///
/// `start` is always the first element, even when it is not a key of `graph`.
pub fn breadth_first_search<N>(graph: &AdjacencyMap<N>, start: N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    Bfs::new(graph, start).collect()
}

/// Returns the first node, in BFS order from `start`, satisfying `predicate`.
///
/// The traversal stops as soon as a match is found.
pub fn breadth_first_find<N, P>(graph: &AdjacencyMap<N>, start: N, mut predicate: P) -> Option<N>
where
    N: Eq + Hash + Clone,
    P: FnMut(&N) -> bool,
{
    Bfs::new(graph, start).find(|node| predicate(node))
}
