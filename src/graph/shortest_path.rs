//! Weighted shortest path by FIFO-queue relaxation.
//!
//! The routine is named after Dijkstra but does not use a priority queue.
//! Nodes are processed in FIFO order, and a node is enqueued again every time
//! a cheaper route to it is found, even if it was processed before. This is a
//! queue-based Bellman-Ford relaxation: nodes may be processed many times, and
//! the final costs are minimal for non-negative weights.

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use super::adjacency::{validate_weights, WeightedAdjacencyMap};
use super::weight::EdgeWeight;
use crate::diagnostics::{debug_event, trace_event};
use crate::error::{AlgoError, AlgoResult};

/// A path through a weighted graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath<N, W> {
    /// The nodes of the path, from start to target inclusive.
    pub nodes: Vec<N>,
    /// Sum of the edge weights along `nodes`.
    pub cost: W,
}

impl<N, W> ShortestPath<N, W> {
    /// Number of edges on the path. Zero when start and target coincide.
    #[inline]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consumes the path, returning its nodes.
    #[inline]
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

/// Finds the cheapest path from `start` to `target`.
///
/// Costs start at zero for `start` and unknown (infinite) everywhere else. For
/// each dequeued node and each `(neighbor, weight)` edge, the neighbor is
/// relaxed if `cost + weight` beats its known cost; it then records the current
/// node as its predecessor and is pushed to the back of the queue. When the
/// queue drains, the path is rebuilt by walking predecessors back from
/// `target`.
///
/// An edge whose cost sum is not representable in `W` (see
/// [`EdgeWeight::cost_add`]) is skipped rather than relaxed.
///
/// Nodes that only appear as neighbors have no outgoing edges. A `start`
/// that is not a key of `graph` is treated the same way.
///
/// # Errors
/// - [`AlgoError::NegativeWeight`] if any edge weight is negative (checked
///   before the traversal starts).
/// - [`AlgoError::NoPathFound`] if `target` is unreachable from `start`.
pub fn dijkstra_shortest_path<'g, N, W>(
    graph: &'g WeightedAdjacencyMap<N, W>,
    start: &'g N,
    target: &N,
) -> AlgoResult<ShortestPath<N, W>>
where
    N: Eq + Hash + Clone + Debug,
    W: EdgeWeight,
{
    validate_weights(graph)?;

    let mut lowest_cost: HashMap<&'g N, W> = HashMap::with_capacity(graph.len());
    let mut preceding: HashMap<&'g N, &'g N> = HashMap::with_capacity(graph.len());
    let mut queue: VecDeque<&'g N> = VecDeque::new();

    lowest_cost.insert(start, W::zero());
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(&current_cost) = lowest_cost.get(current) else {
            continue;
        };
        let Some(edges) = graph.get(current) else {
            continue;
        };

        for (neighbor, weight) in edges {
            let Some(new_cost) = current_cost.cost_add(*weight) else {
                continue;
            };
            let improves = lowest_cost
                .get(neighbor)
                .map_or(true, |&known| new_cost < known);

            if improves {
                lowest_cost.insert(neighbor, new_cost);
                preceding.insert(neighbor, current);
                queue.push_back(neighbor);
                trace_event!(queued = queue.len(), "relaxed edge");
            }
        }
    }

    let Some(&cost) = lowest_cost.get(target) else {
        debug_event!(reached = lowest_cost.len(), "target unreachable");
        return Err(AlgoError::NoPathFound);
    };

    // Predecessor links only ever point along strictly improving relaxations,
    // so the chain from `target` ends at `start`.
    let mut nodes = vec![target.clone()];
    let mut current = target;
    while let Some(&previous) = preceding.get(current) {
        nodes.push(previous.clone());
        current = previous;
    }
    nodes.reverse();

    Ok(ShortestPath { nodes, cost })
}
