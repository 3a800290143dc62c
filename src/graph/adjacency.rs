//! Adjacency-mapping graph representations.
//!
//! Graphs are plain `HashMap`s owned by the caller. A neighbor that is not a
//! key of the map is a valid node with no outgoing edges.

use core::cmp::Ordering;
use core::fmt::Debug;
use std::collections::HashMap;

use num_traits::Zero;

use crate::error::{AlgoError, AlgoResult};

/// Unweighted graph: node → ordered neighbor list.
pub type AdjacencyMap<N> = HashMap<N, Vec<N>>;

/// Weighted graph: node → ordered list of `(neighbor, weight)` edges.
///
/// Weights must be non-negative; see [`validate_weights`].
pub type WeightedAdjacencyMap<N, W> = HashMap<N, Vec<(N, W)>>;

/// Checks that every edge weight is `>= 0`.
///
/// Weights that do not compare against zero (a `NaN` float) are rejected as
/// well.
///
/// # Errors
/// Returns [`AlgoError::NegativeWeight`] naming an offending edge. If several
/// edges are invalid, which one is reported depends on map iteration order.
pub fn validate_weights<N, W>(graph: &WeightedAdjacencyMap<N, W>) -> AlgoResult<()>
where
    N: Debug,
    W: PartialOrd + Zero,
{
    let zero = W::zero();
    for (node, edges) in graph {
        let bad = edges.iter().position(|(_, weight)| {
            !matches!(
                weight.partial_cmp(&zero),
                Some(Ordering::Greater | Ordering::Equal)
            )
        });
        if let Some(neighbor_index) = bad {
            return Err(AlgoError::NegativeWeight {
                node: format!("{node:?}"),
                neighbor_index,
            });
        }
    }
    Ok(())
}
