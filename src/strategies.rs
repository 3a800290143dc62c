//! `proptest` strategies for the inputs accepted by this crate.
//!
//! Available with the `proptest` feature.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::graph::{AdjacencyMap, WeightedAdjacencyMap};

/// Sequences of small integers, with plenty of duplicates.
pub fn sequence(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    vec(-50i32..50, 0..=max_len)
}

/// Sequences that already satisfy [`is_ordered`](crate::sequence::is_ordered).
pub fn ordered_sequence(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    sequence(max_len).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Unweighted graphs over nodes `0..nodes`, where every node is a key.
pub fn adjacency_map(nodes: u32, max_degree: usize) -> impl Strategy<Value = AdjacencyMap<u32>> {
    vec(vec(0..nodes, 0..=max_degree), nodes as usize).prop_map(|lists| {
        (0..).zip(lists).collect::<AdjacencyMap<u32>>()
    })
}

/// Weighted graphs over nodes `0..nodes` with weights in `0..=max_weight`.
pub fn weighted_adjacency_map(
    nodes: u32,
    max_degree: usize,
    max_weight: u32,
) -> impl Strategy<Value = WeightedAdjacencyMap<u32, u32>> {
    vec(vec((0..nodes, 0..=max_weight), 0..=max_degree), nodes as usize)
        .prop_map(|lists| (0..).zip(lists).collect::<WeightedAdjacencyMap<u32, u32>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::validate_weights;
    use crate::sequence::is_ordered;

    proptest! {
        #[test]
        fn ordered_sequences_are_ordered(v in ordered_sequence(32)) {
            prop_assert!(is_ordered(&v));
        }

        #[test]
        fn weighted_maps_are_valid(g in weighted_adjacency_map(8, 4, 20)) {
            prop_assert_eq!(g.len(), 8);
            prop_assert_eq!(validate_weights(&g), Ok(()));
        }

        #[test]
        fn adjacency_maps_stay_in_range(g in adjacency_map(6, 3)) {
            prop_assert!(g.values().flatten().all(|&n| n < 6));
        }
    }
}
