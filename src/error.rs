//! Error types shared by every algorithm in the crate.

use core::fmt;

/// The error type for algorithm input validation failures.
///
/// Every error is local to a single call: the algorithms are pure functions,
/// so there is nothing to retry and no partial state to clean up.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlgoError {
    /// The operation needs at least one element but received none.
    EmptyInput,
    /// The input was expected to be ordered (non-descending).
    ///
    /// `index` is the leftmost position `i` where `seq[i] <= seq[i + 1]` fails.
    PreconditionViolation {
        /// Left index of the first out-of-order pair.
        index: usize,
    },
    /// An edge weight was negative or could not be compared against zero.
    NegativeWeight {
        /// Debug rendering of the node owning the edge.
        node: String,
        /// Position of the edge within that node's neighbor list.
        neighbor_index: usize,
    },
    /// The target node cannot be reached from the start node.
    NoPathFound,
}

impl fmt::Display for AlgoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("input sequence is empty"),
            Self::PreconditionViolation { index } => write!(
                f,
                "sequence is not ordered: element {index} is larger than element {}",
                index + 1
            ),
            Self::NegativeWeight {
                node,
                neighbor_index,
            } => write!(
                f,
                "edge {neighbor_index} of node {node} has a negative or incomparable weight"
            ),
            Self::NoPathFound => f.write_str("no path from start to target"),
        }
    }
}

impl std::error::Error for AlgoError {}

/// Convenience alias used throughout the crate.
pub type AlgoResult<T> = Result<T, AlgoError>;
