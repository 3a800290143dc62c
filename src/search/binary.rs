//! Binary search with explicit precondition checking.
//!
//! Unlike [`slice::binary_search`], the input is validated first: an empty
//! slice or one that is not in non-descending order is rejected with a
//! structured error instead of producing an arbitrary answer.

use serde::{Deserialize, Serialize};

use crate::diagnostics::debug_event;
use crate::error::{AlgoError, AlgoResult};
use crate::sequence::first_unordered_index;

/// The definitive answer of a binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The target sits at this index.
    Found(usize),
    /// The target is not in the sequence.
    NotFound,
}

impl SearchOutcome {
    /// Returns the index if the target was found.
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound => None,
        }
    }

    /// Returns `true` if the target was found.
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Searches an ordered sequence for `target` by bottom/top index narrowing.
///
/// Each step probes `mid = (bottom + top) / 2`: an equal element ends the
/// search, a smaller one moves `bottom` past `mid`, a larger one moves `top`
/// before it. The search ends with [`SearchOutcome::NotFound`] once the range
/// is empty. With duplicates, any matching index may be returned.
///
/// # Errors
/// - [`AlgoError::EmptyInput`] if `ordered` is empty.
/// - [`AlgoError::PreconditionViolation`] if `ordered` is not in
///   non-descending order; `index` is the leftmost violation.
pub fn binary_search<T: PartialOrd>(ordered: &[T], target: &T) -> AlgoResult<SearchOutcome> {
    if ordered.is_empty() {
        debug_event!("binary search rejected empty input");
        return Err(AlgoError::EmptyInput);
    }
    if let Some(index) = first_unordered_index(ordered) {
        debug_event!(index, "binary search rejected unordered input");
        return Err(AlgoError::PreconditionViolation { index });
    }

    let mut bottom = 0;
    let mut top = ordered.len() - 1;

    while bottom <= top {
        let mid = (bottom + top) / 2;
        let probe = &ordered[mid];

        if *target == *probe {
            return Ok(SearchOutcome::Found(mid));
        } else if *probe < *target {
            bottom = mid + 1;
        } else if mid == 0 {
            // `top` would move below the first index: the range is empty.
            break;
        } else {
            top = mid - 1;
        }
    }

    Ok(SearchOutcome::NotFound)
}
