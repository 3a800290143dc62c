//! Edge weights for the weighted graph algorithms.

use num_traits::{CheckedAdd, Zero};

/// A non-negative edge weight that can be summed into path costs.
///
/// Implemented for every primitive integer and float type. Custom weight
/// types implement [`cost_add`](EdgeWeight::cost_add) to report sums they
/// cannot represent.
pub trait EdgeWeight: Copy + PartialOrd + Zero {
    /// Extends a path cost by one edge.
    ///
    /// Returns `None` when the sum is not representable (integer overflow,
    /// or a non-finite float). Such an edge never improves a path.
    fn cost_add(self, weight: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl EdgeWeight for $t {
                #[inline]
                fn cost_add(self, weight: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &weight)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl EdgeWeight for $t {
                #[inline]
                fn cost_add(self, weight: Self) -> Option<Self> {
                    let sum = self + weight;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_overflow_is_unrepresentable() {
        assert_eq!(u32::MAX.cost_add(1), None);
        assert_eq!(i8::MAX.cost_add(0), Some(i8::MAX));
        assert_eq!(3u64.cost_add(4), Some(7));
    }

    #[test]
    fn non_finite_float_is_unrepresentable() {
        assert_eq!(f64::MAX.cost_add(f64::MAX), None);
        assert_eq!(0.0f64.cost_add(f64::INFINITY), None);
        assert_eq!(0.5f32.cost_add(0.25), Some(0.75));
    }
}
