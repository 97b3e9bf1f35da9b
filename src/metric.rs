use core::ops::Sub;
use num_traits::Zero;

/// A distance between two rows of equal length.
///
/// [`pairwise`](crate::pairwise) only ever calls `distance` with slices of the
/// same length.
pub trait Metric<T> {
    type Unit: Copy + Zero;
    fn distance(&self, a: &[T], b: &[T]) -> Self::Unit;
}

/// Sum of absolute elementwise differences.
///
/// On rows whose entries are all 0 or 1 this is the Hamming distance. On any
/// other numbers it is the Manhattan (L1) distance. Inputs are not checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hamming;

impl<T> Metric<T> for Hamming
where
    T: Copy + PartialOrd + Sub<Output = T> + Zero,
{
    type Unit = T;

    fn distance(&self, a: &[T], b: &[T]) -> T {
        let mut total = T::zero();
        for (&a, &b) in a.iter().zip(b) {
            total = total + abs_diff(a, b);
        }
        total
    }
}

/// Number of positions at which the rows hold different values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mismatches;

impl<T: PartialEq> Metric<T> for Mismatches {
    type Unit = usize;

    fn distance(&self, a: &[T], b: &[T]) -> usize {
        a.iter().zip(b).filter(|(a, b)| a != b).count()
    }
}

// Subtract the smaller from the larger so unsigned types never underflow.
fn abs_diff<T: PartialOrd + Sub<Output = T>>(a: T, b: T) -> T {
    if a > b {
        a - b
    } else {
        b - a
    }
}
