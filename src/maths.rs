//! Integer helpers shared by a few days.

use num_traits::{CheckedMul, One, PrimInt, Unsigned};

/// Greatest common divisor by Euclid's algorithm. `gcd(0, n)` is `n`.
pub fn gcd<T>(a: T, b: T) -> T
where
    T: PrimInt + Unsigned,
{
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, or `None` if it overflows `T`. `lcm(0, n)` is `0`.
pub fn lcm<T>(a: T, b: T) -> Option<T>
where
    T: PrimInt + Unsigned,
{
    if a.is_zero() || b.is_zero() {
        return Some(T::zero());
    }
    (a / gcd(a, b)).checked_mul(&b)
}

/// Least common multiple of every value, `1` for no values, `None` on overflow.
pub fn lcm_of<T, I>(values: I) -> Option<T>
where
    T: PrimInt + Unsigned,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .try_fold(T::one(), |accumulated, value| lcm(accumulated, value))
}

/// Iterator extension for a product that detects overflow.
pub trait CheckedProduct<T> {
    /// Multiply every item, returning `None` if the product overflows. An empty iterator gives 1.
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: Iterator<Item = T>,
{
    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), |accumulated, value| accumulated.checked_mul(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_of_common_values() {
        assert_eq!(gcd(48u64, 18), 6);
        assert_eq!(gcd(17u32, 5), 1);
        assert_eq!(gcd(0u8, 9), 9);
        assert_eq!(gcd(9u8, 0), 9);
    }

    #[test]
    fn lcm_of_pairs_and_lists() {
        assert_eq!(lcm(4u64, 6), Some(12));
        assert_eq!(lcm(0u64, 6), Some(0));
        assert_eq!(lcm_of([2u64, 3, 4, 5]), Some(60));
        assert_eq!(lcm_of(Vec::<u64>::new()), Some(1));
    }

    #[test]
    fn lcm_reports_overflow() {
        assert_eq!(lcm(200u8, 3), None);
        assert_eq!(lcm_of([16u8, 17]), None);
    }

    #[test]
    fn checked_product_multiplies() {
        assert_eq!([2u32, 3, 7].into_iter().checked_product(), Some(42));
        assert_eq!(std::iter::empty::<u64>().checked_product(), Some(1));
    }

    #[test]
    fn checked_product_reports_overflow() {
        assert_eq!([100u8, 3].into_iter().checked_product(), None);
        assert_eq!([i16::MIN, -1].into_iter().checked_product(), None);
    }
}
