//! Digit order markers
//!
//! Storage order is a type parameter. Code written against [`Endianness`]
//! sees digits least significant first whatever the storage order.
//!

use crate::stdlib;
use crate::stdlib::fmt;
use crate::stdlib::hash::Hash;
use crate::stdlib::Vec;

use num_traits::Zero;


/// Order in which the digits of a number are stored
pub trait Endianness: 'static + Copy + Clone + Default + fmt::Debug + PartialEq + Eq + Hash {
    /// Short name shown by `Debug`
    const NAME: &'static str;

    /// Reversed storage order
    type Opposite: Endianness<Opposite = Self>;

    /// Consume digits, least significant first
    fn into_iter<'a, D: 'a>(digits: Vec<D>) -> impl SignificanceIter<'a, D>;

    /// Digits of a slice, least significant first
    fn iter_slice<D>(digits: &[D]) -> impl SignificanceIter<'_, &D>;

    /// Mutable digits of a slice, least significant first
    fn iter_slice_mut<D>(digits: &mut [D]) -> impl SignificanceIter<'_, &mut D>;

    /// Storage index of the digit of significance 'significance'
    fn storage_index(len: usize, significance: usize) -> usize;

    /// Append 'd' as the new most significant digit
    fn push_significant_digit<D>(digits: &mut Vec<D>, d: D);

    /// Split into the 'count' least significant digits and the rest
    fn split_least_significant<D>(digits: &[D], count: usize) -> (&[D], &[D]);

    /// Mutable form of [`split_least_significant`](Self::split_least_significant)
    fn split_least_significant_mut<D>(digits: &mut [D], count: usize) -> (&mut [D], &mut [D]);

    /// Keep only the 'count' least significant digits
    fn truncate_significant<D: Copy>(digits: &mut Vec<D>, count: usize);

    /// Grow to 'count' digits, 'filler' going to the significant end
    fn extend_significant<D: Copy>(digits: &mut Vec<D>, count: usize, filler: D);

    /// Drop leading zero digits, leaving an empty vector for zero
    fn strip_significant_zeros<D: Copy + Zero>(digits: &mut Vec<D>) {
        let count = digits.len() - Self::count_significant_zeros(digits);
        Self::truncate_significant(digits, count);
    }

    /// Number of leading zero digits
    fn count_significant_zeros<D: Zero>(digits: &[D]) -> usize {
        Self::iter_slice(digits).rev().position(|d| !d.is_zero()).unwrap_or(digits.len())
    }

    /// Turn a least-significant-first sequence into storage order, or back
    ///
    /// The operation is its own inverse.
    fn reorder_le_digits<D>(digits: &mut [D]);
}


/// Most significant digit stored first
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigEndian {}

/// Least significant digit stored first
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian {}

impl Endianness for BigEndian {
    const NAME: &'static str = "BE";

    type Opposite = LittleEndian;

    fn into_iter<'a, D: 'a>(digits: Vec<D>) -> impl SignificanceIter<'a, D> {
        digits.into_iter().rev()
    }

    fn iter_slice<D>(digits: &[D]) -> impl SignificanceIter<'_, &D> {
        digits.iter().rev()
    }

    fn iter_slice_mut<D>(digits: &mut [D]) -> impl SignificanceIter<'_, &mut D> {
        digits.iter_mut().rev()
    }

    fn storage_index(len: usize, significance: usize) -> usize {
        len - 1 - significance
    }

    fn push_significant_digit<D>(digits: &mut Vec<D>, d: D) {
        digits.insert(0, d);
    }

    fn split_least_significant<D>(digits: &[D], count: usize) -> (&[D], &[D]) {
        let (hi, lo) = digits.split_at(digits.len() - count);
        (lo, hi)
    }

    fn split_least_significant_mut<D>(digits: &mut [D], count: usize) -> (&mut [D], &mut [D]) {
        let (hi, lo) = digits.split_at_mut(digits.len() - count);
        (lo, hi)
    }

    fn truncate_significant<D: Copy>(digits: &mut Vec<D>, count: usize) {
        if count < digits.len() {
            let idx = digits.len() - count;
            digits.copy_within(idx.., 0);
            digits.truncate(count);
        }
    }

    fn extend_significant<D: Copy>(digits: &mut Vec<D>, count: usize, filler: D) {
        if count > digits.len() {
            let extra = count - digits.len();
            digits.splice(0..0, stdlib::iter::repeat(filler).take(extra));
        }
    }

    fn reorder_le_digits<D>(digits: &mut [D]) {
        digits.reverse()
    }
}


impl Endianness for LittleEndian {
    const NAME: &'static str = "LE";

    type Opposite = BigEndian;

    fn into_iter<'a, D: 'a>(digits: Vec<D>) -> impl SignificanceIter<'a, D> {
        digits.into_iter()
    }

    fn iter_slice<D>(digits: &[D]) -> impl SignificanceIter<'_, &D> {
        digits.iter()
    }

    fn iter_slice_mut<D>(digits: &mut [D]) -> impl SignificanceIter<'_, &mut D> {
        digits.iter_mut()
    }

    fn storage_index(_len: usize, significance: usize) -> usize {
        significance
    }

    fn push_significant_digit<D>(digits: &mut Vec<D>, d: D) {
        digits.push(d);
    }

    fn split_least_significant<D>(digits: &[D], count: usize) -> (&[D], &[D]) {
        digits.split_at(count)
    }

    fn split_least_significant_mut<D>(digits: &mut [D], count: usize) -> (&mut [D], &mut [D]) {
        digits.split_at_mut(count)
    }

    fn truncate_significant<D: Copy>(digits: &mut Vec<D>, count: usize) {
        digits.truncate(count);
    }

    fn extend_significant<D: Copy>(digits: &mut Vec<D>, count: usize, filler: D) {
        if count > digits.len() {
            digits.resize(count, filler);
        }
    }

    fn reorder_le_digits<D>(_digits: &mut [D]) {}
}

/// Iterator over digits in significance order, sized and reversible
pub trait SignificanceIter<'a, D>: Iterator<Item = D> + ExactSizeIterator + DoubleEndedIterator {}

impl<'a, D> SignificanceIter<'a, &'a D> for stdlib::slice::Iter<'a, D> {}
impl<'a, D> SignificanceIter<'a, &'a D> for stdlib::iter::Rev<stdlib::slice::Iter<'a, D>> {}
impl<'a, D> SignificanceIter<'a, &'a mut D> for stdlib::slice::IterMut<'a, D> {}
impl<'a, D> SignificanceIter<'a, &'a mut D> for stdlib::iter::Rev<stdlib::slice::IterMut<'a, D>> {}

impl<D> SignificanceIter<'_, D> for stdlib::vec::IntoIter<D> {}
impl<D> SignificanceIter<'_, D> for stdlib::iter::Rev<stdlib::vec::IntoIter<D>> {}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn big_endian_iterates_from_the_back() {
        let digits = [1u8, 2, 3];
        let le: Vec<u8> = BigEndian::iter_slice(&digits).copied().collect();
        assert_eq!(le, [3, 2, 1]);
        assert_eq!(BigEndian::storage_index(3, 0), 2);
    }

    #[test]
    fn little_endian_iterates_from_the_front() {
        let digits = [1u8, 2, 3];
        let le: Vec<u8> = LittleEndian::iter_slice(&digits).copied().collect();
        assert_eq!(le, [1, 2, 3]);
        assert_eq!(LittleEndian::storage_index(3, 0), 0);
    }

    #[test]
    fn extend_and_truncate_big_endian() {
        let mut digits = vec![0x12u8, 0x34];
        BigEndian::extend_significant(&mut digits, 4, 0xff);
        assert_eq!(digits, [0xff, 0xff, 0x12, 0x34]);
        BigEndian::truncate_significant(&mut digits, 1);
        assert_eq!(digits, [0x34]);
    }

    #[test]
    fn extend_and_truncate_little_endian() {
        let mut digits = vec![0x34u8, 0x12];
        LittleEndian::extend_significant(&mut digits, 4, 0);
        assert_eq!(digits, [0x34, 0x12, 0, 0]);
        LittleEndian::truncate_significant(&mut digits, 1);
        assert_eq!(digits, [0x34]);
    }

    #[test]
    fn strip_significant_zeros() {
        let mut be = vec![0u8, 0, 5, 0];
        BigEndian::strip_significant_zeros(&mut be);
        assert_eq!(be, [5, 0]);

        let mut le = vec![0u8, 5, 0, 0];
        LittleEndian::strip_significant_zeros(&mut le);
        assert_eq!(le, [0, 5]);

        let mut zeros = vec![0u8, 0];
        BigEndian::strip_significant_zeros(&mut zeros);
        assert!(zeros.is_empty());
    }

    #[test]
    fn split_least_significant() {
        let digits = [1u8, 2, 3, 4];
        assert_eq!(BigEndian::split_least_significant(&digits, 1), (&[4u8][..], &[1u8, 2, 3][..]));
        assert_eq!(LittleEndian::split_least_significant(&digits, 1), (&[1u8][..], &[2u8, 3, 4][..]));
    }
}
