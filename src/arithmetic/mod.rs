//! arithmetic routines over digit sequences
//!
//! The functions here know nothing about signs: they treat their
//! inputs as unsigned digit sequences and leave interpretation to the
//! complement schemes.
//!

use crate::stdlib::cmp::Ordering;
use crate::bigdigit::{Digit, DigitVec, Endianness, Words};

use num_traits::Zero;

pub mod addition;
pub mod subtraction;
pub mod multiplication;
pub mod shift;

pub use self::addition::{add_digit_assign, add_digit_with_carry, add_with_carry, plus};
pub use self::subtraction::{minus, subtract_digit_assign, subtract_digit_with_borrow, subtract_with_borrow};
pub use self::multiplication::multiply;
pub use self::shift::{bit_shift_left, bit_shift_right, shift_left, shift_right};


/// Compare equal length digit sequences, most significant first
pub fn compare<W, A, B>(a: A, b: B) -> Ordering
where
    W: Ord,
    A: IntoIterator<Item=W>,
    B: IntoIterator<Item=W>,
{
    for (x, y) in a.into_iter().zip(b) {
        match x.cmp(&y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compare sequences as natural numbers, ignoring leading zeros
///
/// The two operands need not share an endianness.
///
pub fn compare_naturals<E, F, W>(a: Words<'_, E, W>, b: Words<'_, F, W>) -> Ordering
where
    E: Endianness,
    F: Endianness,
    W: Digit,
{
    let a_zeros = a.count_significant_zeros();
    let b_zeros = b.count_significant_zeros();
    let a_len = a.len() - a_zeros;
    let b_len = b.len() - b_zeros;

    a_len.cmp(&b_len).then_with(|| {
        compare(a.iter_big().skip(a_zeros), b.iter_big().skip(b_zeros))
    })
}

/// Write the bitwise negation of 'a' into 'dst'
pub fn bit_negate<'d, W, O, A>(dst: O, a: A) -> usize
where
    W: Digit,
    O: IntoIterator<Item=&'d mut W>,
    A: IntoIterator<Item=W>,
{
    let mut written = 0;
    for (x, out) in a.into_iter().zip(dst) {
        *out = !x;
        written += 1;
    }
    written
}

/// Write the digitwise combination of 'a' and 'b' into 'dst'
fn bitwise<'d, W, O, A, B, F>(dst: O, a: A, b: B, op: F) -> usize
where
    W: Digit,
    O: IntoIterator<Item=&'d mut W>,
    A: IntoIterator<Item=W>,
    B: IntoIterator<Item=W>,
    F: Fn(W, W) -> W,
{
    let mut written = 0;
    for ((x, y), out) in a.into_iter().zip(b).zip(dst) {
        *out = op(x, y);
        written += 1;
    }
    written
}

/// dst = a & b
pub fn bit_and<'d, W, O, A, B>(dst: O, a: A, b: B) -> usize
where
    W: Digit,
    O: IntoIterator<Item=&'d mut W>,
    A: IntoIterator<Item=W>,
    B: IntoIterator<Item=W>,
{
    bitwise(dst, a, b, |x, y| x & y)
}

/// dst = a | b
pub fn bit_or<'d, W, O, A, B>(dst: O, a: A, b: B) -> usize
where
    W: Digit,
    O: IntoIterator<Item=&'d mut W>,
    A: IntoIterator<Item=W>,
    B: IntoIterator<Item=W>,
{
    bitwise(dst, a, b, |x, y| x | y)
}

/// dst = a ^ b
pub fn bit_xor<'d, W, O, A, B>(dst: O, a: A, b: B) -> usize
where
    W: Digit,
    O: IntoIterator<Item=&'d mut W>,
    A: IntoIterator<Item=W>,
    B: IntoIterator<Item=W>,
{
    bitwise(dst, a, b, |x, y| x ^ y)
}

/// Sum of natural numbers, one digit longer than the longer operand
/// only if the addition carried
pub(crate) fn add_naturals<E, W>(a: Words<'_, E, W>, b: Words<'_, E, W>) -> DigitVec<W, E>
where
    E: Endianness,
    W: Digit,
{
    let mut sum = DigitVec::from_zero_count(a.len().max(b.len()));
    let carry = addition::plus_into(&mut sum.words_mut(), a, b);
    if !carry.is_zero() {
        sum.push_significant_digit(carry);
    }
    sum
}

/// Difference of natural numbers, where a >= b
pub(crate) fn subtract_naturals<E, W>(a: Words<'_, E, W>, b: Words<'_, E, W>) -> DigitVec<W, E>
where
    E: Endianness,
    W: Digit,
{
    debug_assert!(compare_naturals(a, b) != Ordering::Less);
    let mut difference = DigitVec::from_zero_count(a.len().max(b.len()));
    subtraction::minus_into(&mut difference.words_mut(), a, b);
    difference
}

/// Product of natural numbers, sized to hold the exact result
pub(crate) fn multiply_naturals<E, W>(a: Words<'_, E, W>, b: Words<'_, E, W>) -> DigitVec<W, E>
where
    E: Endianness,
    W: Digit,
{
    let mut product = DigitVec::from_zero_count(a.len() + b.len());
    multiplication::multiply_into(&mut product.words_mut(), a, b);
    product
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::{BigEndian, LittleEndian};

    #[test]
    fn compare_most_significant_first() {
        assert_eq!(compare([1u8, 2, 3], [1u8, 2, 4]), Ordering::Less);
        assert_eq!(compare([2u8, 0], [1u8, 9]), Ordering::Greater);
        assert_eq!(compare([5u8], [5u8]), Ordering::Equal);
    }

    #[test]
    fn compare_naturals_skips_leading_zeros() {
        let a = Words::<BigEndian, u8>::new(&[0x00, 0x00, 0x05]);
        let b = Words::<LittleEndian, u8>::new(&[0x05]);
        assert_eq!(compare_naturals(a, b), Ordering::Equal);

        let c = Words::<LittleEndian, u8>::new(&[0x00, 0x01, 0x00]);
        assert_eq!(compare_naturals(a, c), Ordering::Less);
        assert_eq!(compare_naturals(c, a), Ordering::Greater);

        let empty = Words::<BigEndian, u8>::new(&[]);
        let zeros = Words::<LittleEndian, u8>::new(&[0, 0]);
        assert_eq!(compare_naturals(empty, zeros), Ordering::Equal);
    }

    #[test]
    fn bitwise_ops() {
        let mut dst = [0u8; 2];
        assert_eq!(bit_and(dst.iter_mut(), [0xf0u8, 0x0f], [0xffu8, 0x01]), 2);
        assert_eq!(dst, [0xf0, 0x01]);
        bit_or(dst.iter_mut(), [0xf0u8, 0x0f], [0x0fu8, 0x10]);
        assert_eq!(dst, [0xff, 0x1f]);
        bit_xor(dst.iter_mut(), [0xffu8, 0x0f], [0x0fu8, 0x0f]);
        assert_eq!(dst, [0xf0, 0x00]);
        bit_negate(dst.iter_mut(), [0x00u8, 0x7f]);
        assert_eq!(dst, [0xff, 0x80]);
    }

    #[test]
    fn naturals() {
        let a = Words::<BigEndian, u8>::new(&[0xff, 0xff]);
        let b = Words::<BigEndian, u8>::new(&[0x01]);
        assert_eq!(add_naturals(a, b).digits, [0x01, 0x00, 0x00]);
        assert_eq!(subtract_naturals(a, b).digits, [0xff, 0xfe]);
        assert_eq!(multiply_naturals(a, a).digits, [0xff, 0xfe, 0x00, 0x01]);
    }
}
