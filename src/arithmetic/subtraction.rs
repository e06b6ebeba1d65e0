//! Subtraction of digit sequences with borrow propagation

use crate::stdlib::iter;
use crate::bigdigit::{Digit, Endianness, Words, WordsMut};
use crate::Error;

use num_traits::{One, Zero};


/// Write a - b - borrow into dst, digit by digit
///
/// Stops at the end of the shortest of the three sequences.
///
pub fn subtract_with_borrow<'d, W, O, A, B>(dst: O, a: A, b: B, borrow: bool) -> (usize, bool)
where
    W: Digit,
    O: IntoIterator<Item=&'d mut W>,
    A: IntoIterator<Item=W>,
    B: IntoIterator<Item=W>,
{
    let mut written = 0;
    let mut borrow = borrow;
    for ((x, y), out) in a.into_iter().zip(b).zip(dst) {
        let (diff, underflow) = W::sub_with_borrow(x, y, borrow);
        *out = diff;
        borrow = underflow;
        written += 1;
    }
    (written, borrow)
}

/// Write a - d into dst, where d is a single digit
///
/// Returns digits written and the borrow (zero or one) out of the last one.
///
pub fn subtract_digit_with_borrow<'d, W, O, A>(dst: O, a: A, d: W) -> (usize, W)
where
    W: Digit,
    O: IntoIterator<Item=&'d mut W>,
    A: IntoIterator<Item=W>,
{
    let mut written = 0;
    let mut borrow = d;
    for (x, out) in a.into_iter().zip(dst) {
        let (diff, underflow) = W::sub_with_borrow(x, borrow, false);
        *out = diff;
        borrow = if underflow { W::one() } else { W::zero() };
        written += 1;
    }
    (written, borrow)
}

/// Perform dst -= d, returning the borrow out of the last digit
///
/// Stops as soon as the borrow has been absorbed.
///
pub fn subtract_digit_assign<'d, W, O>(dst: O, d: W) -> W
where
    W: Digit,
    O: IntoIterator<Item=&'d mut W>,
{
    let mut borrow = d;
    for out in dst {
        if borrow.is_zero() {
            break;
        }
        let (diff, underflow) = W::sub_with_borrow(*out, borrow, false);
        *out = diff;
        borrow = if underflow { W::one() } else { W::zero() };
    }
    borrow
}

/// Subtract 'b' from 'a', writing the difference into 'dst'
///
/// Shorter operands are read as if padded with zeros up to the size of
/// the destination, which must hold at least as many digits as the
/// longer operand. Returns true if the subtraction borrowed out of the
/// most significant digit (that is, b > a).
///
pub fn minus<E, W>(dst: &mut WordsMut<'_, E, W>, a: Words<'_, E, W>, b: Words<'_, E, W>) -> Result<bool, Error>
where
    E: Endianness,
    W: Digit,
{
    let required = a.len().max(b.len());
    if dst.len() < required {
        return Err(Error::InsufficientCapacity {
            operation: "subtract numbers",
            required: required,
            available: dst.len(),
        });
    }
    Ok(minus_into(dst, a, b))
}

/// Subtract 'b' from 'a' into 'dst' without checking its size
pub(crate) fn minus_into<E, W>(dst: &mut WordsMut<'_, E, W>, a: Words<'_, E, W>, b: Words<'_, E, W>) -> bool
where
    E: Endianness,
    W: Digit,
{
    let n = dst.len();
    let a = a.iter().chain(iter::repeat(W::zero())).take(n);
    let b = b.iter().chain(iter::repeat(W::zero())).take(n);
    let (_, borrow) = subtract_with_borrow(dst.iter_mut(), a, b, false);
    borrow
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::{BigEndian, LittleEndian};

    #[test]
    fn subtract_with_borrow_ripples() {
        let mut dst = [0u8; 3];
        let (written, borrow) = subtract_with_borrow(dst.iter_mut(), [0x00u8, 0x00, 0x01], [0x01u8, 0x00, 0x00], false);
        assert_eq!(written, 3);
        assert!(!borrow);
        assert_eq!(dst, [0xff, 0xff, 0x00]);
    }

    #[test]
    fn subtract_with_borrow_underflow() {
        let mut dst = [0u32; 1];
        let (_, borrow) = subtract_with_borrow(dst.iter_mut(), [1u32], [2u32], false);
        assert!(borrow);
        assert_eq!(dst, [u32::MAX]);
    }

    #[test]
    fn subtract_digit() {
        let mut dst = [0u8; 2];
        let (written, borrow) = subtract_digit_with_borrow(dst.iter_mut(), [0x01u8, 0x01], 0x02);
        assert_eq!(written, 2);
        assert_eq!(borrow, 0);
        assert_eq!(dst, [0xff, 0x00]);

        let mut value = [0x00u8, 0x00, 0x01];
        assert_eq!(subtract_digit_assign(value.iter_mut(), 1), 0);
        assert_eq!(value, [0xff, 0xff, 0x00]);

        let mut zero = [0x00u8];
        assert_eq!(subtract_digit_assign(zero.iter_mut(), 1), 1);
        assert_eq!(zero, [0xff]);
    }

    #[test]
    fn minus_big_endian() {
        let a = [0x01u8, 0x00];
        let b = [0x01u8];
        let mut dst = [0u8; 2];
        let borrow = minus(&mut WordsMut::<BigEndian, u8>::new(&mut dst), Words::new(&a), Words::new(&b)).unwrap();
        assert!(!borrow);
        assert_eq!(dst, [0x00, 0xff]);
    }

    #[test]
    fn minus_longer_subtrahend() {
        let a = [0x05u8];
        let b = [0x02u8, 0x00, 0x00];
        let mut dst = [0u8; 3];
        let borrow = minus(&mut WordsMut::<LittleEndian, u8>::new(&mut dst), Words::new(&a), Words::new(&b)).unwrap();
        assert!(!borrow);
        assert_eq!(dst, [0x03, 0x00, 0x00]);
    }

    #[test]
    fn minus_needs_space() {
        let a = [0x05u8, 0x01];
        let mut dst = [0u8; 1];
        let err = minus(&mut WordsMut::<LittleEndian, u8>::new(&mut dst), Words::new(&a), Words::new(&a)).unwrap_err();
        assert_eq!(err, Error::InsufficientCapacity { operation: "subtract numbers", required: 2, available: 1 });
    }
}
