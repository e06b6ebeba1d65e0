//! Addition of digit sequences with carry propagation
//!
//! Every function here takes its digits least significant first and
//! reports how many destination digits were written alongside the
//! outgoing carry. The destination iterator is zipped last, so it is
//! only advanced for digits actually written.
//!

use crate::stdlib::iter;
use crate::bigdigit::{Digit, Endianness, Words, WordsMut};
use crate::Error;

use num_traits::{One, Zero};


/// Write a + b + carry into dst, digit by digit
///
/// Stops at the end of the shortest of the three sequences.
///
pub fn add_with_carry<'d, W, O, A, B>(dst: O, a: A, b: B, carry: bool) -> (usize, bool)
where
    W: Digit,
    O: IntoIterator<Item=&'d mut W>,
    A: IntoIterator<Item=W>,
    B: IntoIterator<Item=W>,
{
    let mut written = 0;
    let mut carry = carry;
    for ((x, y), out) in a.into_iter().zip(b).zip(dst) {
        let (sum, overflow) = W::add_with_carry(x, y, carry);
        *out = sum;
        carry = overflow;
        written += 1;
    }
    (written, carry)
}

/// Write a + d into dst, where d is a single digit
pub fn add_digit_with_carry<'d, W, O, A>(dst: O, a: A, d: W) -> (usize, W)
where
    W: Digit,
    O: IntoIterator<Item=&'d mut W>,
    A: IntoIterator<Item=W>,
{
    let mut written = 0;
    let mut carry = d;
    for (x, out) in a.into_iter().zip(dst) {
        let (hi, lo) = W::expanding_add(x, carry);
        *out = lo;
        carry = hi;
        written += 1;
    }
    (written, carry)
}

/// Perform dst += d, returning the carry out of the last digit
///
/// Stops as soon as the carry has been absorbed.
///
pub fn add_digit_assign<'d, W, O>(dst: O, d: W) -> W
where
    W: Digit,
    O: IntoIterator<Item=&'d mut W>,
{
    let mut carry = d;
    for out in dst {
        if carry.is_zero() {
            break;
        }
        let (hi, lo) = W::expanding_add(*out, carry);
        *out = lo;
        carry = hi;
    }
    carry
}

/// Add 'a' and 'b', writing the sum into 'dst'
///
/// The destination must hold at least as many digits as the longer
/// operand; digits past the operands receive the carry. The carry out
/// of the last destination digit is returned.
///
pub fn plus<E, W>(dst: &mut WordsMut<'_, E, W>, a: Words<'_, E, W>, b: Words<'_, E, W>) -> Result<W, Error>
where
    E: Endianness,
    W: Digit,
{
    let required = a.len().max(b.len());
    if dst.len() < required {
        return Err(Error::InsufficientCapacity {
            operation: "add numbers",
            required: required,
            available: dst.len(),
        });
    }
    Ok(plus_into(dst, a, b))
}

/// Add 'a' and 'b' into 'dst' without checking its size
///
/// Digits of the sum that do not fit are dropped.
///
pub(crate) fn plus_into<E, W>(dst: &mut WordsMut<'_, E, W>, a: Words<'_, E, W>, b: Words<'_, E, W>) -> W
where
    E: Endianness,
    W: Digit,
{
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut out = dst.iter_mut();
    let (written, carry) = add_with_carry(out.by_ref(), a.iter(), b.iter(), false);
    let carry = if carry { W::one() } else { W::zero() };
    let (_, carry) = add_digit_with_carry(out.by_ref(), a.iter().skip(written), carry);
    let (_, carry) = add_digit_with_carry(out, iter::repeat(W::zero()), carry);
    carry
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::{BigEndian, LittleEndian};

    include!("addition.tests.rs");
}
