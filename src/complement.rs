//! Sign schemes
//!
//! A digit sequence means nothing until a scheme says how its top bit
//! is read. Three schemes are provided as empty marker structs:
//!
//! * [`Unsigned`]: no sign, every bit is magnitude.
//! * [`Ones`]: the usual machine representation of negative numbers;
//!   negating is "invert every bit, then add one", so `0xff` is -1 and
//!   `0xff7f` is -129.
//! * [`Twos`]: sign and magnitude; the top bit of the most significant
//!   digit is the sign and negating flips only that bit. `0x80`,
//!   `0x8000`, ... are all "negative zero" and compare equal to zero.
//!
//! Each scheme knows how to find the minimal encoding of a value and
//! how to grow or shrink a sequence without changing its value.
//!

use crate::stdlib::cmp::Ordering;
use crate::stdlib::fmt;
use crate::stdlib::hash::Hash;
use crate::stdlib::iter;

use crate::arithmetic::{self, add_digit_assign, subtract_digit_assign};
use crate::bigdigit::{Digit, DigitVec, Endianness, Words};
use crate::Error;

pub use num_bigint::Sign;

use num_traits::{One, Zero};


/// Interpretation of the sign of a digit sequence
pub trait Complement: 'static + Copy + Clone + Default + fmt::Debug + PartialEq + Eq + Hash {
    /// Name to use for debugging
    const NAME: &'static str;

    /// True if the value is zero (in any of its encodings)
    fn is_zero<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool;

    /// Top bit of the most significant digit
    fn sign_bit<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool {
        x.most_significant().map_or(false, Digit::has_sign_bit)
    }

    /// True if the value is below zero
    fn is_negative<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool;

    /// True if the value is above zero
    fn is_positive<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool {
        !Self::is_zero(x) && !Self::is_negative(x)
    }

    fn sign<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> Sign {
        if Self::is_negative(x) {
            Sign::Minus
        } else if Self::is_zero(x) {
            Sign::NoSign
        } else {
            Sign::Plus
        }
    }

    /// Smallest number of digits able to hold the value of 'x'
    fn minimal_size<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> usize;

    fn is_minimal<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool {
        Self::minimal_size(x) == x.len()
    }

    /// Reduce 'x' to its minimal encoding
    fn trim<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>);

    /// Grow 'x' to 'size' digits without changing its value
    ///
    /// Does nothing if 'x' already holds 'size' digits or more.
    ///
    fn pad<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>, size: usize);

    /// Resize 'x' to exactly 'size' digits without changing its value
    fn extend<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>, size: usize) -> Result<(), Error> {
        let minimal = Self::minimal_size(x.words());
        if size < minimal {
            tracing::debug!(requested = size, minimal = minimal, scheme = Self::NAME, "resize below minimal size");
            return Err(Error::BelowMinimalSize { requested: size, minimal: minimal });
        }
        if size < x.len() {
            Self::trim(x);
        }
        Self::pad(x, size);
        Ok(())
    }
}

/// Sign schemes able to represent negative numbers
pub trait SignedComplement: Complement {
    /// Negate the bit pattern of 'x' in place
    ///
    /// This is the raw operation of the scheme: it does not grow 'x'
    /// when the negation is not representable in the same size.
    ///
    fn negate<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>);

    /// Replace 'x' with its negation, growing it if required
    fn negate_value<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>);

    /// Unsigned digits of the absolute value of 'x'
    fn magnitude<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> DigitVec<W, E>;

    /// Encode a value from its sign and unsigned magnitude
    fn from_magnitude<E: Endianness, W: Digit>(negative: bool, magnitude: DigitVec<W, E>) -> DigitVec<W, E>;

    /// Add one in place, growing by a digit only on overflow
    fn increment<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>);

    /// Subtract one in place, growing by a digit only on overflow
    fn decrement<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>);

    /// a + b
    fn add<E: Endianness, W: Digit>(a: Words<'_, E, W>, b: Words<'_, E, W>) -> DigitVec<W, E>;

    /// a - b
    fn subtract<E: Endianness, W: Digit>(a: Words<'_, E, W>, b: Words<'_, E, W>) -> DigitVec<W, E>;

    /// x * 2^amount, grown to hold the result
    fn shift_left<E: Endianness, W: Digit>(x: Words<'_, E, W>, amount: usize) -> DigitVec<W, E>;

    /// x / 2^amount, keeping the size of 'x'
    fn shift_right<E: Endianness, W: Digit>(x: Words<'_, E, W>, amount: usize) -> DigitVec<W, E>;
}


/// No sign: every bit is magnitude
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unsigned;

/// Negative numbers are the bitwise inverse of magnitude - 1
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ones;

/// Sign bit followed by magnitude
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Twos;


/// Number of extra digits needed to shift left by 'amount' bits
pub(crate) fn digits_for_shift<W: Digit>(amount: usize) -> usize {
    amount.div_ceil(W::BITS as usize)
}

fn copy_words<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> DigitVec<W, E> {
    DigitVec::from_vec(x.as_slice().to_vec())
}

/// True if the digits read, most significant first, as 'first'
/// followed by 'rest' repeated
fn is_pattern<E: Endianness, W: Digit>(x: Words<'_, E, W>, first: W, rest: W) -> bool {
    let mut digits = x.iter_big();
    digits.next() == Some(first) && digits.all(|d| d == rest)
}


impl Complement for Unsigned {
    const NAME: &'static str = "unsigned";

    fn is_zero<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool {
        x.is_zero()
    }

    fn is_negative<E: Endianness, W: Digit>(_x: Words<'_, E, W>) -> bool {
        false
    }

    fn minimal_size<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> usize {
        x.len() - x.count_significant_zeros()
    }

    fn trim<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        x.strip_significant_zeros();
    }

    fn pad<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>, size: usize) {
        x.extend_significant(size, W::zero());
    }
}


impl Ones {
    /// Digit used to extend 'x' toward greater significance
    fn filler<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> W {
        if Self::is_negative(x) { W::MAX } else { W::zero() }
    }

    /// Digits of 'x' sign extended to 'size', least significant first
    fn extended<'a, E: Endianness, W: Digit>(x: Words<'a, E, W>, size: usize) -> impl Iterator<Item=W> + 'a {
        x.iter().chain(iter::repeat(Self::filler(x))).take(size)
    }

    /// True if the value is the most negative value of its size
    fn is_min_value<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool {
        is_pattern(x, W::SIGN_BIT, W::zero())
    }

    /// True if the value is the most positive value of its size
    fn is_max_value<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool {
        is_pattern(x, W::MAX ^ W::SIGN_BIT, W::MAX)
    }

    fn add_sized<E: Endianness, W: Digit>(a: Words<'_, E, W>, b: Words<'_, E, W>, size: usize) -> DigitVec<W, E> {
        let mut sum = DigitVec::from_zero_count(size);
        arithmetic::add_with_carry(
            sum.words_mut().iter_mut(),
            Self::extended(a, size),
            Self::extended(b, size),
            false,
        );
        sum
    }

    fn subtract_sized<E: Endianness, W: Digit>(a: Words<'_, E, W>, b: Words<'_, E, W>, size: usize) -> DigitVec<W, E> {
        let mut difference = DigitVec::from_zero_count(size);
        arithmetic::subtract_with_borrow(
            difference.words_mut().iter_mut(),
            Self::extended(a, size),
            Self::extended(b, size),
            false,
        );
        difference
    }
}

impl Complement for Ones {
    const NAME: &'static str = "ones";

    fn is_zero<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool {
        x.is_zero()
    }

    fn is_negative<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool {
        x.most_significant().map_or(false, Digit::has_sign_bit)
    }

    fn minimal_size<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> usize {
        let len = x.len();
        let top = match x.most_significant() {
            None => return 0,
            Some(d) => d,
        };
        if top != W::zero() && top != W::MAX {
            return len;
        }

        let fillers = x.iter_big().take_while(|&d| d == top).count();
        match x.digit_at_from_end(fillers) {
            None if top.is_zero() => 0,
            None => 1,
            // filler digits may go as long as the next digit carries the same sign
            Some(next) if next.has_sign_bit() == top.has_sign_bit() => len - fillers,
            Some(_) => len - fillers + 1,
        }
    }

    fn trim<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        let minimal = Self::minimal_size(x.words());
        x.truncate_significant(minimal);
    }

    fn pad<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>, size: usize) {
        let filler = Self::filler(x.words());
        x.extend_significant(size, filler);
    }
}

impl SignedComplement for Ones {
    fn negate<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        let mut words = x.words_mut();
        for d in words.iter_mut() {
            *d = !*d;
        }
        add_digit_assign(words.iter_mut(), W::one());
    }

    fn negate_value<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        if Self::is_min_value(x.words()) {
            Self::pad(x, x.len() + 1);
        }
        Self::negate(x);
    }

    fn magnitude<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> DigitVec<W, E> {
        let mut result = copy_words(x);
        if Self::is_negative(x) {
            // the most negative value maps onto itself, which read
            // unsigned is the right magnitude
            Self::negate(&mut result);
        }
        result
    }

    fn from_magnitude<E: Endianness, W: Digit>(negative: bool, mut magnitude: DigitVec<W, E>) -> DigitVec<W, E> {
        if magnitude.words().most_significant().map_or(false, Digit::has_sign_bit) {
            magnitude.push_significant_digit(W::zero());
        }
        if negative {
            Self::negate(&mut magnitude);
        }
        magnitude
    }

    fn increment<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        if x.is_empty() || Self::is_max_value(x.words()) {
            Self::pad(x, x.len() + 1);
        }
        add_digit_assign(x.words_mut().iter_mut(), W::one());
    }

    fn decrement<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        if x.is_empty() || Self::is_min_value(x.words()) {
            Self::pad(x, x.len() + 1);
        }
        subtract_digit_assign(x.words_mut().iter_mut(), W::one());
    }

    fn add<E: Endianness, W: Digit>(a: Words<'_, E, W>, b: Words<'_, E, W>) -> DigitVec<W, E> {
        let size = a.len().max(b.len());
        let sum = Self::add_sized(a, b, size);

        let a_negative = Self::is_negative(a);
        let overflow = a_negative == Self::is_negative(b)
                    && a_negative != Self::is_negative(sum.words());
        if overflow {
            Self::add_sized(a, b, size + 1)
        } else {
            sum
        }
    }

    fn subtract<E: Endianness, W: Digit>(a: Words<'_, E, W>, b: Words<'_, E, W>) -> DigitVec<W, E> {
        let size = a.len().max(b.len());
        let difference = Self::subtract_sized(a, b, size);

        let a_negative = Self::is_negative(a);
        let overflow = a_negative != Self::is_negative(b)
                    && a_negative != Self::is_negative(difference.words());
        if overflow {
            Self::subtract_sized(a, b, size + 1)
        } else {
            difference
        }
    }

    fn shift_left<E: Endianness, W: Digit>(x: Words<'_, E, W>, amount: usize) -> DigitVec<W, E> {
        let mut result = copy_words(x);
        Self::pad(&mut result, x.len() + digits_for_shift::<W>(amount));
        arithmetic::bit_shift_left(&mut result.words_mut(), amount, false);
        result
    }

    fn shift_right<E: Endianness, W: Digit>(x: Words<'_, E, W>, amount: usize) -> DigitVec<W, E> {
        let mut result = copy_words(x);
        arithmetic::bit_shift_right(&mut result.words_mut(), amount, Self::is_negative(x));
        result
    }
}


impl Twos {
    /// Add magnitudes with signs, choosing the sign of the larger one
    fn signed_add<E: Endianness, W: Digit>(
        a_negative: bool,
        a: DigitVec<W, E>,
        b_negative: bool,
        b: DigitVec<W, E>,
    ) -> DigitVec<W, E> {
        if a_negative == b_negative {
            return Self::from_magnitude(a_negative, arithmetic::add_naturals(a.words(), b.words()));
        }
        match arithmetic::compare_naturals(a.words(), b.words()) {
            Ordering::Less => {
                Self::from_magnitude(b_negative, arithmetic::subtract_naturals(b.words(), a.words()))
            }
            _ => {
                Self::from_magnitude(a_negative, arithmetic::subtract_naturals(a.words(), b.words()))
            }
        }
    }

    /// Clear the sign bit of the most significant digit
    fn clear_sign<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        if let Some(d) = x.words_mut().most_significant_mut() {
            *d = *d & !W::SIGN_BIT;
        }
    }

    /// Set the sign bit of the most significant digit
    fn set_sign<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        if let Some(d) = x.words_mut().most_significant_mut() {
            *d = *d | W::SIGN_BIT;
        }
    }
}

impl Complement for Twos {
    const NAME: &'static str = "twos";

    fn is_zero<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool {
        x.iter_big().enumerate().all(|(i, d)| {
            if i == 0 { (d & !W::SIGN_BIT).is_zero() } else { d.is_zero() }
        })
    }

    fn is_negative<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> bool {
        x.most_significant().map_or(false, Digit::has_sign_bit) && !Self::is_zero(x)
    }

    fn minimal_size<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> usize {
        let len = x.len();
        let top = match x.most_significant() {
            None => return 0,
            Some(d) => d,
        };
        if !(top & !W::SIGN_BIT).is_zero() {
            return len;
        }

        let zeros = x.iter_big().skip(1).take_while(|d| d.is_zero()).count();
        match x.digit_at_from_end(zeros + 1) {
            None => 0,
            // the sign bit needs a digit of its own
            Some(next) if next.has_sign_bit() => len - zeros,
            Some(_) => len - zeros - 1,
        }
    }

    fn trim<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        let minimal = Self::minimal_size(x.words());
        if minimal == x.len() {
            return;
        }
        let negative = x.words().most_significant().map_or(false, Digit::has_sign_bit);
        x.truncate_significant(minimal);
        if negative {
            Self::set_sign(x);
        }
    }

    fn pad<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>, size: usize) {
        if size <= x.len() {
            return;
        }
        let negative = x.words().most_significant().map_or(false, Digit::has_sign_bit);
        Self::clear_sign(x);
        x.extend_significant(size, W::zero());
        if negative {
            Self::set_sign(x);
        }
    }
}

impl SignedComplement for Twos {
    fn negate<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        match x.words_mut().most_significant_mut() {
            Some(d) => *d = *d ^ W::SIGN_BIT,
            None => x.push_significant_digit(W::SIGN_BIT),
        }
    }

    fn negate_value<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        if !Self::is_zero(x.words()) {
            Self::negate(x);
        }
    }

    fn magnitude<E: Endianness, W: Digit>(x: Words<'_, E, W>) -> DigitVec<W, E> {
        let mut result = copy_words(x);
        Self::clear_sign(&mut result);
        result
    }

    fn from_magnitude<E: Endianness, W: Digit>(negative: bool, mut magnitude: DigitVec<W, E>) -> DigitVec<W, E> {
        if magnitude.words().is_zero() {
            return magnitude;
        }
        if magnitude.words().most_significant().map_or(false, Digit::has_sign_bit) {
            magnitude.push_significant_digit(W::zero());
        }
        if negative {
            Self::set_sign(&mut magnitude);
        }
        magnitude
    }

    fn increment<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        if Self::is_negative(x.words()) {
            // magnitude is at least one, the borrow stops below the sign bit
            subtract_digit_assign(x.words_mut().iter_mut(), W::one());
            return;
        }
        Self::clear_sign(x);
        if x.is_empty() || Ones::is_max_value(x.words()) {
            Self::pad(x, x.len() + 1);
        }
        add_digit_assign(x.words_mut().iter_mut(), W::one());
    }

    fn decrement<E: Endianness, W: Digit>(x: &mut DigitVec<W, E>) {
        if Self::is_zero(x.words()) {
            if x.is_empty() {
                x.push_significant_digit(W::zero());
            }
            x.words_mut().fill(W::zero());
            if let Some(d) = x.words_mut().get_mut(0) {
                *d = W::one();
            }
            Self::set_sign(x);
            return;
        }
        if !Self::is_negative(x.words()) {
            subtract_digit_assign(x.words_mut().iter_mut(), W::one());
            return;
        }
        if x.words().iter().all(|d| d == W::MAX) {
            Self::pad(x, x.len() + 1);
        }
        add_digit_assign(x.words_mut().iter_mut(), W::one());
    }

    fn add<E: Endianness, W: Digit>(a: Words<'_, E, W>, b: Words<'_, E, W>) -> DigitVec<W, E> {
        Self::signed_add(Self::is_negative(a), Self::magnitude(a), Self::is_negative(b), Self::magnitude(b))
    }

    fn subtract<E: Endianness, W: Digit>(a: Words<'_, E, W>, b: Words<'_, E, W>) -> DigitVec<W, E> {
        let b_negative = Self::is_negative(b);
        let b_nonzero = !Self::is_zero(b);
        Self::signed_add(Self::is_negative(a), Self::magnitude(a), b_nonzero && !b_negative, Self::magnitude(b))
    }

    fn shift_left<E: Endianness, W: Digit>(x: Words<'_, E, W>, amount: usize) -> DigitVec<W, E> {
        let mut magnitude = Self::magnitude(x);
        Unsigned::pad(&mut magnitude, x.len() + digits_for_shift::<W>(amount));
        arithmetic::bit_shift_left(&mut magnitude.words_mut(), amount, false);
        Self::from_magnitude(Self::is_negative(x), magnitude)
    }

    fn shift_right<E: Endianness, W: Digit>(x: Words<'_, E, W>, amount: usize) -> DigitVec<W, E> {
        let mut magnitude = Self::magnitude(x);
        arithmetic::bit_shift_right(&mut magnitude.words_mut(), amount, false);
        Self::from_magnitude(Self::is_negative(x), magnitude)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::{BigEndian, LittleEndian};

    include!("complement.tests.rs");
}
