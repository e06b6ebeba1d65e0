//! Integers

use crate::stdlib::marker::PhantomData;
use crate::stdlib::Vec;

use crate::arithmetic;
use crate::bigdigit::{Digit, DigitVec, Endianness, Words};
use crate::complement::{Complement, Ones, Sign, SignedComplement};
use crate::encoding::{self, DigitString};
use crate::{Error, NBytes};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;


/// Integer stored as digits of type 'W' in order 'E', negative values
/// encoded with the sign scheme 'C'
///
/// As with [`NBytes`], the digit count is part of the value's state but
/// not of its identity: `0xffff` and `0xff` are both -1 in the [`Ones`]
/// scheme and compare equal.
///
/// ```
/// use bytenum::{ZBytesBig, ZBytesTwosBig};
///
/// let a = ZBytesBig::from(-129);
/// assert_eq!(a.as_digits(), &[0xff, 0x7f]);
///
/// let b = ZBytesTwosBig::from(-129);
/// assert_eq!(b.as_digits(), &[0x80, 0x81]);
///
/// assert_eq!(a.to_bigint(), b.to_bigint());
/// ```
#[derive(Clone)]
pub struct ZBytes<E: Endianness, C: SignedComplement = Ones, W: Digit = u8> {
    pub(crate) digits: DigitVec<W, E>,
    _complement: PhantomData<C>,
}

impl<E: Endianness, C: SignedComplement, W: Digit> ZBytes<E, C, W> {
    /// Zero, with no digits
    pub fn new() -> Self {
        Self::from_digit_vec(DigitVec::new())
    }

    /// Zero, with 'size' digits
    pub fn zero(size: usize) -> Self {
        Self::from_digit_vec(DigitVec::from_zero_count(size))
    }

    /// Wrap digits given in storage order, read as a raw bit pattern
    pub fn from_digits(digits: Vec<W>) -> Self {
        Self::from_digit_vec(DigitVec::from_vec(digits))
    }

    pub fn from_digit_vec(digits: DigitVec<W, E>) -> Self {
        Self {
            digits: digits,
            _complement: PhantomData,
        }
    }

    /// Build from the byte layout of the number (see [`NBytes::from_bytes`])
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        NBytes::<E, W>::from_bytes(bytes).map(|n| Self::from_digit_vec(n.digits))
    }

    /// Byte layout of the number, every digit included
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.digits.to_le_bytes();
        E::reorder_le_digits(&mut bytes);
        bytes
    }

    /// Read from hex (`0x` prefix) or signed decimal string
    ///
    /// Hex strings are the raw bit pattern of the number, so `0xff` is
    /// -1 with [`Ones`] and -127 with [`Twos`](crate::Twos).
    ///
    pub fn read(s: &str) -> Result<Self, Error> {
        if s.starts_with("0x") {
            encoding::hexadecimal::read(s)
        } else {
            encoding::signed_decimal::read(s)
        }
    }

    /// Minimal encoding of 'n'
    pub fn from_bigint(n: &BigInt) -> Self {
        let magnitude = DigitVec::from_biguint(n.magnitude());
        let mut digits = C::from_magnitude(n.is_negative(), magnitude);
        C::trim(&mut digits);
        Self::from_digit_vec(digits)
    }

    pub fn to_bigint(&self) -> BigInt {
        let magnitude = C::magnitude(self.words()).to_biguint();
        BigInt::from_biguint(self.sign(), magnitude)
    }

    /// Encode sign and magnitude with this scheme
    pub fn from_magnitude(negative: bool, magnitude: NBytes<E, W>) -> Self {
        Self::from_digit_vec(C::from_magnitude(negative, magnitude.digits))
    }

    /// Number of digits, sign filler included
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digits in storage order
    pub fn as_digits(&self) -> &[W] {
        &self.digits.digits
    }

    pub fn words(&self) -> Words<'_, E, W> {
        self.digits.words()
    }

    pub fn into_digit_vec(self) -> DigitVec<W, E> {
        self.digits
    }

    /// Digit of given significance, negative indexes counting from the
    /// most significant digit
    pub fn digit(&self, index: isize) -> Result<W, Error> {
        self.words().at(index)
    }

    pub fn is_zero(&self) -> bool {
        C::is_zero(self.words())
    }

    pub fn is_negative(&self) -> bool {
        C::is_negative(self.words())
    }

    pub fn is_positive(&self) -> bool {
        C::is_positive(self.words())
    }

    /// Top bit of the most significant digit
    ///
    /// Differs from [`is_negative`](Self::is_negative) for the negative
    /// zero of the [`Twos`](crate::Twos) scheme.
    ///
    pub fn sign_bit(&self) -> bool {
        C::sign_bit(self.words())
    }

    pub fn sign(&self) -> Sign {
        C::sign(self.words())
    }

    pub fn is_one(&self) -> bool {
        !self.is_negative() && self.magnitude().is_one()
    }

    pub fn is_negative_one(&self) -> bool {
        self.is_negative() && self.magnitude().is_one()
    }

    /// Smallest number of digits able to hold this value
    pub fn minimal_size(&self) -> usize {
        C::minimal_size(self.words())
    }

    pub fn is_minimal(&self) -> bool {
        C::is_minimal(self.words())
    }

    /// Reduce to the minimal encoding
    pub fn trim(&mut self) {
        C::trim(&mut self.digits);
    }

    pub fn trimmed(&self) -> Self {
        let mut result = self.clone();
        result.trim();
        result
    }

    /// Resize to exactly 'size' digits, keeping the value
    pub fn extend(&mut self, size: usize) -> Result<(), Error> {
        C::extend(&mut self.digits, size)
    }

    pub fn extended(&self, size: usize) -> Result<Self, Error> {
        let mut result = self.clone();
        result.extend(size)?;
        Ok(result)
    }

    /// Same value, stored with opposite endianness
    pub fn reverse(&self) -> ZBytes<E::Opposite, C, W> {
        ZBytes::from_digit_vec(self.digits.clone().into_opposite_endian())
    }

    /// Same value, encoded with another sign scheme
    pub fn to_complement<D: SignedComplement>(&self) -> ZBytes<E, D, W> {
        ZBytes::from_digit_vec(D::from_magnitude(self.is_negative(), C::magnitude(self.words())))
    }

    /// Absolute value as a natural number
    pub fn magnitude(&self) -> NBytes<E, W> {
        NBytes::from_digit_vec(C::magnitude(self.words()))
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.negated()
        } else {
            self.clone()
        }
    }

    /// Replace with the negated value, growing if required
    pub fn negate(&mut self) {
        C::negate_value(&mut self.digits);
    }

    pub fn negated(&self) -> Self {
        let mut result = self.clone();
        result.negate();
        result
    }

    /// Add one, growing by a digit only on overflow
    pub fn increment(&mut self) {
        C::increment(&mut self.digits);
    }

    /// Subtract one, growing by a digit only on overflow
    pub fn decrement(&mut self) {
        C::decrement(&mut self.digits);
    }

    /// Euclidean quotient and remainder, both in minimal encoding
    ///
    /// The remainder is never negative: `-7 / 2` is `-4` remainder `1`
    /// and `-7 / -2` is `4` remainder `1`.
    ///
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if !self.is_negative() && !divisor.is_negative() {
            let (quotient, remainder) = self.magnitude().div_rem(&divisor.magnitude())?;
            return Ok((Self::from_magnitude(false, quotient), Self::from_magnitude(false, remainder)));
        }

        tracing::trace!(
            dividend_digits = self.len(),
            divisor_digits = divisor.len(),
            complement = C::NAME,
            "signed division through BigInt"
        );
        let divisor = divisor.to_bigint();
        let (mut quotient, mut remainder) = self.to_bigint().div_mod_floor(&divisor);
        if remainder.is_negative() {
            remainder -= &divisor;
            quotient += 1;
        }
        Ok((Self::from_bigint(&quotient), Self::from_bigint(&remainder)))
    }

    /// Raise to the power 'exponent', result in minimal encoding
    pub fn pow(&self, exponent: u32) -> Self {
        let negative = self.is_negative() && exponent % 2 == 1;
        let mut result = Self::from_magnitude(negative, self.magnitude().pow(exponent));
        result.trim();
        result
    }

    /// Multiply by `2^amount`, growing to keep every bit
    pub fn shifted_left(&self, amount: usize) -> Self {
        Self::from_digit_vec(C::shift_left(self.words(), amount))
    }

    /// Divide by `2^amount`
    ///
    /// [`Ones`] numbers round toward negative infinity (arithmetic
    /// shift), [`Twos`](crate::Twos) numbers toward zero.
    ///
    pub fn shifted_right(&self, amount: usize) -> Self {
        Self::from_digit_vec(C::shift_right(self.words(), amount))
    }

    pub(crate) fn added(&self, other: &Self) -> Self {
        Self::from_digit_vec(C::add(self.words(), other.words()))
    }

    pub(crate) fn subtracted(&self, other: &Self) -> Self {
        Self::from_digit_vec(C::subtract(self.words(), other.words()))
    }

    pub(crate) fn multiplied(&self, other: &Self) -> Self {
        let negative = self.is_negative() != other.is_negative();
        let product = arithmetic::multiply_naturals(
            C::magnitude(self.words()).words(),
            C::magnitude(other.words()).words(),
        );
        Self::from_digit_vec(C::from_magnitude(negative, product))
    }
}

impl<E: Endianness, W: Digit> ZBytes<E, Ones, W> {
    /// Digitwise combination, the shorter operand sign extended
    pub(crate) fn bitwise<F>(&self, other: &Self, op: F) -> Self
    where
        F: Fn(W, W) -> W,
    {
        let size = self.len().max(other.len());
        let mut lhs = self.digits.clone();
        let mut rhs = other.digits.clone();
        Ones::pad(&mut lhs, size);
        Ones::pad(&mut rhs, size);
        let digits = lhs.words().iter().zip(rhs.words().iter()).map(|(a, b)| op(a, b)).collect();
        Self::from_digit_vec(DigitVec::from_le_vec(digits))
    }

    /// Invert every bit, giving `-x - 1` in minimal encoding
    ///
    /// The operand is sign extended by one digit first, so that zero
    /// with no digits inverts to -1.
    ///
    pub(crate) fn inverted(&self) -> Self {
        let mut extended = self.digits.clone();
        Ones::pad(&mut extended, self.len() + 1);
        let mut result = DigitVec::from_zero_count(extended.len());
        arithmetic::bit_negate(result.words_mut().iter_mut(), extended.words().iter());
        Ones::trim(&mut result);
        Self::from_digit_vec(result)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> Default for ZBytes<E, C, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> DigitString for ZBytes<E, C, W> {
    type Endian = E;
    type Digit = W;

    fn digit_words(&self) -> Words<'_, E, W> {
        self.words()
    }

    fn minimal(&self) -> Self {
        self.trimmed()
    }

    fn from_digit_vec(digits: DigitVec<W, E>) -> Self {
        ZBytes::from_digit_vec(digits)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> From<NBytes<E, W>> for ZBytes<E, C, W> {
    fn from(n: NBytes<E, W>) -> Self {
        Self::from_magnitude(false, n)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> TryFrom<ZBytes<E, C, W>> for NBytes<E, W> {
    type Error = Error;

    fn try_from(z: ZBytes<E, C, W>) -> Result<Self, Error> {
        if z.is_negative() {
            return Err(Error::NegativeNatural);
        }
        Ok(z.magnitude())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::*;
    use paste::paste;

    include!("integer.tests.rs");
}
