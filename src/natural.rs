//! Natural numbers

use crate::stdlib::cmp::Ordering;
use crate::stdlib::Vec;

use crate::arithmetic::{self, subtract_digit_assign};
use crate::bigdigit::{Digit, DigitVec, Endianness, Words};
use crate::complement::{self, Complement, Sign, Unsigned};
use crate::encoding::{self, DigitString};
use crate::Error;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};


/// Natural number stored as digits of type 'W' in order 'E'
///
/// The value keeps the number of digits it was created with, leading
/// zeros included. Equality, ordering and hashing only look at the
/// value, so `0x00ff` equals `0xff`, and a big endian number equals the
/// little endian number with the same value.
///
/// ```
/// use bytenum::{NBytesBig, NBytesLittle};
///
/// let a = NBytesBig::read("0x0102").unwrap();
/// let b = NBytesLittle::read("258").unwrap();
/// assert_eq!(a.as_digits(), &[0x01, 0x02]);
/// assert_eq!(b.as_digits(), &[0x02, 0x01]);
/// assert_eq!(a, b);
/// ```
#[derive(Clone)]
pub struct NBytes<E: Endianness, W: Digit = u8> {
    pub(crate) digits: DigitVec<W, E>,
}

impl<E: Endianness, W: Digit> NBytes<E, W> {
    /// Zero, with no digits
    pub fn new() -> Self {
        Self::from_digit_vec(DigitVec::new())
    }

    /// Zero, with 'size' digits
    pub fn zero(size: usize) -> Self {
        Self::from_digit_vec(DigitVec::from_zero_count(size))
    }

    /// Wrap digits given in storage order
    pub fn from_digits(digits: Vec<W>) -> Self {
        Self::from_digit_vec(DigitVec::from_vec(digits))
    }

    /// Wrap an owned digit vector
    pub fn from_digit_vec(digits: DigitVec<W, E>) -> Self {
        Self { digits: digits }
    }

    /// Build from the byte layout of the number
    ///
    /// Bytes are in the order 'E', so for big endian numbers the first
    /// byte is the most significant. The byte count must be a multiple
    /// of the digit size.
    ///
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() % W::BYTES != 0 {
            return Err(Error::InvalidByteLength { len: bytes.len(), digit_bytes: W::BYTES });
        }
        let mut le_bytes = bytes.to_vec();
        E::reorder_le_digits(&mut le_bytes);
        Ok(Self::from_digit_vec(DigitVec::from_le_bytes(&le_bytes)))
    }

    /// Byte layout of the number, every digit included
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.digits.to_le_bytes();
        E::reorder_le_digits(&mut bytes);
        bytes
    }

    /// Read from hex (`0x` prefix) or decimal string
    pub fn read(s: &str) -> Result<Self, Error> {
        if s.starts_with("0x") {
            encoding::hexadecimal::read(s)
        } else {
            encoding::decimal::read(s)
        }
    }

    /// Minimal encoding of 'n'
    pub fn from_biguint(n: &BigUint) -> Self {
        Self::from_digit_vec(DigitVec::from_biguint(n))
    }

    pub fn to_biguint(&self) -> BigUint {
        self.digits.to_biguint()
    }

    /// Number of digits, leading zeros included
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True if there are no digits at all
    ///
    /// This is not the same as [`is_zero`](Self::is_zero).
    ///
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

    /// Digit of given significance
    ///
    /// Negative indexes count from the most significant digit, `-1`
    /// being the most significant.
    ///
    pub fn digit(&self, index: isize) -> Result<W, Error> {
        self.words().at(index)
    }

    pub fn is_zero(&self) -> bool {
        Unsigned::is_zero(self.words())
    }

    pub fn is_one(&self) -> bool {
        let mut digits = self.words().iter();
        digits.next() == Some(W::one()) && digits.all(|d| d.is_zero())
    }

    pub fn sign(&self) -> Sign {
        Unsigned::sign(self.words())
    }

    /// Smallest number of digits able to hold this value
    pub fn minimal_size(&self) -> usize {
        Unsigned::minimal_size(self.words())
    }

    pub fn is_minimal(&self) -> bool {
        Unsigned::is_minimal(self.words())
    }

    /// Remove leading zero digits
    pub fn trim(&mut self) {
        Unsigned::trim(&mut self.digits);
    }

    /// Copy without leading zero digits
    pub fn trimmed(&self) -> Self {
        let mut result = self.clone();
        result.trim();
        result
    }

    /// Resize to exactly 'size' digits
    ///
    /// Fails with [`Error::BelowMinimalSize`] if the value does not fit.
    ///
    pub fn extend(&mut self, size: usize) -> Result<(), Error> {
        Unsigned::extend(&mut self.digits, size)
    }

    /// Copy resized to exactly 'size' digits
    pub fn extended(&self, size: usize) -> Result<Self, Error> {
        let mut result = self.clone();
        result.extend(size)?;
        Ok(result)
    }

    /// Same value, stored with opposite endianness
    pub fn reverse(&self) -> NBytes<E::Opposite, W> {
        NBytes::from_digit_vec(self.digits.clone().into_opposite_endian())
    }

    /// Add one, growing by a digit on overflow
    pub fn increment(&mut self) {
        self.digits.add_value(W::one());
    }

    /// Subtract one, zero stays zero
    pub fn decrement(&mut self) {
        if !self.is_zero() {
            subtract_digit_assign(self.digits.words_mut().iter_mut(), W::one());
        }
    }

    /// Difference, or None if 'other' is larger
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        match arithmetic::compare_naturals(self.words(), other.words()) {
            Ordering::Less => None,
            _ => Some(Self::from_digit_vec(arithmetic::subtract_naturals(self.words(), other.words()))),
        }
    }

    /// Difference, or zero if 'other' is larger
    ///
    /// The zero has the size of the larger operand.
    ///
    pub fn saturating_sub(&self, other: &Self) -> Self {
        self.checked_sub(other)
            .unwrap_or_else(|| Self::zero(self.len().max(other.len())))
    }

    /// Quotient and remainder, both in minimal encoding
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if let Some(exponent) = divisor.power_of_two_exponent() {
            let quotient = self.shifted_right(exponent).trimmed();
            let remainder = self.low_bits(exponent).trimmed();
            return Ok((quotient, remainder));
        }

        tracing::trace!(
            dividend_digits = self.len(),
            divisor_digits = divisor.len(),
            "natural division through BigUint"
        );
        let (quotient, remainder) = self.to_biguint().div_rem(&divisor.to_biguint());
        Ok((Self::from_biguint(&quotient), Self::from_biguint(&remainder)))
    }

    /// Raise to the power 'exponent', result in minimal encoding
    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::from_digits(vec![W::one()]);
        let mut base = self.trimmed();
        let mut exponent = exponent;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = base.multiplied(&result).trimmed();
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.multiplied(&base).trimmed();
            }
        }
        result
    }

    /// Exponent 'k' if this value is exactly `2^k`
    pub fn power_of_two_exponent(&self) -> Option<usize> {
        let mut exponent = None;
        for (i, d) in self.words().iter().enumerate() {
            if d.is_zero() {
                continue;
            }
            if exponent.is_some() || d.count_ones() != 1 {
                return None;
            }
            exponent = Some(i * W::BITS as usize + d.trailing_zeros() as usize);
        }
        exponent
    }

    /// Value of the 'count' least significant bits
    pub fn low_bits(&self, count: usize) -> Self {
        let mut result = self.clone();
        let keep = complement::digits_for_shift::<W>(count);
        if keep < result.len() {
            result.digits.truncate_significant(keep);
        }

        let bits = count % W::BITS as usize;
        if bits != 0 {
            if let Some(d) = result.digits.words_mut().get_mut(keep - 1) {
                *d = *d & ((W::one() << bits) - W::one());
            }
        }
        result
    }

    /// Shift toward greater significance, growing to keep every bit
    pub fn shifted_left(&self, amount: usize) -> Self {
        let mut result = self.clone();
        Unsigned::pad(&mut result.digits, self.len() + complement::digits_for_shift::<W>(amount));
        arithmetic::bit_shift_left(&mut result.digits.words_mut(), amount, false);
        result
    }

    /// Shift toward lesser significance, keeping the digit count
    pub fn shifted_right(&self, amount: usize) -> Self {
        let mut result = self.clone();
        arithmetic::bit_shift_right(&mut result.digits.words_mut(), amount, false);
        result
    }

    pub(crate) fn added(&self, other: &Self) -> Self {
        Self::from_digit_vec(arithmetic::add_naturals(self.words(), other.words()))
    }

    pub(crate) fn multiplied(&self, other: &Self) -> Self {
        Self::from_digit_vec(arithmetic::multiply_naturals(self.words(), other.words()))
    }

    /// Digitwise combination, the shorter operand padded with zeros
    pub(crate) fn bitwise<F>(&self, other: &Self, op: F) -> Self
    where
        F: Fn(W, W) -> W,
    {
        let size = self.len().max(other.len());
        let mut lhs = self.digits.clone();
        let mut rhs = other.digits.clone();
        Unsigned::pad(&mut lhs, size);
        Unsigned::pad(&mut rhs, size);
        let digits = lhs.words().iter().zip(rhs.words().iter()).map(|(a, b)| op(a, b)).collect();
        Self::from_digit_vec(DigitVec::from_le_vec(digits))
    }
}

impl<E: Endianness, W: Digit> Default for NBytes<E, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Endianness, W: Digit> DigitString for NBytes<E, W> {
    type Endian = E;
    type Digit = W;

    fn digit_words(&self) -> Words<'_, E, W> {
        self.words()
    }

    fn minimal(&self) -> Self {
        self.trimmed()
    }

    fn from_digit_vec(digits: DigitVec<W, E>) -> Self {
        NBytes::from_digit_vec(digits)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::{BigEndian, LittleEndian, NBytesBig, NBytesLittle};
    use paste::paste;

    include!("natural.tests.rs");
}
