//! Owned digit vectors of arbitrary width and endianness

use crate::stdlib::marker::PhantomData;
use crate::stdlib::Vec;

use num_bigint::BigUint;
use num_traits::Zero;

use super::digit::Digit;
use super::endian::Endianness;
use super::words::{Words, WordsMut};


/// Vector of digits stored in the order given by 'E'
///
/// No invariant is kept on the contents: the vector may carry any
/// number of leading zero (or sign filler) digits.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DigitVec<W, E: Endianness> {
    pub digits: Vec<W>,
    _endian: PhantomData<E>,
}

impl<W: Digit, E: Endianness> DigitVec<W, E> {
    /// Create new, empty, vector
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// construct from vector of digits in storage order
    pub fn from_vec(v: Vec<W>) -> Self {
        Self {
            digits: v,
            _endian: PhantomData {},
        }
    }

    /// construct from vector of digits ordered least significant first
    pub fn from_le_vec(mut v: Vec<W>) -> Self {
        E::reorder_le_digits(&mut v);
        Self::from_vec(v)
    }

    /// allocate with n digits and fill with zeros
    pub fn from_zero_count(n: usize) -> Self {
        Self::from_vec(vec![Zero::zero(); n])
    }

    /// Pack little-endian bytes into digits
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let digits = bytes.chunks(W::BYTES).map(W::from_le_byte_slice).collect();
        Self::from_le_vec(digits)
    }

    /// Number of digits in the vector
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Borrow as immutable view
    pub fn words(&self) -> Words<'_, E, W> {
        Words::new(&self.digits)
    }

    /// Borrow as mutable view
    pub fn words_mut(&mut self) -> WordsMut<'_, E, W> {
        WordsMut::new(&mut self.digits)
    }

    /// Convert to inner vector (storage order)
    pub fn into_vec(self) -> Vec<W> {
        self.digits
    }

    /// Convert to vector ordered least significant first
    pub fn into_le_vec(self) -> Vec<W> {
        E::into_iter(self.digits).collect()
    }

    /// Place digit at the most significant end
    pub fn push_significant_digit(&mut self, d: W) {
        E::push_significant_digit(&mut self.digits, d);
    }

    /// Keep only the 'n' least significant digits
    pub fn truncate_significant(&mut self, n: usize) {
        E::truncate_significant(&mut self.digits, n);
    }

    /// Grow to 'n' digits by adding 'filler' at the most significant end
    pub fn extend_significant(&mut self, n: usize, filler: W) {
        E::extend_significant(&mut self.digits, n, filler);
    }

    /// Remove leading zero digits
    pub fn strip_significant_zeros(&mut self) {
        E::strip_significant_zeros(&mut self.digits);
    }

    /// Add digit into this vector, starting from least significance
    ///
    /// Any "overflow" is pushed to most significant end of the vector
    ///
    pub fn add_value(&mut self, n: W) {
        if n.is_zero() {
            return;
        }

        let mut carry = n;
        for d in self.words_mut().iter_mut() {
            let (hi, lo) = W::expanding_add(*d, carry);
            *d = lo;
            carry = hi;
            if carry.is_zero() {
                return;
            }
        }
        self.push_significant_digit(carry);
    }

    /// Same digits, stored in the opposite order
    pub fn into_opposite_endian(mut self) -> DigitVec<W, E::Opposite> {
        self.digits.reverse();
        DigitVec::from_vec(self.digits)
    }

    /// Unpack digits to bytes, least significant first
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len() * W::BYTES);
        for d in self.words().iter() {
            d.extend_le_bytes(&mut bytes);
        }
        bytes
    }

    /// Build from unsigned reference bignum, using the minimal number of digits
    pub fn from_biguint(n: &BigUint) -> Self {
        let mut result = Self::from_le_bytes(&n.to_bytes_le());
        result.strip_significant_zeros();
        result
    }

    /// Value of digits as an unsigned reference bignum
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.to_le_bytes())
    }
}
