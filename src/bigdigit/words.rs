//! Borrowed views of digit slices
//!
//! A view reads its slice in either direction: [`Words::iter`] goes from
//! least to most significant digit, [`Words::iter_big`] the other way.
//! Reversing a view swaps its endianness without touching storage.
//!

use crate::stdlib::marker::PhantomData;
use crate::Error;

use num_traits::Zero;

use super::digit::Digit;
use super::endian::Endianness;


/// Immutable view of digits with a given endianness
#[derive(Debug)]
pub struct Words<'a, E: Endianness, W> {
    digits: &'a [W],
    _endian: PhantomData<E>,
}

impl<E: Endianness, W> Clone for Words<'_, E, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Endianness, W> Copy for Words<'_, E, W> {}

impl<'a, E: Endianness, W: Digit> Words<'a, E, W> {
    /// Wrap slice of digits stored in order 'E'
    pub fn new(digits: &'a [W]) -> Self {
        Self {
            digits: digits,
            _endian: PhantomData {},
        }
    }

    /// Number of digits in view
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True if there are no digits
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Underlying storage, in storage order
    pub fn as_slice(&self) -> &'a [W] {
        self.digits
    }

    /// Iterate from least to most significant digit
    pub fn iter(&self) -> impl DoubleEndedIterator<Item=W> + ExactSizeIterator + 'a {
        E::iter_slice(self.digits).copied()
    }

    /// Iterate from most to least significant digit
    pub fn iter_big(&self) -> impl DoubleEndedIterator<Item=W> + ExactSizeIterator + 'a {
        self.iter().rev()
    }

    /// Digit of given significance (0 is least significant)
    pub fn get(&self, significance: usize) -> Option<W> {
        let len = self.len();
        if significance < len {
            Some(self.digits[E::storage_index(len, significance)])
        } else {
            None
        }
    }

    /// Digit counting from the most significant end (0 is most significant)
    pub fn digit_at_from_end(&self, i: usize) -> Option<W> {
        let len = self.len();
        if i < len {
            self.get(len - 1 - i)
        } else {
            None
        }
    }

    /// The most significant digit, if any
    pub fn most_significant(&self) -> Option<W> {
        self.digit_at_from_end(0)
    }

    /// Bounds checked access by significance
    ///
    /// Negative indexes count back from the most significant digit,
    /// `-1` being the most significant.
    ///
    pub fn at(&self, index: isize) -> Result<W, Error> {
        let found = if index >= 0 {
            self.get(index as usize)
        } else {
            self.digit_at_from_end(index.unsigned_abs() - 1)
        };
        found.ok_or(Error::IndexOutOfRange { index: index, len: self.len() })
    }

    /// True if every digit is zero (or there are none)
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(Zero::is_zero)
    }

    /// Number of zero digits at the most significant end
    pub fn count_significant_zeros(&self) -> usize {
        E::count_significant_zeros(self.digits)
    }

    /// Split into 'count' least significant digits and the rest
    pub fn split_least_significant(self, count: usize) -> (Self, Self) {
        let count = count.min(self.len());
        let (lo, hi) = E::split_least_significant(self.digits, count);
        (Self::new(lo), Self::new(hi))
    }

    /// View the same storage in opposite order
    ///
    /// Little order of the result is big order of this view.
    ///
    pub fn reverse(self) -> Words<'a, E::Opposite, W> {
        Words::new(self.digits)
    }
}


/// Mutable view of digits with a given endianness
#[derive(Debug)]
pub struct WordsMut<'a, E: Endianness, W> {
    digits: &'a mut [W],
    _endian: PhantomData<E>,
}

impl<'a, E: Endianness, W: Digit> WordsMut<'a, E, W> {
    /// Wrap mutable slice of digits stored in order 'E'
    pub fn new(digits: &'a mut [W]) -> Self {
        Self {
            digits: digits,
            _endian: PhantomData {},
        }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Reborrow as immutable view
    pub fn as_words(&self) -> Words<'_, E, W> {
        Words::new(self.digits)
    }

    /// Iterate mutably from least to most significant digit
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item=&mut W> + ExactSizeIterator + '_ {
        E::iter_slice_mut(self.digits)
    }

    /// Digit of given significance
    pub fn get(&self, significance: usize) -> Option<W> {
        self.as_words().get(significance)
    }

    /// Mutable reference to digit of given significance
    pub fn get_mut(&mut self, significance: usize) -> Option<&mut W> {
        let len = self.len();
        if significance < len {
            Some(&mut self.digits[E::storage_index(len, significance)])
        } else {
            None
        }
    }

    /// Mutable reference to the most significant digit, if any
    pub fn most_significant_mut(&mut self) -> Option<&mut W> {
        match self.len() {
            0 => None,
            len => self.get_mut(len - 1),
        }
    }

    /// Set every digit to 'value'
    pub fn fill(&mut self, value: W) {
        self.digits.fill(value);
    }

    /// Split into 'count' least significant digits and the rest
    pub fn split_least_significant(&mut self, count: usize) -> (WordsMut<'_, E, W>, WordsMut<'_, E, W>) {
        let count = count.min(self.len());
        let (lo, hi) = E::split_least_significant_mut(self.digits, count);
        (WordsMut::new(lo), WordsMut::new(hi))
    }

    /// View the same storage in opposite order
    pub fn reverse(self) -> WordsMut<'a, E::Opposite, W> {
        WordsMut::new(self.digits)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::endian::{BigEndian, LittleEndian};

    include!("words.tests.rs");
}
