//! Text encodings of numbers
//!
//! * [`hexadecimal`]: `0x` prefixed, digit count preserving.
//! * [`decimal`]: natural numbers in base ten.
//! * [`signed_decimal`]: integers in base ten with an optional `-`.
//!

use crate::bigdigit::{Digit, DigitVec, Endianness, Words};
use crate::stdlib::ToString;
use crate::Error;

pub mod hexadecimal;
pub mod decimal;
pub mod signed_decimal;


/// Numbers made of a plain digit sequence
///
/// Implemented by [`NBytes`](crate::NBytes) and
/// [`ZBytes`](crate::ZBytes), letting the string codecs work on either.
///
pub trait DigitString: Sized {
    type Endian: Endianness;
    type Digit: Digit;

    /// All digits of the number, including non-significant ones
    fn digit_words(&self) -> Words<'_, Self::Endian, Self::Digit>;

    /// Same value in its minimal encoding
    fn minimal(&self) -> Self;

    /// Wrap digits without changing them
    fn from_digit_vec(digits: DigitVec<Self::Digit, Self::Endian>) -> Self;
}

/// Build the error for a string rejected by 'format'
pub(crate) fn invalid_string(format: &'static str, input: &str) -> Error {
    tracing::debug!(format = format, input = input, "rejected string");
    Error::InvalidString {
        format: format,
        input: input.to_string(),
    }
}
