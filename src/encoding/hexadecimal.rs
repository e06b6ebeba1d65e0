//! Hexadecimal strings
//!
//! A string is `0x` followed by an even number of hex digits, most
//! significant first whatever the endianness of the number. Reading
//! keeps every digit of the string, so `0x000000` is a three byte zero;
//! writing produces the minimal encoding, and zero is written `0x`.
//!

use crate::stdlib::{String, Vec};
use crate::bigdigit::{Digit, DigitVec, Endianness, Words};
use crate::Error;

use super::{invalid_string, DigitString};


/// Case of the letters a-f in written strings
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LetterCase {
    Lower,
    Upper,
}

// const DEFAULT_HEX_CASE: LetterCase = ${RUST_BYTENUM_DEFAULT_HEX_CASE} or Lower;
include!(concat!(env!("OUT_DIR"), "/default_hex_case.rs"));

impl Default for LetterCase {
    fn default() -> Self {
        DEFAULT_HEX_CASE
    }
}

impl LetterCase {
    fn alphabet(self) -> &'static [u8; 16] {
        match self {
            LetterCase::Lower => b"0123456789abcdef",
            LetterCase::Upper => b"0123456789ABCDEF",
        }
    }
}

/// True if 's' is `0x` followed by an even number of hex digits
pub fn valid(s: &str) -> bool {
    s.strip_prefix("0x").map_or(false, |hex| {
        hex.len() % 2 == 0 && hex.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

/// Decode pairs of hex digits into bytes, most significant first
fn decode_bytes(hex: &str) -> Option<Vec<u8>> {
    hex.as_bytes()
       .chunks(2)
       .map(|pair| {
           let hi = (pair[0] as char).to_digit(16)?;
           let lo = (*pair.get(1)? as char).to_digit(16)?;
           Some((hi << 4 | lo) as u8)
       })
       .collect()
}

/// Read number from hex string, keeping every digit of the string
///
/// For digits wider than a byte the string must hold a whole number of
/// digits (`0x0001` is a valid one digit `u16` string, `0x01` is not).
/// Integers read the digits as the raw bit pattern of their sign scheme.
///
pub fn read<T: DigitString>(s: &str) -> Result<T, Error> {
    let width = 2 * <T::Digit as Digit>::BYTES;
    if !valid(s) || (s.len() - 2) % width != 0 {
        return Err(invalid_string("hexadecimal", s));
    }

    let mut bytes = decode_bytes(&s[2..]).ok_or_else(|| invalid_string("hexadecimal", s))?;
    bytes.reverse();
    Ok(T::from_digit_vec(DigitVec::from_le_bytes(&bytes)))
}

/// Minimal hex encoding of 'x' in the default letter case
pub fn write<T: DigitString>(x: &T) -> String {
    write_with_case(x, DEFAULT_HEX_CASE)
}

/// Minimal hex encoding of 'x'
pub fn write_with_case<T: DigitString>(x: &T, case: LetterCase) -> String {
    write_words(x.minimal().digit_words(), case)
}

/// Hex encoding of every digit in 'words', including leading zeros
pub fn write_words<E: Endianness, W: Digit>(words: Words<'_, E, W>, case: LetterCase) -> String {
    let mut bytes = Vec::with_capacity(words.len() * W::BYTES);
    for d in words.iter_big() {
        d.extend_be_bytes(&mut bytes);
    }

    let alphabet = case.alphabet();
    let mut result = String::with_capacity(2 + 2 * bytes.len());
    result.push_str("0x");
    for b in bytes {
        result.push(alphabet[(b >> 4) as usize] as char);
        result.push(alphabet[(b & 0x0f) as usize] as char);
    }
    result
}
