//! Bit shifts across digit boundaries
//!
//! Each output digit is built from a pair of adjacent input digits,
//! the pair at the end of the sequence taking a caller supplied fill
//! digit in place of the missing neighbour.
//!

use crate::bigdigit::{Digit, Endianness, WordsMut};

use num_traits::Zero;


/// Shift digits toward greater significance, in place
///
/// Digit of significance `s` is replaced by the high half of the pair
/// `(s - offset, s - offset - 1)` shifted left by `bits`. Returns the
/// number of digits written (the `offset` least significant digits are
/// left untouched).
///
pub fn shift_left<E, W>(words: &mut WordsMut<'_, E, W>, offset: usize, bits: u32, fill: W) -> usize
where
    E: Endianness,
    W: Digit,
{
    debug_assert!(bits < W::BITS);

    let len = words.len();
    if offset >= len {
        return 0;
    }

    for s in (offset..len).rev() {
        let hi = words.get(s - offset).unwrap_or(fill);
        let lo = if s > offset { words.get(s - offset - 1).unwrap_or(fill) } else { fill };
        let (shifted, _) = W::split_wide_digit(W::combine(hi, lo) << bits as usize);
        if let Some(d) = words.get_mut(s) {
            *d = shifted;
        }
    }
    len - offset
}

/// Shift digits toward lesser significance, in place
///
/// Digit of significance `s` is replaced by the low half of the pair
/// `(s + offset + 1, s + offset)` shifted right by `bits`. Returns the
/// number of digits written (the `offset` most significant digits are
/// left untouched).
///
pub fn shift_right<E, W>(words: &mut WordsMut<'_, E, W>, offset: usize, bits: u32, fill: W) -> usize
where
    E: Endianness,
    W: Digit,
{
    debug_assert!(bits < W::BITS);

    let len = words.len();
    if offset >= len {
        return 0;
    }

    for s in 0..(len - offset) {
        let lo = words.get(s + offset).unwrap_or(fill);
        let hi = words.get(s + offset + 1).unwrap_or(fill);
        let (_, shifted) = W::split_wide_digit(W::combine(hi, lo) >> bits as usize);
        if let Some(d) = words.get_mut(s) {
            *d = shifted;
        }
    }
    len - offset
}

/// Shift left by any number of bits, keeping the size of the sequence
///
/// Vacated digits (and bits) are set to all ones if 'fill' is true.
///
pub fn bit_shift_left<E, W>(words: &mut WordsMut<'_, E, W>, amount: usize, fill: bool)
where
    E: Endianness,
    W: Digit,
{
    let filler = if fill { W::MAX } else { W::zero() };
    let offset = amount / W::BITS as usize;
    let bits = (amount % W::BITS as usize) as u32;

    let written = shift_left(words, offset, bits, filler);
    let vacated = words.len() - written;
    for d in words.iter_mut().take(vacated) {
        *d = filler;
    }
}

/// Shift right by any number of bits, keeping the size of the sequence
///
/// Vacated digits (and bits) are set to all ones if 'fill' is true,
/// which makes this an arithmetic shift for negative two's-complement
/// numbers.
///
pub fn bit_shift_right<E, W>(words: &mut WordsMut<'_, E, W>, amount: usize, fill: bool)
where
    E: Endianness,
    W: Digit,
{
    let filler = if fill { W::MAX } else { W::zero() };
    let offset = amount / W::BITS as usize;
    let bits = (amount % W::BITS as usize) as u32;

    let written = shift_right(words, offset, bits, filler);
    let vacated = words.len() - written;
    for d in words.iter_mut().rev().take(vacated) {
        *d = filler;
    }
}
