//! Fixed width digit types
//!
//! Numbers are stored as sequences of one of the primitive unsigned
//! integers. The trait gathers the double-wide operations the carry
//! arithmetic is built from.
//!

use crate::stdlib::fmt;
use crate::stdlib::hash::Hash;
use crate::stdlib::mem;
use crate::stdlib::Vec;

use num_traits::{AsPrimitive, PrimInt, Unsigned, WrappingSub, Zero};


/// Unsigned primitive used as a single digit of a number
pub trait Digit
    : 'static
    + Copy
    + Default
    + Hash
    + fmt::Debug
    + fmt::LowerHex
    + fmt::UpperHex
    + PrimInt
    + Unsigned
{
    /// double wide unsigned type (capable of storing product of two digits)
    type Double
        : 'static
        + Copy
        + PrimInt
        + Unsigned
        + WrappingSub
        + AsPrimitive<Self>
        + From<u8>
        + From<Self>;

    /// Number of bits in one digit
    const BITS: u32;

    /// Number of bytes in one digit
    const BYTES: usize;

    /// Digit with every bit set
    const MAX: Self;

    /// Digit with only the most significant bit set
    const SIGN_BIT: Self;

    /// Join high and low digits into one double wide value
    fn combine(hi: Self, lo: Self) -> Self::Double {
        (Self::Double::from(hi) << Self::BITS as usize) | Self::Double::from(lo)
    }

    /// Split double wide value into (high, low) digits
    fn split_wide_digit(n: Self::Double) -> (Self, Self) {
        ((n >> Self::BITS as usize).as_(), n.as_())
    }

    /// Return (a + b + carry, carry-out)
    fn add_with_carry(a: Self, b: Self, carry: bool) -> (Self, bool) {
        let sum = Self::Double::from(a) + Self::Double::from(b) + Self::Double::from(carry as u8);
        let (hi, lo) = Self::split_wide_digit(sum);
        (lo, !hi.is_zero())
    }

    /// Return (a - b - borrow, borrow-out)
    ///
    /// The difference is taken in the double wide type, a borrow shows
    /// up as set bits in the high half.
    ///
    fn sub_with_borrow(a: Self, b: Self, borrow: bool) -> (Self, bool) {
        let diff = Self::Double::from(a)
                   .wrapping_sub(&Self::Double::from(b))
                   .wrapping_sub(&Self::Double::from(borrow as u8));
        let (hi, lo) = Self::split_wide_digit(diff);
        (lo, !hi.is_zero())
    }

    /// Add digits, returning (high, low)
    fn expanding_add(a: Self, b: Self) -> (Self, Self) {
        Self::split_wide_digit(Self::Double::from(a) + Self::Double::from(b))
    }

    /// Multiply digits, returning (high, low)
    fn expanding_mul(a: Self, b: Self) -> (Self, Self) {
        Self::split_wide_digit(Self::Double::from(a) * Self::Double::from(b))
    }

    /// True if the top bit of the digit is set
    fn has_sign_bit(self) -> bool {
        !(self & Self::SIGN_BIT).is_zero()
    }

    /// Build digit from (at most BYTES) little-endian bytes
    fn from_le_byte_slice(bytes: &[u8]) -> Self;

    /// Append bytes of this digit, most significant first
    fn extend_be_bytes(self, out: &mut Vec<u8>);

    /// Append bytes of this digit, least significant first
    fn extend_le_bytes(self, out: &mut Vec<u8>);
}


macro_rules! impl_digit {
    ($t:ty => $double:ty) => {
        impl Digit for $t {
            type Double = $double;

            const BITS: u32 = <$t>::BITS;
            const BYTES: usize = mem::size_of::<$t>();
            const MAX: Self = <$t>::MAX;
            const SIGN_BIT: Self = 1 << (<$t>::BITS - 1);

            fn from_le_byte_slice(bytes: &[u8]) -> Self {
                debug_assert!(bytes.len() <= Self::BYTES);
                let n = bytes.len().min(Self::BYTES);
                let mut buf = [0u8; mem::size_of::<$t>()];
                buf[..n].copy_from_slice(&bytes[..n]);
                <$t>::from_le_bytes(buf)
            }

            fn extend_be_bytes(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_be_bytes());
            }

            fn extend_le_bytes(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }
        }
    };
}

impl_digit!(u8 => u16);
impl_digit!(u16 => u32);
impl_digit!(u32 => u64);
impl_digit!(u64 => u128);


#[cfg(test)]
mod test {
    use super::*;

    include!("digit.tests.rs");
}
