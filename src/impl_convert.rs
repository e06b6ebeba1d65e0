//! Code for implementing From/To conversions
//!
//! Values built from primitives and reference bignums use the minimal
//! encoding of their value.
//!

use crate::*;

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive};


macro_rules! impl_from_unsigned_primitive {
    ($t:ty) => {
        impl<E: Endianness, W: Digit> From<$t> for NBytes<E, W> {
            fn from(n: $t) -> Self {
                let mut digits = DigitVec::from_le_bytes(&n.to_le_bytes());
                digits.strip_significant_zeros();
                NBytes::from_digit_vec(digits)
            }
        }

        impl<E: Endianness, W: Digit> From<&$t> for NBytes<E, W> {
            fn from(n: &$t) -> Self {
                Self::from(*n)
            }
        }

        impl<E: Endianness, C: SignedComplement, W: Digit> From<$t> for ZBytes<E, C, W> {
            fn from(n: $t) -> Self {
                ZBytes::from_magnitude(false, NBytes::from(n))
            }
        }
    };
}

impl_from_unsigned_primitive!(u8);
impl_from_unsigned_primitive!(u16);
impl_from_unsigned_primitive!(u32);
impl_from_unsigned_primitive!(u64);
impl_from_unsigned_primitive!(u128);
impl_from_unsigned_primitive!(usize);

macro_rules! impl_from_signed_primitive {
    ($t:ty) => {
        impl<E: Endianness, C: SignedComplement, W: Digit> From<$t> for ZBytes<E, C, W> {
            fn from(n: $t) -> Self {
                let mut result = ZBytes::from_magnitude(n < 0, NBytes::from(n.unsigned_abs()));
                result.trim();
                result
            }
        }

        impl<E: Endianness, C: SignedComplement, W: Digit> From<&$t> for ZBytes<E, C, W> {
            fn from(n: &$t) -> Self {
                Self::from(*n)
            }
        }
    };
}

impl_from_signed_primitive!(i8);
impl_from_signed_primitive!(i16);
impl_from_signed_primitive!(i32);
impl_from_signed_primitive!(i64);
impl_from_signed_primitive!(i128);
impl_from_signed_primitive!(isize);


macro_rules! impl_try_into_primitive {
    ($t:ident; $($gen:tt)*) => {
        impl<$($gen)*> TryFrom<&NBytes<E, W>> for $t {
            type Error = Error;

            fn try_from(n: &NBytes<E, W>) -> Result<$t, Error> {
                n.to_biguint().to_u128()
                 .and_then(|v| $t::try_from(v).ok())
                 .ok_or(Error::DoesNotFit(stringify!($t)))
            }
        }
    };
    (signed $t:ident; $($gen:tt)*) => {
        impl<$($gen)*> TryFrom<&ZBytes<E, C, W>> for $t {
            type Error = Error;

            fn try_from(n: &ZBytes<E, C, W>) -> Result<$t, Error> {
                n.to_bigint().to_i128()
                 .and_then(|v| $t::try_from(v).ok())
                 .ok_or(Error::DoesNotFit(stringify!($t)))
            }
        }
    };
}

impl_try_into_primitive!(u8; E: Endianness, W: Digit);
impl_try_into_primitive!(u16; E: Endianness, W: Digit);
impl_try_into_primitive!(u32; E: Endianness, W: Digit);
impl_try_into_primitive!(u64; E: Endianness, W: Digit);
impl_try_into_primitive!(u128; E: Endianness, W: Digit);
impl_try_into_primitive!(signed i8; E: Endianness, C: SignedComplement, W: Digit);
impl_try_into_primitive!(signed i16; E: Endianness, C: SignedComplement, W: Digit);
impl_try_into_primitive!(signed i32; E: Endianness, C: SignedComplement, W: Digit);
impl_try_into_primitive!(signed i64; E: Endianness, C: SignedComplement, W: Digit);
impl_try_into_primitive!(signed i128; E: Endianness, C: SignedComplement, W: Digit);


impl<E: Endianness, W: Digit> From<BigUint> for NBytes<E, W> {
    fn from(n: BigUint) -> Self {
        Self::from_biguint(&n)
    }
}

impl<E: Endianness, W: Digit> From<&BigUint> for NBytes<E, W> {
    fn from(n: &BigUint) -> Self {
        Self::from_biguint(n)
    }
}

impl<E: Endianness, W: Digit> TryFrom<&BigInt> for NBytes<E, W> {
    type Error = Error;

    fn try_from(n: &BigInt) -> Result<Self, Error> {
        if n.is_negative() {
            return Err(Error::NegativeNatural);
        }
        Ok(Self::from_biguint(n.magnitude()))
    }
}

impl<E: Endianness, W: Digit> From<&NBytes<E, W>> for BigUint {
    fn from(n: &NBytes<E, W>) -> Self {
        n.to_biguint()
    }
}

impl<E: Endianness, W: Digit> From<NBytes<E, W>> for BigUint {
    fn from(n: NBytes<E, W>) -> Self {
        n.to_biguint()
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> From<BigInt> for ZBytes<E, C, W> {
    fn from(n: BigInt) -> Self {
        Self::from_bigint(&n)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> From<&BigInt> for ZBytes<E, C, W> {
    fn from(n: &BigInt) -> Self {
        Self::from_bigint(n)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> From<&ZBytes<E, C, W>> for BigInt {
    fn from(n: &ZBytes<E, C, W>) -> Self {
        n.to_bigint()
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> From<ZBytes<E, C, W>> for BigInt {
    fn from(n: ZBytes<E, C, W>) -> Self {
        n.to_bigint()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $n:literal => $t:ident [$($d:literal),*]) => {
            paste! {
                #[test]
                fn [< $name _ $t:snake >]() {
                    let x = $t::from($n);
                    let expected: &[u8] = &[$($d),*];
                    assert_eq!(x.as_digits(), expected);
                    assert!(x.is_minimal());
                }
            }
        };
    }

    impl_case!(case_0u8: 0u8 => NBytesBig []);
    impl_case!(case_255u8: 255u8 => NBytesBig [0xff]);
    impl_case!(case_256u32: 256u32 => NBytesBig [0x01, 0x00]);
    impl_case!(case_256u32: 256u32 => NBytesLittle [0x00, 0x01]);
    impl_case!(case_max_u64: 0xffff_ffff_ffff_ffffu64 => NBytesBig [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    impl_case!(case_n1: -1i32 => ZBytesBig [0xff]);
    impl_case!(case_n128: -128i64 => ZBytesBig [0x80]);
    impl_case!(case_n129: -129i64 => ZBytesBig [0xff, 0x7f]);
    impl_case!(case_n129: -129i64 => ZBytesLittle [0x7f, 0xff]);
    impl_case!(case_128: 128i16 => ZBytesBig [0x00, 0x80]);
    impl_case!(case_128u8: 128u8 => ZBytesBig [0x00, 0x80]);
    impl_case!(case_n129: -129i64 => ZBytesTwosBig [0x80, 0x81]);
    impl_case!(case_n1: -1i8 => ZBytesTwosLittle [0x81]);
    impl_case!(case_0: 0i64 => ZBytesTwosLittle []);

    #[test]
    fn wide_digits() {
        let n = NBytes::<BigEndian, u32>::from(0x0102030405u64);
        assert_eq!(n.as_digits(), &[0x01, 0x02030405]);

        let z = ZBytes::<LittleEndian, Ones, u16>::from(-2i32);
        assert_eq!(z.as_digits(), &[0xfffe]);

        let z = ZBytes::<BigEndian, Twos, u64>::from(i128::MIN);
        assert_eq!(z.as_digits(), &[0x8000000000000000, 0x8000000000000000, 0]);
    }

    #[test]
    fn extremes() {
        assert_eq!(ZBytesBig::from(i64::MIN).to_bigint(), BigInt::from(i64::MIN));
        assert_eq!(ZBytesTwosLittle::from(i128::MIN).to_bigint(), BigInt::from(i128::MIN));
        assert_eq!(NBytesLittle::from(u128::MAX).to_biguint(), BigUint::from(u128::MAX));
    }

    #[test]
    fn try_into_primitives() {
        let n = NBytesBig::read("0x0000ff").unwrap();
        assert_eq!(u8::try_from(&n), Ok(255));
        assert_eq!(u64::try_from(&n), Ok(255));

        let n = NBytesBig::from(256u16);
        assert_eq!(u8::try_from(&n), Err(Error::DoesNotFit("u8")));

        let n = NBytesBig::from(u128::MAX) + 1u8;
        assert_eq!(u128::try_from(&n), Err(Error::DoesNotFit("u128")));

        let z = ZBytesTwosBig::from(-129);
        assert_eq!(i16::try_from(&z), Ok(-129));
        assert_eq!(i8::try_from(&z), Err(Error::DoesNotFit("i8")));
        assert_eq!(i64::try_from(&ZBytesBig::from(i64::MIN)), Ok(i64::MIN));
    }

    #[test]
    fn bignums() {
        let n: NBytesLittle = BigUint::from(0x0102u16).into();
        assert_eq!(n.as_digits(), &[0x02, 0x01]);
        assert_eq!(BigUint::from(&n), BigUint::from(258u16));

        let z: ZBytesBig = BigInt::from(-129).into();
        assert_eq!(z.as_digits(), &[0xff, 0x7f]);
        assert_eq!(BigInt::from(z), BigInt::from(-129));

        assert_eq!(NBytesBig::try_from(&BigInt::from(-1)).unwrap_err(), Error::NegativeNatural);
        assert_eq!(NBytesBig::try_from(&BigInt::from(7)).unwrap(), 7u64);
    }
}
