//! Bit shift operators
//!
//! `x << k` multiplies by `2^k` and grows the number to keep every bit;
//! `x >> k` keeps the digit count. A negative `k` shifts the other way.
//!

use crate::*;
use crate::stdlib::ops::{Shl, ShlAssign, Shr, ShrAssign};


impl_shift_ops!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Shl::shl, ShlAssign::shl_assign => shifted_left, shifted_right
);

impl_shift_ops!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Shr::shr, ShrAssign::shr_assign => shifted_right, shifted_left
);

impl_shift_ops!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Shl::shl, ShlAssign::shl_assign => shifted_left, shifted_right
);

impl_shift_ops!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Shr::shr, ShrAssign::shr_assign => shifted_right, shifted_left
);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $t:ident; $a:literal << $k:literal => $c:literal) => {
            paste! {
                #[test]
                fn [< $name _ $t:snake >]() {
                    let a = $t::read($a).unwrap();
                    let c = $t::read($c).unwrap();
                    assert_eq!(c, &a << $k);
                    assert_eq!(c, &a >> -$k);
                    assert_eq!(c, a.clone() << ($k as u32));

                    let mut n = a.clone();
                    n <<= $k;
                    assert_eq!(c, n);
                }
            }
        };
        ($name:ident: $t:ident; $a:literal >> $k:literal => $c:literal) => {
            paste! {
                #[test]
                fn [< $name _ $t:snake >]() {
                    let a = $t::read($a).unwrap();
                    let c = $t::read($c).unwrap();
                    assert_eq!(c, &a >> $k);
                    assert_eq!(c, &a << -$k);
                    assert_eq!(c, a.clone() >> ($k as usize));

                    let mut n = a.clone();
                    n >>= $k;
                    assert_eq!(c, n);
                }
            }
        };
        ($name:ident: $a:literal $op:tt $k:literal => $c:literal) => {
            impl_case!($name: NBytesBig; $a $op $k => $c);
            impl_case!($name: NBytesLittle; $a $op $k => $c);
            impl_case!($name: ZBytesBig; $a $op $k => $c);
            impl_case!($name: ZBytesTwosLittle; $a $op $k => $c);
        };
    }

    impl_case!(case_1_shl_0: "1" << 0 => "1");
    impl_case!(case_1_shl_8: "1" << 8 => "256");
    impl_case!(case_3_shl_13: "3" << 13 => "24576");
    impl_case!(case_255_shl_64: "255" << 64 => "4703919738795935662080");
    impl_case!(case_256_shr_8: "256" >> 8 => "1");
    impl_case!(case_24576_shr_13: "24576" >> 13 => "3");
    impl_case!(case_255_shr_9: "255" >> 9 => "0");

    #[test]
    fn negative_shift_right() {
        assert_eq!(ZBytesBig::from(-7) >> 1i32, -4i64);
        assert_eq!(ZBytesTwosBig::from(-7) >> 1i32, -3i64);
        assert_eq!(ZBytesLittle::from(-7) << 2u8, -28i64);
        assert_eq!(ZBytesTwosLittle::from(-7) << 2u8, -28i64);
    }

    #[test]
    fn left_shift_grows() {
        let n = NBytesBig::from(0x80u8) << 1usize;
        assert_eq!(n.as_digits(), &[0x01, 0x00]);

        let n = NBytesBig::from(0x80u8) << 9usize;
        assert_eq!(n.as_digits(), &[0x01, 0x00, 0x00]);

        let n = NBytes::<LittleEndian, u32>::from(1u8) << 32i64;
        assert_eq!(n.as_digits(), &[0, 1]);
    }

    #[test]
    fn right_shift_keeps_size() {
        let n = NBytesBig::read("0xff00").unwrap() >> 8u32;
        assert_eq!(n.as_digits(), &[0x00, 0xff]);
    }

    #[test]
    fn oversized_amounts_saturate() {
        let n = NBytesBig::from(0xffffu16);
        assert_eq!((&n >> u64::MAX).as_digits(), &[0x00, 0x00]);
        assert_eq!((&n >> u128::MAX).as_digits(), &[0x00, 0x00]);
        assert_eq!(&n << i128::MIN, 0u64);

        assert_eq!(ZBytesBig::from(-5) >> u128::MAX, -1i64);
        assert_eq!(ZBytesLittle::from(5) >> i64::MAX, 0i64);
        assert_eq!(ZBytesTwosBig::from(-5) >> usize::MAX, 0i64);
        assert_eq!(ZBytesTwosLittle::from(-5) << isize::MIN, 0i64);
    }

    #[test]
    fn shift_assign_by_every_amount_type() {
        let mut n = NBytesLittle::from(1u8);
        n <<= 1u8;
        n <<= 1u16;
        n <<= 1u32;
        n <<= 1u64;
        n <<= 1u128;
        n <<= 1usize;
        assert_eq!(n, 64u64);
        n >>= 3i8;
        n >>= -1i16;
        n >>= 1i32;
        n >>= 1i64;
        n >>= 1i128;
        n >>= 1isize;
        assert_eq!(n, 1u64);
    }
}
