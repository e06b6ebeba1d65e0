//! Implement division
//!
//! Quotients of integers round toward negative infinity when the
//! divisor is positive, so that the remainder is never negative.
//! Dividing by zero panics, use `div_rem` to get an error instead.
//!

use crate::*;
use crate::stdlib::ops::{Div, DivAssign};


impl<E: Endianness, W: Digit> NBytes<E, W> {
    fn divided(&self, divisor: &Self) -> Self {
        match self.div_rem(divisor) {
            Ok((quotient, _)) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> ZBytes<E, C, W> {
    fn divided(&self, divisor: &Self) -> Self {
        match self.div_rem(divisor) {
            Ok((quotient, _)) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_all_binop_to_ref_ref!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Div::div, DivAssign::div_assign => divided
);

forward_primitive_binop!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Div::div, DivAssign::div_assign => divided;
    u8, u16, u32, u64
);

forward_all_binop_to_ref_ref!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Div::div, DivAssign::div_assign => divided
);

forward_primitive_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Div::div, DivAssign::div_assign => divided;
    i8, i16, i32, i64
);

forward_mixed_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, NBytes<E, W> => ZBytes<E, C, W>, impl Div::div, DivAssign::div_assign => divided
);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $t:ident; $a:literal / $b:literal => $c:literal ) => {
            paste! {
                #[test]
                fn [< $name _ $t:snake >]() {
                    let a = $t::read($a).unwrap();
                    let b = $t::read($b).unwrap();
                    let c = $t::read($c).unwrap();

                    assert_eq!(c, a.clone() / b.clone());
                    assert_eq!(c, a.clone() / &b);
                    assert_eq!(c, &a / b.clone());
                    assert_eq!(c, &a / &b);

                    let mut n = a.clone();
                    n /= &b;
                    assert_eq!(c, n);
                }
            }
        };
        ( $name:ident: $a:literal / $b:literal => $c:literal ) => {
            impl_case!($name: NBytesBig; $a / $b => $c);
            impl_case!($name: NBytesLittle; $a / $b => $c);
        };
        ( $name:ident: signed $a:literal / $b:literal => $c:literal ) => {
            impl_case!($name: ZBytesBig; $a / $b => $c);
            impl_case!($name: ZBytesLittle; $a / $b => $c);
            impl_case!($name: ZBytesTwosBig; $a / $b => $c);
            impl_case!($name: ZBytesTwosLittle; $a / $b => $c);
        };
    }

    impl_case!(case_100_16: "100" / "16" => "6");
    impl_case!(case_100_7: "100" / "7" => "14");
    impl_case!(case_0xff00_0x0100: "0xff00" / "0x0100" => "0xff");
    impl_case!(case_large: "340282366920938463463374607431768211456" / "4294967296" => "79228162514264337593543950336");

    impl_case!(case_n7_2: signed "-7" / "2" => "-4");
    impl_case!(case_7_n2: signed "7" / "-2" => "-3");
    impl_case!(case_n7_n2: signed "-7" / "-2" => "4");
    impl_case!(case_n16_16: signed "-16" / "16" => "-1");
    impl_case!(case_127_16: signed "127" / "16" => "7");

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_by_zero_natural() {
        let _ = NBytesBig::from(1u8) / NBytesBig::zero(2);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_by_zero_integer() {
        let _ = ZBytesTwosBig::from(1) / 0i32;
    }

    #[test]
    fn div_primitive() {
        let n = NBytes::<BigEndian, u64>::from(u64::MAX) / 16u8;
        assert_eq!(n, u64::MAX >> 4);

        let mut z = ZBytesBig::from(-100);
        z /= 16i64;
        assert_eq!(z, -7i64);
    }

    #[test]
    fn div_integer_by_natural() {
        let z = ZBytesBig::from(-7);
        let n = NBytesBig::from(2u8);
        assert_eq!(&z / &n, -4i64);
        assert_eq!(z.clone() / n.clone(), -4i64);

        let mut t = ZBytesTwosBig::from(100);
        t /= NBytesBig::from(16u8);
        assert_eq!(t, 6i64);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_integer_by_natural_zero() {
        let _ = ZBytesBig::from(1) / NBytesBig::new();
    }
}
