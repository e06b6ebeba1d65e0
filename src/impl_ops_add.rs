//! Addition operator trait implementation
//!

use crate::*;
use crate::stdlib::ops::{Add, AddAssign};


forward_all_binop_to_ref_ref!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Add::add, AddAssign::add_assign => added
);

forward_primitive_binop!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Add::add, AddAssign::add_assign => added;
    u8, u16, u32, u64
);

forward_all_binop_to_ref_ref!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Add::add, AddAssign::add_assign => added
);

forward_primitive_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Add::add, AddAssign::add_assign => added;
    i8, i16, i32, i64
);

forward_mixed_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, NBytes<E, W> => ZBytes<E, C, W>, impl Add::add, AddAssign::add_assign => added
);

forward_mixed_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] NBytes<E, W>, ZBytes<E, C, W> => ZBytes<E, C, W>, impl Add::add => added
);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $t:ident; $a:literal + $b:literal => $c:literal ) => {
            paste! {
                #[test]
                fn [< $name _ $t:snake >]() {
                    let a = $t::read($a).unwrap();
                    let b = $t::read($b).unwrap();
                    let c = $t::read($c).unwrap();

                    assert_eq!(c, a.clone() + b.clone());
                    assert_eq!(c, a.clone() + &b);
                    assert_eq!(c, &a + b.clone());
                    assert_eq!(c, &a + &b);

                    // Reversed
                    assert_eq!(c, b.clone() + a.clone());
                    assert_eq!(c, &b + &a);

                    let mut n = a.clone();
                    n += &b;
                    assert_eq!(c, n);

                    let mut n = a.clone();
                    n += b.clone();
                    assert_eq!(c, n);
                }
            }
        };
        ( $name:ident: $a:literal + $b:literal => $c:literal ) => {
            impl_case!($name: NBytesBig; $a + $b => $c);
            impl_case!($name: NBytesLittle; $a + $b => $c);
        };
        ( $name:ident: signed $a:literal + $b:literal => $c:literal ) => {
            impl_case!($name: ZBytesBig; $a + $b => $c);
            impl_case!($name: ZBytesLittle; $a + $b => $c);
            impl_case!($name: ZBytesTwosBig; $a + $b => $c);
            impl_case!($name: ZBytesTwosLittle; $a + $b => $c);
        };
    }

    impl_case!(case_0_0: "0" + "0" => "0");
    impl_case!(case_1_1: "1" + "1" => "2");
    impl_case!(case_255_1: "255" + "1" => "256");
    impl_case!(case_hex: "0x00ff" + "0x01" => "0x0100");
    impl_case!(case_large: "340282366920938463463374607431768211455" + "1" => "340282366920938463463374607431768211456");

    impl_case!(case_n1_1: signed "-1" + "1" => "0");
    impl_case!(case_127_1: signed "127" + "1" => "128");
    impl_case!(case_n128_n1: signed "-128" + "-1" => "-129");
    impl_case!(case_n300_45: signed "-300" + "45" => "-255");
    impl_case!(case_300_n45: signed "300" + "-45" => "255");
    impl_case!(case_n1_n1: signed "-1" + "-1" => "-2");
    impl_case!(case_large_mixed: signed "-340282366920938463463374607431768211456" + "18446744073709551616" => "-340282366920938463444927863358058659840");

    #[test]
    fn sum_keeps_longer_size() {
        let a = NBytesBig::read("0x000001").unwrap();
        let b = NBytesBig::read("0x01").unwrap();
        assert_eq!((&a + &b).as_digits(), &[0x00, 0x00, 0x02]);
    }

    #[test]
    fn sum_grows_on_carry() {
        let a = NBytesLittle::read("0xffff").unwrap();
        assert_eq!((&a + 1u8).as_digits(), &[0x00, 0x00, 0x01]);

        let a = ZBytesBig::read("0x7f").unwrap();
        assert_eq!((&a + 1i8).as_digits(), &[0x00, 0x80]);
    }

    #[test]
    fn add_primitive() {
        let mut n = NBytes::<BigEndian, u32>::from(u32::MAX);
        n += 1u64;
        assert_eq!(n, 1u64 << 32);
        assert_eq!(n.len(), 2);

        let z = ZBytesTwosBig::from(-5) + 7i64;
        assert_eq!(z, 2i64);
    }

    #[test]
    fn add_natural_and_integer() {
        let n = NBytesBig::from(200u8);
        let z = ZBytesBig::from(-300);
        assert_eq!(&z + &n, -100i64);
        assert_eq!(&n + &z, -100i64);
        assert_eq!(z.clone() + &n, -100i64);
        assert_eq!(n.clone() + z.clone(), -100i64);

        let mut t = ZBytesTwosLittle::from(-1);
        t += NBytesLittle::from(0xffu8);
        assert_eq!(t, 254i64);
        t += &NBytesLittle::from(1u8);
        assert_eq!(t, 255i64);
    }
}
