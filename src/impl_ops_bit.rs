//! Bitwise operators
//!
//! Defined for natural numbers and for integers in the [`Ones`] scheme,
//! where they act on the infinite sign extension of both operands.
//!

use crate::*;
use crate::stdlib::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};


impl<E: Endianness, W: Digit> NBytes<E, W> {
    fn and_bits(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, |a, b| a & b)
    }

    fn or_bits(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, |a, b| a | b)
    }

    fn xor_bits(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, |a, b| a ^ b)
    }
}

impl<E: Endianness, W: Digit> ZBytes<E, Ones, W> {
    fn and_bits(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, |a, b| a & b)
    }

    fn or_bits(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, |a, b| a | b)
    }

    fn xor_bits(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, |a, b| a ^ b)
    }
}

forward_all_binop_to_ref_ref!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl BitAnd::bitand, BitAndAssign::bitand_assign => and_bits
);
forward_all_binop_to_ref_ref!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl BitOr::bitor, BitOrAssign::bitor_assign => or_bits
);
forward_all_binop_to_ref_ref!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl BitXor::bitxor, BitXorAssign::bitxor_assign => xor_bits
);

forward_all_binop_to_ref_ref!(
    [E: Endianness, W: Digit] ZBytes<E, Ones, W>, impl BitAnd::bitand, BitAndAssign::bitand_assign => and_bits
);
forward_all_binop_to_ref_ref!(
    [E: Endianness, W: Digit] ZBytes<E, Ones, W>, impl BitOr::bitor, BitOrAssign::bitor_assign => or_bits
);
forward_all_binop_to_ref_ref!(
    [E: Endianness, W: Digit] ZBytes<E, Ones, W>, impl BitXor::bitxor, BitXorAssign::bitxor_assign => xor_bits
);


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $t:ident; $a:literal, $b:literal => and $and:literal, or $or:literal, xor $xor:literal) => {
            #[test]
            fn $name() {
                let a = $t::read($a).unwrap();
                let b = $t::read($b).unwrap();

                assert_eq!(&a & &b, $t::read($and).unwrap());
                assert_eq!(&a | &b, $t::read($or).unwrap());
                assert_eq!(&a ^ &b, $t::read($xor).unwrap());

                // Reversed
                assert_eq!(b.clone() & a.clone(), $t::read($and).unwrap());
                assert_eq!(b.clone() | &a, $t::read($or).unwrap());

                let mut n = a.clone();
                n ^= b;
                assert_eq!(n, $t::read($xor).unwrap());
            }
        };
    }

    impl_case!(case_n_12_10: NBytesBig; "12", "10" => and "8", or "14", xor "6");
    impl_case!(case_n_short_long: NBytesLittle; "0xff", "0x0f0f" => and "0x0f", or "0x0fff", xor "0x0ff0");
    impl_case!(case_z_n1_5: ZBytesBig; "-1", "5" => and "5", or "-1", xor "-6");
    impl_case!(case_z_n256_255: ZBytesLittle; "-256", "255" => and "0", or "-1", xor "-1");
    impl_case!(case_z_sign_extend: ZBytesBig; "-2", "0x0100" => and "256", or "-2", xor "-258");

    #[test]
    fn result_size_is_longer_operand() {
        let a = NBytesBig::read("0x01").unwrap();
        let b = NBytesBig::read("0x000000").unwrap();
        assert_eq!((&a | &b).as_digits(), &[0x00, 0x00, 0x01]);
    }
}
