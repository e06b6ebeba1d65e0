//! Remainder operator trait implementation
//!
//! Integer remainders follow Euclidean division and are never negative.
//!

use crate::*;
use crate::stdlib::ops::{Rem, RemAssign};


impl<E: Endianness, W: Digit> NBytes<E, W> {
    fn remainder(&self, divisor: &Self) -> Self {
        match self.div_rem(divisor) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> ZBytes<E, C, W> {
    fn remainder(&self, divisor: &Self) -> Self {
        match self.div_rem(divisor) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_all_binop_to_ref_ref!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Rem::rem, RemAssign::rem_assign => remainder
);

forward_primitive_binop!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Rem::rem, RemAssign::rem_assign => remainder;
    u8, u16, u32, u64
);

forward_all_binop_to_ref_ref!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Rem::rem, RemAssign::rem_assign => remainder
);

forward_primitive_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Rem::rem, RemAssign::rem_assign => remainder;
    i8, i16, i32, i64
);

forward_mixed_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, NBytes<E, W> => ZBytes<E, C, W>, impl Rem::rem, RemAssign::rem_assign => remainder
);
