//! Multiplication operator trait implementation
//!
//! Products are sized to hold any product of operands of the same
//! sizes, the sum of the operand digit counts.
//!

use crate::*;
use crate::stdlib::ops::{Mul, MulAssign};


forward_all_binop_to_ref_ref!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Mul::mul, MulAssign::mul_assign => multiplied
);

forward_primitive_binop!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Mul::mul, MulAssign::mul_assign => multiplied;
    u8, u16, u32, u64
);

forward_all_binop_to_ref_ref!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Mul::mul, MulAssign::mul_assign => multiplied
);

forward_primitive_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Mul::mul, MulAssign::mul_assign => multiplied;
    i8, i16, i32, i64
);

forward_mixed_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, NBytes<E, W> => ZBytes<E, C, W>, impl Mul::mul, MulAssign::mul_assign => multiplied
);

forward_mixed_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] NBytes<E, W>, ZBytes<E, C, W> => ZBytes<E, C, W>, impl Mul::mul => multiplied
);
