//! Subtraction operator trait implementation
//!
//! Natural numbers saturate at zero, use [`NBytes::checked_sub`] to
//! detect underflow.
//!

use crate::*;
use crate::stdlib::ops::{Sub, SubAssign};


forward_all_binop_to_ref_ref!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Sub::sub, SubAssign::sub_assign => saturating_sub
);

forward_primitive_binop!(
    [E: Endianness, W: Digit] NBytes<E, W>, impl Sub::sub, SubAssign::sub_assign => saturating_sub;
    u8, u16, u32, u64
);

forward_all_binop_to_ref_ref!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Sub::sub, SubAssign::sub_assign => subtracted
);

forward_primitive_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, impl Sub::sub, SubAssign::sub_assign => subtracted;
    i8, i16, i32, i64
);

forward_mixed_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] ZBytes<E, C, W>, NBytes<E, W> => ZBytes<E, C, W>, impl Sub::sub, SubAssign::sub_assign => subtracted
);

forward_mixed_binop!(
    [E: Endianness, C: SignedComplement, W: Digit] NBytes<E, W>, ZBytes<E, C, W> => ZBytes<E, C, W>, impl Sub::sub => subtracted
);
