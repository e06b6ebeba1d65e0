// Copyright 2026 The bytenum Developers
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary precision numbers as digit buffers
//!
//! Numbers are stored as plain sequences of fixed width digits whose
//! layout is part of the type: the digit order ([`BigEndian`] or
//! [`LittleEndian`]), the digit width (`u8`, `u16`, `u32` or `u64`) and,
//! for integers, the sign scheme ([`Ones`] or [`Twos`]). The byte view of
//! a value is therefore exactly its binary layout, with no header.
//!
//! * [`NBytes`] holds natural numbers.
//! * [`ZBytes`] holds integers.
//!
//! Values carry the number of digits they were built with; arithmetic
//! results are sized to fit and are not shortened automatically. Use
//! `trim` to reach the minimal encoding and `extend` to grow (or shrink)
//! a value to a given number of digits.
//!
//! # Example
//!
//! ```
//! use bytenum::{NBytesBig, ZBytesBig};
//!
//! let n = NBytesBig::read("0x00ff").unwrap();
//! assert_eq!(n.len(), 2);
//! assert_eq!(n.to_string(), "255");
//! assert_eq!(bytenum::encoding::hexadecimal::write(&(&n + 1u64)), "0x0100");
//!
//! let z = ZBytesBig::read("-129").unwrap();
//! assert_eq!(z.as_digits(), &[0xff, 0x7f]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde_crate;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

use self::stdlib::String;

#[macro_use]
mod macros;

pub mod bigdigit;
pub mod arithmetic;
pub mod complement;
pub mod encoding;

mod natural;
mod integer;

mod impl_cmp;
mod impl_convert;
mod impl_fmt;
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;
mod impl_ops_shift;
mod impl_ops_bit;
mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;

pub use bigdigit::{BigEndian, Digit, DigitVec, Endianness, LittleEndian, Words, WordsMut};
pub use complement::{Complement, Ones, Sign, SignedComplement, Twos, Unsigned};
pub use natural::NBytes;
pub use integer::ZBytes;


/// Natural number, most significant byte first
pub type NBytesBig = NBytes<BigEndian, u8>;

/// Natural number, least significant byte first
pub type NBytesLittle = NBytes<LittleEndian, u8>;

/// Integer in [`Ones`] complement, most significant byte first
pub type ZBytesBig = ZBytes<BigEndian, Ones, u8>;

/// Integer in [`Ones`] complement, least significant byte first
pub type ZBytesLittle = ZBytes<LittleEndian, Ones, u8>;

/// Integer in [`Twos`] (sign and magnitude), most significant byte first
pub type ZBytesTwosBig = ZBytes<BigEndian, Twos, u8>;

/// Integer in [`Twos`] (sign and magnitude), least significant byte first
pub type ZBytesTwosLittle = ZBytes<LittleEndian, Twos, u8>;


/// Errors raised by the numbers in this crate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// String does not match the grammar of the named format
    #[error("invalid {format} string {input:?}")]
    InvalidString {
        format: &'static str,
        input: String,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// Destination buffer shorter than an operation requires
    #[error("need a bigger space to {operation}: {required} digits required, {available} available")]
    InsufficientCapacity {
        operation: &'static str,
        required: usize,
        available: usize,
    },

    #[error("index {index} out of range for {len} digits")]
    IndexOutOfRange {
        index: isize,
        len: usize,
    },

    /// Resize would drop digits carrying part of the value
    #[error("cannot resize to {requested} digits, value needs at least {minimal}")]
    BelowMinimalSize {
        requested: usize,
        minimal: usize,
    },

    /// Byte view length is not a whole number of digits
    #[error("{len} bytes is not a whole number of {digit_bytes} byte digits")]
    InvalidByteLength {
        len: usize,
        digit_bytes: usize,
    },

    #[error("negative value cannot be a natural number")]
    NegativeNatural,

    #[error("value does not fit in {0}")]
    DoesNotFit(&'static str),
}
