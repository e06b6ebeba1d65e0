//! Digits and digit sequences
//!
//! A number is a sequence of fixed width digits, stored most or least
//! significant first. Everything in this module is independent of how
//! the digits are interpreted (unsigned, or with a sign scheme).
//!

pub mod digit;
pub mod endian;
pub mod words;
pub mod digitvec;

pub use self::digit::Digit;
pub use self::endian::{BigEndian, Endianness, LittleEndian};
pub use self::words::{Words, WordsMut};
pub use self::digitvec::DigitVec;
