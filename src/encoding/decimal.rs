//! Decimal strings of natural numbers
//!
//! Grammar is `0` or a non-zero digit followed by any digits: no sign,
//! no leading zeros, no separators.
//!

use crate::stdlib::String;
use crate::bigdigit::{Digit, Endianness};
use crate::{Error, NBytes};

use num_bigint::BigUint;

use super::invalid_string;


/// True if 's' matches `^0$|^[1-9][0-9]*$`
pub fn valid(s: &str) -> bool {
    match s.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

/// Read natural number from decimal string, in its minimal encoding
pub fn read<E: Endianness, W: Digit>(s: &str) -> Result<NBytes<E, W>, Error> {
    if !valid(s) {
        return Err(invalid_string("decimal", s));
    }
    BigUint::parse_bytes(s.as_bytes(), 10)
        .map(|n| NBytes::from_biguint(&n))
        .ok_or_else(|| invalid_string("decimal", s))
}

/// Decimal string of 'n'
pub fn write<E: Endianness, W: Digit>(n: &NBytes<E, W>) -> String {
    n.to_biguint().to_str_radix(10)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::{NBytesBig, NBytesLittle};

    macro_rules! impl_case {
        (valid: $($s:literal),*) => {
            #[test]
            fn accepts() {
                $( assert!(valid($s), "{:?}", $s); )*
            }
        };
        (invalid: $($s:literal),*) => {
            #[test]
            fn rejects() {
                $( assert!(!valid($s), "{:?}", $s); )*
                $( assert!(read::<crate::BigEndian, u8>($s).is_err(), "{:?}", $s); )*
            }
        };
    }

    impl_case!(valid: "0", "1", "10", "255", "1234567890123456789012345678901234567890");
    impl_case!(invalid: "", "00", "01", "-1", "+1", "1 ", "1_000", "0x10", "1e3");

    #[test]
    fn read_minimal() {
        let n: NBytesBig = read("256").unwrap();
        assert_eq!(n.as_digits(), &[0x01, 0x00]);

        let n: NBytesLittle = read("256").unwrap();
        assert_eq!(n.as_digits(), &[0x00, 0x01]);

        let n: NBytesBig = read("0").unwrap();
        assert!(n.as_digits().is_empty());
    }

    #[test]
    fn write_ignores_leading_zeros() {
        let n = NBytesBig::read("0x0000ff").unwrap();
        assert_eq!(write(&n), "255");
        assert_eq!(write(&NBytesBig::new()), "0");
    }

    #[test]
    fn round_trip_large() {
        let s = "340282366920938463463374607431768211456";
        let n: NBytes<crate::LittleEndian, u32> = read(s).unwrap();
        assert_eq!(n.len(), 5);
        assert_eq!(write(&n), s);
    }
}
