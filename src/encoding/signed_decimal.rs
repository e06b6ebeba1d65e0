//! Decimal strings of integers
//!
//! A decimal natural with an optional leading `-`. Zero has no sign:
//! `-0` is rejected.
//!

use crate::stdlib::String;
use crate::bigdigit::{Digit, Endianness};
use crate::complement::SignedComplement;
use crate::{Error, ZBytes};

use num_bigint::BigInt;

use super::{decimal, invalid_string};


/// True if 's' matches `^0$|^-?[1-9][0-9]*$`
pub fn valid(s: &str) -> bool {
    match s.strip_prefix('-') {
        Some(digits) => digits != "0" && decimal::valid(digits),
        None => decimal::valid(s),
    }
}

/// Read integer from signed decimal string, in its minimal encoding
pub fn read<E, C, W>(s: &str) -> Result<ZBytes<E, C, W>, Error>
where
    E: Endianness,
    C: SignedComplement,
    W: Digit,
{
    if !valid(s) {
        return Err(invalid_string("signed decimal", s));
    }
    BigInt::parse_bytes(s.as_bytes(), 10)
        .map(|n| ZBytes::from_bigint(&n))
        .ok_or_else(|| invalid_string("signed decimal", s))
}

/// Signed decimal string of 'n'
pub fn write<E, C, W>(n: &ZBytes<E, C, W>) -> String
where
    E: Endianness,
    C: SignedComplement,
    W: Digit,
{
    n.to_bigint().to_str_radix(10)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::*;

    #[test]
    fn accepts() {
        for s in ["0", "1", "-1", "-128", "99999999999999999999999"] {
            assert!(valid(s), "{:?}", s);
        }
    }

    #[test]
    fn rejects() {
        for s in ["", "-", "-0", "--1", "+1", "-01", "00", " 1", "0x01"] {
            assert!(!valid(s), "{:?}", s);
            let err = read::<BigEndian, Ones, u8>(s).unwrap_err();
            assert!(matches!(err, Error::InvalidString { format: "signed decimal", .. }));
        }
    }

    #[test]
    fn read_ones() {
        let z: ZBytesBig = read("-129").unwrap();
        assert_eq!(z.as_digits(), &[0xff, 0x7f]);

        let z: ZBytesBig = read("128").unwrap();
        assert_eq!(z.as_digits(), &[0x00, 0x80]);

        let z: ZBytesLittle = read("-1").unwrap();
        assert_eq!(z.as_digits(), &[0xff]);

        let z: ZBytesBig = read("0").unwrap();
        assert!(z.as_digits().is_empty());
    }

    #[test]
    fn read_twos() {
        let z: ZBytesTwosBig = read("-1").unwrap();
        assert_eq!(z.as_digits(), &[0x81]);

        let z: ZBytesTwosBig = read("-128").unwrap();
        assert_eq!(z.as_digits(), &[0x80, 0x80]);

        let z: ZBytesTwosLittle = read("-129").unwrap();
        assert_eq!(z.as_digits(), &[0x81, 0x80]);
    }

    #[test]
    fn write_negative_zero() {
        let z = ZBytesTwosBig::read("0x8000").unwrap();
        assert_eq!(write(&z), "0");
    }

    #[test]
    fn round_trip() {
        for s in ["-32768", "32767", "-1", "0", "-340282366920938463463374607431768211456"] {
            let z: ZBytes<LittleEndian, Ones, u16> = read(s).unwrap();
            assert_eq!(write(&z), s);
            let z: ZBytes<BigEndian, Twos, u32> = read(s).unwrap();
            assert_eq!(write(&z), s);
        }
    }
}
