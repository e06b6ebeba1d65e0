// Tests of the public surface, included by lib.rs

use crate::encoding::hexadecimal;
use crate::stdlib::ToString;


mod encodings_of_negative_129 {
    use super::*;

    macro_rules! impl_case {
        ($t:ident => [$($d:literal),*]) => {
            paste! {
                #[test]
                fn [< case_ $t:snake >]() {
                    let value = $t::from(-129i32);
                    assert_eq!(value.as_digits(), &[$($d),*]);
                    assert_eq!(value.to_string(), "-129");
                    assert_eq!($t::read("-129").unwrap().as_digits(), &[$($d),*]);
                }
            }
        };
    }

    impl_case!(ZBytesBig => [0xff, 0x7f]);
    impl_case!(ZBytesLittle => [0x7f, 0xff]);
    impl_case!(ZBytesTwosBig => [0x80, 0x81]);
    impl_case!(ZBytesTwosLittle => [0x81, 0x80]);
}


mod primitive_boundaries {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $t:ty; $value:expr => [$($d:literal),*]) => {
            #[test]
            fn $name() {
                let value = <$t>::from($value);
                assert_eq!(value.as_digits(), &[$($d),*]);
                assert!(value.is_minimal());
                assert_eq!(value.to_string(), $value.to_string());
            }
        };
    }

    impl_case!(case_n_u8_max: NBytesBig; u8::MAX => [0xff]);
    impl_case!(case_n_u16_max_le: NBytesLittle; u16::MAX => [0xff, 0xff]);
    impl_case!(case_n_zero: NBytesBig; 0u32 => []);
    impl_case!(case_z_i8_min: ZBytesBig; i8::MIN => [0x80]);
    impl_case!(case_z_i8_max: ZBytesBig; i8::MAX => [0x7f]);
    impl_case!(case_z_128: ZBytesBig; 128u8 => [0x00, 0x80]);
    impl_case!(case_z_n1: ZBytesBig; -1i8 => [0xff]);
    impl_case!(case_z_i16_min: ZBytesLittle; i16::MIN => [0x00, 0x80]);
    impl_case!(case_z_i64_min: ZBytesBig; i64::MIN => [0x80, 0, 0, 0, 0, 0, 0, 0]);
    impl_case!(case_twos_n1: ZBytesTwosBig; -1i8 => [0x81]);
    impl_case!(case_twos_n128: ZBytesTwosBig; -128i16 => [0x80, 0x80]);
    impl_case!(case_twos_127: ZBytesTwosLittle; 127u8 => [0x7f]);
}


#[test]
fn hex_read_keeps_digits_write_is_minimal() {
    let n: NBytesBig = hexadecimal::read("0x0000ff").unwrap();
    assert_eq!(n.len(), 3);
    assert_eq!(hexadecimal::write(&n), "0xff");
    assert_eq!(hexadecimal::write_words(n.words(), hexadecimal::LetterCase::Lower), "0x0000ff");

    let z: ZBytesBig = hexadecimal::read("0xffff80").unwrap();
    assert_eq!(z, ZBytesBig::from(-128i32));
    assert_eq!(hexadecimal::write(&z), "0x80");
}

#[test]
fn hex_of_zero() {
    let n: NBytesBig = hexadecimal::read("0x00").unwrap();
    assert!(n.is_zero());
    assert_eq!(hexadecimal::write(&n), "0x");
    assert_eq!(format!("{:x}", n), "0");
}

#[test]
fn same_value_in_both_endians() {
    let big = NBytesBig::read("0x0102").unwrap();
    let little = NBytesLittle::read("0x0102").unwrap();
    assert_eq!(big.as_digits(), &[0x01, 0x02]);
    assert_eq!(little.as_digits(), &[0x02, 0x01]);
    assert_eq!(big, little);
    assert_eq!(big.to_bytes(), vec![0x01, 0x02]);
    assert_eq!(little.to_bytes(), vec![0x02, 0x01]);
    assert_eq!(big.reverse().as_digits(), little.as_digits());
}

#[test]
fn wide_digits_byte_layout() {
    let big = NBytes::<BigEndian, u16>::read("0x0001ffff").unwrap();
    assert_eq!(big.as_digits(), &[0x0001, 0xffff]);
    assert_eq!(big.to_bytes(), vec![0x00, 0x01, 0xff, 0xff]);

    let little = NBytes::<LittleEndian, u16>::from_bytes(&[0xff, 0xff, 0x01, 0x00]).unwrap();
    assert_eq!(little.as_digits(), &[0xffff, 0x0001]);
    assert_eq!(little, big);
    assert_eq!(little.to_string(), "131071");

    let err = NBytes::<LittleEndian, u16>::from_bytes(&[0xff, 0xff, 0x01]).unwrap_err();
    assert_eq!(err, Error::InvalidByteLength { len: 3, digit_bytes: 2 });

    let err = NBytes::<BigEndian, u16>::read("0x01").unwrap_err();
    assert!(matches!(err, Error::InvalidString { format: "hexadecimal", .. }));
}

#[test]
fn twos_negative_zero_is_zero() {
    let negative_zero = ZBytesTwosBig::from_digits(vec![0x80, 0x00]);
    assert!(negative_zero.is_zero());
    assert!(!negative_zero.is_negative());
    assert!(negative_zero.sign_bit());
    assert_eq!(negative_zero.sign(), Sign::NoSign);
    assert_eq!(negative_zero, ZBytesTwosBig::zero(1));
    assert_eq!(negative_zero, 0i64);
    assert_eq!(negative_zero.to_string(), "0");
    assert_eq!(negative_zero.minimal_size(), 0);
    assert!(negative_zero.magnitude().is_zero());
}

#[test]
fn trim_and_extend() {
    let mut z = ZBytesBig::from_digits(vec![0xff, 0xff, 0x80]);
    assert_eq!(z.minimal_size(), 1);
    z.trim();
    assert_eq!(z.as_digits(), &[0x80]);

    z.extend(4).unwrap();
    assert_eq!(z.as_digits(), &[0xff, 0xff, 0xff, 0x80]);
    assert_eq!(z, -128i64);

    let err = ZBytesBig::from(-1i8).extended(0).unwrap_err();
    assert_eq!(err, Error::BelowMinimalSize { requested: 0, minimal: 1 });

    let twos = ZBytesTwosBig::from(-1i8).extended(3).unwrap();
    assert_eq!(twos.as_digits(), &[0x80, 0x00, 0x01]);
    assert_eq!(twos.trimmed().as_digits(), &[0x81]);

    let n = NBytesLittle::from_digits(vec![0x01, 0x00, 0x00]);
    assert_eq!(n.trimmed().as_digits(), &[0x01]);
    assert_eq!(n.extended(1).unwrap().as_digits(), &[0x01]);
    assert!(n.extended(0).is_err());
}

#[test]
fn indexed_digits() {
    let n = NBytesBig::from_digits(vec![0x01, 0x02]);
    assert_eq!(n.digit(0), Ok(0x02));
    assert_eq!(n.digit(1), Ok(0x01));
    assert_eq!(n.digit(-1), Ok(0x01));
    assert_eq!(n.digit(-2), Ok(0x02));
    assert_eq!(n.digit(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
}

#[test]
fn switching_complement() {
    let ones = ZBytesBig::from(-129i32);
    let twos: ZBytesTwosBig = ones.to_complement();
    assert_eq!(twos.as_digits(), &[0x80, 0x81]);
    assert_eq!(twos.to_complement::<Ones>(), ones);
    assert_eq!(twos.to_bigint(), ones.to_bigint());
}

#[test]
fn arithmetic_grows_on_overflow() {
    let sum = ZBytesBig::from(127i8) + ZBytesBig::from(1i8);
    assert_eq!(sum.as_digits(), &[0x00, 0x80]);

    let sum = ZBytesTwosBig::from(127i8) + ZBytesTwosBig::from(1i8);
    assert_eq!(sum.as_digits(), &[0x00, 0x80]);

    let difference = ZBytesBig::from(-128i16) - ZBytesBig::from(1i8);
    assert_eq!(difference.as_digits(), &[0xff, 0x7f]);

    let sum = NBytesBig::from(0xffu8) + 1u8;
    assert_eq!(sum.as_digits(), &[0x01, 0x00]);

    let product = NBytesBig::from(0xffu8) * NBytesBig::from(0xffu8);
    assert_eq!(product.as_digits(), &[0xfe, 0x01]);
}

#[test]
fn natural_subtraction_saturates() {
    let a = NBytesBig::from(3u8);
    let b = NBytesBig::from(0x0100u16);
    assert_eq!((&a - &b).as_digits(), &[0x00, 0x00]);
    assert_eq!(a.checked_sub(&b), None);
    assert_eq!(b.checked_sub(&a).unwrap(), 253u64);
}

#[test]
fn euclidean_division() {
    let a = ZBytesBig::from(-7i8);
    let b = ZBytesBig::from(2i8);
    assert_eq!(&a / &b, -4i64);
    assert_eq!(&a % &b, 1i64);

    let (q, r) = a.div_rem(&b.negated()).unwrap();
    assert_eq!(q, 4i64);
    assert_eq!(r, 1i64);

    assert_eq!(a.div_rem(&ZBytesBig::zero(2)).unwrap_err(), Error::DivisionByZero);
}

#[test]
fn right_shift_rounding() {
    assert_eq!(ZBytesBig::from(-1i8) >> 3u32, -1i64);
    assert_eq!(ZBytesBig::from(-7i8) >> 1u32, -4i64);
    assert_eq!(ZBytesTwosBig::from(-1i8) >> 1u32, 0i64);
    assert_eq!(ZBytesTwosBig::from(-7i8) >> 1u32, -3i64);
    assert_eq!(NBytesBig::from(0x0100u16) >> 8u32, 1u64);
    assert_eq!((NBytesBig::from(0x0100u16) >> 8u32).len(), 2);
}

#[test]
fn mixed_width_values_compare() {
    let a = ZBytes::<BigEndian, Ones, u32>::from(-1i64);
    let b = ZBytes::<BigEndian, Ones, u32>::from_digits(vec![u32::MAX, u32::MAX]);
    assert_eq!(a, b);
    assert!(a < ZBytes::<BigEndian, Ones, u32>::zero(3));
    assert_eq!(b.to_string(), "-1");
}
