// Test NBytes methods

macro_rules! impl_case {
    ($name:ident: div_rem $a:literal / $b:literal => ($q:literal, $r:literal)) => {
        paste! {
            #[test]
            fn [< $name _big >]() {
                let a = NBytesBig::read($a).unwrap();
                let b = NBytesBig::read($b).unwrap();
                let (q, r) = a.div_rem(&b).unwrap();
                assert_eq!(q, NBytesBig::read($q).unwrap());
                assert_eq!(r, NBytesBig::read($r).unwrap());
                assert!(q.is_minimal());
                assert!(r.is_minimal());
            }

            #[test]
            fn [< $name _little_u32 >]() {
                let a = NBytes::<LittleEndian, u32>::read($a).unwrap();
                let b = NBytes::<LittleEndian, u32>::read($b).unwrap();
                let (q, r) = a.div_rem(&b).unwrap();
                assert_eq!(q.to_biguint(), BigUint::parse_bytes($q.as_bytes(), 10).unwrap());
                assert_eq!(r.to_biguint(), BigUint::parse_bytes($r.as_bytes(), 10).unwrap());
            }
        }
    };
    ($name:ident: pow $a:literal ^ $n:literal => $expected:literal) => {
        #[test]
        fn $name() {
            let a = NBytesBig::read($a).unwrap();
            let result = a.pow($n);
            assert_eq!(result.to_biguint(), BigUint::parse_bytes($expected.as_bytes(), 10).unwrap());
            assert!(result.is_minimal());
        }
    };
}

impl_case!(case_1000_div_16: div_rem "1000" / "16" => ("62", "8"));
impl_case!(case_1000_div_7: div_rem "1000" / "7" => ("142", "6"));
impl_case!(case_0_div_3: div_rem "0" / "3" => ("0", "0"));
impl_case!(case_5_div_1: div_rem "5" / "1" => ("5", "0"));
impl_case!(case_7_div_9: div_rem "7" / "9" => ("0", "7"));
impl_case!(case_large_div_65536: div_rem "1208925819614629174706175" / "65536" => ("18446744073709551615", "65535"));
impl_case!(case_large_div_large: div_rem "340282366920938463463374607431768211455" / "18446744073709551617" => ("18446744073709551615", "0"));

impl_case!(case_2_pow_10: pow "2" ^ 10 => "1024");
impl_case!(case_0_pow_0: pow "0" ^ 0 => "1");
impl_case!(case_0_pow_3: pow "0" ^ 3 => "0");
impl_case!(case_255_pow_3: pow "255" ^ 3 => "16581375");
impl_case!(case_10_pow_30: pow "10" ^ 30 => "1000000000000000000000000000000");

#[test]
fn div_rem_by_zero() {
    let a = NBytesBig::from(10u8);
    assert_eq!(a.div_rem(&NBytesBig::zero(3)).unwrap_err(), Error::DivisionByZero);
    assert_eq!(a.div_rem(&NBytesBig::new()).unwrap_err(), Error::DivisionByZero);
}

#[test]
fn from_bytes_follows_endianness() {
    let bytes = [0x01, 0x02, 0x03, 0x04];

    let n = NBytes::<BigEndian, u16>::from_bytes(&bytes).unwrap();
    assert_eq!(n.as_digits(), &[0x0102, 0x0304]);
    assert_eq!(n.to_bytes(), bytes);

    let n = NBytes::<LittleEndian, u16>::from_bytes(&bytes).unwrap();
    assert_eq!(n.as_digits(), &[0x0201, 0x0403]);
    assert_eq!(n.to_bytes(), bytes);
    assert_eq!(n.to_biguint(), BigUint::from(0x04030201u32));

    let n = NBytesBig::from_bytes(&bytes).unwrap();
    assert_eq!(n.as_digits(), &bytes);
}

#[test]
fn from_bytes_partial_digit() {
    let err = NBytes::<BigEndian, u32>::from_bytes(&[1, 2, 3]).unwrap_err();
    assert_eq!(err, Error::InvalidByteLength { len: 3, digit_bytes: 4 });
}

#[test]
fn digit_indexing() {
    let n = NBytesBig::read("0x010203").unwrap();
    assert_eq!(n.digit(0), Ok(0x03));
    assert_eq!(n.digit(2), Ok(0x01));
    assert_eq!(n.digit(-1), Ok(0x01));
    assert_eq!(n.digit(-3), Ok(0x03));
    assert_eq!(n.digit(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(n.digit(-4), Err(Error::IndexOutOfRange { index: -4, len: 3 }));

    let n = NBytesLittle::read("0x010203").unwrap();
    assert_eq!(n.digit(0), Ok(0x03));
    assert_eq!(n.digit(-1), Ok(0x01));
}

#[test]
fn trim_and_extend() {
    let mut n = NBytesBig::read("0x0000ff").unwrap();
    assert_eq!(n.minimal_size(), 1);
    assert!(!n.is_minimal());

    assert_eq!(n.trimmed().as_digits(), &[0xff]);
    assert_eq!(n.extended(5).unwrap().as_digits(), &[0, 0, 0, 0, 0xff]);
    assert_eq!(n.extended(2).unwrap().as_digits(), &[0, 0xff]);
    assert_eq!(n.extended(0), Err(Error::BelowMinimalSize { requested: 0, minimal: 1 }));

    n.trim();
    assert_eq!(n.len(), 1);
    n.extend(4).unwrap();
    assert_eq!(n.as_digits(), &[0, 0, 0, 0xff]);

    let zero = NBytesBig::zero(4);
    assert_eq!(zero.minimal_size(), 0);
    assert!(zero.trimmed().is_empty());
}

#[test]
fn increment_grows_on_overflow() {
    let mut n = NBytesBig::read("0xffff").unwrap();
    n.increment();
    assert_eq!(n.as_digits(), &[0x01, 0x00, 0x00]);

    let mut n = NBytesLittle::new();
    n.increment();
    assert_eq!(n.as_digits(), &[0x01]);

    let mut n = NBytesBig::read("0x00fe").unwrap();
    n.increment();
    assert_eq!(n.as_digits(), &[0x00, 0xff]);
}

#[test]
fn decrement_stops_at_zero() {
    let mut n = NBytesBig::read("0x0100").unwrap();
    n.decrement();
    assert_eq!(n.as_digits(), &[0x00, 0xff]);

    let mut n = NBytesBig::zero(2);
    n.decrement();
    assert_eq!(n.as_digits(), &[0x00, 0x00]);

    let mut n = NBytesLittle::new();
    n.decrement();
    assert!(n.is_empty());
}

#[test]
fn checked_and_saturating_sub() {
    let a = NBytesBig::from(300u16);
    let b = NBytesBig::from(45u8);
    assert_eq!(a.checked_sub(&b), Some(NBytesBig::from(255u8)));
    assert_eq!(b.checked_sub(&a), None);
    assert!(b.saturating_sub(&a).is_zero());
    assert_eq!(b.saturating_sub(&a).len(), 2);
    assert!(a.checked_sub(&a).unwrap().is_zero());
}

#[test]
fn power_of_two_exponent() {
    assert_eq!(NBytesBig::from(1u8).power_of_two_exponent(), Some(0));
    assert_eq!(NBytesBig::from(16u8).power_of_two_exponent(), Some(4));
    assert_eq!(NBytesBig::read("0x000100").unwrap().power_of_two_exponent(), Some(8));
    assert_eq!(NBytes::<LittleEndian, u32>::from(1u64 << 40).power_of_two_exponent(), Some(40));
    assert_eq!(NBytesBig::from(0x0300u16).power_of_two_exponent(), None);
    assert_eq!(NBytesBig::from(0x0101u16).power_of_two_exponent(), None);
    assert_eq!(NBytesBig::zero(2).power_of_two_exponent(), None);
}

#[test]
fn low_bits() {
    let n = NBytesBig::from(0x1234u16);
    assert_eq!(n.low_bits(12).as_digits(), &[0x02, 0x34]);
    assert_eq!(n.low_bits(8).as_digits(), &[0x34]);
    assert_eq!(n.low_bits(4).as_digits(), &[0x04]);
    assert_eq!(n.low_bits(0).as_digits(), &[] as &[u8]);
    assert_eq!(n.low_bits(32).as_digits(), &[0x12, 0x34]);
}

#[test]
fn shifts() {
    let n = NBytesBig::from(1u8);
    assert_eq!(n.shifted_left(9).as_digits(), &[0x00, 0x02, 0x00]);
    assert_eq!(n.shifted_left(0).as_digits(), &[0x01]);

    let n = NBytesLittle::from(0x1234u16);
    assert_eq!(n.shifted_left(4).as_digits(), &[0x40, 0x23, 0x01]);
    assert_eq!(n.shifted_right(4).as_digits(), &[0x23, 0x01]);
    assert_eq!(n.shifted_right(16).as_digits(), &[0x00, 0x00]);
}

#[test]
fn reverse_keeps_value() {
    let n = NBytes::<BigEndian, u16>::read("0x00010002").unwrap();
    let r = n.reverse();
    assert_eq!(r.as_digits(), &[0x0002, 0x0001]);
    assert_eq!(r, n);
    assert_eq!(r.reverse().as_digits(), n.as_digits());
}

#[test]
fn is_one() {
    assert!(NBytesBig::read("0x0001").unwrap().is_one());
    assert!(!NBytesBig::read("0x0100").unwrap().is_one());
    assert!(!NBytesBig::new().is_one());
}
