// Test ZBytes methods

macro_rules! impl_case {
    ($name:ident: div_rem $a:literal / $b:literal => ($q:literal, $r:literal)) => {
        impl_case!($name: div_rem $a / $b => ($q, $r); ones_big => ZBytesBig);
        impl_case!($name: div_rem $a / $b => ($q, $r); twos_little => ZBytesTwosLittle);
        impl_case!($name: div_rem $a / $b => ($q, $r); ones_u32 => ZBytes<LittleEndian, Ones, u32>);
        impl_case!($name: div_rem $a / $b => ($q, $r); twos_u16 => ZBytes<BigEndian, Twos, u16>);
    };
    ($name:ident: div_rem $a:literal / $b:literal => ($q:literal, $r:literal); $suffix:ident => $t:ty) => {
        paste! {
            #[test]
            fn [< $name _ $suffix >]() {
                let a = <$t>::read($a).unwrap();
                let b = <$t>::read($b).unwrap();
                let (q, r) = a.div_rem(&b).unwrap();
                assert_eq!(q.to_string(), $q);
                assert_eq!(r.to_string(), $r);
                assert!(q.is_minimal());
                assert!(r.is_minimal());
            }
        }
    };
}

impl_case!(case_7_div_2: div_rem "7" / "2" => ("3", "1"));
impl_case!(case_neg7_div_2: div_rem "-7" / "2" => ("-4", "1"));
impl_case!(case_7_div_neg2: div_rem "7" / "-2" => ("-3", "1"));
impl_case!(case_neg7_div_neg2: div_rem "-7" / "-2" => ("4", "1"));
impl_case!(case_neg8_div_4: div_rem "-8" / "4" => ("-2", "0"));
impl_case!(case_100_div_16: div_rem "100" / "16" => ("6", "4"));
impl_case!(case_neg100_div_16: div_rem "-100" / "16" => ("-7", "12"));
impl_case!(case_0_div_neg5: div_rem "0" / "-5" => ("0", "0"));
impl_case!(case_large: div_rem "-1000000000000000000000" / "3" => ("-333333333333333333334", "2"));

#[test]
fn div_rem_by_zero() {
    let a = ZBytesBig::from(-10);
    assert_eq!(a.div_rem(&ZBytesBig::zero(2)).unwrap_err(), Error::DivisionByZero);

    // negative zero is still zero
    let a = ZBytesTwosBig::from(-10);
    let b = ZBytesTwosBig::read("0x80").unwrap();
    assert_eq!(a.div_rem(&b).unwrap_err(), Error::DivisionByZero);
}

#[test]
fn from_bigint_is_minimal() {
    for n in [-32769i64, -32768, -129, -128, -1, 0, 1, 127, 128, 255, 256, 32768] {
        let value = BigInt::from(n);
        let ones = ZBytes::<BigEndian, Ones, u8>::from_bigint(&value);
        let twos = ZBytes::<LittleEndian, Twos, u8>::from_bigint(&value);
        assert!(ones.is_minimal(), "{}", n);
        assert!(twos.is_minimal(), "{}", n);
        assert_eq!(ones.to_bigint(), value);
        assert_eq!(twos.to_bigint(), value);
    }
}

#[test]
fn encodings_of_boundaries() {
    assert_eq!(ZBytesBig::from(-128).as_digits(), &[0x80]);
    assert_eq!(ZBytesBig::from(128).as_digits(), &[0x00, 0x80]);
    assert_eq!(ZBytesBig::from(-129).as_digits(), &[0xff, 0x7f]);
    assert_eq!(ZBytesTwosBig::from(-127).as_digits(), &[0xff]);
    assert_eq!(ZBytesTwosBig::from(-128).as_digits(), &[0x80, 0x80]);
    assert_eq!(ZBytesTwosBig::from(127).as_digits(), &[0x7f]);
}

#[test]
fn negate_and_abs() {
    let min = ZBytesBig::from(-128);
    assert_eq!(min.negated().as_digits(), &[0x00, 0x80]);
    assert_eq!(min.abs(), ZBytesBig::from(128));

    let mut x = ZBytesTwosBig::from(5);
    x.negate();
    assert_eq!(x.as_digits(), &[0x85]);
    assert_eq!(x.abs(), 5i64);

    let mut zero = ZBytesTwosBig::zero(1);
    zero.negate();
    assert_eq!(zero.as_digits(), &[0x00]);
}

#[test]
fn to_complement() {
    let ones = ZBytesBig::from(-1);
    let twos: ZBytesTwosBig = ones.to_complement();
    assert_eq!(twos.as_digits(), &[0x81]);

    let twos = ZBytesTwosBig::from(-128);
    let ones: ZBytesBig = twos.to_complement();
    assert_eq!(ones, -128i64);
    assert_eq!(ones.trimmed().as_digits(), &[0x80]);

    let zero: ZBytesBig = ZBytesTwosBig::read("0x8000").unwrap().to_complement();
    assert!(zero.is_zero());
}

#[test]
fn magnitude_and_naturals() {
    assert_eq!(ZBytesBig::from(-300).magnitude(), NBytesBig::from(300u16));
    assert_eq!(ZBytesTwosBig::from(-300).magnitude(), NBytesBig::from(300u16));

    let n = NBytesBig::from(0x80u8);
    let z = ZBytesBig::from(n.clone());
    assert_eq!(z.as_digits(), &[0x00, 0x80]);
    assert_eq!(NBytesBig::try_from(z).unwrap(), n);

    let err = NBytesBig::try_from(ZBytesBig::from(-1)).unwrap_err();
    assert_eq!(err, Error::NegativeNatural);
}

#[test]
fn signs() {
    let z = ZBytesTwosBig::read("0x8000").unwrap();
    assert!(z.sign_bit());
    assert!(!z.is_negative());
    assert!(z.is_zero());
    assert_eq!(z.sign(), Sign::NoSign);

    assert!(ZBytesBig::from(-1).is_negative_one());
    assert!(ZBytesTwosBig::read("0x8001").unwrap().is_negative_one());
    assert!(!ZBytesBig::from(1).is_negative_one());
    assert!(ZBytesBig::read("0x0001").unwrap().is_one());
    assert!(ZBytesBig::from(1).is_positive());
}

#[test]
fn pow() {
    assert_eq!(ZBytesBig::from(-2).pow(3), -8i64);
    assert_eq!(ZBytesBig::from(-2).pow(4), 16i64);
    assert_eq!(ZBytesTwosBig::from(-1).pow(0), 1i64);
    assert_eq!(ZBytesTwosBig::from(-3).pow(5), -243i64);
    assert!(ZBytesBig::from(-2).pow(7).is_minimal());
}

#[test]
fn shifts() {
    assert_eq!(ZBytesBig::from(-3).shifted_right(1), -2i64);
    assert_eq!(ZBytesTwosBig::from(-3).shifted_right(1), -1i64);
    assert_eq!(ZBytesBig::from(-3).shifted_left(4), -48i64);
    assert_eq!(ZBytesTwosBig::from(-3).shifted_left(4), -48i64);
    assert_eq!(ZBytesBig::from(-1).shifted_right(100), -1i64);
    assert_eq!(ZBytesTwosBig::from(-1).shifted_right(100), 0i64);
}

#[test]
fn increment_and_decrement() {
    let mut x = ZBytesBig::from(127);
    x.increment();
    assert_eq!(x.as_digits(), &[0x00, 0x80]);

    let mut x = ZBytesBig::from(-128);
    x.decrement();
    assert_eq!(x.as_digits(), &[0xff, 0x7f]);

    let mut x = ZBytesTwosLittle::from(0);
    x.decrement();
    assert_eq!(x, -1i64);
    x.increment();
    x.increment();
    assert_eq!(x, 1i64);
}

#[test]
fn extend_sign_filler() {
    let x = ZBytesBig::from(-2);
    assert_eq!(x.extended(3).unwrap().as_digits(), &[0xff, 0xff, 0xfe]);

    let x = ZBytesTwosBig::from(-2);
    assert_eq!(x.extended(3).unwrap().as_digits(), &[0x80, 0x00, 0x02]);

    let x = ZBytesBig::from(-129);
    assert_eq!(x.extended(1), Err(Error::BelowMinimalSize { requested: 1, minimal: 2 }));
}

#[test]
fn bytes_follow_endianness() {
    let x = ZBytes::<LittleEndian, Ones, u16>::from_bytes(&[0xfe, 0xff]).unwrap();
    assert_eq!(x, -2i64);
    assert_eq!(x.to_bytes(), [0xfe, 0xff]);

    let x = ZBytes::<BigEndian, Ones, u16>::from_bytes(&[0xff, 0xfe]).unwrap();
    assert_eq!(x, -2i64);
    assert_eq!(x.reverse().to_bytes(), [0xfe, 0xff]);
}
