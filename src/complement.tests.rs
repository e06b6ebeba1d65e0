
fn be(digits: &[u8]) -> DigitVec<u8, BigEndian> {
    DigitVec::from_vec(digits.to_vec())
}

fn le(digits: &[u8]) -> DigitVec<u8, LittleEndian> {
    DigitVec::from_vec(digits.to_vec())
}

macro_rules! impl_case {
    ($name:ident: $scheme:ty, minimal_size [$($d:literal),*] => $n:literal) => {
        #[test]
        fn $name() {
            let x = be(&[$($d),*]);
            assert_eq!(<$scheme>::minimal_size(x.words()), $n);
            assert_eq!(<$scheme>::is_minimal(x.words()), x.len() == $n);
        }
    };
    ($name:ident: $scheme:ty, trim [$($d:literal),*] => [$($e:literal),*]) => {
        #[test]
        fn $name() {
            let mut x = be(&[$($d),*]);
            <$scheme>::trim(&mut x);
            let expected: &[u8] = &[$($e),*];
            assert_eq!(x.digits, expected);
        }
    };
    ($name:ident: $scheme:ty, pad [$($d:literal),*] to $n:literal => [$($e:literal),*]) => {
        #[test]
        fn $name() {
            let mut x = be(&[$($d),*]);
            <$scheme>::pad(&mut x, $n);
            let expected: &[u8] = &[$($e),*];
            assert_eq!(x.digits, expected);
        }
    };
}

mod unsigned {
    use super::*;

    impl_case!(case_empty: Unsigned, minimal_size [] => 0);
    impl_case!(case_0000: Unsigned, minimal_size [0x00, 0x00] => 0);
    impl_case!(case_0080: Unsigned, minimal_size [0x00, 0x80] => 1);
    impl_case!(case_trim_000102: Unsigned, trim [0x00, 0x01, 0x02] => [0x01, 0x02]);
    impl_case!(case_pad_80: Unsigned, pad [0x80] to 3 => [0x00, 0x00, 0x80]);

    #[test]
    fn never_negative() {
        assert!(!Unsigned::is_negative(be(&[0xff]).words()));
        assert_eq!(Unsigned::sign(be(&[0xff]).words()), Sign::Plus);
        assert_eq!(Unsigned::sign(be(&[0x00]).words()), Sign::NoSign);
    }
}

mod ones {
    use super::*;

    impl_case!(case_empty: Ones, minimal_size [] => 0);
    impl_case!(case_00: Ones, minimal_size [0x00] => 0);
    impl_case!(case_0000: Ones, minimal_size [0x00, 0x00] => 0);
    impl_case!(case_ff: Ones, minimal_size [0xff] => 1);
    impl_case!(case_ffff: Ones, minimal_size [0xff, 0xff] => 1);
    impl_case!(case_0080: Ones, minimal_size [0x00, 0x80] => 2);
    impl_case!(case_007f: Ones, minimal_size [0x00, 0x7f] => 1);
    impl_case!(case_ff7f: Ones, minimal_size [0xff, 0x7f] => 2);
    impl_case!(case_ff80: Ones, minimal_size [0xff, 0x80] => 1);
    impl_case!(case_1234: Ones, minimal_size [0x12, 0x34] => 2);
    impl_case!(case_000001: Ones, minimal_size [0x00, 0x00, 0x01] => 1);
    impl_case!(case_ffff00: Ones, minimal_size [0xff, 0xff, 0x00] => 2);

    impl_case!(case_trim_ffff80: Ones, trim [0xff, 0xff, 0x80] => [0x80]);
    impl_case!(case_trim_000080: Ones, trim [0x00, 0x00, 0x80] => [0x00, 0x80]);
    impl_case!(case_trim_0000: Ones, trim [0x00, 0x00] => []);

    impl_case!(case_pad_ff: Ones, pad [0xff] to 3 => [0xff, 0xff, 0xff]);
    impl_case!(case_pad_7f: Ones, pad [0x7f] to 3 => [0x00, 0x00, 0x7f]);
    impl_case!(case_pad_empty: Ones, pad [] to 2 => [0x00, 0x00]);

    #[test]
    fn signs() {
        assert!(Ones::is_negative(be(&[0x80, 0x00]).words()));
        assert!(Ones::is_positive(be(&[0x00, 0x01]).words()));
        assert!(Ones::is_zero(be(&[0x00, 0x00]).words()));
        assert!(!Ones::is_zero(be(&[0x80]).words()));
        assert_eq!(Ones::sign(be(&[]).words()), Sign::NoSign);
        assert!(Ones::sign_bit(le(&[0x00, 0x80]).words()));
        assert!(!Ones::sign_bit(le(&[0x80, 0x00]).words()));
    }

    #[test]
    fn minimal_size_little_endian() {
        assert_eq!(Ones::minimal_size(le(&[0x80, 0x00]).words()), 2);
        assert_eq!(Ones::minimal_size(le(&[0x80, 0xff, 0xff]).words()), 1);
    }

    #[test]
    fn extend_below_minimal_size() {
        let mut x = be(&[0x12, 0x34]);
        assert_eq!(Ones::extend(&mut x, 1), Err(Error::BelowMinimalSize { requested: 1, minimal: 2 }));
        assert_eq!(x.digits, [0x12, 0x34]);
    }

    #[test]
    fn extend_shrinks_then_grows() {
        let mut x = be(&[0xff, 0xff, 0xff, 0x80]);
        Ones::extend(&mut x, 2).unwrap();
        assert_eq!(x.digits, [0xff, 0x80]);
    }

    #[test]
    fn negate() {
        let mut x = be(&[0x01]);
        Ones::negate(&mut x);
        assert_eq!(x.digits, [0xff]);

        let mut zero = be(&[0x00, 0x00]);
        Ones::negate(&mut zero);
        assert_eq!(zero.digits, [0x00, 0x00]);

        let mut min = be(&[0x80]);
        Ones::negate(&mut min);
        assert_eq!(min.digits, [0x80]);

        let mut min = be(&[0x80]);
        Ones::negate_value(&mut min);
        assert_eq!(min.digits, [0x00, 0x80]);
    }

    #[test]
    fn magnitude() {
        assert_eq!(Ones::magnitude(be(&[0xff, 0x7f]).words()).digits, [0x00, 0x81]);
        assert_eq!(Ones::magnitude(be(&[0x80]).words()).digits, [0x80]);
        assert_eq!(Ones::magnitude(be(&[0x12]).words()).digits, [0x12]);
    }

    #[test]
    fn from_magnitude() {
        assert_eq!(Ones::from_magnitude(true, be(&[0x81])).digits, [0xff, 0x7f]);
        assert_eq!(Ones::from_magnitude(false, be(&[0x80])).digits, [0x00, 0x80]);
        assert_eq!(Ones::from_magnitude(true, be(&[0x01])).digits, [0xff]);
        assert!(Ones::from_magnitude(true, be(&[])).digits.is_empty());
    }

    #[test]
    fn increment() {
        let mut x = be(&[0x7f]);
        Ones::increment(&mut x);
        assert_eq!(x.digits, [0x00, 0x80]);

        let mut x = be(&[0xff]);
        Ones::increment(&mut x);
        assert_eq!(x.digits, [0x00]);

        let mut x = be(&[]);
        Ones::increment(&mut x);
        assert_eq!(x.digits, [0x01]);
    }

    #[test]
    fn decrement() {
        let mut x = be(&[0x80]);
        Ones::decrement(&mut x);
        assert_eq!(x.digits, [0xff, 0x7f]);

        let mut x = be(&[]);
        Ones::decrement(&mut x);
        assert_eq!(x.digits, [0xff]);

        let mut x = be(&[0x00, 0x00, 0x00]);
        Ones::decrement(&mut x);
        assert_eq!(x.digits, [0xff, 0xff, 0xff]);
    }

    #[test]
    fn add() {
        assert_eq!(Ones::add(be(&[0x7f]).words(), be(&[0x01]).words()).digits, [0x00, 0x80]);
        assert_eq!(Ones::add(be(&[0xff]).words(), be(&[0x01]).words()).digits, [0x00]);
        assert_eq!(Ones::add(be(&[0x80]).words(), be(&[0xff]).words()).digits, [0xff, 0x7f]);
        assert_eq!(Ones::add(be(&[0xff, 0xff]).words(), be(&[0x02]).words()).digits, [0x00, 0x01]);
    }

    #[test]
    fn subtract() {
        assert_eq!(Ones::subtract(be(&[0x00]).words(), be(&[0x01]).words()).digits, [0xff]);
        assert_eq!(Ones::subtract(be(&[0x80]).words(), be(&[0x01]).words()).digits, [0xff, 0x7f]);
        assert_eq!(Ones::subtract(be(&[0x7f]).words(), be(&[0xff]).words()).digits, [0x00, 0x80]);
    }

    #[test]
    fn shifts() {
        assert_eq!(Ones::shift_left(be(&[0xff]).words(), 4).digits, [0xff, 0xf0]);
        assert_eq!(Ones::shift_right(be(&[0xf0]).words(), 2).digits, [0xfc]);
        assert_eq!(Ones::shift_right(be(&[0x70]).words(), 2).digits, [0x1c]);
    }
}

mod twos {
    use super::*;

    impl_case!(case_empty: Twos, minimal_size [] => 0);
    impl_case!(case_00: Twos, minimal_size [0x00] => 0);
    impl_case!(case_80: Twos, minimal_size [0x80] => 0);
    impl_case!(case_8000: Twos, minimal_size [0x80, 0x00] => 0);
    impl_case!(case_0080: Twos, minimal_size [0x00, 0x80] => 2);
    impl_case!(case_8080: Twos, minimal_size [0x80, 0x80] => 2);
    impl_case!(case_8001: Twos, minimal_size [0x80, 0x01] => 1);
    impl_case!(case_000001: Twos, minimal_size [0x00, 0x00, 0x01] => 1);
    impl_case!(case_81: Twos, minimal_size [0x81] => 1);

    impl_case!(case_trim_8001: Twos, trim [0x80, 0x01] => [0x81]);
    impl_case!(case_trim_8000: Twos, trim [0x80, 0x00] => []);
    impl_case!(case_trim_0005: Twos, trim [0x00, 0x05] => [0x05]);
    impl_case!(case_trim_800080: Twos, trim [0x80, 0x00, 0x80] => [0x80, 0x80]);

    impl_case!(case_pad_81: Twos, pad [0x81] to 3 => [0x80, 0x00, 0x01]);
    impl_case!(case_pad_01: Twos, pad [0x01] to 2 => [0x00, 0x01]);

    #[test]
    fn negative_zero() {
        for digits in [&[0x80u8][..], &[0x80, 0x00][..], &[][..], &[0x00][..]] {
            let x = be(digits);
            assert!(Twos::is_zero(x.words()));
            assert!(!Twos::is_negative(x.words()));
            assert_eq!(Twos::sign(x.words()), Sign::NoSign);
        }
        assert!(Twos::is_negative(be(&[0x81]).words()));
        assert!(Twos::sign_bit(be(&[0x80]).words()));
    }

    #[test]
    fn negate() {
        let mut x = be(&[]);
        Twos::negate(&mut x);
        assert_eq!(x.digits, [0x80]);

        let mut x = be(&[0x05]);
        Twos::negate(&mut x);
        assert_eq!(x.digits, [0x85]);

        let mut zero = be(&[0x00]);
        Twos::negate_value(&mut zero);
        assert_eq!(zero.digits, [0x00]);
    }

    #[test]
    fn from_magnitude() {
        assert_eq!(Twos::from_magnitude(true, be(&[0x81])).digits, [0x80, 0x81]);
        assert_eq!(Twos::from_magnitude(true, be(&[0x01])).digits, [0x81]);
        assert_eq!(Twos::from_magnitude(true, be(&[0x00])).digits, [0x00]);
        assert_eq!(Twos::magnitude(be(&[0x80, 0x81]).words()).digits, [0x00, 0x81]);
    }

    #[test]
    fn increment() {
        let mut x = be(&[0x81]);
        Twos::increment(&mut x);
        assert!(Twos::is_zero(x.words()));

        let mut x = be(&[0x80]);
        Twos::increment(&mut x);
        assert_eq!(x.digits, [0x01]);

        let mut x = be(&[0x7f]);
        Twos::increment(&mut x);
        assert_eq!(x.digits, [0x00, 0x80]);
    }

    #[test]
    fn decrement() {
        let mut x = be(&[]);
        Twos::decrement(&mut x);
        assert_eq!(x.digits, [0x81]);

        let mut x = be(&[0x00, 0x00]);
        Twos::decrement(&mut x);
        assert_eq!(x.digits, [0x80, 0x01]);

        let mut x = be(&[0xff]);
        Twos::decrement(&mut x);
        assert_eq!(x.digits, [0x80, 0x80]);

        let mut x = be(&[0x01]);
        Twos::decrement(&mut x);
        assert_eq!(x.digits, [0x00]);
    }

    #[test]
    fn add_and_subtract() {
        assert_eq!(Twos::add(be(&[0x85]).words(), be(&[0x03]).words()).digits, [0x82]);
        assert_eq!(Twos::add(be(&[0x05]).words(), be(&[0x83]).words()).digits, [0x02]);
        assert_eq!(Twos::add(be(&[0x7f]).words(), be(&[0x01]).words()).digits, [0x00, 0x80]);
        assert_eq!(Twos::subtract(be(&[0x03]).words(), be(&[0x05]).words()).digits, [0x82]);
        assert_eq!(Twos::subtract(be(&[0x83]).words(), be(&[0x83]).words()).digits, [0x00]);
    }

    #[test]
    fn shifts() {
        assert_eq!(Twos::shift_left(be(&[0x81]).words(), 4).digits, [0x80, 0x10]);
        assert_eq!(Twos::shift_right(be(&[0x85]).words(), 1).digits, [0x82]);
    }
}

#[test]
fn shift_digit_count() {
    assert_eq!(digits_for_shift::<u8>(0), 0);
    assert_eq!(digits_for_shift::<u8>(9), 2);
    assert_eq!(digits_for_shift::<u32>(32), 1);
    assert_eq!(digits_for_shift::<u8>(usize::MAX), usize::MAX / 8 + 1);
    assert_eq!(digits_for_shift::<u64>(usize::MAX), usize::MAX / 64 + 1);
}
