// Property tests to be included by lib.rs

use num_bigint::{BigInt, BigUint};


mod codecs {
    use super::*;
    use crate::encoding::hexadecimal;

    proptest! {
        #[test]
        fn decimal_round_trip(n: u128) {
            let value = NBytesBig::from(n);
            let text = value.to_string();
            prop_assert_eq!(&text, &n.to_string());
            prop_assert_eq!(NBytesLittle::read(&text).unwrap(), value);
        }

        #[test]
        fn signed_decimal_round_trip(n: i128) {
            let value = ZBytesTwosBig::from(n);
            let text = value.to_string();
            prop_assert_eq!(&text, &n.to_string());
            prop_assert_eq!(ZBytesLittle::read(&text).unwrap(), ZBytesLittle::from(n));
        }

        #[test]
        fn hex_keeps_every_digit(digits: Vec<u8>) {
            let value = NBytesBig::from_digits(digits.clone());
            let text = hexadecimal::write_words(value.words(), hexadecimal::LetterCase::Upper);
            let back: NBytesBig = hexadecimal::read(&text.to_lowercase()).unwrap();
            prop_assert_eq!(back.as_digits(), &digits[..]);
        }

        #[test]
        fn bytes_round_trip(chunks: Vec<[u8; 4]>) {
            let bytes: Vec<u8> = chunks.concat();
            let value = ZBytes::<LittleEndian, Ones, u32>::from_bytes(&bytes).unwrap();
            prop_assert_eq!(value.to_bytes(), bytes);
        }
    }
}


mod layout {
    use super::*;

    proptest! {
        #[test]
        fn endianness_does_not_change_value(n: i64) {
            let big = ZBytesBig::from(n);
            let little = big.reverse();
            prop_assert_eq!(&big, &little);
            prop_assert_eq!(big.to_bigint(), little.to_bigint());

            let mut reversed = little.as_digits().to_vec();
            reversed.reverse();
            prop_assert_eq!(big.as_digits(), &reversed[..]);
        }

        #[test]
        fn schemes_agree(n: i128) {
            let ones = ZBytes::<BigEndian, Ones, u16>::from(n);
            let twos = ZBytes::<BigEndian, Twos, u16>::from(n);
            prop_assert_eq!(ones.to_bigint(), BigInt::from(n));
            prop_assert_eq!(twos.to_bigint(), BigInt::from(n));
            prop_assert_eq!(ones.to_complement::<Twos>(), twos);
        }

        #[test]
        fn trim_is_idempotent(digits: Vec<u8>) {
            let value = ZBytesBig::from_digits(digits);
            let trimmed = value.trimmed();
            prop_assert!(trimmed.is_minimal());
            prop_assert_eq!(trimmed.len(), value.minimal_size());
            let twice = trimmed.trimmed();
            prop_assert_eq!(twice.as_digits(), trimmed.as_digits());
            prop_assert_eq!(&trimmed, &value);
        }

        #[test]
        fn extend_keeps_value(n: i32, extra in 0usize..6) {
            let value = ZBytesTwosLittle::from(n);
            let size = value.minimal_size() + extra;
            let extended = value.extended(size).unwrap();
            prop_assert_eq!(extended.len(), size);
            prop_assert_eq!(&extended, &value);
            let (extended, value) = (extended.trimmed(), value.trimmed());
            prop_assert_eq!(extended.as_digits(), value.as_digits());
        }
    }
}


mod arithmetic {
    use super::*;

    macro_rules! impl_test {
        ($t:ident) => {
            paste! { proptest! {
                #[test]
                fn [< add_ $t:snake >](a: i64, b: i64) {
                    let sum = $t::from(a) + $t::from(b);
                    prop_assert_eq!(sum.to_bigint(), BigInt::from(a) + BigInt::from(b));
                }

                #[test]
                fn [< sub_ $t:snake >](a: i64, b: i64) {
                    let difference = $t::from(a) - $t::from(b);
                    prop_assert_eq!(difference.to_bigint(), BigInt::from(a) - BigInt::from(b));
                }

                #[test]
                fn [< mul_ $t:snake >](a: i64, b: i64) {
                    let product = $t::from(a) * $t::from(b);
                    prop_assert_eq!(product.to_bigint(), BigInt::from(a) * BigInt::from(b));
                }

                #[test]
                fn [< div_rem_ $t:snake >](a: i64, b: i64) {
                    prop_assume!(b != 0);
                    let (a, b) = (a as i128, b as i128);
                    let (q, r) = $t::from(a).div_rem(&$t::from(b)).unwrap();
                    prop_assert!(q.is_minimal());
                    prop_assert!(r.is_minimal());
                    prop_assert_eq!(&q, &$t::from(a.div_euclid(b)));
                    prop_assert_eq!(&r, &$t::from(a.rem_euclid(b)));
                }

                #[test]
                fn [< shift_round_trip_ $t:snake >](a: i64, k in 0usize..80) {
                    let value = $t::from(a);
                    let shifted = &value << k;
                    prop_assert_eq!(shifted.to_bigint(), BigInt::from(a) << k);
                    prop_assert_eq!(shifted >> k, value);
                }

                #[test]
                fn [< increment_decrement_ $t:snake >](a: i64) {
                    let mut value = $t::from(a);
                    value.increment();
                    prop_assert_eq!(value.to_bigint(), BigInt::from(a) + 1);
                    value.decrement();
                    value.decrement();
                    prop_assert_eq!(value.to_bigint(), BigInt::from(a) - 1);
                }
            } }
        };
    }

    impl_test!(ZBytesBig);
    impl_test!(ZBytesLittle);
    impl_test!(ZBytesTwosBig);
    impl_test!(ZBytesTwosLittle);

    proptest! {
        #[test]
        fn natural_against_biguint(a: u128, b: u128) {
            let (x, y) = (NBytes::<BigEndian, u32>::from(a), NBytes::<BigEndian, u32>::from(b));
            let (ba, bb) = (BigUint::from(a), BigUint::from(b));

            prop_assert_eq!((&x + &y).to_biguint(), &ba + &bb);
            prop_assert_eq!((&x * &y).to_biguint(), &ba * &bb);
            match x.checked_sub(&y) {
                Some(d) => {
                    prop_assert_eq!(d.to_biguint(), &ba - &bb);
                }
                None => {
                    prop_assert!(a < b);
                }
            }
            if b != 0 {
                let (q, r) = x.div_rem(&y).unwrap();
                prop_assert_eq!(q, NBytes::<BigEndian, u32>::from(a / b));
                prop_assert_eq!(r, NBytes::<BigEndian, u32>::from(a % b));
            }
        }

        #[test]
        fn ones_bitwise_matches_primitive(a: i32, b: i16) {
            let (x, y) = (ZBytesBig::from(a), ZBytesBig::from(b));
            let b = b as i32;
            prop_assert_eq!(&x & &y, ZBytesBig::from(a & b));
            prop_assert_eq!(&x | &y, ZBytesBig::from(a | b));
            prop_assert_eq!(&x ^ &y, ZBytesBig::from(a ^ b));
            prop_assert_eq!(!&x, ZBytesBig::from(!a));
        }
    }
}


/// Properties over arbitrary digit buffers, including encodings that
/// are not minimal: sign filler, Twos negative zero and odd lengths
mod raw_digits {
    use super::*;
    use crate::encoding::hexadecimal;
    use num_traits::Signed;
    use proptest::prelude::*;
    use proptest::collection::vec;

    /// Value of a two's complement byte string, most significant first
    fn ones_value(bytes: &[u8]) -> BigInt {
        BigInt::from_signed_bytes_be(bytes)
    }

    /// Value of a sign and magnitude byte string, most significant first
    fn twos_value(bytes: &[u8]) -> BigInt {
        match bytes.split_first() {
            None => BigInt::from(0u8),
            Some((&first, rest)) => {
                let mut magnitude = vec![first & 0x7f];
                magnitude.extend_from_slice(rest);
                let magnitude = BigInt::from(BigUint::from_bytes_be(&magnitude));
                if first & 0x80 != 0 { -magnitude } else { magnitude }
            }
        }
    }

    /// Twos encodings of zero with the sign bit set: `0x80`, `0x8000`, ...
    fn negative_zero() -> impl Strategy<Value = Vec<u8>> {
        (0usize..6).prop_map(|zeros| {
            let mut digits = vec![0x80u8];
            digits.resize(zeros + 1, 0);
            digits
        })
    }

    /// Ones encodings carrying extra sign filler digits
    fn filler_padded() -> impl Strategy<Value = Vec<u8>> {
        (any::<i16>(), 0usize..4).prop_map(|(n, extra)| {
            let filler = if n < 0 { 0xff } else { 0x00 };
            let mut digits = vec![filler; extra];
            digits.extend_from_slice(&n.to_be_bytes());
            digits
        })
    }

    fn raw_bytes() -> impl Strategy<Value = Vec<u8>> {
        prop_oneof![
            vec(any::<u8>(), 0..11),
            negative_zero(),
            filler_padded(),
        ]
    }

    macro_rules! impl_test {
        ($name:ident: $t:ty, $w:ty, big: $big:literal, $value:ident, toward_zero: $toward_zero:literal) => {
            mod $name {
                use super::*;

                fn be_bytes(digits: &[$w]) -> Vec<u8> {
                    if $big {
                        digits.iter().flat_map(|d| d.to_be_bytes()).collect()
                    } else {
                        digits.iter().rev().flat_map(|d| d.to_be_bytes()).collect()
                    }
                }

                /// Cut into digits, appending zero bytes to complete the last one
                fn digits_of(bytes: &[u8]) -> Vec<$w> {
                    let width = <$w>::BITS as usize / 8;
                    let mut padded = bytes.to_vec();
                    padded.resize(bytes.len().div_ceil(width) * width, 0);
                    let mut digits: Vec<$w> = padded
                        .chunks(width)
                        .map(|chunk| <$w>::from_be_bytes(chunk.try_into().unwrap()))
                        .collect();
                    if !$big {
                        digits.reverse();
                    }
                    digits
                }

                proptest! {
                    #[test]
                    fn value(bytes in raw_bytes()) {
                        let digits = digits_of(&bytes);
                        let x = <$t>::from_digits(digits.clone());
                        let expected = $value(&be_bytes(&digits));
                        prop_assert_eq!(x.to_bigint(), expected.clone());
                        prop_assert_eq!(x.to_string(), expected.to_string());
                        prop_assert_eq!(x.is_zero(), expected == BigInt::from(0u8));
                        prop_assert_eq!(x.is_negative(), expected < BigInt::from(0u8));
                    }

                    #[test]
                    fn trim_keeps_value(bytes in raw_bytes()) {
                        let x = <$t>::from_digits(digits_of(&bytes));
                        let trimmed = x.trimmed();
                        prop_assert!(trimmed.is_minimal());
                        prop_assert_eq!(trimmed.len(), x.minimal_size());
                        prop_assert!(trimmed.len() <= x.len());
                        prop_assert_eq!(trimmed.to_bigint(), x.to_bigint());
                        prop_assert_eq!(&trimmed, &x);
                    }

                    #[test]
                    fn text_round_trip(bytes in raw_bytes()) {
                        let digits = digits_of(&bytes);
                        let x = <$t>::from_digits(digits.clone());

                        let back = <$t>::read(&x.to_string()).unwrap();
                        prop_assert!(back.is_minimal());
                        prop_assert_eq!(&back, &x);

                        let text = hexadecimal::write_words(x.words(), hexadecimal::LetterCase::Lower);
                        let back: $t = hexadecimal::read(&text).unwrap();
                        prop_assert_eq!(back.as_digits(), &digits[..]);
                    }

                    #[test]
                    fn arithmetic(a in raw_bytes(), b in raw_bytes()) {
                        let x = <$t>::from_digits(digits_of(&a));
                        let y = <$t>::from_digits(digits_of(&b));
                        let (vx, vy) = (x.to_bigint(), y.to_bigint());

                        prop_assert_eq!((&x + &y).to_bigint(), &vx + &vy);
                        prop_assert_eq!((&x - &y).to_bigint(), &vx - &vy);
                        prop_assert_eq!((&x * &y).to_bigint(), &vx * &vy);
                        prop_assert_eq!((-&x).to_bigint(), -&vx);

                        if vy != BigInt::from(0u8) {
                            let (q, r) = x.div_rem(&y).unwrap();
                            prop_assert!(q.is_minimal());
                            prop_assert!(r.is_minimal());
                            prop_assert!(r.to_bigint() >= BigInt::from(0u8));
                            prop_assert!(r.to_bigint() < vy.abs());
                            prop_assert_eq!(q.to_bigint() * &vy + r.to_bigint(), vx.clone());
                        }
                    }

                    #[test]
                    fn shifts(bytes in raw_bytes(), k in 0usize..40) {
                        let x = <$t>::from_digits(digits_of(&bytes));
                        let v = x.to_bigint();
                        prop_assert_eq!((&x << k).to_bigint(), &v << k);

                        let shifted = &x >> k;
                        prop_assert_eq!(shifted.len(), x.len());
                        let expected = if $toward_zero && v < BigInt::from(0u8) {
                            -((-&v) >> k)
                        } else {
                            &v >> k
                        };
                        prop_assert_eq!(shifted.to_bigint(), expected);
                    }

                    #[test]
                    fn complement_switch_keeps_value(bytes in raw_bytes()) {
                        let x = <$t>::from_digits(digits_of(&bytes));
                        prop_assert_eq!(x.to_complement::<Ones>().to_bigint(), x.to_bigint());
                        prop_assert_eq!(x.to_complement::<Twos>().to_bigint(), x.to_bigint());
                        prop_assert_eq!(x.reverse().to_bigint(), x.to_bigint());
                    }
                }
            }
        };
    }

    impl_test!(ones_big_u8: ZBytes<BigEndian, Ones, u8>, u8, big: true, ones_value, toward_zero: false);
    impl_test!(ones_little_u8: ZBytes<LittleEndian, Ones, u8>, u8, big: false, ones_value, toward_zero: false);
    impl_test!(twos_big_u8: ZBytes<BigEndian, Twos, u8>, u8, big: true, twos_value, toward_zero: true);
    impl_test!(twos_little_u8: ZBytes<LittleEndian, Twos, u8>, u8, big: false, twos_value, toward_zero: true);
    impl_test!(ones_big_u16: ZBytes<BigEndian, Ones, u16>, u16, big: true, ones_value, toward_zero: false);
    impl_test!(ones_little_u16: ZBytes<LittleEndian, Ones, u16>, u16, big: false, ones_value, toward_zero: false);
    impl_test!(twos_big_u16: ZBytes<BigEndian, Twos, u16>, u16, big: true, twos_value, toward_zero: true);
    impl_test!(twos_little_u16: ZBytes<LittleEndian, Twos, u16>, u16, big: false, twos_value, toward_zero: true);

    proptest! {
        #[test]
        fn ones_inverse_sums_to_minus_one(bytes in raw_bytes()) {
            let x = ZBytesLittle::from_digits(bytes);
            let inverse = !&x;
            prop_assert!(inverse.is_minimal());
            prop_assert_eq!((&x + &inverse).to_bigint(), BigInt::from(-1));
        }

        #[test]
        fn natural_from_raw_digits(digits in vec(any::<u8>(), 0..11), k in 0usize..30) {
            let x = NBytesLittle::from_digits(digits.clone());
            let mut be = digits.clone();
            be.reverse();
            let v = BigUint::from_bytes_be(&be);
            prop_assert_eq!(x.to_biguint(), v.clone());
            prop_assert_eq!(x.to_string(), v.to_string());
            prop_assert_eq!((&x << k).to_biguint(), &v << k);
            prop_assert_eq!((&x >> k).to_biguint(), &v >> k);
            let trimmed = x.trimmed();
            prop_assert_eq!(trimmed.len(), x.minimal_size());
            prop_assert_eq!(&trimmed, &x);
        }
    }
}
