//! Implement unary operations: Neg, Not

use crate::*;
use crate::stdlib::ops::{Neg, Not};


impl<E: Endianness, C: SignedComplement, W: Digit> Neg for ZBytes<E, C, W> {
    type Output = ZBytes<E, C, W>;

    #[inline]
    fn neg(mut self) -> ZBytes<E, C, W> {
        self.negate();
        self
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> Neg for &ZBytes<E, C, W> {
    type Output = ZBytes<E, C, W>;

    #[inline]
    fn neg(self) -> ZBytes<E, C, W> {
        self.negated()
    }
}

impl<E: Endianness, W: Digit> Not for ZBytes<E, Ones, W> {
    type Output = ZBytes<E, Ones, W>;

    #[inline]
    fn not(self) -> ZBytes<E, Ones, W> {
        self.inverted()
    }
}

impl<E: Endianness, W: Digit> Not for &ZBytes<E, Ones, W> {
    type Output = ZBytes<E, Ones, W>;

    #[inline]
    fn not(self) -> ZBytes<E, Ones, W> {
        self.inverted()
    }
}

impl<E: Endianness, W: Digit> Neg for NBytes<E, W> {
    type Output = ZBytes<E, Ones, W>;

    #[inline]
    fn neg(self) -> ZBytes<E, Ones, W> {
        let mut result = ZBytes::<E, Ones, W>::from(self);
        result.negate();
        result
    }
}

impl<E: Endianness, W: Digit> Neg for &NBytes<E, W> {
    type Output = ZBytes<E, Ones, W>;

    #[inline]
    fn neg(self) -> ZBytes<E, Ones, W> {
        -self.clone()
    }
}

impl<E: Endianness, W: Digit> Not for NBytes<E, W> {
    type Output = ZBytes<E, Ones, W>;

    #[inline]
    fn not(self) -> ZBytes<E, Ones, W> {
        ZBytes::<E, Ones, W>::from(self).inverted()
    }
}

impl<E: Endianness, W: Digit> Not for &NBytes<E, W> {
    type Output = ZBytes<E, Ones, W>;

    #[inline]
    fn not(self) -> ZBytes<E, Ones, W> {
        !self.clone()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: -$a:literal => $expected:literal) => {
            mod $name {
                use super::*;

                #[test]
                fn ones() {
                    let a = ZBytesBig::read($a).unwrap();
                    let expected = ZBytesBig::read($expected).unwrap();
                    assert_eq!(-&a, expected);
                    assert_eq!(-a, expected);
                }

                #[test]
                fn twos() {
                    let a = ZBytesTwosLittle::read($a).unwrap();
                    let expected = ZBytesTwosLittle::read($expected).unwrap();
                    assert_eq!(-&a, expected);
                    assert_eq!(-a, expected);
                }
            }
        };
    }

    impl_case!(case_0: -"0" => "0");
    impl_case!(case_1: -"1" => "-1");
    impl_case!(case_n1: -"-1" => "1");
    impl_case!(case_n128: -"-128" => "128");
    impl_case!(case_128: -"128" => "-128");
    impl_case!(case_large: -"-340282366920938463463374607431768211456" => "340282366920938463463374607431768211456");

    #[test]
    fn neg_grows_most_negative() {
        let x = ZBytesBig::read("0x8000").unwrap();
        assert_eq!((-x).as_digits(), &[0x00, 0x80, 0x00]);
    }

    #[test]
    fn not_ones() {
        assert_eq!(!ZBytesBig::from(0), -1i64);
        assert_eq!(!ZBytesBig::from(-1), 0i64);
        assert_eq!(!&ZBytesBig::from(5), -6i64);
        assert_eq!((!ZBytesLittle::read("0x00ff").unwrap()).as_digits(), &[0x00, 0xff]);
    }

    #[test]
    fn not_of_empty_zero() {
        let zero = ZBytesBig::new();
        assert!(zero.is_empty());
        assert_eq!((!&zero).as_digits(), &[0xff]);
        assert_eq!((!!zero).as_digits(), &[] as &[u8]);
    }

    #[test]
    fn value_plus_inverse_is_minus_one() {
        let values = [
            ZBytesLittle::new(),
            ZBytesLittle::zero(3),
            ZBytesLittle::from_digits(vec![0x7f]),
            ZBytesLittle::from_digits(vec![0x80, 0xff, 0xff]),
            ZBytesLittle::from_digits(vec![0x00, 0x01, 0x00]),
        ];
        for x in values {
            assert_eq!(&x + &!&x, -1i64);
            assert!((!&x).is_minimal());
        }
    }

    #[test]
    fn neg_natural() {
        let n = NBytesBig::from(0x80u8);
        let z = -&n;
        assert_eq!(z, -128i64);
        assert_eq!(z.as_digits(), &[0xff, 0x80]);
        assert_eq!(-NBytesBig::new(), 0i64);
        assert_eq!(-NBytesLittle::from(0xffu8), -255i64);
    }

    #[test]
    fn not_natural() {
        assert_eq!(!NBytesBig::new(), -1i64);
        assert_eq!(!&NBytesBig::from(0xffu8), -256i64);
        assert_eq!((!NBytesLittle::from(0x7fu8)).as_digits(), &[0x80]);
    }
}
