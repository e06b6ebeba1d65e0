use crate::*;
use crate::stdlib::str::FromStr;

impl<E: Endianness, W: Digit> FromStr for NBytes<E, W> {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        NBytes::read(s)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> FromStr for ZBytes<E, C, W> {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        ZBytes::read(s)
    }
}




#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $t:ty; $input:literal => $format:literal) => {
            #[test]
            fn $name() {
                let err = $input.parse::<$t>().unwrap_err();
                match err {
                    Error::InvalidString { format, input } => {
                        assert_eq!(format, $format);
                        assert_eq!(input, $input);
                    }
                    err => panic!("unexpected error {:?}", err),
                }
            }
        };
    }

    impl_case!(case_empty: NBytesBig; "" => "decimal");
    impl_case!(case_negative_natural: NBytesBig; "-1" => "decimal");
    impl_case!(case_leading_zero: NBytesBig; "007" => "decimal");
    impl_case!(case_odd_hex: NBytesBig; "0x123" => "hexadecimal");
    impl_case!(case_bad_hex: NBytesLittle; "0xcafz" => "hexadecimal");
    impl_case!(case_hex_partial_digit: NBytes<BigEndian, u32>; "0x0001" => "hexadecimal");
    impl_case!(case_negative_zero: ZBytesBig; "-0" => "signed decimal");
    impl_case!(case_plus: ZBytesTwosBig; "+5" => "signed decimal");
    impl_case!(case_negative_hex: ZBytesBig; "-0x01" => "signed decimal");
    impl_case!(case_hello: ZBytesLittle; "hello" => "signed decimal");
}
