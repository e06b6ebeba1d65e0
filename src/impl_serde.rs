//!
//! Support for serde implementations
//!
//! Numbers serialize as decimal strings. Deserialization accepts
//! decimal or `0x` hex strings and, unless the `string-only` feature is
//! enabled, integer tokens.
//!
use crate::*;
use crate::stdlib::fmt;
use crate::stdlib::marker::PhantomData;
use serde_crate::{de, ser};


impl<E: Endianness, W: Digit> ser::Serialize for NBytes<E, W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> ser::Serialize for ZBytes<E, C, W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}


/// Used by SerDe to construct an NBytes
struct NBytesVisitor<E, W>(PhantomData<(E, W)>);

impl<'de, E: Endianness, W: Digit> de::Visitor<'de> for NBytesVisitor<E, W> {
    type Value = NBytes<E, W>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-negative integer or decimal/hex string")
    }

    fn visit_str<Er>(self, value: &str) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        NBytes::read(value).map_err(|err| Er::custom(format!("{}", err)))
    }

    fn visit_u64<Er>(self, value: u64) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        Ok(NBytes::from(value))
    }

    fn visit_i64<Er>(self, value: i64) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        if value < 0 {
            return Err(Er::custom(format!("{}", Error::NegativeNatural)));
        }
        Ok(NBytes::from(value.unsigned_abs()))
    }

    fn visit_u128<Er>(self, value: u128) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        Ok(NBytes::from(value))
    }

    fn visit_i128<Er>(self, value: i128) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        if value < 0 {
            return Err(Er::custom(format!("{}", Error::NegativeNatural)));
        }
        Ok(NBytes::from(value.unsigned_abs()))
    }
}


/// Used by SerDe to construct a ZBytes
struct ZBytesVisitor<E, C, W>(PhantomData<(E, C, W)>);

impl<'de, E: Endianness, C: SignedComplement, W: Digit> de::Visitor<'de> for ZBytesVisitor<E, C, W> {
    type Value = ZBytes<E, C, W>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer or decimal/hex string")
    }

    fn visit_str<Er>(self, value: &str) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        ZBytes::read(value).map_err(|err| Er::custom(format!("{}", err)))
    }

    fn visit_u64<Er>(self, value: u64) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        Ok(ZBytes::from(value))
    }

    fn visit_i64<Er>(self, value: i64) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        Ok(ZBytes::from(value))
    }

    fn visit_u128<Er>(self, value: u128) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        Ok(ZBytes::from(value))
    }

    fn visit_i128<Er>(self, value: i128) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        Ok(ZBytes::from(value))
    }
}


#[cfg(not(feature = "string-only"))]
impl<'de, E: Endianness, W: Digit> de::Deserialize<'de> for NBytes<E, W> {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(NBytesVisitor(PhantomData))
    }
}

#[cfg(feature = "string-only")]
impl<'de, E: Endianness, W: Digit> de::Deserialize<'de> for NBytes<E, W> {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_str(NBytesVisitor(PhantomData))
    }
}

#[cfg(not(feature = "string-only"))]
impl<'de, E: Endianness, C: SignedComplement, W: Digit> de::Deserialize<'de> for ZBytes<E, C, W> {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(ZBytesVisitor(PhantomData))
    }
}

#[cfg(feature = "string-only")]
impl<'de, E: Endianness, C: SignedComplement, W: Digit> de::Deserialize<'de> for ZBytes<E, C, W> {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_str(ZBytesVisitor(PhantomData))
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error
    };

    mod serde_serialize_deserialize_str {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $input:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let expected = Token::Str($output);
                    let natural: NBytesBig = $input.parse().unwrap();
                    assert_tokens(&natural, &[expected]);

                    let integer: ZBytesTwosLittle = $input.parse().unwrap();
                    assert_tokens(&integer, &[expected]);
                }
            };
        }

        impl_case!(case_0: "0" => "0");
        impl_case!(case_1: "1" => "1");
        impl_case!(case_255: "255" => "255");
        impl_case!(case_256: "256" => "256");
        impl_case!(case_1e30: "1000000000000000000000000000000" => "1000000000000000000000000000000");
    }

    #[test]
    fn serialize_negative_integer() {
        let value: ZBytesBig = "-129".parse().unwrap();
        assert_tokens(&value, &[Token::Str("-129")]);
    }

    #[test]
    fn deserialize_hex_str() {
        let tokens = [Token::Str("0x0000ff")];
        assert_de_tokens(&NBytesBig::from_digits(vec![0, 0, 0xff]), &tokens);
        assert_de_tokens(&NBytesLittle::from(255u8), &tokens);
    }

    #[test]
    fn deserialize_negative_hex_str() {
        let tokens = [Token::Str("0xff7f")];
        assert_de_tokens(&ZBytesBig::from(-129i32), &tokens);
    }

    #[test]
    fn deserialize_invalid_str() {
        assert_de_tokens_error::<NBytesBig>(
            &[Token::Str("12a")],
            "invalid decimal string \"12a\"",
        );
    }

    #[cfg(not(feature = "string-only"))]
    mod serde_deserialize_int {
        use super::*;

        macro_rules! impl_case {
            ( $( $ttype:ident ),+ ) => {
                $(
                    paste! { impl_case!([< case_ $ttype:lower >] : $ttype); }
                )*
            };
            ($name:ident : $type:ident ) => {
                #[test]
                fn $name() {
                    let tokens = [ Token::$type(1) ];
                    assert_de_tokens(&NBytesBig::from(1u8), &tokens);
                    assert_de_tokens(&ZBytesBig::from(1u8), &tokens);

                    let tokens = [ Token::$type(127) ];
                    assert_de_tokens(&NBytesBig::from(127u8), &tokens);
                    assert_de_tokens(&ZBytesTwosBig::from(127u8), &tokens);
                }
            };
        }

        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64);

        #[test]
        fn case_negative_integer() {
            let tokens = [ Token::I64(-129) ];
            assert_de_tokens(&ZBytesBig::from(-129i64), &tokens);
            assert_de_tokens(&ZBytesTwosLittle::from(-129i64), &tokens);
        }

        #[test]
        fn case_negative_natural() {
            let tokens = [ Token::I32(-1) ];
            assert_de_tokens_error::<NBytesBig>(&tokens, "negative value cannot be a natural number");
        }

        #[test]
        fn case_u64_max() {
            let tokens = [ Token::U64(u64::MAX) ];
            assert_de_tokens(&NBytesLittle::from_digits(vec![0xff; 8]), &tokens);
        }
    }
}
