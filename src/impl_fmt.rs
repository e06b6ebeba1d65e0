//! Implementation of std::fmt traits
//!
//! * `Display` writes the decimal value.
//! * `LowerHex` and `UpperHex` write the minimal encoding, so negative
//!   integers show their sign bits as primitive integers do.
//! * `Debug` shows every stored digit along with the layout.
//!

use crate::*;
use crate::encoding::hexadecimal::{self, LetterCase};
use crate::stdlib::fmt;


/// Hex digits of 'words' through the formatter, honoring `#` and width
fn format_hex<E: Endianness, W: Digit>(
    words: Words<'_, E, W>,
    case: LetterCase,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    let hex = hexadecimal::write_words(words, case);
    let digits = match &hex[2..] {
        "" => "0",
        digits => digits,
    };
    f.pad_integral(true, "0x", digits)
}


impl<E: Endianness, W: Digit> fmt::Display for NBytes<E, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "", &encoding::decimal::write(self))
    }
}

impl<E: Endianness, W: Digit> fmt::LowerHex for NBytes<E, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self.trimmed().words(), LetterCase::Lower, f)
    }
}

impl<E: Endianness, W: Digit> fmt::UpperHex for NBytes<E, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self.trimmed().words(), LetterCase::Upper, f)
    }
}

impl<E: Endianness, W: Digit> fmt::Debug for NBytes<E, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = hexadecimal::write_words(self.words(), LetterCase::default());
        write!(f, "NBytes<{}>({})", E::NAME, digits)
    }
}


impl<E: Endianness, C: SignedComplement, W: Digit> fmt::Display for ZBytes<E, C, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let magnitude = encoding::decimal::write(&self.magnitude());
        f.pad_integral(!self.is_negative(), "", &magnitude)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> fmt::LowerHex for ZBytes<E, C, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self.trimmed().words(), LetterCase::Lower, f)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> fmt::UpperHex for ZBytes<E, C, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self.trimmed().words(), LetterCase::Upper, f)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> fmt::Debug for ZBytes<E, C, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = hexadecimal::write_words(self.words(), LetterCase::default());
        write!(f, "ZBytes<{}, {}>({})", E::NAME, C::NAME, digits)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $t:ty; $input:literal => $fmt:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let x = <$t>::read($input).unwrap();
                assert_eq!(format!($fmt, x), $expected);
            }
        };
    }

    impl_case!(case_display_0: NBytesBig; "0x0000" => "{}" => "0");
    impl_case!(case_display_255: NBytesLittle; "0x00ff" => "{}" => "255");
    impl_case!(case_display_width: NBytesBig; "42" => "{:>6}" => "    42");
    impl_case!(case_display_zero_pad: NBytesBig; "42" => "{:06}" => "000042");
    impl_case!(case_display_plus: NBytesBig; "42" => "{:+}" => "+42");
    impl_case!(case_display_large: NBytes<LittleEndian, u64>; "340282366920938463463374607431768211456" => "{}" => "340282366920938463463374607431768211456");

    impl_case!(case_display_neg: ZBytesBig; "0xff7f" => "{}" => "-129");
    impl_case!(case_display_neg_zero_pad: ZBytesBig; "-42" => "{:06}" => "-00042");
    impl_case!(case_display_twos: ZBytesTwosBig; "0x8081" => "{}" => "-129");
    impl_case!(case_display_twos_neg_zero: ZBytesTwosBig; "0x80" => "{}" => "0");

    impl_case!(case_hex_0: NBytesBig; "0x0000" => "{:x}" => "0");
    impl_case!(case_hex_alt_0: NBytesBig; "0x0000" => "{:#x}" => "0x0");
    impl_case!(case_hex_trimmed: NBytesBig; "0x00abcd" => "{:x}" => "abcd");
    impl_case!(case_hex_upper: NBytesLittle; "0x00abcd" => "{:X}" => "ABCD");
    impl_case!(case_hex_alt: NBytesBig; "0x0102" => "{:#x}" => "0x0102");
    impl_case!(case_hex_pad: NBytesBig; "0x01" => "{:#06x}" => "0x0001");
    impl_case!(case_hex_wide: NBytes<BigEndian, u32>; "0x0000000100000002" => "{:x}" => "0000000100000002");
    impl_case!(case_hex_neg: ZBytesBig; "-129" => "{:x}" => "ff7f");
    impl_case!(case_hex_neg_filler: ZBytesBig; "0xffffff" => "{:#X}" => "0xFF");
    impl_case!(case_hex_twos: ZBytesTwosLittle; "-129" => "{:x}" => "8081");

    impl_case!(case_debug_n: NBytesBig; "0x00ff" => "{:?}" => "NBytes<BE>(0x00ff)");
    impl_case!(case_debug_n_le: NBytesLittle; "0x00ff" => "{:?}" => "NBytes<LE>(0x00ff)");
    impl_case!(case_debug_n_empty: NBytesBig; "0" => "{:?}" => "NBytes<BE>(0x)");
    impl_case!(case_debug_z: ZBytesBig; "0xffff" => "{:?}" => "ZBytes<BE, ones>(0xffff)");
    impl_case!(case_debug_twos: ZBytesTwosLittle; "0x8000" => "{:?}" => "ZBytes<LE, twos>(0x8000)");
}
