//! Implementation of comparison operations
//!
//! Numbers compare by value: leading zero (or sign filler) digits are
//! ignored and the digit order of the two operands may differ, as long
//! as the digit type and sign scheme agree.
//!

use crate::*;

use crate::stdlib::cmp::Ordering;
use crate::stdlib::hash::{Hash, Hasher};


impl<E, F, W> PartialEq<NBytes<F, W>> for NBytes<E, W>
where
    E: Endianness,
    F: Endianness,
    W: Digit,
{
    fn eq(&self, rhs: &NBytes<F, W>) -> bool {
        arithmetic::compare_naturals(self.words(), rhs.words()) == Ordering::Equal
    }
}

impl<E: Endianness, W: Digit> Eq for NBytes<E, W> {}

impl<E, F, W> PartialOrd<NBytes<F, W>> for NBytes<E, W>
where
    E: Endianness,
    F: Endianness,
    W: Digit,
{
    #[inline]
    fn partial_cmp(&self, rhs: &NBytes<F, W>) -> Option<Ordering> {
        Some(arithmetic::compare_naturals(self.words(), rhs.words()))
    }
}

impl<E: Endianness, W: Digit> Ord for NBytes<E, W> {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        arithmetic::compare_naturals(self.words(), rhs.words())
    }
}

impl<E: Endianness, W: Digit> Hash for NBytes<E, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let significant = self.minimal_size();
        for d in self.words().iter().take(significant) {
            d.hash(state);
        }
    }
}

impl<E: Endianness, W: Digit> PartialEq<u64> for NBytes<E, W> {
    fn eq(&self, rhs: &u64) -> bool {
        *self == NBytes::<E, W>::from(*rhs)
    }
}

impl<E: Endianness, W: Digit> PartialOrd<u64> for NBytes<E, W> {
    fn partial_cmp(&self, rhs: &u64) -> Option<Ordering> {
        self.partial_cmp(&NBytes::<E, W>::from(*rhs))
    }
}


/// Order integers given their signs and unsigned magnitudes
fn compare_signed<E, F, W>(
    a_sign: Sign,
    a_magnitude: Words<'_, E, W>,
    b_sign: Sign,
    b_magnitude: Words<'_, F, W>,
) -> Ordering
where
    E: Endianness,
    F: Endianness,
    W: Digit,
{
    match (a_sign, b_sign) {
        (Sign::Minus, Sign::Minus) => arithmetic::compare_naturals(b_magnitude, a_magnitude),
        (Sign::Plus, Sign::Plus) => arithmetic::compare_naturals(a_magnitude, b_magnitude),
        (a, b) => a.cmp(&b),
    }
}

impl<E, F, C, W> PartialEq<ZBytes<F, C, W>> for ZBytes<E, C, W>
where
    E: Endianness,
    F: Endianness,
    C: SignedComplement,
    W: Digit,
{
    fn eq(&self, rhs: &ZBytes<F, C, W>) -> bool {
        self.partial_cmp(rhs) == Some(Ordering::Equal)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> Eq for ZBytes<E, C, W> {}

impl<E, F, C, W> PartialOrd<ZBytes<F, C, W>> for ZBytes<E, C, W>
where
    E: Endianness,
    F: Endianness,
    C: SignedComplement,
    W: Digit,
{
    fn partial_cmp(&self, rhs: &ZBytes<F, C, W>) -> Option<Ordering> {
        let (a_sign, b_sign) = (self.sign(), rhs.sign());
        if a_sign != b_sign || a_sign == Sign::NoSign {
            return Some(a_sign.cmp(&b_sign));
        }
        let a = C::magnitude(self.words());
        let b = C::magnitude(rhs.words());
        Some(compare_signed(a_sign, a.words(), b_sign, b.words()))
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> Ord for ZBytes<E, C, W> {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        let a = C::magnitude(self.words());
        let b = C::magnitude(rhs.words());
        compare_signed(self.sign(), a.words(), rhs.sign(), b.words())
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> Hash for ZBytes<E, C, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_negative().hash(state);
        self.magnitude().hash(state);
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> PartialEq<i64> for ZBytes<E, C, W> {
    fn eq(&self, rhs: &i64) -> bool {
        *self == ZBytes::<E, C, W>::from(*rhs)
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> PartialOrd<i64> for ZBytes<E, C, W> {
    fn partial_cmp(&self, rhs: &i64) -> Option<Ordering> {
        self.partial_cmp(&ZBytes::<E, C, W>::from(*rhs))
    }
}


impl<E: Endianness, W: Digit> NBytes<E, W> {
    /// True if both numbers have the same byte layout
    ///
    /// Unlike `==` this sees the digit count and the digit order:
    /// `0x00ff` is not identical to `0xff`.
    ///
    pub fn identical<F: Endianness>(&self, other: &NBytes<F, W>) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl<E: Endianness, C: SignedComplement, W: Digit> ZBytes<E, C, W> {
    /// True if both numbers have the same byte layout, whatever their
    /// digit order and sign scheme
    pub fn identical<F: Endianness, D: SignedComplement>(&self, other: &ZBytes<F, D, W>) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::DefaultHasher;

    fn hash<T: Hash>(obj: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        obj.hash(&mut hasher);
        hasher.finish()
    }

    macro_rules! impl_case {
        ($name:ident: $t:ty; $a:literal $op:tt $b:literal) => {
            #[test]
            fn $name() {
                let a = <$t>::read($a).unwrap();
                let b = <$t>::read($b).unwrap();
                assert!(a $op b);
            }
        };
    }

    impl_case!(case_n_eq_padded: NBytesBig; "0x0000ff" == "255");
    impl_case!(case_n_lt: NBytesBig; "0x00ff" < "0x0100");
    impl_case!(case_n_gt_shorter: NBytesLittle; "0x01" > "0x000000");
    impl_case!(case_n_ne: NBytes<BigEndian, u16>; "0x00010000" != "0x0001");
    impl_case!(case_z_eq_filler: ZBytesBig; "0xffff" == "-1");
    impl_case!(case_z_lt_neg: ZBytesBig; "-129" < "-128");
    impl_case!(case_z_lt_sign: ZBytesLittle; "-1" < "0");
    impl_case!(case_z_gt: ZBytesBig; "0x0080" > "0x7f");
    impl_case!(case_twos_neg_zero: ZBytesTwosBig; "0x80" == "0x0000");
    impl_case!(case_twos_lt: ZBytesTwosBig; "-2" < "-1");
    impl_case!(case_twos_gt: ZBytesTwosLittle; "1" > "0x80");

    #[test]
    fn cross_endian_equality() {
        let big = NBytesBig::read("0x0102").unwrap();
        let little = NBytesLittle::read("0x000102").unwrap();
        assert_eq!(big, little);
        assert_eq!(little, big);
        assert!(big <= little);

        let big = ZBytesTwosBig::from(-300);
        let little = ZBytesTwosLittle::read("-300").unwrap();
        assert_eq!(big, little);
        assert!(ZBytesBig::from(-1) < ZBytesLittle::from(0));
    }

    #[test]
    fn compare_with_primitives() {
        assert_eq!(NBytesBig::read("0x0000").unwrap(), 0u64);
        assert_eq!(NBytes::<LittleEndian, u32>::from(u64::MAX), u64::MAX);
        assert!(NBytesBig::from(10u8) < 11u64);
        assert_eq!(ZBytesTwosBig::read("0x80").unwrap(), 0i64);
        assert!(ZBytesBig::from(-5) < 0i64);
        assert!(ZBytesBig::from(i64::MIN) < i64::MIN + 1);
    }

    #[test]
    fn sort() {
        let mut values: Vec<ZBytesBig> = ["5", "-300", "0", "0xff", "128", "-1"]
            .iter()
            .map(|s| ZBytesBig::read(s).unwrap())
            .collect();
        values.sort();
        let sorted: Vec<String> = values.iter().map(|x| x.to_string()).collect();
        assert_eq!(sorted, ["-300", "-1", "-1", "0", "5", "128"]);
    }

    #[test]
    fn equal_values_hash_equal() {
        let a = NBytesBig::read("0x0000ff").unwrap();
        let b = NBytesBig::read("0xff").unwrap();
        assert_eq!(hash(&a), hash(&b));
        assert_eq!(hash(&NBytesBig::new()), hash(&NBytesBig::zero(4)));

        let a = ZBytesBig::read("0xffff").unwrap();
        let b = ZBytesBig::read("-1").unwrap();
        assert_eq!(hash(&a), hash(&b));

        let a = ZBytesTwosBig::read("0x8000").unwrap();
        let b = ZBytesTwosBig::read("0x00").unwrap();
        assert_eq!(hash(&a), hash(&b));

        assert_ne!(hash(&ZBytesBig::from(1)), hash(&ZBytesBig::from(-1)));
    }

    #[test]
    #[cfg(feature = "std")]
    fn hash_set_dedups_encodings() {
        let values = ["0x0001", "1", "0x01", "0x000001"];
        let set: std::collections::HashSet<_> = values.iter()
                                                      .map(|s| NBytesBig::read(s).unwrap())
                                                      .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn identical_compares_layout() {
        let a = NBytesBig::read("0x00ff").unwrap();
        let b = NBytesBig::read("0xff").unwrap();
        assert_eq!(a, b);
        assert!(!a.identical(&b));
        assert!(a.identical(&a.clone()));
        assert!(a.identical(&NBytesLittle::from_digits(vec![0x00, 0xff])));
        assert!(!a.identical(&a.reverse()));

        let ones = ZBytesBig::read("0xffff").unwrap();
        assert_eq!(ones, ZBytesBig::from(-1));
        assert!(!ones.identical(&ZBytesBig::from(-1)));

        let negative_zero = ZBytesTwosBig::read("0x80").unwrap();
        assert_eq!(negative_zero, ZBytesTwosBig::zero(1));
        assert!(!negative_zero.identical(&ZBytesTwosBig::zero(1)));
        assert!(negative_zero.identical(&ZBytesBig::from(-128)));
    }
}
