
mod digit_u8 {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(<u8 as Digit>::BITS, 8);
        assert_eq!(<u8 as Digit>::BYTES, 1);
        assert_eq!(<u8 as Digit>::MAX, 0xff);
        assert_eq!(<u8 as Digit>::SIGN_BIT, 0x80);
    }

    #[test]
    fn combine_and_split() {
        let wide = u8::combine(0x12, 0x34);
        assert_eq!(wide, 0x1234);
        assert_eq!(u8::split_wide_digit(wide), (0x12, 0x34));
    }

    #[test]
    fn add_with_carry_no_overflow() {
        assert_eq!(u8::add_with_carry(0x10, 0x20, false), (0x30, false));
        assert_eq!(u8::add_with_carry(0x10, 0x20, true), (0x31, false));
    }

    #[test]
    fn add_with_carry_overflow() {
        assert_eq!(u8::add_with_carry(0xff, 0x01, false), (0x00, true));
        assert_eq!(u8::add_with_carry(0xff, 0xff, true), (0xff, true));
    }

    #[test]
    fn sub_with_borrow() {
        assert_eq!(u8::sub_with_borrow(0x30, 0x20, false), (0x10, false));
        assert_eq!(u8::sub_with_borrow(0x00, 0x01, false), (0xff, true));
        assert_eq!(u8::sub_with_borrow(0x00, 0x00, true), (0xff, true));
        assert_eq!(u8::sub_with_borrow(0x01, 0x00, true), (0x00, false));
    }

    #[test]
    fn expanding_mul_max() {
        assert_eq!(u8::expanding_mul(0xff, 0xff), (0xfe, 0x01));
    }

    #[test]
    fn sign_bit() {
        assert!(0x80u8.has_sign_bit());
        assert!(0xffu8.has_sign_bit());
        assert!(!0x7fu8.has_sign_bit());
    }
}

mod digit_u32 {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(<u32 as Digit>::SIGN_BIT, 0x8000_0000);
        assert_eq!(<u32 as Digit>::BYTES, 4);
    }

    #[test]
    fn bytes() {
        let mut be = Vec::new();
        0x01020304u32.extend_be_bytes(&mut be);
        assert_eq!(be, [1, 2, 3, 4]);

        let mut le = Vec::new();
        0x01020304u32.extend_le_bytes(&mut le);
        assert_eq!(le, [4, 3, 2, 1]);

        assert_eq!(u32::from_le_byte_slice(&[4, 3, 2, 1]), 0x01020304);
        assert_eq!(u32::from_le_byte_slice(&[0xff]), 0xff);
    }
}

mod digit_u64 {
    use super::*;

    #[test]
    fn expanding_mul_max() {
        let (hi, lo) = u64::expanding_mul(u64::MAX, u64::MAX);
        assert_eq!(hi, 0xffff_ffff_ffff_fffe);
        assert_eq!(lo, 1);
    }

    #[test]
    fn add_with_carry_overflow() {
        assert_eq!(u64::add_with_carry(u64::MAX, 0, true), (0, true));
    }

    #[test]
    fn expanding_add() {
        assert_eq!(u64::expanding_add(u64::MAX, 2), (1, 1));
    }
}
