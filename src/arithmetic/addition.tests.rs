
mod add_with_carry {
    use super::*;

    #[test]
    fn stops_at_shortest() {
        let mut dst = [0u8; 4];
        let (written, carry) = add_with_carry(dst.iter_mut(), [0xffu8, 0x01], [0x01u8, 0x01, 0x01], false);
        assert_eq!(written, 2);
        assert!(!carry);
        assert_eq!(dst, [0x00, 0x03, 0, 0]);
    }

    #[test]
    fn carry_out() {
        let mut dst = [0u16; 2];
        let (written, carry) = add_with_carry(dst.iter_mut(), [0xffffu16, 0xffff], [0x0001u16, 0x0000], false);
        assert_eq!(written, 2);
        assert!(carry);
        assert_eq!(dst, [0, 0]);
    }

    #[test]
    fn leaves_dst_iterator_at_next_digit() {
        let mut dst = [0u8; 3];
        let mut out = dst.iter_mut();
        add_with_carry(out.by_ref(), [1u8], [2u8], true);
        *out.next().unwrap() = 9;
        assert_eq!(dst, [4, 9, 0]);
    }
}

mod add_digit {
    use super::*;

    #[test]
    fn with_carry_ripples() {
        let mut dst = [0u8; 3];
        let (written, carry) = add_digit_with_carry(dst.iter_mut(), [0xffu8, 0xff, 0x10], 0x02);
        assert_eq!(written, 3);
        assert_eq!(carry, 0);
        assert_eq!(dst, [0x01, 0x00, 0x11]);
    }

    #[test]
    fn assign_stops_when_absorbed() {
        let mut dst = [0xfeu8, 0xff, 0x00, 0x00];
        let carry = add_digit_assign(dst.iter_mut(), 0x03);
        assert_eq!(carry, 0);
        assert_eq!(dst, [0x01, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn assign_overflows() {
        let mut dst = [0xffu8, 0xff];
        let carry = add_digit_assign(dst.iter_mut(), 0x01);
        assert_eq!(carry, 1);
        assert_eq!(dst, [0, 0]);
    }
}

mod plus {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $endian:ty; [$($a:literal),*] + [$($b:literal),*] => [$($c:literal),*] carry $carry:literal) => {
            #[test]
            fn $name() {
                let a: &[u8] = &[$($a),*];
                let b: &[u8] = &[$($b),*];
                let expected: &[u8] = &[$($c),*];

                let mut dst = vec![0u8; expected.len()];
                let carry = plus(
                    &mut WordsMut::<$endian, u8>::new(&mut dst),
                    Words::new(a),
                    Words::new(b),
                ).unwrap();
                assert_eq!(dst, expected);
                assert_eq!(carry, $carry);

                let mut commuted = vec![0u8; expected.len()];
                plus(
                    &mut WordsMut::<$endian, u8>::new(&mut commuted),
                    Words::new(b),
                    Words::new(a),
                ).unwrap();
                assert_eq!(commuted, expected);
            }
        };
    }

    impl_case!(case_be_1_1: BigEndian; [0x01] + [0x01] => [0x02] carry 0);
    impl_case!(case_be_ff_1: BigEndian; [0xff] + [0x01] => [0x01, 0x00] carry 0);
    impl_case!(case_be_ff_1_no_room: BigEndian; [0xff] + [0x01] => [0x00] carry 1);
    impl_case!(case_be_01ff_1: BigEndian; [0x01, 0xff] + [0x01] => [0x02, 0x00] carry 0);
    impl_case!(case_le_ffff_01: LittleEndian; [0xff, 0xff] + [0x01] => [0x00, 0x00, 0x01] carry 0);
    impl_case!(case_le_empty: LittleEndian; [] + [0x07] => [0x07] carry 0);

    #[test]
    fn insufficient_capacity() {
        let a = [1u8, 2, 3];
        let b = [1u8];
        let mut dst = [0u8; 2];
        let result = plus(&mut WordsMut::<BigEndian, u8>::new(&mut dst), Words::new(&a), Words::new(&b));
        assert_eq!(
            result,
            Err(Error::InsufficientCapacity { operation: "add numbers", required: 3, available: 2 })
        );
    }
}
