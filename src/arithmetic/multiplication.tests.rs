
macro_rules! impl_case {
    ($name:ident: $endian:ty, $t:ty; [$($a:literal),*] * [$($b:literal),*] => [$($c:literal),*]) => {
        #[test]
        fn $name() {
            let a: &[$t] = &[$($a),*];
            let b: &[$t] = &[$($b),*];
            let expected: &[$t] = &[$($c),*];

            let mut product = vec![0 as $t; expected.len()];
            multiply(&mut WordsMut::<$endian, $t>::new(&mut product), Words::new(a), Words::new(b)).unwrap();
            assert_eq!(product, expected);

            let mut commuted = vec![0 as $t; expected.len()];
            multiply(&mut WordsMut::<$endian, $t>::new(&mut commuted), Words::new(b), Words::new(a)).unwrap();
            assert_eq!(commuted, expected);
        }
    };
}

impl_case!(case_be_2_3: BigEndian, u8; [0x02] * [0x03] => [0x00, 0x06]);
impl_case!(case_be_ff_ff: BigEndian, u8; [0xff] * [0xff] => [0xfe, 0x01]);
impl_case!(case_be_ffff_ffff: BigEndian, u8; [0xff, 0xff] * [0xff, 0xff] => [0xff, 0xfe, 0x00, 0x01]);
impl_case!(case_le_ffff_ffff: LittleEndian, u8; [0xff, 0xff] * [0xff, 0xff] => [0x01, 0x00, 0xfe, 0xff]);
impl_case!(case_le_0100_0100: LittleEndian, u8; [0x00, 0x01] * [0x00, 0x01] => [0x00, 0x00, 0x01, 0x00]);
impl_case!(case_be_1234_56: BigEndian, u8; [0x12, 0x34] * [0x56] => [0x06, 0x1d, 0x78]);
impl_case!(case_be_u32: BigEndian, u32; [0xffffffff] * [0x2] => [0x1, 0xfffffffe]);
impl_case!(case_le_u64_max_sq: LittleEndian, u64; [0xffffffffffffffff] * [0xffffffffffffffff] => [0x1, 0xfffffffffffffffe]);
impl_case!(case_be_empty: BigEndian, u8; [0x12, 0x34] * [] => [0x00, 0x00]);

#[test]
fn truncated_to_destination() {
    let a = [0x01u8, 0x01];
    let b = [0xffu8];
    let mut dst = [0u8; 2];
    multiply(&mut WordsMut::<LittleEndian, u8>::new(&mut dst), Words::new(&a), Words::new(&b)).unwrap();
    // 0x0101 * 0xff = 0xffff
    assert_eq!(dst, [0xff, 0xff]);

    let mut dst = [0u8; 2];
    multiply(&mut WordsMut::<LittleEndian, u8>::new(&mut dst), Words::new(&a), Words::new(&a)).unwrap();
    // 0x0101 * 0x0101 = 0x010201
    assert_eq!(dst, [0x01, 0x02]);

    let mut short = [0u8; 1];
    multiply(&mut WordsMut::<LittleEndian, u8>::new(&mut short), Words::new(&[0x02]), Words::new(&[0x80])).unwrap();
    assert_eq!(short, [0x00]);
}

#[test]
fn insufficient_capacity() {
    let a = [0x01u8, 0x01];
    let mut dst = [0u8; 1];
    let result = multiply(&mut WordsMut::<LittleEndian, u8>::new(&mut dst), Words::new(&a), Words::new(&a));
    assert!(matches!(result, Err(Error::InsufficientCapacity { .. })));
}
