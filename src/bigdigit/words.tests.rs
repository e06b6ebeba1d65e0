
#[test]
fn big_endian_orders() {
    let digits = [0x01u8, 0x02, 0x03];
    let words = Words::<BigEndian, u8>::new(&digits);

    assert_eq!(words.iter().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(words.iter_big().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(words.get(0), Some(3));
    assert_eq!(words.most_significant(), Some(1));
    assert_eq!(words.digit_at_from_end(1), Some(2));
    assert_eq!(words.get(3), None);
}

#[test]
fn little_endian_orders() {
    let digits = [0x01u8, 0x02, 0x03];
    let words = Words::<LittleEndian, u8>::new(&digits);

    assert_eq!(words.iter().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(words.iter_big().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(words.most_significant(), Some(3));
}

#[test]
fn reverse_swaps_views_over_same_storage() {
    let digits = [0xaau8, 0xbb, 0xcc];
    let words = Words::<BigEndian, u8>::new(&digits);
    let reversed = words.reverse();

    assert_eq!(reversed.iter().collect::<Vec<_>>(), words.iter_big().collect::<Vec<_>>());
    assert_eq!(reversed.as_slice().as_ptr(), digits.as_ptr());
    assert_eq!(reversed.reverse().iter().collect::<Vec<_>>(), words.iter().collect::<Vec<_>>());
}

#[test]
fn at_negative_indexes() {
    let digits = [0x01u8, 0x02, 0x03];
    let words = Words::<BigEndian, u8>::new(&digits);

    assert_eq!(words.at(0), Ok(3));
    assert_eq!(words.at(-1), Ok(1));
    assert_eq!(words.at(-3), Ok(3));
}

#[test]
fn at_out_of_range() {
    let digits = [0x01u8, 0x02];
    let words = Words::<LittleEndian, u8>::new(&digits);

    assert_eq!(words.at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(words.at(-3), Err(Error::IndexOutOfRange { index: -3, len: 2 }));

    let empty = Words::<LittleEndian, u8>::new(&[]);
    assert!(empty.at(0).is_err());
    assert!(empty.at(-1).is_err());
}

#[test]
fn split_least_significant_big_endian() {
    let digits = [0x01u16, 0x02, 0x03];
    let words = Words::<BigEndian, u16>::new(&digits);
    let (lo, hi) = words.split_least_significant(2);

    assert_eq!(lo.iter().collect::<Vec<_>>(), [3, 2]);
    assert_eq!(hi.iter().collect::<Vec<_>>(), [1]);
}

#[test]
fn words_mut_writes_by_significance() {
    let mut digits = [0u8; 3];
    let mut words = WordsMut::<BigEndian, u8>::new(&mut digits);

    *words.get_mut(0).unwrap() = 0x11;
    *words.most_significant_mut().unwrap() = 0x33;
    for d in words.iter_mut().skip(1).take(1) {
        *d = 0x22;
    }
    assert_eq!(digits, [0x33, 0x22, 0x11]);
}

#[test]
fn count_significant_zeros() {
    let digits = [0u8, 0, 7, 0];
    assert_eq!(Words::<BigEndian, u8>::new(&digits).count_significant_zeros(), 2);
    assert_eq!(Words::<LittleEndian, u8>::new(&digits).count_significant_zeros(), 1);
    assert!(Words::<LittleEndian, u8>::new(&[0, 0]).is_zero());
}
