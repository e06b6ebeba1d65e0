//! Benchmarks for arithmetic operations

extern crate criterion;
extern crate bytenum;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

mod common;
use common::*;

criterion_main!(
    arithmetic,
    codecs,
);

criterion_group!(
    name = arithmetic;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(5))
                       .sample_size(300);
    targets =
        bench_addition,
        bench_multiplication,
        bench_division,
        bench_shift,
);

criterion_group!(
    name = codecs;
    config = Criterion::default()
                       .sample_size(200);
    targets =
        bench_decimal,
        bench_hex,
);


const SIZES: [usize; 3] = [8, 64, 512];


fn bench_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");
    for &size in SIZES.iter() {
        let naturals = random_naturals(64, size, 0x8b3f);
        let integers = random_integers(64, size, 0x8b3f);
        let twos = random_twos_integers(64, size, 0x8b3f);

        group.bench_with_input(BenchmarkId::new("natural", size), &naturals, |b, values| {
            let mut pick = RandomIterator::new_with_seed(values, 7);
            b.iter(|| black_box(pick.next() + pick.next()))
        });
        group.bench_with_input(BenchmarkId::new("ones", size), &integers, |b, values| {
            let mut pick = RandomIterator::new_with_seed(values, 7);
            b.iter(|| black_box(pick.next() - pick.next()))
        });
        group.bench_with_input(BenchmarkId::new("twos", size), &twos, |b, values| {
            let mut pick = RandomIterator::new_with_seed(values, 7);
            b.iter(|| black_box(pick.next() - pick.next()))
        });
    }
    group.finish();
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplication");
    for &size in SIZES.iter() {
        let integers = random_integers(32, size, 0x51e7);
        group.bench_with_input(BenchmarkId::new("ones", size), &integers, |b, values| {
            let mut pick = RandomIterator::new_with_seed(values, 11);
            b.iter(|| black_box(pick.next() * pick.next()))
        });
    }
    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");
    for &size in SIZES.iter() {
        let dividends = random_naturals(32, size, 0xd1f1);
        let divisors: Vec<_> = random_naturals(32, size / 2, 0x0d1f)
            .into_iter()
            .filter(|n| !n.is_zero())
            .collect();

        group.bench_with_input(BenchmarkId::new("natural", size), &(dividends, divisors), |b, (x, y)| {
            let mut pick_x = RandomIterator::new_with_seed(x, 3);
            let mut pick_y = RandomIterator::new_with_seed(y, 5);
            b.iter(|| black_box(pick_x.next().div_rem(pick_y.next())))
        });
    }
    group.finish();
}

fn bench_shift(c: &mut Criterion) {
    let integers = random_integers(64, 512, 0x5e1f);
    c.bench_function("shift left-right", |b| {
        let mut pick = RandomIterator::new_with_seed(&integers, 13);
        b.iter(|| black_box((pick.next() << 37usize) >> 37usize))
    });
}

fn bench_decimal(c: &mut Criterion) {
    let integers = random_integers(64, 256, 0xdec);
    let strings: Vec<String> = integers.iter().map(|z| z.to_string()).collect();

    c.bench_function("decimal write", |b| {
        let mut pick = RandomIterator::new_with_seed(&integers, 17);
        b.iter(|| black_box(pick.next().to_string()))
    });
    c.bench_function("decimal read", |b| {
        let mut pick = RandomIterator::new_with_seed(&strings, 17);
        b.iter(|| black_box(bytenum::ZBytesBig::read(pick.next())))
    });
}

fn bench_hex(c: &mut Criterion) {
    let naturals = random_naturals(64, 256, 0x4e8);
    let strings: Vec<String> = naturals.iter().map(bytenum::encoding::hexadecimal::write).collect();

    c.bench_function("hex write", |b| {
        let mut pick = RandomIterator::new_with_seed(&naturals, 19);
        b.iter(|| black_box(bytenum::encoding::hexadecimal::write(pick.next())))
    });
    c.bench_function("hex read", |b| {
        let mut pick = RandomIterator::new_with_seed(&strings, 19);
        b.iter(|| black_box(bytenum::NBytesBig::read(pick.next())))
    });
}
