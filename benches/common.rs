//! common routines to be included by benches

use bytenum::{NBytesBig, ZBytesBig, ZBytesTwosBig};


/// Random digit vectors of the given length
pub fn random_digit_vecs(count: usize, digits: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| (0..digits).map(|_| rng.rand_u32() as u8).collect())
        .collect()
}

/// Random naturals of 'digits' bytes
pub fn random_naturals(count: usize, digits: usize, seed: u64) -> Vec<NBytesBig> {
    random_digit_vecs(count, digits, seed)
        .into_iter()
        .map(NBytesBig::from_digits)
        .collect()
}

/// Random integers of 'digits' bytes, about half of them negative
pub fn random_integers(count: usize, digits: usize, seed: u64) -> Vec<ZBytesBig> {
    random_digit_vecs(count, digits, seed)
        .into_iter()
        .map(ZBytesBig::from_digits)
        .collect()
}

/// Same values as [`random_integers`] in sign and magnitude form
pub fn random_twos_integers(count: usize, digits: usize, seed: u64) -> Vec<ZBytesTwosBig> {
    random_integers(count, digits, seed)
        .iter()
        .map(|z| z.to_complement())
        .collect()
}


/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a [T],
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new_with_seed(v: &'a [T], seed: u64) -> Self {
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        &self.v[idx]
    }
}
