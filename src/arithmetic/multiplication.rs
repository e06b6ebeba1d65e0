//! Schoolbook multiplication of digit sequences

use crate::bigdigit::{Digit, Endianness, Words, WordsMut};
use crate::Error;

use num_traits::Zero;

use super::addition::add_digit_assign;


/// Multiply 'a' by 'b', writing the product into 'dst'
///
/// Operands are swapped so that 'a' is the longer one; the destination
/// must hold at least as many digits as 'a'. Product digits beyond the
/// destination are discarded, so a destination of `len(a) + len(b)`
/// digits always receives the exact product.
///
pub fn multiply<E, W>(dst: &mut WordsMut<'_, E, W>, a: Words<'_, E, W>, b: Words<'_, E, W>) -> Result<(), Error>
where
    E: Endianness,
    W: Digit,
{
    let required = a.len().max(b.len());
    if dst.len() < required {
        return Err(Error::InsufficientCapacity {
            operation: "multiply numbers",
            required: required,
            available: dst.len(),
        });
    }
    multiply_into(dst, a, b);
    Ok(())
}

/// Multiply 'a' by 'b' into 'dst' without checking its size
///
/// Each partial product is split into low and high digits, added into
/// positions i+j and i+j+1 with the carry rippling upward.
///
pub(crate) fn multiply_into<E, W>(dst: &mut WordsMut<'_, E, W>, a: Words<'_, E, W>, b: Words<'_, E, W>)
where
    E: Endianness,
    W: Digit,
{
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    dst.fill(W::zero());
    let n = dst.len();

    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            let k = i + j;
            if k >= n {
                break;
            }
            let (hi, lo) = W::expanding_mul(x, y);
            add_digit_assign(dst.iter_mut().skip(k), lo);
            add_digit_assign(dst.iter_mut().skip(k + 1), hi);
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::{BigEndian, LittleEndian};

    include!("multiplication.tests.rs");
}
