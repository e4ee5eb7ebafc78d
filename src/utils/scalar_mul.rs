//! Scalar multiplication strategies.
//!
//! Two algorithms compute R = d * P. Double-and-add touches the
//! accumulator only on set bits, so its operation pattern follows the
//! scalar value; the Montgomery ladder performs one addition and one
//! doubling per bit, so its pattern depends only on the scalar's bit
//! length. The ladder still leaks that bit length: callers who need to
//! hide it must left-pad the scalar at the scheme layer.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::utils::ecc_points::Point;
use crate::utils::EccError;


/**
 * Variable-time multiplication, R = d * P
 *
 *   Q <- O; N <- P
 *   while d != 0: if d odd, Q <- Q + N; N <- 2 N; d <- d >> 1
 *
 * `p` - Point to multiply
 * `d` - Scalar factor
 */
pub fn double_and_add(p: &Point, d: &BigUint) -> Result<Point, EccError> {
    let mut q = Point::zero(&p.curve).with_mode(p.mode);
    let mut n = p.clone();
    let mut d = d.clone();

    while !d.is_zero() {
        if d.is_odd() {
            q = q.add(&n)?;
        }

        n = n.dbl()?;
        d >>= 1;
    }

    Ok(q)
}

/**
 * Regular multiplication with the Montgomery ladder, R = d * P
 *
 *   R0 <- O; R1 <- P
 *   for each bit of d, most significant first:
 *     bit 0: R1 <- R0 + R1; R0 <- 2 R0
 *     bit 1: R0 <- R0 + R1; R1 <- 2 R1
 *
 * Both branches perform one addition and one doubling, which is the
 * side-channel property the secure point flavour buys.
 *
 * `p` - Point to multiply
 * `d` - Scalar factor
 */
pub fn montgomery_ladder(p: &Point, d: &BigUint) -> Result<Point, EccError> {
    let mut r0 = Point::zero(&p.curve).with_mode(p.mode);

    if d.is_zero() {
        return Ok(r0);
    }

    let mut r1 = p.clone();

    for i in (0..d.bits()).rev() {
        if (d >> i).is_odd() {
            r0 = r0.add(&r1)?;
            r1 = r1.dbl()?;
        } else {
            r1 = r0.add(&r1)?;
            r0 = r0.dbl()?;
        }
    }

    Ok(r0)
}


/*---- TESTS ----*/
