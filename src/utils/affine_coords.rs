//! Affine coordinate math for curves in short Weierstrass form.
//!
//! A point is a plain (x, y) pair on y^2 = x^3 + ax + b over F_p. Each
//! operation spends one field inversion on the slope; the Jacobian layer
//! exists for callers who cannot afford that.

use crate::utils::field::Fp;
use crate::utils::EccError;


/**
 * Point doubling through the tangent slope
 *
 *   l  = (3 x1^2 + a) / (2 y1)
 *   x3 = l^2 - 2 x1
 *   y3 = l (x1 - x3) - y1
 *
 * The caller must rule out y1 = 0 first; order-two points double to the
 * point at infinity, which has no coordinate representation here.
 *
 * `a` - Curve parameter a as a field value
 * `x1` - X coordinate
 * `y1` - Y coordinate, non-zero
 */
pub fn dbl(a: &Fp, x1: &Fp, y1: &Fp) -> Result<(Fp, Fp), EccError> {
    let xx = x1.mul(x1)?;
    let l = xx.shl(1).add(&xx)?.add(a)?.div(&y1.shl(1))?;

    let x3 = l.mul(&l)?.sub(&x1.shl(1))?;
    let y3 = l.mul(&x1.sub(&x3)?)?.sub(y1)?;

    Ok((x3, y3))
}

/**
 * Point addition through the chord slope, for x1 != x2
 *
 *   l  = (y2 - y1) / (x2 - x1)
 *   x3 = l^2 - x1 - x2
 *   y3 = l (x1 - x3) - y1
 *
 * `x1`, `y1` - First point
 * `x2`, `y2` - Second point
 */
pub fn add(x1: &Fp, y1: &Fp, x2: &Fp, y2: &Fp) -> Result<(Fp, Fp), EccError> {
    let l = y2.sub(y1)?.div(&x2.sub(x1)?)?;

    let x3 = l.mul(&l)?.sub(x1)?.sub(x2)?;
    let y3 = l.mul(&x1.sub(&x3)?)?.sub(y1)?;

    Ok((x3, y3))
}


/*---- TESTS ----*/

#[cfg(test)]
mod affine_coords_test {

    use super::*;
    use num_bigint::BigUint;

    // The textbook curve y^2 = x^3 + 2x + 2 (mod 17), generator (5, 1)
    fn fp(x: u32) -> Fp {
        Fp::new(&BigUint::from(x), &BigUint::from(17u32)).unwrap()
    }

    #[test]
    fn doubling_the_generator() {
        let (x3, y3) = dbl(&fp(2), &fp(5), &fp(1)).unwrap();

        assert_eq!(x3, fp(6));
        assert_eq!(y3, fp(3));
    }

    #[test]
    fn chord_addition() {
        // G + 2G = 3G = (10, 6)
        let (x3, y3) = add(&fp(5), &fp(1), &fp(6), &fp(3)).unwrap();

        assert_eq!(x3, fp(10));
        assert_eq!(y3, fp(6));
    }

    #[test]
    fn chord_addition_is_commutative() {
        let left = add(&fp(5), &fp(1), &fp(6), &fp(3)).unwrap();
        let right = add(&fp(6), &fp(3), &fp(5), &fp(1)).unwrap();

        assert_eq!(left, right);
    }
}
