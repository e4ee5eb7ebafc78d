//! Jacobian coordinate math for curves in short Weierstrass form.
//!
//! The triple (X, Y, Z) represents the affine point (X / Z^2, Y / Z^3);
//! Z = 0 encodes the point at infinity. The representation trades the
//! per-operation field inversion of affine math for a handful of extra
//! multiplications, and the entry functions below pick the cheapest 2007
//! Bernstein-Lange or Meloni formula the Z coordinates allow.

use num_traits::One;

use crate::utils::field::Fp;
use crate::utils::EccError;


/*-------- ENTRY FUNCTIONS --------*/


/**
 * Doubling dispatch. Z = 1 takes the short mdbl path unless `fixed`
 * forces the full formula, which keeps the operation shape independent
 * of the data for ladder use.
 *
 * `a` - Curve parameter a as a field value
 * `x1`, `y1`, `z1` - Point to double
 * `fixed` - Skip the Z = 1 shortcut
 */
pub fn dbl(a: &Fp, x1: &Fp, y1: &Fp, z1: &Fp, fixed: bool) -> Result<(Fp, Fp, Fp), EccError> {
    if !fixed && z1.x.is_one() {
        return mdbl_2007_bl(a, x1, y1);
    }

    dbl_2007_bl(a, x1, y1, z1)
}

/**
 * Addition dispatch, cheapest applicable variant first. With `fixed` set
 * every call lands on the generic formula regardless of the Z values.
 *
 * `x1`, `y1`, `z1` - First point
 * `x2`, `y2`, `z2` - Second point
 * `fixed` - Skip the Z-based shortcuts
 */
pub fn add(
    x1: &Fp,
    y1: &Fp,
    z1: &Fp,
    x2: &Fp,
    y2: &Fp,
    z2: &Fp,
    fixed: bool,
) -> Result<(Fp, Fp, Fp), EccError> {
    if fixed {
        return add_2007_bl(x1, y1, z1, x2, y2, z2);
    }

    if z2.x.is_one() {
        if z1.x.is_one() {
            return mmadd_2007_bl(x1, y1, x2, y2);
        }

        return madd_2007_bl(x1, y1, z1, x2, y2);
    }

    if z1 == z2 {
        return zadd_2007_m(x1, y1, z1, x2, y2);
    }

    add_2007_bl(x1, y1, z1, x2, y2, z2)
}


/*-------- FORMULA VARIANTS --------*/


/**
 * Doubling with z1 = 1
 * Cost: 1M + 5S + 7add + 3*2 + 1*3 + 1*8
 * Source: 2007 Bernstein-Lange
 *
 * `a` - Curve parameter a as a field value
 * `x1`, `y1` - Point to double
 */
pub fn mdbl_2007_bl(a: &Fp, x1: &Fp, y1: &Fp) -> Result<(Fp, Fp, Fp), EccError> {
    let xx = x1.mul(x1)?;                                   // xx = x1^2
    let yy = y1.mul(y1)?;                                   // yy = y1^2
    let yyyy = yy.mul(&yy)?;                                // yyyy = yy^2

    let t = x1.add(&yy)?;
    let s = t.mul(&t)?.sub(&xx)?.sub(&yyyy)?.shl(1);        // s = 2 ((x1 + yy)^2 - xx - yyyy)
    let m = xx.shl(1).add(&xx)?.add(a)?;                    // m = 3 xx + a

    let x3 = m.mul(&m)?.sub(&s.shl(1))?;                    // x3 = m^2 - 2 s
    let y3 = m.mul(&s.sub(&x3)?)?.sub(&yyyy.shl(3))?;       // y3 = m (s - x3) - 8 yyyy
    let z3 = y1.shl(1);                                     // z3 = 2 y1

    Ok((x3, y3, z3))
}

/**
 * General doubling
 * Cost: 1M + 8S + 1*a + 10add + 2*2 + 1*3 + 1*8
 * Source: 2007 Bernstein-Lange
 *
 * `a` - Curve parameter a as a field value
 * `x1`, `y1`, `z1` - Point to double
 */
pub fn dbl_2007_bl(a: &Fp, x1: &Fp, y1: &Fp, z1: &Fp) -> Result<(Fp, Fp, Fp), EccError> {
    let xx = x1.mul(x1)?;                                   // xx = x1^2
    let yy = y1.mul(y1)?;                                   // yy = y1^2
    let yyyy = yy.mul(&yy)?;                                // yyyy = yy^2
    let zz = z1.mul(z1)?;                                   // zz = z1^2

    let t = x1.add(&yy)?;
    let s = t.mul(&t)?.sub(&xx)?.sub(&yyyy)?.shl(1);        // s = 2 ((x1 + yy)^2 - xx - yyyy)
    let m = xx.shl(1).add(&xx)?.add(&a.mul(&zz.mul(&zz)?)?)?; // m = 3 xx + a zz^2

    let x3 = m.mul(&m)?.sub(&s.shl(1))?;                    // x3 = m^2 - 2 s
    let y3 = m.mul(&s.sub(&x3)?)?.sub(&yyyy.shl(3))?;       // y3 = m (s - x3) - 8 yyyy

    let u = y1.add(z1)?;
    let z3 = u.mul(&u)?.sub(&yy)?.sub(&zz)?;                // z3 = (y1 + z1)^2 - yy - zz

    Ok((x3, y3, z3))
}

/**
 * Addition with z1 = z2 = 1
 * Cost: 4M + 2S + 6add + 4*2 + 1*4
 * Source: 2007 Bernstein-Lange
 *
 * `x1`, `y1` - First point
 * `x2`, `y2` - Second point
 */
pub fn mmadd_2007_bl(x1: &Fp, y1: &Fp, x2: &Fp, y2: &Fp) -> Result<(Fp, Fp, Fp), EccError> {
    let h = x2.sub(x1)?;                                    // h = x2 - x1
    let i = h.mul(&h)?.shl(2);                              // i = 4 h^2
    let j = h.mul(&i)?;                                     // j = h i
    let r = y2.sub(y1)?.shl(1);                             // r = 2 (y2 - y1)
    let v = x1.mul(&i)?;                                    // v = x1 i

    let x3 = r.mul(&r)?.sub(&j)?.sub(&v.shl(1))?;           // x3 = r^2 - j - 2 v
    let y3 = r.mul(&v.sub(&x3)?)?.sub(&y1.mul(&j)?.shl(1))?; // y3 = r (v - x3) - 2 y1 j
    let z3 = h.shl(1);                                      // z3 = 2 h

    Ok((x3, y3, z3))
}

/**
 * Addition with z2 = 1
 * Cost: 7M + 4S + 9add + 3*2 + 1*4
 * Source: 2007 Bernstein-Lange
 *
 * `x1`, `y1`, `z1` - First point
 * `x2`, `y2` - Second point
 */
pub fn madd_2007_bl(x1: &Fp, y1: &Fp, z1: &Fp, x2: &Fp, y2: &Fp) -> Result<(Fp, Fp, Fp), EccError> {
    let z1z1 = z1.mul(z1)?;                                 // z1z1 = z1^2
    let u2 = x2.mul(&z1z1)?;                                // u2 = x2 z1z1
    let s2 = y2.mul(z1)?.mul(&z1z1)?;                       // s2 = y2 z1 z1z1

    let h = u2.sub(x1)?;                                    // h = u2 - x1
    let hh = h.mul(&h)?;                                    // hh = h^2
    let i = hh.shl(2);                                      // i = 4 hh
    let j = h.mul(&i)?;                                     // j = h i
    let r = s2.sub(y1)?.shl(1);                             // r = 2 (s2 - y1)
    let v = x1.mul(&i)?;                                    // v = x1 i

    let x3 = r.mul(&r)?.sub(&j)?.sub(&v.shl(1))?;           // x3 = r^2 - j - 2 v
    let y3 = r.mul(&v.sub(&x3)?)?.sub(&y1.mul(&j)?.shl(1))?; // y3 = r (v - x3) - 2 y1 j

    let t = z1.add(&h)?;
    let z3 = t.mul(&t)?.sub(&z1z1)?.sub(&hh)?;              // z3 = (z1 + h)^2 - z1z1 - hh

    Ok((x3, y3, z3))
}

/**
 * Addition with z1 = z2
 * Cost: 5M + 2S + 9add
 * Source: 2007 Meloni, "New point addition formulae for ECC applications"
 *
 * `x1`, `y1`, `z1` - First point
 * `x2`, `y2` - Second point, sharing z1
 */
pub fn zadd_2007_m(x1: &Fp, y1: &Fp, z1: &Fp, x2: &Fp, y2: &Fp) -> Result<(Fp, Fp, Fp), EccError> {
    let dx = x2.sub(x1)?;                                   // dx = x2 - x1
    let a = dx.mul(&dx)?;                                   // a = dx^2
    let b = x1.mul(&a)?;                                    // b = x1 a
    let c = x2.mul(&a)?;                                    // c = x2 a
    let dy = y2.sub(y1)?;                                   // dy = y2 - y1
    let d = dy.mul(&dy)?;                                   // d = dy^2

    let x3 = d.sub(&b)?.sub(&c)?;                           // x3 = d - b - c
    let y3 = dy.mul(&b.sub(&x3)?)?.sub(&y1.mul(&c.sub(&b)?)?)?; // y3 = dy (b - x3) - y1 (c - b)
    let z3 = z1.mul(&dx)?;                                  // z3 = z1 dx

    Ok((x3, y3, z3))
}

/**
 * General addition
 * Cost: 11M + 5S + 9add + 4*2
 * Source: 2007 Bernstein-Lange
 *
 * `x1`, `y1`, `z1` - First point
 * `x2`, `y2`, `z2` - Second point
 */
pub fn add_2007_bl(
    x1: &Fp,
    y1: &Fp,
    z1: &Fp,
    x2: &Fp,
    y2: &Fp,
    z2: &Fp,
) -> Result<(Fp, Fp, Fp), EccError> {
    let z1z1 = z1.mul(z1)?;                                 // z1z1 = z1^2
    let z2z2 = z2.mul(z2)?;                                 // z2z2 = z2^2
    let u1 = x1.mul(&z2z2)?;                                // u1 = x1 z2z2
    let u2 = x2.mul(&z1z1)?;                                // u2 = x2 z1z1
    let s1 = y1.mul(z2)?.mul(&z2z2)?;                       // s1 = y1 z2 z2z2
    let s2 = y2.mul(z1)?.mul(&z1z1)?;                       // s2 = y2 z1 z1z1

    let h = u2.sub(&u1)?;                                   // h = u2 - u1
    let h2 = h.shl(1);
    let i = h2.mul(&h2)?;                                   // i = (2 h)^2
    let j = h.mul(&i)?;                                     // j = h i
    let r = s2.sub(&s1)?.shl(1);                            // r = 2 (s2 - s1)
    let v = u1.mul(&i)?;                                    // v = u1 i

    let x3 = r.mul(&r)?.sub(&j)?.sub(&v.shl(1))?;           // x3 = r^2 - j - 2 v
    let y3 = r.mul(&v.sub(&x3)?)?.sub(&s1.mul(&j)?.shl(1))?; // y3 = r (v - x3) - 2 s1 j

    let t = z1.add(z2)?;
    let z3 = t.mul(&t)?.sub(&z1z1)?.sub(&z2z2)?.mul(&h)?;   // z3 = ((z1 + z2)^2 - z1z1 - z2z2) h

    Ok((x3, y3, z3))
}


/*---- TESTS ----*/
