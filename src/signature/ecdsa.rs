//! ANS X9.62 / FIPS 186 elliptic curve digital signatures.
//!
//! The caller supplies the message digest as an integer, the generator
//! point P with its subgroup order q, and the private scalar d (signing)
//! or the public point Q = dP (verification). Signatures are plain
//! (r, s) integer pairs; encodings live outside this crate.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::signature::{reduce_digest, NonceSource};
use crate::utils::ecc_points::Point;
use crate::utils::field::Fp;
use crate::utils::EccError;


/**
 * r = (k P).x mod q
 *
 * `p` - Generator point
 * `q` - Subgroup order
 * `k` - Signature nonce
 */
fn calc_r(p: &Point, q: &BigUint, k: &BigUint) -> Result<BigUint, EccError> {
    let c = p.mul(k)?;

    Ok(c.affine_x()? % q)
}

/**
 * s = k^-1 (e + d r) mod q
 *
 * `q` - Subgroup order
 * `d` - Private scalar
 * `e` - Reduced digest
 * `k` - Signature nonce
 * `r` - First signature half
 */
fn calc_s(
    q: &BigUint,
    d: &BigUint,
    e: &BigUint,
    k: &BigUint,
    r: &BigUint,
) -> Result<BigUint, EccError> {
    let k = Fp::new(k, q)?;
    let t = Fp::new(&(e + &(d * r)), q)?;

    Ok(k.inverse()?.mul(&t)?.x)
}

/**
 * Produces an (r, s) signature over the digest `md`. Draws nonces until
 * neither signature half reduces to zero.
 *
 * `md` - Message digest as an integer
 * `p` - Generator point
 * `q` - Subgroup order of the generator
 * `d` - Private scalar
 * `nonces` - Nonce source, uniform in [1, q - 1]
 */
pub fn sign<N>(
    md: &BigUint,
    p: &Point,
    q: &BigUint,
    d: &BigUint,
    nonces: &mut N,
) -> Result<(BigUint, BigUint), EccError>
where
    N: NonceSource + ?Sized,
{
    if !p.is_finite() {
        return Err(EccError::NotAPoint);
    }

    let e = reduce_digest(md, q);

    loop {
        let k = nonces.next_nonce(q);

        let r = calc_r(p, q, &k)?;
        if r.is_zero() {
            debug!("r reduced to zero, drawing a fresh nonce");
            continue;
        }

        let s = calc_s(q, d, &e, &k, &r)?;
        if s.is_zero() {
            debug!("s reduced to zero, drawing a fresh nonce");
            continue;
        }

        return Ok((r, s));
    }
}

/**
 * Verifies an (r, s) signature over the digest `md`. A wrong signature
 * yields Ok(false); only malformed inputs raise errors.
 *
 * `md` - Message digest as an integer
 * `p` - Generator point
 * `q` - Subgroup order of the generator
 * `q_point` - Public point Q = d P
 * `r`, `s` - Signature halves
 */
pub fn verify(
    md: &BigUint,
    p: &Point,
    q: &BigUint,
    q_point: &Point,
    r: &BigUint,
    s: &BigUint,
) -> Result<bool, EccError> {
    if !p.is_finite() || !q_point.is_finite() {
        return Err(EccError::NotAPoint);
    }

    let one = BigUint::one();
    if r < &one || r >= q || s < &one || s >= q {
        return Ok(false);
    }

    let e = reduce_digest(md, q);

    let c = Fp::new(s, q)?.inverse()?;
    let u1 = (&e * &c.x) % q;
    let u2 = (r * &c.x) % q;

    let cp = p.mul(&u1)?.add(&q_point.mul(&u2)?)?;
    if cp.is_zero() {
        return Ok(false);
    }

    let v = cp.affine_x()? % q;

    Ok(v == *r)
}


/*---- TESTS ----*/
