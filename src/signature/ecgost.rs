//! GOST R 34.10-2001/2012 elliptic curve digital signatures.
//!
//! Same shape as the X9.62 scheme next door; the schemes differ only in
//! how s is derived and recombined. GOST computes s = r d + k e without
//! the nonce inversion, so verification inverts the digest instead of s.

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
 * s = (r d + k e) mod q
 *
 * `q` - Subgroup order
 * `d` - Private scalar
 * `e` - Reduced digest
 * `k` - Signature nonce
 * `r` - First signature half
 */
fn calc_s(q: &BigUint, d: &BigUint, e: &BigUint, k: &BigUint, r: &BigUint) -> BigUint {
    (&(r * d) + &(k * e)) % q
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

        let s = calc_s(q, d, &e, &k, &r);
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
 *   v = e^-1 mod q; z1 = s v; z2 = -r v; C = z1 P + z2 Q
 *
 * and the signature stands iff C is finite with C.x mod q = r.
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

    let v = Fp::new(&e, q)?.inverse()?;
    let z1 = (s * &v.x) % q;
    let z2 = Fp::new(r, q)?.mul(&v)?.neg();

    let cp = p.mul(&z1)?.add(&q_point.mul(&z2.x)?)?;
    if cp.is_zero() {
        return Ok(false);
    }

    let w = cp.affine_x()? % q;

    Ok(w == *r)
}


/*---- TESTS ----*/

#[cfg(test)]
mod ecgost_test {

    use super::*;
    use crate::signature::{FixedNonce, OsNonce};
    use crate::utils::ecc_curves::group;

    fn uint(hex: &str) -> BigUint {
        BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
    }

    #[test]
    fn standard_test_vector_reproduces() {
        // GOST R 34.10-2001 appendix example: fixed nonce, known (r, s)
        let o = group("ecgost-test-a").unwrap();
        let p = o.generator().unwrap();

        let d = uint("7A929ADE789BB9BE10ED359DD39A72C11B60961F49397EEE1D19CE9891EC3B28");
        let e = uint("2DFBC1B372D89A1188C09C52E0EEC61FCE52032AB1022E8E67ECE6672B043EE5");
        let k = uint("77105C9B20BCD3122823C8CF6FCC7B956DE33814E95B7FE64FED924594DCEAB3");

        let (r, s) = sign(&e, &p, &o.q, &d, &mut FixedNonce(k)).unwrap();

        assert_eq!(
            r,
            uint("41AA28D2F1AB148280CD9ED56FEDA41974053554A42767B83AD043FD39DC0493")
        );
        assert_eq!(
            s,
            uint("1456C64BA4642A1653C235A98A60249BCD6D3F746B631DF928014F6C5BF9C40")
        );

        let q_point = p.mul(&d).unwrap();
        assert!(verify(&e, &p, &o.q, &q_point, &r, &s).unwrap());
    }

    #[test]
    fn random_nonce_round_trip() {
        let o = group("ecgost-test-a").unwrap();
        let p = o.generator().unwrap();

        let d = uint("7A929ADE789BB9BE10ED359DD39A72C11B60961F49397EEE1D19CE9891EC3B28");
        let e = uint("2DFBC1B372D89A1188C09C52E0EEC61FCE52032AB1022E8E67ECE6672B043EE5");
        let q_point = p.mul(&d).unwrap();

        let (r, s) = sign(&e, &p, &o.q, &d, &mut OsNonce).unwrap();

        assert!(verify(&e, &p, &o.q, &q_point, &r, &s).unwrap());
    }

    #[test]
    fn five_hundred_twelve_bit_round_trip() {
        let o = group("ecgost-test-b").unwrap();
        let p = o.generator().unwrap();

        let d = uint(
            "BA6048AADAE241BA40936D47756D7C93091A0E8514669700EE7508E508B10207\
             2E8123B2200A0563322DAD2827E2714A2636B7BFD18AADFC62967821FA18DD4",
        );
        let e = uint(
            "3754F3CFACC9E0615C4F4A7C4D8DAB531B09B6F9C170C533A71D147035B0C591\
             7184EE536593F4414339976C647C5D5A407ADEDB1D560C4FC6777D2972075B8C",
        );
        let q_point = p.mul(&d).unwrap();

        let (r, s) = sign(&e, &p, &o.q, &d, &mut OsNonce).unwrap();

        assert!(verify(&e, &p, &o.q, &q_point, &r, &s).unwrap());
    }

    #[test]
    fn every_gost_group_round_trips() {
        use num_bigint::RandBigInt;

        let mut rng = rand::thread_rng();

        let names = [
            "ecgost-test-a",
            "ecgost-cryptopro-a",
            "ecgost-cryptopro-b",
            "ecgost-cryptopro-c",
            "ecgost-test-b",
            "ecgost-2012-512-a",
            "ecgost-2012-512-b",
        ];

        for name in names {
            let o = group(name).unwrap();
            let p = o.generator().unwrap().to_jacobian().unwrap();

            let d = rng.gen_biguint_range(&BigUint::from(1u32), &o.q);
            let q_point = p.mul(&d).unwrap();
            let md = rng.gen_biguint(o.q.bits());

            let (r, s) = sign(&md, &p, &o.q, &d, &mut OsNonce).unwrap();

            assert!(
                verify(&md, &p, &o.q, &q_point, &r, &s).unwrap(),
                "group {}",
                name
            );
        }
    }

    #[test]
    fn tampering_breaks_verification() {
        let o = group("ecgost-test-a").unwrap();
        let p = o.generator().unwrap();

        let d = uint("7A929ADE789BB9BE10ED359DD39A72C11B60961F49397EEE1D19CE9891EC3B28");
        let e = uint("2DFBC1B372D89A1188C09C52E0EEC61FCE52032AB1022E8E67ECE6672B043EE5");
        let q_point = p.mul(&d).unwrap();

        let (r, s) = sign(&e, &p, &o.q, &d, &mut OsNonce).unwrap();

        let altered_md = &e + 1u32;
        assert!(!verify(&altered_md, &p, &o.q, &q_point, &r, &s).unwrap());

        let altered_r = (&r + 1u32) % &o.q;
        assert!(!verify(&e, &p, &o.q, &q_point, &altered_r, &s).unwrap());

        let altered_s = (&s + 1u32) % &o.q;
        assert!(!verify(&e, &p, &o.q, &q_point, &r, &altered_s).unwrap());

        let wrong_q = q_point.add(&p).unwrap();
        assert!(!verify(&e, &p, &o.q, &wrong_q, &r, &s).unwrap());
    }

}
