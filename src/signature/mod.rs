use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::rngs::OsRng;

pub mod ecdsa;
pub mod ecgost;

/// A source of per-signature secret nonces.
///
/// Signing consumes one nonce per attempt; implementations must return a
/// uniform integer in [1, q - 1]. Injecting the source keeps the schemes
/// testable with fixed nonces and leaves room for deterministic
/// derivation in the style of RFC 6979.
pub trait NonceSource {
    /// Draws the next nonce, uniform in [1, q - 1]
    ///
    /// ### Arguments
    ///
    /// * `q` - Subgroup order bounding the nonce
    fn next_nonce(&mut self, q: &BigUint) -> BigUint;
}

/// Nonce source backed by the operating system RNG
pub struct OsNonce;

impl NonceSource for OsNonce {
    fn next_nonce(&mut self, q: &BigUint) -> BigUint {
        OsRng.gen_biguint_range(&BigUint::one(), q)
    }
}

/// Replays one caller-chosen nonce; for known-answer tests
pub struct FixedNonce(pub BigUint);

impl NonceSource for FixedNonce {
    fn next_nonce(&mut self, _q: &BigUint) -> BigUint {
        self.0.clone()
    }
}

/// Reduces a message digest into the scalar range: e = md mod q, patched
/// to 1 when the reduction hits zero. Strict X9.62 would truncate the
/// digest to the order's bit length first; this library keeps the plain
/// reduction.
pub(crate) fn reduce_digest(md: &BigUint, q: &BigUint) -> BigUint {
    let e = md % q;

    if e.is_zero() {
        BigUint::one()
    } else {
        e
    }
}


/*---- TESTS ----*/

#[cfg(test)]
mod signature_test {

    use super::*;

    #[test]
    fn digest_reduction_wraps_and_patches_zero() {
        let q = BigUint::from(19u32);

        assert_eq!(reduce_digest(&BigUint::from(40u32), &q), BigUint::from(2u32));
        assert_eq!(reduce_digest(&BigUint::from(7u32), &q), BigUint::from(7u32));
        assert_eq!(reduce_digest(&BigUint::from(38u32), &q), BigUint::one());
    }

    #[test]
    fn os_nonces_stay_in_range() {
        let q = BigUint::from(97u32);
        let mut source = OsNonce;

        for _ in 0..100 {
            let k = source.next_nonce(&q);
            assert!(k >= BigUint::one() && k < q);
        }
    }

    #[test]
    fn fixed_nonces_replay() {
        let mut source = FixedNonce(BigUint::from(5u32));
        let q = BigUint::from(97u32);

        assert_eq!(source.next_nonce(&q), BigUint::from(5u32));
        assert_eq!(source.next_nonce(&q), BigUint::from(5u32));
    }
}
