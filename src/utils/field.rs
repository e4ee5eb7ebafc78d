//! Prime field arithmetic.
//!
//! An `Fp` value is an integer in [0, p) paired with its modulus p. Values
//! are immutable and every operation hands back a freshly built element.
//! Two values may only interact when they carry the same modulus; the
//! extended Euclidean inversion is the one expensive primitive here, so the
//! point layers above call it sparingly.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::utils::EccError;


/*---- STRUCTS ----*/

/// An element of the prime field F_p
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fp {
    pub x: BigUint,
    pub p: BigUint,
}


/*---- IMPLEMENTATIONS ----*/

impl Fp {
    /// Builds a field element, reducing the value into [0, p)
    ///
    /// ### Arguments
    ///
    /// * `x` - Residue value
    /// * `p` - Field modulus
    pub fn new(x: &BigUint, p: &BigUint) -> Result<Fp, EccError> {
        if p.is_zero() {
            return Err(EccError::ZeroModulus);
        }

        Ok(Fp {
            x: x % p,
            p: p.clone(),
        })
    }

    /// Builds a field element from a signed integer. Euclidean reduction
    /// places negative inputs into [0, p) as well.
    ///
    /// ### Arguments
    ///
    /// * `x` - Signed residue value
    /// * `p` - Field modulus
    pub fn from_bigint(x: &BigInt, p: &BigUint) -> Result<Fp, EccError> {
        if p.is_zero() {
            return Err(EccError::ZeroModulus);
        }

        let reduced = x.mod_floor(&BigInt::from(p.clone()));

        Ok(Fp {
            x: reduced.magnitude().clone(),
            p: p.clone(),
        })
    }

    /// Additive inverse: (p - x) mod p
    pub fn neg(&self) -> Fp {
        Fp {
            x: (&self.p - &self.x) % &self.p,
            p: self.p.clone(),
        }
    }

    /// Modular addition
    ///
    /// ### Arguments
    ///
    /// * `other` - Right operand, under the same modulus
    pub fn add(&self, other: &Fp) -> Result<Fp, EccError> {
        self.validate(other)?;

        Ok(Fp {
            x: (&self.x + &other.x) % &self.p,
            p: self.p.clone(),
        })
    }

    /// Modular subtraction. Computed as x + (p - y) so the unsigned
    /// representation never underflows.
    ///
    /// ### Arguments
    ///
    /// * `other` - Right operand, under the same modulus
    pub fn sub(&self, other: &Fp) -> Result<Fp, EccError> {
        self.validate(other)?;

        Ok(Fp {
            x: (&self.x + (&self.p - &other.x)) % &self.p,
            p: self.p.clone(),
        })
    }

    /// Modular multiplication
    ///
    /// ### Arguments
    ///
    /// * `other` - Right operand, under the same modulus
    pub fn mul(&self, other: &Fp) -> Result<Fp, EccError> {
        self.validate(other)?;

        Ok(Fp {
            x: (&self.x * &other.x) % &self.p,
            p: self.p.clone(),
        })
    }

    /// Left value-shift: the underlying integer grows before reduction
    ///
    /// ### Arguments
    ///
    /// * `n` - Shift count
    pub fn shl(&self, n: usize) -> Fp {
        Fp {
            x: (&self.x << n) % &self.p,
            p: self.p.clone(),
        }
    }

    /// Right value-shift on the underlying integer
    ///
    /// ### Arguments
    ///
    /// * `n` - Shift count
    pub fn shr(&self, n: usize) -> Fp {
        Fp {
            x: &self.x >> n,
            p: self.p.clone(),
        }
    }

    /// Modular exponentiation by square-and-multiply. A negative exponent
    /// raises to the magnitude first and inverts the result, so `pow(-1)`
    /// is the multiplicative inverse. `pow(0, 0)` is 1.
    ///
    /// ### Arguments
    ///
    /// * `n` - Signed exponent
    pub fn pow(&self, n: &BigInt) -> Result<Fp, EccError> {
        if n.is_negative() {
            return self.pow(&-n)?.inverse();
        }

        Ok(Fp {
            x: self.x.modpow(n.magnitude(), &self.p),
            p: self.p.clone(),
        })
    }

    /// Multiplicative inverse via the classic extended Euclidean algorithm
    /// on (p, x). Zero and non-units have no inverse.
    pub fn inverse(&self) -> Result<Fp, EccError> {
        let p = BigInt::from(self.p.clone());

        let (mut a, mut b) = (p.clone(), BigInt::from(self.x.clone()));
        let (mut v, mut u) = (BigInt::zero(), BigInt::one());

        while !b.is_zero() {
            let q = &a / &b;

            let r = &a - &q * &b;
            a = b;
            b = r;

            let w = &v - &q * &u;
            v = u;
            u = w;
        }

        if !a.is_one() {
            return Err(EccError::NotInvertible);
        }

        Ok(Fp {
            x: v.mod_floor(&p).magnitude().clone(),
            p: self.p.clone(),
        })
    }

    /// Modular division: a * b^-1
    ///
    /// ### Arguments
    ///
    /// * `other` - Divisor, under the same modulus
    pub fn div(&self, other: &Fp) -> Result<Fp, EccError> {
        self.validate(other)?;
        self.mul(&other.inverse()?)
    }

    /// Checks that both operands live under the same modulus
    fn validate(&self, other: &Fp) -> Result<(), EccError> {
        if self.p != other.p {
            return Err(EccError::IncompatibleModulus);
        }

        Ok(())
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (mod {})", self.x, self.p)
    }
}


/*---- TESTS ----*/
