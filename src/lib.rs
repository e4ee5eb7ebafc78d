//! Elliptic curve primitives over prime fields.
//!
//! The crate provides modular arithmetic in F_p, group arithmetic on short
//! Weierstrass curves `y^2 = x^3 + ax + b (mod p)` in affine and Jacobian
//! coordinates, two scalar multiplication strategies (variable-time
//! double-and-add and the regular Montgomery ladder), the EC-DSA and
//! EC-GOST signature schemes, and a registry of named domain parameters.
//!
//! Hashing, randomness beyond nonce drawing, and signature or point
//! encodings are left to the caller: signatures are plain `(r, s)` integer
//! pairs and digests enter as integers.

pub mod signature;
pub mod utils;

pub use crate::signature::{FixedNonce, NonceSource, OsNonce};
pub use crate::utils::ecc_curves::{group, Curve, Group};
pub use crate::utils::ecc_points::{Coords, Mode, Point};
pub use crate::utils::field::Fp;
pub use crate::utils::EccError;
