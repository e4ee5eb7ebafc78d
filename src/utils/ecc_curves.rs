//! Curve descriptors, domain parameters and the named-curve registry.
//!
//! A `Curve` is the coefficient tuple of y^2 = x^3 + ax + b over F_p and a
//! `Group` adds the base point G with its subgroup order q. Construction
//! validates nothing; the registry entries are standard parameter sets and
//! user-supplied ones can be checked after the fact with `Group::validate`.
//!
//! NIST and X9.62 parameters carry their FIPS 186 names, the GOST R 34.10
//! sets the names from RFC 4357 and RFC 7836; every entry is also reachable
//! through its dotted OID.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::trace;

use crate::utils::ecc_points::Point;
use crate::utils::EccError;


/*---- STRUCTS ----*/

/// An elliptic curve in short Weierstrass form
///
/// p = 0 is a legacy sentinel for symbolic coefficient printing; points
/// cannot be built on such a curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    pub a: BigUint,
    pub b: BigUint,
    pub p: BigUint,
}

/// Domain parameters: a curve, a base point G and its subgroup order q
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub curve: Curve,
    pub x: BigUint,
    pub y: BigUint,
    pub q: BigUint,
}


/*---- IMPLEMENTATIONS ----*/

impl Curve {
    /// Builds a curve descriptor
    ///
    /// ### Arguments
    ///
    /// * `a` - Coefficient of the linear term
    /// * `b` - Constant term
    /// * `p` - Field modulus
    pub fn new(a: &BigUint, b: &BigUint, p: &BigUint) -> Curve {
        Curve {
            a: a.clone(),
            b: b.clone(),
            p: p.clone(),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y^2 = x^3 + {}x + {}", self.a, self.b)?;

        if !self.p.is_zero() {
            write!(f, " (mod {})", self.p)?;
        }

        Ok(())
    }
}

impl Group {
    /// Builds a parameter set from raw integers
    ///
    /// ### Arguments
    ///
    /// * `a`, `b`, `p` - Curve coefficients and modulus
    /// * `x`, `y` - Base point G
    /// * `q` - Subgroup order of G
    pub fn new(
        a: &BigUint,
        b: &BigUint,
        p: &BigUint,
        x: &BigUint,
        y: &BigUint,
        q: &BigUint,
    ) -> Group {
        Group {
            curve: Curve::new(a, b, p),
            x: x.clone(),
            y: y.clone(),
            q: q.clone(),
        }
    }

    /// The base point G as an affine point
    pub fn generator(&self) -> Result<Point, EccError> {
        Point::affine(&self.curve, &self.x, &self.y)
    }

    /// Checks that G satisfies the curve equation and that q annihilates
    /// it. Registry entries are trusted and skip this; run it on
    /// user-supplied parameters before use.
    pub fn validate(&self) -> Result<(), EccError> {
        let g = self.generator()?;

        if !g.is_on_curve()? {
            return Err(EccError::NotAPoint);
        }

        if !g.to_jacobian()?.mul(&self.q)?.is_zero() {
            return Err(EccError::InvalidScalar("q does not annihilate G"));
        }

        Ok(())
    }
}


/*-------- REGISTRY --------*/


/**
 * Looks up a named parameter set. Every set answers to its test name,
 * its standard name and its OID; see the module header for provenance.
 *
 * `name` - Any registered alias
 */
pub fn group(name: &str) -> Result<Group, EccError> {
    trace!("registry lookup for group `{}`", name);

    match name {
        "ecdsa-test-192-a" | "P-192" | "secp192r1" | "prime192v1" | "1.2.840.10045.3.1.1" => {
            Ok(nist_p192())
        }

        "P-224" | "secp224r1" | "1.3.132.0.33" => Ok(nist_p224()),

        "ecdsa-test-239-a" | "prime239v1" | "1.2.840.10045.3.1.4" => Ok(x962_prime239v1()),

        "ecdsa-test-256-a" | "P-256" | "secp256r1" | "prime256v1" | "1.2.840.10045.3.1.7" => {
            Ok(nist_p256())
        }

        "P-384" | "secp384r1" | "1.3.132.0.34" => Ok(nist_p384()),

        "P-521" | "secp521r1" | "1.3.132.0.35" => Ok(nist_p521()),

        "ecgost-test-a" | "GostR3410-2001-Test" | "1.2.643.2.2.35.0" => Ok(gost_test_256()),

        "ecgost-cryptopro-a" | "GostR3410-2001-CryptoPro-A" | "1.2.643.2.2.35.1"
        | "1.2.643.2.2.36.0" => Ok(gost_cryptopro_a()),

        "ecgost-cryptopro-b" | "GostR3410-2001-CryptoPro-B" | "1.2.643.2.2.35.2" => {
            Ok(gost_cryptopro_b())
        }

        "ecgost-cryptopro-c" | "GostR3410-2001-CryptoPro-C" | "1.2.643.2.2.35.3"
        | "1.2.643.2.2.36.1" => Ok(gost_cryptopro_c()),

        "ecgost-test-b" | "GostR3410-2012-512-Test" | "1.2.643.7.1.2.1.2.0" => {
            Ok(gost_test_512())
        }

        "ecgost-2012-512-a" | "GostR3410-2012-512-A" | "1.2.643.7.1.2.1.2.1" => {
            Ok(gost_2012_512_a())
        }

        "ecgost-2012-512-b" | "GostR3410-2012-512-B" | "1.2.643.7.1.2.1.2.2" => {
            Ok(gost_2012_512_b())
        }

        _ => Err(EccError::UnknownGroup(name.to_string())),
    }
}

/// Decodes an inlined hexadecimal parameter constant
fn uint(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("malformed curve constant")
}

fn nist_p192() -> Group {
    let a = uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFC");
    let b = uint("64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1");
    let p = uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF");
    let x = uint("188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012");
    let y = uint("07192B95FFC8DA78631011ED6B24CDD573F977A11E794811");
    let q = uint("FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831");

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn nist_p224() -> Group {
    let a = uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE");
    let b = uint("B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4");
    let p = uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001");
    let x = uint("B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21");
    let y = uint("BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34");
    let q = uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D");

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn x962_prime239v1() -> Group {
    let a = uint("7FFFFFFFFFFFFFFFFFFFFFFF7FFFFFFFFFFF8000000000007FFFFFFFFFFC");
    let b = uint("6B016C3BDCF18941D0D654921475CA71A9DB2FB27D1D37796185C2942C0A");
    let p = uint("7FFFFFFFFFFFFFFFFFFFFFFF7FFFFFFFFFFF8000000000007FFFFFFFFFFF");
    let x = uint("0FFA963CDCA8816CCC33B8642BEDF905C3D358573D3F27FBBD3B3CB9AAAF");
    let y = uint("7DEBE8E4E90A5DAE6E4054CA530BA04654B36818CE226B39FCCB7B02F1AE");
    let q = uint("7FFFFFFFFFFFFFFFFFFFFFFF7FFFFF9E5E9A9F5D9071FBD1522688909D0B");

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn nist_p256() -> Group {
    let a = uint("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC");
    let b = uint("5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B");
    let p = uint("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF");
    let x = uint("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296");
    let y = uint("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5");
    let q = uint("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551");

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn nist_p384() -> Group {
    let a = uint(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF00000000\
         00000000FFFFFFFC",
    );
    let b = uint(
        "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875AC656398D8A2ED19D\
         2A85C8EDD3EC2AEF",
    );
    let p = uint(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF00000000\
         00000000FFFFFFFF",
    );
    let x = uint(
        "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A385502F25DBF55296C\
         3A545E3872760AB7",
    );
    let y = uint(
        "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C00A60B1CE1D7E819D\
         7A431D7C90EA0E5F",
    );
    let q = uint(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77A\
         ECEC196ACCC52973",
    );

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn nist_p521() -> Group {
    let a = uint(
        "1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
         FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC",
    );
    let b = uint(
        "051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF109E\
         156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F00",
    );
    let p = uint(
        "1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
         FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    );
    let x = uint(
        "C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D3DB\
         AA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5BD66",
    );
    let y = uint(
        "11839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E662\
         C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD16650",
    );
    let q = uint(
        "1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
         A51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386409",
    );

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn gost_test_256() -> Group {
    let a = uint("7");
    let b = uint("5FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E");
    let p = uint("8000000000000000000000000000000000000000000000000000000000000431");
    let x = uint("2");
    let y = uint("8E2A8A0E65147D4BD6316030E16D19C85C97F0A9CA267122B96ABBCEA7E8FC8");
    let q = uint("8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3");

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn gost_cryptopro_a() -> Group {
    let a = uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD94");
    let b = uint("A6");
    let p = uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97");
    let x = uint("1");
    let y = uint("8D91E471E0989CDA27DF505A453F2B7635294F2DDF23E3B122ACC99C9E9F1E14");
    let q = uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF6C611070995AD10045841B09B761B893");

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn gost_cryptopro_b() -> Group {
    let a = uint("8000000000000000000000000000000000000000000000000000000000000C96");
    let b = uint("3E1AF419A269A5F866A7D3C25C3DF80AE979259373FF2B182F49D4CE7E1BBC8B");
    let p = uint("8000000000000000000000000000000000000000000000000000000000000C99");
    let x = uint("1");
    let y = uint("3FA8124359F96680B83D1C3EB2C070E5C545C9858D03ECFB744BF8D717717EFC");
    let q = uint("800000000000000000000000000000015F700CFFF1A624E5E497161BCC8A198F");

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn gost_cryptopro_c() -> Group {
    let a = uint("9B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D7598");
    let b = uint("805A");
    let p = uint("9B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D759B");
    let x = uint("0");
    let y = uint("41ECE55743711A8C3CBF3783CD08C0EE4D4DC440D4641A8F366E550DFDB3BB67");
    let q = uint("9B9F605F5A858107AB1EC85E6B41C8AA582CA3511EDDFB74F02F3A6598980BB9");

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn gost_test_512() -> Group {
    let a = uint("7");
    let b = uint(
        "1CFF0806A31116DA29D8CFA54E57EB748BC5F377E49400FDD788B649ECA1AC4361834013B2AD7322\
         480A89CA58E0CF74BC9E540C2ADD6897FAD0A3084F302ADC",
    );
    let p = uint(
        "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15DF1D852741AF4704A\
         0458047E80E4546D35B8336FAC224DD81664BBF528BE6373",
    );
    let x = uint(
        "24D19CC64572EE30F396BF6EBBFD7A6C5213B3B3D7057CC825F91093A68CD762FD60611262CD838D\
         C6B60AA7EEE804E28BC849977FAC33B4B530F1B120248A9A",
    );
    let y = uint(
        "2BB312A43BD2CE6E0D020613C857ACDDCFBF061E91E5F2C3F32447C259F39B2C83AB156D77F1496B\
         F7EB3351E1EE4E43DC1A18B91B24640B6DBB92CB1ADD371E",
    );
    let q = uint(
        "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15DA82F2D7ECB1DBAC7\
         19905C5EECC423F1D86E25EDBE23C595D644AAF187E6E6DF",
    );

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn gost_2012_512_a() -> Group {
    let a = uint(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
         FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC4",
    );
    let b = uint(
        "E8C2505DEDFC86DDC1BD0B2B6667F1DA34B82574761CB0E879BD081CFD0B6265EE3CB090F30D2761\
         4CB4574010DA90DD862EF9D4EBEE4761503190785A71C760",
    );
    let p = uint(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
         FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7",
    );
    let x = uint("3");
    let y = uint(
        "7503CFE87A836AE3A61B8816E25450E6CE5E1C93ACF1ABC1778064FDCBEFA921DF1626BE4FD036E9\
         3D75E6A50E3A41E98028FE5FC235F5B889A589CB5215F2A4",
    );
    let q = uint(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF27E69532F48D8911\
         6FF22B8D4E0560609B4B38ABFAD2B85DCACDB1411F10B275",
    );

    Group::new(&a, &b, &p, &x, &y, &q)
}

fn gost_2012_512_b() -> Group {
    let a = uint(
        "8000000000000000000000000000000000000000000000000000000000000000000000000000000\
         000000000000000000000000000000000000000000000006C",
    );
    let b = uint(
        "687D1B459DC841457E3E06CF6F5E2517B97C7D614AF138BCBF85DC806C4B289F3E965D2DB1416D21\
         7F8B276FAD1AB69C50F78BEE1FA3106EFB8CCBC7C5140116",
    );
    let p = uint(
        "8000000000000000000000000000000000000000000000000000000000000000000000000000000\
         000000000000000000000000000000000000000000000006F",
    );
    let x = uint("2");
    let y = uint(
        "1A8F7EDA389B094C2C071E3647A8940F3C123B697578C213BE6DD9E6C8EC7335DCB228FD1EDF4A39\
         152CBCAAF8C0398828041055F94CEEEC7E21340780FE41BD",
    );
    let q = uint(
        "8000000000000000000000000000000000000000000000000000000000000001\
         49A1EC142565A545ACFDB77BD9D40CFA8B996712101BEA0EC6346C54374F25BD",
    );

    Group::new(&a, &b, &p, &x, &y, &q)
}


/*---- TESTS ----*/
