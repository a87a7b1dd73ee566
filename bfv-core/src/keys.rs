//! Key generation: the secret/public key pair, and the relinearization (evaluation) key.

use num_bigint::BigInt;
use rand::RngCore;

use crate::bigmod::{uniform_big, BigPoly};
use crate::error::Result;
use crate::params::Params;
use crate::primitives::poly::Poly;
use crate::primitives::ring::{ring_add_mod, ring_mul_no_mod};
use crate::primitives::sample::{binary, normal, uniform};

/// The secret key: a ring element drawn from the binary distribution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKey {
    pub(crate) s: Poly,
}

/// The public key `(b, a)` with `b = -(a*s + e) mod q, mod f`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) b: Poly,
    pub(crate) a: Poly,
}

/// The relinearization key `(b', a')`, ring elements modulo `Q = q * p`, encoding an
/// encryption of `p * s^2` under the same secret `s`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalKey {
    pub(crate) b: BigPoly,
    pub(crate) a: BigPoly,
    pub(crate) q_modulus: BigInt,
}

/// Generates a fresh `(secret key, public key)` pair for the given parameters.
pub fn keygen(params: &Params, rng: &mut impl RngCore) -> Result<(SecretKey, PublicKey)> {
    params.validate()?;
    let n = params.n;
    let q = params.q;

    let s = binary(n, rng);
    let a = uniform(n, q, rng);
    let e = normal(n, 0.0, 1.0, rng);

    let neg_a_s = ring_mul_no_mod(&a.neg(), &s, n)?.coeff_mod(i128::from(q));
    let b = ring_add_mod(&neg_a_s, &e.neg(), q, n);

    Ok((SecretKey { s }, PublicKey { b, a }))
}

/// Generates the relinearization key for a secret key, under the auxiliary modulus `p`.
///
/// # Errors
///
/// Returns [`crate::error::BfvError::InvalidParameter`] if `p < q^2`.
pub fn evaluate_keygen(
    sk: &SecretKey,
    params: &Params,
    p: i128,
    rng: &mut impl RngCore,
) -> Result<EvalKey> {
    params.validate()?;
    params.validate_aux_modulus(p)?;

    let n = params.n;
    let q_big = BigInt::from(params.q);
    let p_big = BigInt::from(p);
    let q_modulus = &q_big * &p_big;

    let a_prime = uniform_big(n, &q_modulus, rng);
    let e_prime = normal(n, 0.0, 1.0, rng);

    // t2 = sk * sk, reduced only by f (not by q): coefficients are at most n, far below i128.
    let t2 = ring_mul_no_mod(&sk.s, &sk.s, n)?;
    let scaled = BigPoly::from_poly(&t2).mul_scalar(&p_big);

    let neg_a_prime_s = a_prime.neg().mul(&BigPoly::from_poly(&sk.s)).reduce_negacyclic(n);
    let neg_e_prime = BigPoly::from_poly(&e_prime.neg());

    let b_prime = neg_a_prime_s
        .add(&neg_e_prime)
        .add(&scaled)
        .coeff_mod(&q_modulus);

    Ok(EvalKey {
        b: b_prime,
        a: a_prime,
        q_modulus,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::primitives::sample::Entropy;

    #[test]
    fn keygen_produces_ring_elements_in_range() {
        let params = Params::new(16, 1 << 28, 1 << 8).unwrap();
        let mut rng = Entropy::from_seed(42);
        let (sk, pk) = keygen(&params, &mut rng).unwrap();

        assert_eq!(sk.s.capacity(), params.n);
        for &c in pk.b.coeffs() {
            assert!((0..i128::from(params.q)).contains(&c));
        }
        for &c in pk.a.coeffs() {
            assert!((0..i128::from(params.q)).contains(&c));
        }
    }

    #[test]
    fn keygen_is_deterministic_given_a_seed() {
        let params = Params::new(16, 1 << 28, 1 << 8).unwrap();
        let (sk1, pk1) = keygen(&params, &mut Entropy::from_seed(42)).unwrap();
        let (sk2, pk2) = keygen(&params, &mut Entropy::from_seed(42)).unwrap();
        assert_eq!(sk1, sk2);
        assert_eq!(pk1, pk2);
    }

    #[test]
    fn evaluate_keygen_rejects_small_p() {
        let params = Params::new(16, 1 << 28, 1 << 8).unwrap();
        let mut rng = Entropy::from_seed(42);
        let (sk, _pk) = keygen(&params, &mut rng).unwrap();
        let q = i128::from(params.q);
        assert!(evaluate_keygen(&sk, &params, q * q - 1, &mut rng).is_err());
        assert!(evaluate_keygen(&sk, &params, q * q, &mut rng).is_ok());
    }
}
