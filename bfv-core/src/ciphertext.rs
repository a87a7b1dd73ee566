//! Encryption and decryption.

use rand::RngCore;

use crate::error::Result;
use crate::keys::{PublicKey, SecretKey};
use crate::params::Params;
use crate::plaintext::Plaintext;
use crate::primitives::poly::Poly;
use crate::primitives::ring::{ring_add_mod, ring_mul_mod};
use crate::primitives::sample::{binary, normal};

/// A BFV ciphertext: a pair of ring elements `(c0, c1)` modulo `q`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    pub(crate) c0: Poly,
    pub(crate) c1: Poly,
}

impl Ciphertext {
    /// The trivial (unencrypted) encoding of zero: `c0 = c1 = 0`.
    ///
    /// Decrypts to zero under any secret key, so callers accumulating a sum of ciphertexts can
    /// use this as the identity without burning fresh randomness on an actual encryption.
    pub fn zero(params: &Params) -> Ciphertext {
        Ciphertext {
            c0: Poly::zero(params.n),
            c1: Poly::zero(params.n),
        }
    }
}

/// Encrypts `pt` under `pk`.
///
/// `c0 = b*u + e1 + delta*m`, `c1 = a*u + e2`, both reduced mod `f` and `q`, where
/// `delta = floor(q / t)`.
pub fn encrypt(
    pk: &PublicKey,
    pt: &Plaintext,
    params: &Params,
    rng: &mut impl RngCore,
) -> Result<Ciphertext> {
    params.validate()?;
    let n = params.n;
    let q = params.q;
    let delta = params.delta();

    let u = binary(n, rng);
    let e1 = normal(n, 0.0, 1.0, rng);
    let e2 = normal(n, 0.0, 1.0, rng);

    let scaled_message = pt.0.mul_scalar(delta.into())?;

    let b_u = ring_mul_mod(&pk.b, &u, q, n)?;
    let c0 = ring_add_mod(&ring_add_mod(&b_u, &e1, q, n), &scaled_message, q, n);

    let a_u = ring_mul_mod(&pk.a, &u, q, n)?;
    let c1 = ring_add_mod(&a_u, &e2, q, n);

    Ok(Ciphertext { c0, c1 })
}

/// Decrypts `ct` under `sk`.
///
/// Computes `m' = round((c0 + c1*s) mod f mod q * t / q) mod t`.
pub fn decrypt(sk: &SecretKey, ct: &Ciphertext, params: &Params) -> Result<Plaintext> {
    params.validate()?;
    let n = params.n;
    let q = params.q;
    let t = i128::from(params.t);

    let c1_s = ring_mul_mod(&ct.c1, &sk.s, q, n)?;
    let noisy = ring_add_mod(&ct.c0, &c1_s, q, n);

    let scaled = noisy.mul_scalar(t)?.round_div_scalar(i128::from(q))?;
    Ok(Plaintext(scaled.coeff_mod(t)))
}
