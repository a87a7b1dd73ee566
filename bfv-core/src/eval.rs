//! Homomorphic evaluators over ciphertexts and plaintexts.
//!
//! Plaintext-ciphertext operations stay within `i128` for the parameter ranges this crate
//! accepts. Ciphertext-ciphertext multiplication tensors up to a degree-2 ciphertext first
//! (products on the order of `n * q^2`, rescaled by `t`), then relinearizes that back down to a
//! degree-1 ciphertext using the auxiliary-modulus [`crate::keys::EvalKey`] and
//! [`crate::bigmod::BigPoly`] arithmetic. The rescale multiplies by `t` before dividing by `q`,
//! which can overflow `i128` for large `n`/`q`/`t`; [`crate::primitives::poly::Poly::mul_scalar`]
//! reports that as [`crate::error::BfvError::IntegerOverflow`] rather than wrapping or panicking.

use crate::bigmod::BigPoly;
use crate::ciphertext::Ciphertext;
use crate::error::Result;
use crate::keys::EvalKey;
use crate::params::Params;
use crate::plaintext::Plaintext;
use crate::primitives::poly::Poly;
use crate::primitives::ring::{ring_add_mod, ring_add_no_mod, ring_mul_mod, ring_mul_no_mod};

/// Homomorphic addition of a plaintext into a ciphertext: `c0 += delta * m`.
pub fn add_plain(ct: &Ciphertext, pt: &Plaintext, params: &Params) -> Result<Ciphertext> {
    params.validate()?;
    let delta = i128::from(params.delta());
    let scaled = pt.0.mul_scalar(delta)?;
    let c0 = ring_add_mod(&ct.c0, &scaled, params.q, params.n);
    Ok(Ciphertext {
        c0,
        c1: ct.c1.clone(),
    })
}

/// Homomorphic multiplication of a ciphertext by a plaintext: `(c0*m, c1*m)`.
pub fn mul_plain(ct: &Ciphertext, pt: &Plaintext, params: &Params) -> Result<Ciphertext> {
    params.validate()?;
    let c0 = ring_mul_mod(&ct.c0, &pt.0, params.q, params.n)?;
    let c1 = ring_mul_mod(&ct.c1, &pt.0, params.q, params.n)?;
    Ok(Ciphertext { c0, c1 })
}

/// Homomorphic addition of two ciphertexts: coefficient-wise `(c0, c1)` sums, mod `q`.
pub fn add_cipher(lhs: &Ciphertext, rhs: &Ciphertext, params: &Params) -> Result<Ciphertext> {
    params.validate()?;
    let c0 = ring_add_mod(&lhs.c0, &rhs.c0, params.q, params.n);
    let c1 = ring_add_mod(&lhs.c1, &rhs.c1, params.q, params.n);
    Ok(Ciphertext { c0, c1 })
}

/// Homomorphic multiplication of two ciphertexts.
///
/// Tensors `lhs` and `rhs` into a degree-2 ciphertext `(d0, d1, d2)` scaled by `t/q`, then
/// relinearizes `d2` back onto the degree-1 basis using `eval_key`, matching the fresh-key
/// basis so the result decrypts under the same secret as its inputs.
pub fn mul_cipher(
    lhs: &Ciphertext,
    rhs: &Ciphertext,
    eval_key: &EvalKey,
    params: &Params,
) -> Result<Ciphertext> {
    params.validate()?;
    let n = params.n;
    let q = params.q;
    let t = i128::from(params.t);

    // Tensor product over Z (no modular reduction yet, so the t/q rescale below is exact).
    let d0_raw = ring_mul_no_mod(&lhs.c0, &rhs.c0, n)?;
    let d1_raw = ring_add_no_mod(
        &ring_mul_no_mod(&lhs.c0, &rhs.c1, n)?,
        &ring_mul_no_mod(&lhs.c1, &rhs.c0, n)?,
        n,
    );
    let d2_raw = ring_mul_no_mod(&lhs.c1, &rhs.c1, n)?;

    let rescale = |raw: &Poly| -> Result<Poly> {
        Ok(raw
            .mul_scalar(t)?
            .round_div_scalar(i128::from(q))?
            .coeff_mod(i128::from(q)))
    };
    let d0 = rescale(&d0_raw)?;
    let d1 = rescale(&d1_raw)?;
    let d2 = rescale(&d2_raw)?;

    // Relinearize d2 against the evaluation key under the auxiliary modulus Q = q * p, then
    // scale back down by 1/p and fold the result onto (d0, d1).
    let big_q = &eval_key.q_modulus;
    let p = big_q / num_bigint::BigInt::from(q);

    let d2_big = BigPoly::from_poly(&d2);
    let c0_term = d2_big
        .mul(&eval_key.b)
        .reduce_negacyclic(n)
        .round_div_scalar(&p)
        .coeff_mod(&num_bigint::BigInt::from(q))
        .narrow_mod_q(q)?;
    let c1_term = d2_big
        .mul(&eval_key.a)
        .reduce_negacyclic(n)
        .round_div_scalar(&p)
        .coeff_mod(&num_bigint::BigInt::from(q))
        .narrow_mod_q(q)?;

    let c0 = ring_add_mod(&d0, &c0_term, q, n);
    let c1 = ring_add_mod(&d1, &c1_term, q, n);

    Ok(Ciphertext { c0, c1 })
}
