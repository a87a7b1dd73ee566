//! Ring arithmetic over `R_q = Z_q[X]/(X^n + 1)`.
//!
//! `f(X) = X^n + 1` is never materialized and divided against generically in the hot path:
//! [`reduce_negacyclic`] applies the defining identity `X^n ≡ -1` directly. [`Poly::divmod`]
//! against an explicit `X^n + 1` is kept around and cross-checked against the fold in debug
//! builds.

use crate::error::Result;
use crate::primitives::poly::Poly;

/// Builds the explicit polynomial `X^n + 1`, used only for the debug cross-check against
/// [`reduce_negacyclic`] and by callers that want a generic `divmod`-based reduction.
pub fn cyclotomic_modulus(n: usize) -> Poly {
    let mut f = Poly::zero(n + 1);
    f.set_coeff(0, 1).expect("capacity n + 1 holds index 0");
    f.set_coeff(n, 1).expect("capacity n + 1 holds index n");
    f
}

/// Reduces `p` modulo `X^n + 1` by folding coefficients at or above degree `n` onto their
/// negacyclic counterparts: `X^n ≡ -1`, so the coefficient of `X^{qn+r}` contributes `(-1)^q`
/// times itself to the coefficient of `X^r`.
pub fn reduce_negacyclic(p: &Poly, n: usize) -> Poly {
    let mut out = vec![0i128; n];
    for (i, &c) in p.coeffs().iter().enumerate() {
        if c == 0 {
            continue;
        }
        let q = i / n;
        let r = i % n;
        if q % 2 == 0 {
            out[r] += c;
        } else {
            out[r] -= c;
        }
    }
    let folded = Poly::from_coeffs(out);

    debug_assert_eq!(
        folded,
        p.divmod(&cyclotomic_modulus(n))
            .expect("cyclotomic modulus is monic")
            .1,
        "negacyclic fold must agree with generic Euclidean reduction"
    );

    folded
}

/// `(x + y) mod f`, with coefficients further reduced mod `m`.
pub fn ring_add_mod(x: &Poly, y: &Poly, m: i64, n: usize) -> Poly {
    reduce_negacyclic(&x.add(y), n).coeff_mod(i128::from(m))
}

/// `(x * y) mod f`, with coefficients further reduced mod `m`.
///
/// # Errors
///
/// Returns [`BfvError::IntegerOverflow`](crate::error::BfvError::IntegerOverflow) if the
/// convolution overflows `i128`.
pub fn ring_mul_mod(x: &Poly, y: &Poly, m: i64, n: usize) -> Result<Poly> {
    let product = x.mul(y)?;
    Ok(reduce_negacyclic(&product, n).coeff_mod(i128::from(m)))
}

/// `(x + y) mod f`, without any coefficient reduction. Preserves magnitude for a later scaled
/// rounding step.
pub fn ring_add_no_mod(x: &Poly, y: &Poly, n: usize) -> Poly {
    reduce_negacyclic(&x.add(y), n)
}

/// `(x * y) mod f`, without any coefficient reduction.
///
/// # Errors
///
/// Returns [`BfvError::IntegerOverflow`](crate::error::BfvError::IntegerOverflow) if the
/// convolution overflows `i128`.
pub fn ring_mul_no_mod(x: &Poly, y: &Poly, n: usize) -> Result<Poly> {
    let product = x.mul(y)?;
    Ok(reduce_negacyclic(&product, n))
}
