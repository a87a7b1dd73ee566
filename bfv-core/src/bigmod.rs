//! Arbitrary-precision ring arithmetic, used only where the relinearization modulus
//! `Q = q * p` (with `p >= q^2`) makes products too wide for `i128`.
//!
//! [`crate::keys::evaluate_keygen`] and the relinearization step of [`crate::eval::mul_cipher`]
//! both need this wider modulus; rather than widen the main coefficient type everywhere, only
//! this corner lifts to `num_bigint::BigInt`.

use num_bigint::{BigInt, RandBigInt};
use num_traits::{Signed, ToPrimitive, Zero};
use rand::RngCore;

use crate::error::{BfvError, Result};
use crate::primitives::poly::Poly;

/// A dense polynomial with arbitrary-precision coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigPoly(Vec<BigInt>);

impl BigPoly {
    /// Returns the zero polynomial with the given capacity.
    pub fn zero(capacity: usize) -> Self {
        BigPoly(vec![BigInt::zero(); capacity.max(1)])
    }

    /// Lifts an `i128`-coefficient [`Poly`] into [`BigPoly`].
    pub fn from_poly(p: &Poly) -> Self {
        BigPoly(p.coeffs().iter().map(|&c| BigInt::from(c)).collect())
    }

    /// The polynomial's capacity.
    pub fn capacity(&self) -> usize {
        self.0.len()
    }

    /// Returns the coefficient at `i`, or zero if `i` is beyond the capacity.
    pub fn coeff(&self, i: usize) -> BigInt {
        self.0.get(i).cloned().unwrap_or_else(BigInt::zero)
    }

    /// Coefficient-wise sum.
    pub fn add(&self, rhs: &BigPoly) -> BigPoly {
        let cap = self.capacity().max(rhs.capacity());
        BigPoly((0..cap).map(|i| self.coeff(i) + rhs.coeff(i)).collect())
    }

    /// Coefficient-wise negation.
    pub fn neg(&self) -> BigPoly {
        BigPoly(self.0.iter().map(|c| -c).collect())
    }

    /// Coefficient-wise multiplication by a scalar.
    pub fn mul_scalar(&self, k: &BigInt) -> BigPoly {
        BigPoly(self.0.iter().map(|c| c * k).collect())
    }

    /// Convolution `self * rhs`, without reduction.
    pub fn mul(&self, rhs: &BigPoly) -> BigPoly {
        let out_len = self.capacity() + rhs.capacity();
        let mut out = vec![BigInt::zero(); out_len.max(1)];
        for (i, a) in self.0.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.0.iter().enumerate() {
                if b.is_zero() {
                    continue;
                }
                out[i + j] += a * b;
            }
        }
        BigPoly(out)
    }

    /// Reduces modulo `X^n + 1` via the negacyclic fold, mirroring
    /// [`crate::primitives::ring::reduce_negacyclic`].
    pub fn reduce_negacyclic(&self, n: usize) -> BigPoly {
        let mut out = vec![BigInt::zero(); n];
        for (i, c) in self.0.iter().enumerate() {
            if c.is_zero() {
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
        BigPoly(out)
    }

    /// Coefficient-wise reduction modulo `m`, with representatives in `[0, m)`.
    pub fn coeff_mod(&self, m: &BigInt) -> BigPoly {
        BigPoly(
            self.0
                .iter()
                .map(|c| {
                    let r = c % m;
                    if r.is_negative() {
                        r + m
                    } else {
                        r
                    }
                })
                .collect(),
        )
    }

    /// Coefficient-wise `round(c / d)`, ties away from zero.
    pub fn round_div_scalar(&self, d: &BigInt) -> BigPoly {
        BigPoly(self.0.iter().map(|c| round_div_bigint(c, d)).collect())
    }

    /// Reduces every coefficient modulo `q` and narrows it back down to an `i128`-coefficient
    /// [`Poly`].
    ///
    /// # Errors
    ///
    /// Returns [`BfvError::IntegerOverflow`] if a reduced coefficient (always in `[0, q)`)
    /// somehow does not fit `i128`, which would indicate `q` itself does not fit `i128`.
    pub fn narrow_mod_q(&self, q: i64) -> Result<Poly> {
        let qb = BigInt::from(q);
        let mut out = Poly::zero(self.capacity());
        for (i, c) in self.0.iter().enumerate() {
            let r = c % &qb;
            let r = if r.is_negative() { r + &qb } else { r };
            let v = r
                .to_i128()
                .ok_or_else(|| BfvError::IntegerOverflow("narrowing mod q to i128".into()))?;
            out.set_coeff(i, v)
                .expect("narrow_mod_q preserves the source capacity");
        }
        Ok(out)
    }
}

/// `round(num / den)`, ties away from zero. `den` must be nonzero.
fn round_div_bigint(num: &BigInt, den: &BigInt) -> BigInt {
    debug_assert!(!den.is_zero());
    let sign: BigInt = if num.is_negative() != den.is_negative() {
        BigInt::from(-1)
    } else {
        BigInt::from(1)
    };
    let num_abs = num.abs();
    let den_abs = den.abs();
    let rounded = (&num_abs * 2 + &den_abs) / (&den_abs * 2);
    sign * rounded
}

/// Samples a ring element whose first `n` coefficients are each independently uniform over
/// `[0, modulus)`.
pub fn uniform_big(n: usize, modulus: &BigInt, rng: &mut impl RngCore) -> BigPoly {
    let mut out = vec![BigInt::zero(); n];
    for slot in out.iter_mut() {
        *slot = rng.gen_bigint_range(&BigInt::zero(), modulus);
    }
    BigPoly(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::primitives::sample::Entropy;

    #[test]
    fn narrow_mod_q_round_trips_small_values() {
        let p = Poly::from_coeffs(vec![3, -3, 100]);
        let big = BigPoly::from_poly(&p);
        let narrowed = big.narrow_mod_q(97).unwrap();
        assert_eq!(narrowed.coeff(0), 3);
        assert_eq!(narrowed.coeff(1), 94);
        assert_eq!(narrowed.coeff(2), 3);
    }

    #[test]
    fn round_div_matches_i128_semantics() {
        use crate::primitives::poly::round_div_i128;
        for (num, den) in [(3i128, 2i128), (-3, 2), (5, 2), (-5, 2)] {
            let via_big = round_div_bigint(&BigInt::from(num), &BigInt::from(den));
            assert_eq!(via_big, BigInt::from(round_div_i128(num, den)));
        }
    }

    #[test]
    fn uniform_big_stays_in_range() {
        let mut rng = Entropy::from_seed(11);
        let modulus = BigInt::from(1) << 100;
        let p = uniform_big(16, &modulus, &mut rng);
        for i in 0..16 {
            let c = p.coeff(i);
            assert!(c >= BigInt::zero() && c < modulus);
        }
    }
}
