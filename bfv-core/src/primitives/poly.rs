//! Dense polynomial arithmetic over `Z`, with a fixed-capacity coefficient buffer.
//!
//! Coefficients are stored as `i128`, which keeps the tensor stage of ciphertext
//! multiplication (products up to roughly `n * q^2`) exact without a floating-point carrier.
//! The modulus `q` is an ordinary runtime value rather than a compile-time field type, so one
//! build serves any parameter set.

use derive_more::{AsRef, Index, IndexMut};
use itertools::iproduct;

use crate::error::{BfvError, Result};

#[cfg(test)]
mod test;

/// A dense polynomial with `i128` coefficients, indexed by degree.
///
/// The coefficient vector's length is the polynomial's capacity: indices at or above it cannot
/// be written ([`Poly::set_coeff`] returns [`BfvError::DimensionMismatch`]). Coefficients at
/// indices above the actual degree are zero; [`Poly::degree`] is the largest index holding a
/// nonzero coefficient (`0` for the zero polynomial).
#[derive(Clone, Debug, Default, AsRef, Index, IndexMut)]
pub struct Poly(Vec<i128>);

// Two polynomials compare equal when their coefficients agree up to the higher of their two
// degrees, regardless of how much unused capacity either one carries.
impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        let max_degree = self.degree().max(other.degree());
        (0..=max_degree).all(|i| self.coeff(i) == other.coeff(i))
    }
}

impl Eq for Poly {}

impl Poly {
    /// Returns the zero polynomial with the given capacity.
    pub fn zero(capacity: usize) -> Self {
        Poly(vec![0; capacity.max(1)])
    }

    /// Builds a polynomial directly from a coefficient vector. The vector's length becomes the
    /// polynomial's capacity.
    pub fn from_coeffs(coeffs: Vec<i128>) -> Self {
        Poly(coeffs)
    }

    /// The polynomial's capacity: one past the highest index that can be written.
    pub fn capacity(&self) -> usize {
        self.0.len()
    }

    /// The degree: the largest index with a nonzero coefficient, or `0` for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.0.iter().rposition(|&c| c != 0).unwrap_or(0)
    }

    /// Returns `true` if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Returns the coefficient at `i`, or `0` if `i` is beyond the capacity.
    pub fn coeff(&self, i: usize) -> i128 {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// Writes `v` at index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`BfvError::DimensionMismatch`] if `i` is beyond the polynomial's capacity.
    pub fn set_coeff(&mut self, i: usize, v: i128) -> Result<()> {
        let cap = self.0.len();
        self.0.get_mut(i).map(|c| *c = v).ok_or_else(|| {
            BfvError::DimensionMismatch(format!("index {i} is out of capacity {cap}"))
        })
    }

    /// Returns a slice over the raw coefficients, including trailing zeroes.
    pub fn coeffs(&self) -> &[i128] {
        &self.0
    }

    /// Returns a mutable slice over the raw coefficients.
    pub fn coeffs_mut(&mut self) -> &mut [i128] {
        &mut self.0
    }

    /// Coefficient-wise sum. The result's capacity is the larger of the two operands'.
    pub fn add(&self, rhs: &Poly) -> Poly {
        let cap = self.capacity().max(rhs.capacity());
        let mut out = vec![0i128; cap];
        for (i, c) in out.iter_mut().enumerate() {
            *c = self.coeff(i) + rhs.coeff(i);
        }
        Poly(out)
    }

    /// Coefficient-wise negation.
    pub fn neg(&self) -> Poly {
        Poly(self.0.iter().map(|c| -c).collect())
    }

    /// Coefficient-wise difference `self - rhs`.
    pub fn sub(&self, rhs: &Poly) -> Poly {
        self.add(&rhs.neg())
    }

    /// Coefficient-wise multiplication by the scalar `k`. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BfvError::IntegerOverflow`] if a coefficient would not fit `i128`.
    pub fn mul_scalar(&self, k: i128) -> Result<Poly> {
        self.0
            .iter()
            .map(|c| c.checked_mul(k).ok_or_else(|| BfvError::IntegerOverflow(format!("{c} * {k}"))))
            .collect::<Result<Vec<i128>>>()
            .map(Poly)
    }

    /// Convolution: `self * rhs`, without any modular reduction.
    ///
    /// Iterates only over the nonzero positions of both operands, so sparse polynomials (such as
    /// the cyclotomic modulus, or freshly sampled binary/error polynomials) multiply in time
    /// proportional to the number of nonzero terms rather than `capacity^2`.
    ///
    /// # Errors
    ///
    /// Returns [`BfvError::IntegerOverflow`] if an accumulated coefficient would not fit `i128`.
    pub fn mul(&self, rhs: &Poly) -> Result<Poly> {
        let out_len = self.capacity() + rhs.capacity();
        let mut out = vec![0i128; out_len.max(1)];

        let lhs_nonzero: Vec<(usize, i128)> = self
            .0
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(i, &c)| (i, c))
            .collect();
        let rhs_nonzero: Vec<(usize, i128)> = rhs
            .0
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(i, &c)| (i, c))
            .collect();

        for ((i, a), (j, b)) in iproduct!(lhs_nonzero.iter(), rhs_nonzero.iter()) {
            let term = a
                .checked_mul(*b)
                .ok_or_else(|| BfvError::IntegerOverflow(format!("{a} * {b}")))?;
            let slot = &mut out[i + j];
            *slot = slot
                .checked_add(term)
                .ok_or_else(|| BfvError::IntegerOverflow(format!("accumulating x^{}", i + j)))?;
        }

        Ok(Poly(out))
    }

    /// Euclidean polynomial division: returns `(quotient, remainder)` such that
    /// `self == quotient * den + remainder` and `remainder.degree() < den.degree()`.
    ///
    /// Only used with `den` monic (leading coefficient `1`), which is always the case for
    /// `den = X^n + 1`; the division is then exact over the integers.
    ///
    /// # Errors
    ///
    /// Returns [`BfvError::InvalidParameter`] if `den` is the zero polynomial, or if its leading
    /// coefficient is not `1` or `-1`.
    pub fn divmod(&self, den: &Poly) -> Result<(Poly, Poly)> {
        let den_deg = den.degree();
        let den_lead = den.coeff(den_deg);
        if den.is_zero() {
            return Err(BfvError::InvalidParameter("division by the zero polynomial".into()));
        }
        if den_lead != 1 && den_lead != -1 {
            return Err(BfvError::InvalidParameter(
                "divmod only supports a monic divisor".into(),
            ));
        }

        let mut remainder = self.0.clone();
        let quotient_len = remainder.len().saturating_sub(den_deg);
        let mut quotient = vec![0i128; quotient_len.max(1)];

        for i in (den_deg..remainder.len()).rev() {
            let lead = remainder[i];
            if lead == 0 {
                continue;
            }
            let coeff = lead / den_lead;
            let shift = i - den_deg;
            if shift < quotient.len() {
                quotient[shift] = coeff;
            }
            for (k, &dc) in den.0.iter().enumerate() {
                if dc == 0 {
                    continue;
                }
                remainder[shift + k] -= coeff * dc;
            }
        }

        remainder.truncate(den_deg.max(1));
        Ok((Poly(quotient), Poly(remainder)))
    }

    /// Coefficient-wise reduction modulo `m`, with representatives in `[0, m)`.
    ///
    /// Coefficients are conceptually "rounded to the nearest integer, then reduced with
    /// positive-residue semantics"; with an exact `i128` carrier the rounding step is a no-op,
    /// so only the positive-residue reduction happens here.
    pub fn coeff_mod(&self, m: i128) -> Poly {
        debug_assert!(m > 0);
        Poly(self.0.iter().map(|&c| c.rem_euclid(m)).collect())
    }

    /// Coefficient-wise `round(c / d)`, with ties rounded away from zero.
    ///
    /// # Errors
    ///
    /// Returns [`BfvError::InvalidParameter`] if `d` is zero.
    pub fn round_div_scalar(&self, d: i128) -> Result<Poly> {
        if d == 0 {
            return Err(BfvError::InvalidParameter("division by zero".into()));
        }
        Ok(Poly(self.0.iter().map(|&c| round_div_i128(c, d)).collect()))
    }
}

/// `round(num / den)`, ties away from zero. `den` must be nonzero.
pub fn round_div_i128(num: i128, den: i128) -> i128 {
    debug_assert!(den != 0);
    let sign = if (num < 0) != (den < 0) { -1 } else { 1 };
    let num_abs = num.unsigned_abs();
    let den_abs = den.unsigned_abs();
    let rounded = (num_abs + den_abs / 2) / den_abs;
    sign * (rounded as i128)
}
