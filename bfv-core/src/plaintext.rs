//! Plaintext encoding: integers modulo `t`, carried as constant ring elements.

use crate::error::Result;
use crate::params::Params;
use crate::primitives::poly::Poly;

/// A message encoded as a ring element with coefficients reduced modulo `t`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plaintext(pub(crate) Poly);

impl Plaintext {
    /// Encodes a single integer `m` as the constant polynomial `m mod t`.
    pub fn encode(m: i128, params: &Params) -> Result<Self> {
        params.validate()?;
        let mut poly = Poly::zero(params.n);
        poly.set_coeff(0, m.rem_euclid(i128::from(params.t)))?;
        Ok(Plaintext(poly))
    }

    /// Encodes a vector of coefficients (a batch of up to `n` messages packed into one ring
    /// element), each reduced modulo `t`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BfvError::DimensionMismatch`] if `coeffs` has more than `n`
    /// entries.
    pub fn encode_coeffs(coeffs: &[i128], params: &Params) -> Result<Self> {
        params.validate()?;
        let mut poly = Poly::zero(params.n);
        for (i, &c) in coeffs.iter().enumerate() {
            poly.set_coeff(i, c.rem_euclid(i128::from(params.t)))?;
        }
        Ok(Plaintext(poly))
    }

    /// Recovers the constant term as a plain integer in `[0, t)`.
    pub fn decode(&self) -> i128 {
        self.0.coeff(0)
    }

    /// Recovers all `n` coefficients in `[0, t)`.
    pub fn decode_coeffs(&self) -> &[i128] {
        self.0.coeffs()
    }
}
