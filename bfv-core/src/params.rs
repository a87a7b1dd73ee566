//! Runtime scheme parameters.
//!
//! `n`, `q`, `t` and `p` are ordinary runtime values: keygen, encryption and the evaluation-key
//! generator all take them as arguments, and out-of-range combinations are a runtime
//! [`BfvError::InvalidParameter`], not a type error. This lets one build of the crate serve any
//! parameter set a caller assembles, rather than fixing the ring dimension at compile time.

use crate::error::{BfvError, Result};

/// The ring dimension, ciphertext modulus, and plaintext modulus for a BFV session.
///
/// `f(X) = X^n + 1` is never materialized as a polynomial: reduction by it is the direct
/// negacyclic fold in [`crate::primitives::ring`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// The ring dimension. Must be a positive power of two.
    pub n: usize,
    /// The ciphertext modulus.
    pub q: i64,
    /// The plaintext modulus. Must be strictly less than `q`.
    pub t: i64,
}

impl Params {
    /// Builds a new parameter set, validating it against the permitted ranges.
    pub fn new(n: usize, q: i64, t: i64) -> Result<Self> {
        let params = Params { n, q, t };
        params.validate()?;
        Ok(params)
    }

    /// Checks that `n`, `q`, and `t` satisfy the invariants every core operation relies on.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 || !self.n.is_power_of_two() {
            return Err(BfvError::InvalidParameter(format!(
                "n = {} is not a positive power of two",
                self.n
            )));
        }
        if self.q <= 1 {
            return Err(BfvError::InvalidParameter(format!(
                "q = {} must be greater than 1",
                self.q
            )));
        }
        if self.t < 2 || self.t >= self.q {
            return Err(BfvError::InvalidParameter(format!(
                "t = {} must satisfy 2 <= t < q = {}",
                self.t, self.q
            )));
        }
        Ok(())
    }

    /// The plaintext scaling factor `Δ = ⌊q/t⌋`.
    pub fn delta(&self) -> i64 {
        self.q / self.t
    }

    /// Validates an auxiliary modulus `p` for relinearization. `p` must satisfy `p >= q^2`.
    pub fn validate_aux_modulus(&self, p: i128) -> Result<()> {
        let q = i128::from(self.q);
        if p < q * q {
            return Err(BfvError::InvalidParameter(format!(
                "p = {p} must be at least q^2 = {}",
                q * q
            )));
        }
        Ok(())
    }
}
