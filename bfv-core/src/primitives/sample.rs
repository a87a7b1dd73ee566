//! Random polynomial samplers.
//!
//! Nothing here reaches for a hidden, process-wide generator: every sampler takes an explicit
//! `&mut impl RngCore`, and [`Entropy`] gives callers a seedable, deterministic one for tests
//! and reproducible demos.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::primitives::poly::Poly;

/// A seedable entropy source.
///
/// Wraps [`ChaCha8Rng`] so that bit-for-bit reproducibility given a fixed seed holds without
/// relying on any particular caller-supplied `RngCore` implementation.
pub struct Entropy(ChaCha8Rng);

impl Entropy {
    /// Builds a deterministic entropy source from a 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        Entropy(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Builds an entropy source seeded from the operating system's RNG.
    pub fn from_os_rng() -> Self {
        Entropy(ChaCha8Rng::from_entropy())
    }
}

impl RngCore for Entropy {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Samples a ring element whose first `n` coefficients are each an independent fair
/// Bernoulli `{0, 1}` draw.
pub fn binary(n: usize, rng: &mut impl RngCore) -> Poly {
    let mut poly = Poly::zero(n);
    for i in 0..n {
        let bit = i128::from(rng.gen_range(0..2u8));
        poly.set_coeff(i, bit).expect("capacity n holds index < n");
    }
    poly
}

/// Samples a ring element whose first `n` coefficients are each independently uniform over
/// `[0, m)`.
pub fn uniform(n: usize, m: i64, rng: &mut impl RngCore) -> Poly {
    let mut poly = Poly::zero(n);
    for i in 0..n {
        let v = rng.gen_range(0..m);
        poly.set_coeff(i, i128::from(v))
            .expect("capacity n holds index < n");
    }
    poly
}

/// Samples a ring element whose first `n` coefficients are each independently drawn from a
/// discrete Gaussian obtained by rounding a real Gaussian `N(mu, sigma)` (Box-Muller).
///
/// # Deviation from a true discrete Gaussian
///
/// Rounding a continuous Box-Muller sample does not produce the same distribution as directly
/// sampling a discrete Gaussian over the integers: the rounded distribution is slightly more
/// concentrated near the rounding boundaries. This is accepted rather than implementing a true
/// discrete Gaussian sampler.
pub fn normal(n: usize, mu: f64, sigma: f64, rng: &mut impl RngCore) -> Poly {
    let distribution = Normal::new(mu, sigma).expect("mu and sigma describe a valid Gaussian");
    let mut poly = Poly::zero(n);
    for i in 0..n {
        let sample: f64 = distribution.sample(rng);
        poly.set_coeff(i, sample.round() as i128)
            .expect("capacity n holds index < n");
    }
    poly
}
