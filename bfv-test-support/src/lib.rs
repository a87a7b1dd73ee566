//! Deterministic fixtures shared by `bfv-core`'s test suite and `bfv-harness`.
//!
//! Every fixture here is seeded, never reaching for the operating system's entropy source, so
//! that a test failure is reproducible from the seed alone.

use bfv_core::primitives::sample::Entropy;
use bfv_core::Params;

/// A small ring dimension used across unit tests and properties where the exact parameter
/// values don't matter, only that they're internally consistent.
pub fn toy_params() -> Params {
    Params::new(16, 1 << 28, 1 << 8).expect("toy parameters are internally consistent")
}

/// The parameter set used by the matrix-multiplication scenario: `n=16, q=2^32, t=2^8`.
pub fn matmul_params() -> Params {
    Params::new(16, 1 << 32, 1 << 8).expect("matmul parameters are internally consistent")
}

/// The parameter set used by the grayscale-averaging scenario: `n=16, q=2^30, t=769`.
///
/// `t = 769` is prime, so every nonzero residue (in particular `3`) is invertible mod `t`.
pub fn grayscale_params() -> Params {
    Params::new(16, 1 << 30, 769).expect("grayscale parameters are internally consistent")
}

/// The parameter set used by the Sobel edge-detection scenario: `n=16, q=2^30, t=2^10`.
pub fn sobel_params() -> Params {
    Params::new(16, 1 << 30, 1 << 10).expect("sobel parameters are internally consistent")
}

/// A fixed, well-known seed for reproducible test and demonstration runs.
pub const FIXED_SEED: u64 = 42;

/// Builds a deterministic entropy source from [`FIXED_SEED`].
pub fn fixed_entropy() -> Entropy {
    Entropy::from_seed(FIXED_SEED)
}

/// Builds a deterministic entropy source from an arbitrary seed, for tests that need several
/// independent-but-reproducible streams.
pub fn entropy_from_seed(seed: u64) -> Entropy {
    Entropy::from_seed(seed)
}
