//! The error taxonomy raised at the core's boundaries.
//!
//! Every fallible operation returns [`Result<T, BfvError>`]; there are no partial-success states
//! and no sentinel return values.
//!
//! Noise overflow (decryption returning the wrong value because accumulated noise exceeded
//! `q/(2t)`) is deliberately not a variant here: the core cannot detect it, and picking
//! parameters that keep the noise budget is the caller's responsibility.

/// Errors raised by ring arithmetic, key generation, encryption, decryption, and the homomorphic
/// evaluators.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BfvError {
    /// A parameter combination is invalid for the requested operation.
    ///
    /// Raised at keygen/encrypt/`mul_cipher` entry; fatal to the operation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An intermediate product would exceed the implementation's integer width.
    ///
    /// Raised at `ring_mul_no_mod`/the tensor step; fatal.
    #[error("integer overflow while computing {0}")]
    IntegerOverflow(String),

    /// A polynomial passed in has capacity smaller than the ring dimension requires.
    ///
    /// Fatal; raised before the offending operation reads or writes out of bounds.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}

/// A convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, BfvError>;
