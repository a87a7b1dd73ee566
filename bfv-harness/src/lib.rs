//! Demonstration harnesses over [`bfv_core`]: grayscale channel averaging, Sobel edge
//! detection, and encrypted matrix multiplication.
//!
//! None of this crate is part of the core: every harness encrypts its inputs, calls into
//! `bfv_core`'s evaluators, and decrypts the result, including a small amount of
//! post-decryption correction that only makes sense for a specific demonstration (`grayscale`'s
//! centering, `sobel`'s sign reflection) and so has no business living in the core itself.

pub mod grayscale;
pub mod inverse;
pub mod matmul;
pub mod sobel;

/// How a harness should treat pixels that fall outside the image when a sliding-window
/// operator (only [`sobel`] uses one) runs near the border.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BorderPolicy {
    /// Leave border output pixels at zero, matching the reference harness.
    Zero,
    /// Clamp out-of-range coordinates to the nearest edge pixel before sampling.
    Clamp,
}
