//! Basic operations used to implement key generation, encryption, and the homomorphic
//! evaluators.
//!
//! Multiplication is schoolbook convolution rather than an NTT-accelerated ring; batching
//! multiple ciphertexts through an NTT transform is left for a future accelerated backend.

pub mod poly;
pub mod ring;
pub mod sample;
