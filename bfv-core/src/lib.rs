//! A from-scratch implementation of the Brakerski/Fan-Vercauteren (BFV) somewhat-homomorphic
//! encryption scheme over the power-of-two cyclotomic ring `R_q = Z_q[X]/(X^n + 1)`.
//!
//! The ring arithmetic is schoolbook (no NTT, no RNS decomposition): `n`, `q`, and `t` are
//! ordinary runtime values carried in [`Params`], not compile-time constants, so a single build
//! of this crate serves any parameter set a caller assembles.

pub mod bigmod;
pub mod ciphertext;
pub mod error;
pub mod eval;
pub mod keys;
pub mod params;
pub mod plaintext;
pub mod primitives;

pub use ciphertext::{decrypt, encrypt, Ciphertext};
pub use error::{BfvError, Result};
pub use eval::{add_cipher, add_plain, mul_cipher, mul_plain};
pub use keys::{evaluate_keygen, keygen, EvalKey, PublicKey, SecretKey};
pub use params::Params;
pub use plaintext::Plaintext;
