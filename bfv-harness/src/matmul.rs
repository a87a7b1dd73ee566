//! Dense integer matrix multiplication under encryption, in two modes: one operand plaintext
//! (`ct * pt`) or both operands encrypted (`ct * ct`, which needs a relinearization key).

use rand::RngCore;
use rayon::prelude::*;
use tracing::{debug, info};

use bfv_core::{
    add_cipher, decrypt, encrypt, evaluate_keygen, keygen, mul_cipher, mul_plain, Ciphertext,
    EvalKey, Params, Plaintext,
};

/// Which operand of the product stays in cleartext.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// `A` stays plaintext; only `B` is encrypted. Each product term is a `mul_plain`.
    CipherTimesPlain,
    /// Both `A` and `B` are encrypted. Each product term is a `mul_cipher` with
    /// relinearization.
    CipherTimesCipher,
}

/// Computes `A * B mod t` over `dim x dim` integer matrices under encryption, returning the
/// decrypted product alongside the plaintext reference product for comparison.
///
/// Row/column products are independent ciphertexts, so the encrypted accumulation runs with
/// `rayon` across output cells.
pub fn run(
    a: &[Vec<i128>],
    b: &[Vec<i128>],
    mode: Mode,
    params: &Params,
    rng: &mut impl RngCore,
) -> Result<Vec<Vec<i128>>, bfv_core::BfvError> {
    params.validate()?;
    let dim = a.len();
    assert_eq!(b.len(), dim, "A and B must be square and the same size");

    info!(dim, mode = ?mode, "generating keys");
    let (sk, pk) = keygen(params, rng)?;
    let eval_key: Option<EvalKey> = match mode {
        Mode::CipherTimesCipher => {
            let q = i128::from(params.q);
            Some(evaluate_keygen(&sk, params, q * q, rng)?)
        }
        Mode::CipherTimesPlain => None,
    };

    debug!("encrypting operand B");
    let b_enc: Vec<Vec<Ciphertext>> = b
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| encrypt(&pk, &Plaintext::encode(v, params)?, params, rng))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let a_enc: Option<Vec<Vec<Ciphertext>>> = if matches!(mode, Mode::CipherTimesCipher) {
        debug!("encrypting operand A");
        Some(
            a.iter()
                .map(|row| {
                    row.iter()
                        .map(|&v| encrypt(&pk, &Plaintext::encode(v, params)?, params, rng))
                        .collect::<Result<Vec<_>, _>>()
                })
                .collect::<Result<Vec<_>, _>>()?,
        )
    } else {
        None
    };

    debug!("computing encrypted matrix product");
    let coords: Vec<(usize, usize)> = (0..dim).flat_map(|i| (0..dim).map(move |k| (i, k))).collect();
    let products: Result<Vec<Ciphertext>, bfv_core::BfvError> = coords
        .par_iter()
        .map(|&(i, k)| {
            let mut acc = Ciphertext::zero(params);
            for j in 0..dim {
                let term = match mode {
                    Mode::CipherTimesPlain => {
                        mul_plain(&b_enc[j][k], &Plaintext::encode(a[i][j], params)?, params)?
                    }
                    Mode::CipherTimesCipher => {
                        let a_enc = a_enc.as_ref().expect("populated for ct*ct mode");
                        mul_cipher(
                            &a_enc[i][j],
                            &b_enc[j][k],
                            eval_key.as_ref().expect("populated for ct*ct mode"),
                            params,
                        )?
                    }
                };
                acc = add_cipher(&acc, &term, params)?;
            }
            Ok(acc)
        })
        .collect();
    let products = products?;

    debug!("decrypting product matrix");
    let flat: Result<Vec<i128>, bfv_core::BfvError> = products
        .par_iter()
        .map(|ct| Ok(decrypt(&sk, ct, params)?.decode()))
        .collect();
    let flat = flat?;

    Ok(flat.chunks(dim).map(<[i128]>::to_vec).collect())
}

/// The plaintext reference product `A * B mod t`, for comparing against [`run`]'s output.
pub fn reference(a: &[Vec<i128>], b: &[Vec<i128>], t: i64) -> Vec<Vec<i128>> {
    let dim = a.len();
    let t = i128::from(t);
    (0..dim)
        .map(|i| {
            (0..dim)
                .map(|k| (0..dim).map(|j| a[i][j] * b[j][k]).sum::<i128>().rem_euclid(t))
                .collect()
        })
        .collect()
}
