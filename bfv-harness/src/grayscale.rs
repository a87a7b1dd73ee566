//! Grayscale conversion by averaging three encrypted channels: `(R + G + B) * 3⁻¹ mod t`.

use rand::RngCore;
use rayon::prelude::*;
use tracing::{debug, info};

use bfv_core::{add_cipher, decrypt, encrypt, keygen, mul_plain, Ciphertext, Params, Plaintext};

use crate::inverse::mod_inverse;

/// Converts a buffer of `(R, G, B)` pixels to grayscale entirely under encryption, returning
/// one decrypted intensity per pixel.
///
/// `params.t` must be coprime with `3` so that `1/3` has a residue mod `t`.
pub fn run(
    pixels: &[(u8, u8, u8)],
    params: &Params,
    rng: &mut impl RngCore,
) -> Result<Vec<u8>, bfv_core::BfvError> {
    params.validate()?;
    let inv3 = mod_inverse(3, params.t).ok_or_else(|| {
        bfv_core::BfvError::InvalidParameter(format!(
            "t = {} is not coprime with 3; grayscale averaging needs 1/3 mod t",
            params.t
        ))
    })?;
    let inv3_plain = Plaintext::encode(i128::from(inv3), params)?;

    info!(pixels = pixels.len(), t = params.t, "generating keys");
    let (sk, pk) = keygen(params, rng)?;

    debug!("encrypting channels");
    let mut encrypted = Vec::with_capacity(pixels.len());
    for &(r, g, b) in pixels {
        let ct_r = encrypt(&pk, &Plaintext::encode(i128::from(r), params)?, params, rng)?;
        let ct_g = encrypt(&pk, &Plaintext::encode(i128::from(g), params)?, params, rng)?;
        let ct_b = encrypt(&pk, &Plaintext::encode(i128::from(b), params)?, params, rng)?;
        encrypted.push((ct_r, ct_g, ct_b));
    }

    debug!("averaging channels under encryption");
    let averaged: Result<Vec<Ciphertext>, bfv_core::BfvError> = encrypted
        .par_iter()
        .map(|(ct_r, ct_g, ct_b)| {
            let sum = add_cipher(&add_cipher(ct_r, ct_g, params)?, ct_b, params)?;
            mul_plain(&sum, &inv3_plain, params)
        })
        .collect();
    let averaged = averaged?;

    debug!("decrypting and centering");
    let t = params.t;
    let threshold_low = (t + 2) / 3;
    let threshold_high = (2 * t + 2) / 3;
    averaged
        .par_iter()
        .map(|ct| {
            let raw = decrypt(&sk, ct, params)?.decode();
            let mut value = raw;
            if value >= i128::from(threshold_high) {
                value -= i128::from(threshold_high);
            } else if value >= i128::from(threshold_low) {
                value -= i128::from(threshold_low);
            }
            Ok(value.clamp(0, 255) as u8)
        })
        .collect()
}
