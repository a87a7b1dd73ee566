//! Sobel edge detection over an encrypted grayscale tile: each output pixel is a sum of
//! `mul_plain` products against the two 3x3 Sobel kernels.

use rand::RngCore;
use rayon::prelude::*;
use tracing::{debug, info};

use bfv_core::{add_cipher, decrypt, encrypt, keygen, mul_plain, Ciphertext, Params, Plaintext};

use crate::BorderPolicy;

const SOBEL_GX: [[i128; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_GY: [[i128; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Applies the Sobel operator to an encrypted `width x height` grayscale tile, returning one
/// decrypted gradient estimate per pixel (negative gradients reflect into `[0, t/2]` on
/// decryption, since the core only returns canonical positive residues mod `t`).
///
/// `border` selects how the outermost ring of pixels, whose 3x3 neighborhood runs off the
/// tile, is handled: [`BorderPolicy::Zero`] leaves it at zero (matching a reference
/// implementation that only fills interior pixels); [`BorderPolicy::Clamp`] instead clamps
/// out-of-range neighbor coordinates to the nearest edge pixel and computes a real gradient
/// there too.
pub fn run(
    gray: &[u8],
    width: usize,
    height: usize,
    border: BorderPolicy,
    params: &Params,
    rng: &mut impl RngCore,
) -> Result<Vec<u8>, bfv_core::BfvError> {
    params.validate()?;
    assert_eq!(gray.len(), width * height, "gray buffer must be width * height");

    info!(width, height, t = params.t, "generating keys");
    let (sk, pk) = keygen(params, rng)?;

    debug!("encrypting tile");
    let mut encrypted = Vec::with_capacity(gray.len());
    for &pixel in gray {
        encrypted.push(encrypt(&pk, &Plaintext::encode(i128::from(pixel), params)?, params, rng)?);
    }

    let is_border = |x: usize, y: usize| x == 0 || y == 0 || x == width - 1 || y == height - 1;

    let clamped_index = |x: i64, y: i64| -> usize {
        let cx = x.clamp(0, width as i64 - 1) as usize;
        let cy = y.clamp(0, height as i64 - 1) as usize;
        cy * width + cx
    };

    let coords: Vec<(usize, usize)> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .collect();

    debug!("applying sobel kernels under encryption");
    let results: Result<Vec<Ciphertext>, bfv_core::BfvError> = coords
        .par_iter()
        .map(|&(x, y)| {
            if border == BorderPolicy::Zero && is_border(x, y) {
                return Ok(Ciphertext::zero(params));
            }

            let mut gx = Ciphertext::zero(params);
            let mut gy = Ciphertext::zero(params);
            for (ky, row) in SOBEL_GX.iter().enumerate() {
                for (kx, &coeff_gx) in row.iter().enumerate() {
                    let coeff_gy = SOBEL_GY[ky][kx];
                    if coeff_gx == 0 && coeff_gy == 0 {
                        continue;
                    }
                    let idx = clamped_index(x as i64 + kx as i64 - 1, y as i64 + ky as i64 - 1);
                    let pixel = &encrypted[idx];
                    if coeff_gx != 0 {
                        let term = mul_plain(pixel, &Plaintext::encode(coeff_gx, params)?, params)?;
                        gx = add_cipher(&gx, &term, params)?;
                    }
                    if coeff_gy != 0 {
                        let term = mul_plain(pixel, &Plaintext::encode(coeff_gy, params)?, params)?;
                        gy = add_cipher(&gy, &term, params)?;
                    }
                }
            }
            add_cipher(&gx, &gy, params)
        })
        .collect();
    let results = results?;

    debug!("decrypting and reflecting negative gradients");
    let t = params.t;
    results
        .par_iter()
        .map(|ct| {
            let raw = decrypt(&sk, ct, params)?.decode();
            let mut value = raw;
            if value > i128::from(t) / 2 {
                value = i128::from(t) - value;
            }
            Ok(value.clamp(0, 255) as u8)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use bfv_test_support::{fixed_entropy, sobel_params};

    fn flat_gradient(width: usize, height: usize) -> Vec<u8> {
        (0..height)
            .flat_map(|y| (0..width).map(move |x| ((x + y) % 256) as u8))
            .collect()
    }

    #[test]
    fn border_pixels_are_zero_under_zero_policy() {
        let params = sobel_params();
        let mut rng = fixed_entropy();
        let (w, h) = (5, 5);
        let gray = flat_gradient(w, h);

        let result = run(&gray, w, h, BorderPolicy::Zero, &params, &mut rng).unwrap();
        assert_eq!(result[0], 0);
        assert_eq!(result[w - 1], 0);
        assert_eq!(result[(h - 1) * w], 0);
    }

    #[test]
    fn detects_a_sharp_vertical_edge() {
        let params = sobel_params();
        let mut rng = fixed_entropy();
        let (w, h) = (5, 5);
        let mut gray = vec![0u8; w * h];
        for y in 0..h {
            for x in 2..w {
                gray[y * w + x] = 255;
            }
        }

        let result = run(&gray, w, h, BorderPolicy::Zero, &params, &mut rng).unwrap();
        assert!(result[2 * w + 2] > 0, "expected a nonzero gradient at the edge column");
    }
}
