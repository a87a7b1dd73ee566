//! Unit tests for dense polynomial arithmetic.

use super::*;

fn poly(coeffs: &[i128]) -> Poly {
    Poly::from_coeffs(coeffs.to_vec())
}

#[test]
fn zero_has_degree_zero() {
    assert_eq!(Poly::zero(8).degree(), 0);
    assert!(Poly::zero(8).is_zero());
}

#[test]
fn set_coeff_rejects_out_of_capacity() {
    let mut p = Poly::zero(4);
    assert!(p.set_coeff(3, 1).is_ok());
    assert!(matches!(
        p.set_coeff(4, 1),
        Err(BfvError::DimensionMismatch(_))
    ));
}

#[test]
fn degree_is_highest_nonzero_index() {
    let p = poly(&[1, 0, 3, 0]);
    assert_eq!(p.degree(), 2);
}

#[test]
fn add_sums_coefficients() {
    let a = poly(&[1, 2, 3]);
    let b = poly(&[10, 20]);
    let sum = a.add(&b);
    assert_eq!(sum.coeff(0), 11);
    assert_eq!(sum.coeff(1), 22);
    assert_eq!(sum.coeff(2), 3);
}

#[test]
fn add_cancels_leading_term() {
    let a = poly(&[1, 5]);
    let b = poly(&[1, -5]);
    assert_eq!(a.add(&b).degree(), 0);
}

#[test]
fn mul_scalar_by_zero_zeroes_every_coefficient() {
    let a = poly(&[1, 2, 3]);
    assert!(a.mul_scalar(0).unwrap().is_zero());
}

#[test]
fn mul_scalar_detects_overflow() {
    let a = poly(&[i128::MAX]);
    assert!(matches!(a.mul_scalar(2), Err(BfvError::IntegerOverflow(_))));
}

#[test]
fn mul_is_convolution() {
    // (1 + x) * (1 + x) = 1 + 2x + x^2
    let a = poly(&[1, 1]);
    let b = poly(&[1, 1]);
    let prod = a.mul(&b).unwrap();
    assert_eq!(prod.coeff(0), 1);
    assert_eq!(prod.coeff(1), 2);
    assert_eq!(prod.coeff(2), 1);
}

#[test]
fn mul_detects_overflow() {
    let a = poly(&[i128::MAX]);
    let b = poly(&[2]);
    assert!(matches!(a.mul(&b), Err(BfvError::IntegerOverflow(_))));
}

#[test]
fn divmod_against_monic_modulus() {
    // x^2 + 1 divided by x + 1 (monic).
    let mut num = Poly::zero(3);
    num.set_coeff(0, 1).unwrap();
    num.set_coeff(2, 1).unwrap();
    let mut den = Poly::zero(2);
    den.set_coeff(0, 1).unwrap();
    den.set_coeff(1, 1).unwrap();

    let (q, r) = num.divmod(&den).unwrap();
    // (x^2 + 1) = (x - 1)(x + 1) + 2
    assert_eq!(q.coeff(0), -1);
    assert_eq!(q.coeff(1), 1);
    assert_eq!(r.coeff(0), 2);
    assert_eq!(r.degree(), 0);
}

#[test]
fn coeff_mod_produces_positive_residues() {
    let p = poly(&[-1, 5, -9]);
    let reduced = p.coeff_mod(4);
    assert_eq!(reduced.coeff(0), 3);
    assert_eq!(reduced.coeff(1), 1);
    assert_eq!(reduced.coeff(2), 3);
}

#[test]
fn round_div_scalar_rounds_half_away_from_zero() {
    let p = poly(&[3, -3, 5, -5]);
    let divided = p.round_div_scalar(2).unwrap();
    assert_eq!(divided.coeff(0), 2); // 1.5 -> 2
    assert_eq!(divided.coeff(1), -2); // -1.5 -> -2
    assert_eq!(divided.coeff(2), 3); // 2.5 -> 3
    assert_eq!(divided.coeff(3), -3); // -2.5 -> -3
}

#[test]
fn round_div_scalar_rejects_zero_divisor() {
    let p = poly(&[1]);
    assert!(p.round_div_scalar(0).is_err());
}
