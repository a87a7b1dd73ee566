//! Modular inverse, needed to express division by a small constant (the grayscale harness's
//! `1/3`) as a `mul_plain` by a precomputed residue.

/// Extended Euclidean algorithm: returns `(gcd, x, y)` such that `a*x + b*y = gcd`.
fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        return (a, 1, 0);
    }
    let (gcd, x1, y1) = extended_gcd(b, a % b);
    (gcd, y1, x1 - (a / b) * y1)
}

/// The modular inverse of `a` mod `m`, or `None` if `a` and `m` are not coprime.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (gcd, x, _) = extended_gcd(a, m);
    if gcd != 1 {
        return None;
    }
    Some(((x % m) + m) % m)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inverts_three_mod_a_prime() {
        let inv = mod_inverse(3, 769).unwrap();
        assert_eq!((3 * inv) % 769, 1);
    }

    #[test]
    fn rejects_non_coprime_inputs() {
        assert_eq!(mod_inverse(3, 9), None);
    }
}
