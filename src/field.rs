//! Arithmetic in the prime field ℤ/pℤ.
//!
//! Everything above this module works with non-negative `BigUint` values, but
//! subtractions (Lagrange denominators, Bézout coefficients, the additive
//! scheme's closing share) can go negative. Those paths compute in `BigInt`
//! and come back through [`normalize`], the single canonical sign-correction
//! point for the whole crate.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::SharingError;

/// Maps any integer, negative included, to its representative in `[0, p)`.
///
/// `BigInt`'s `%` keeps the sign of the dividend, so a plain remainder is not
/// a field element; this adds the modulus back when needed.
pub fn normalize(value: &BigInt, modulus: &BigUint) -> BigUint {
    let modulus = BigInt::from(modulus.clone());
    let mut residue = value % &modulus;
    if residue.sign() == Sign::Minus {
        residue += &modulus;
    }
    residue
        .to_biguint()
        .expect("residue is non-negative after adding the modulus")
}

/// Returns `b` in `[0, p)` with `value * b ≡ 1 (mod modulus)`.
///
/// Iterative extended Euclidean algorithm; the loop keeps explicit running
/// state so stack depth stays flat however large the modulus gets. The Bézout
/// coefficient is tracked in `BigInt` and normalized on the way out.
///
/// # Errors
/// Returns [`SharingError::NoInverse`] when `gcd(value, modulus) != 1`, which
/// for a prime modulus only happens when `value ≡ 0`.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Result<BigUint, SharingError> {
    let mut remainder = BigInt::from(value % modulus);
    let mut prev_remainder = BigInt::from(modulus.clone());
    // Bézout coefficients of `value`, one step apart
    let mut coefficient = BigInt::one();
    let mut prev_coefficient = BigInt::zero();

    while !remainder.is_zero() {
        let quotient = &prev_remainder / &remainder;

        let next = &prev_remainder - &quotient * &remainder;
        prev_remainder = remainder;
        remainder = next;

        let next = &prev_coefficient - &quotient * &coefficient;
        prev_coefficient = coefficient;
        coefficient = next;
    }

    if !prev_remainder.is_one() {
        return Err(SharingError::NoInverse {
            value: value.clone(),
            modulus: modulus.clone(),
        });
    }

    Ok(normalize(&prev_coefficient, modulus))
}
