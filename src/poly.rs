//! The secret-bearing polynomial behind a threshold split.
//!
//! Built inside [`crate::ThresholdScheme::split`] and dropped as soon as the
//! shares are evaluated; nothing outside the crate ever sees one.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

/// A polynomial of degree `threshold - 1` over ℤ/pℤ, coefficients stored
/// lowest degree first with the secret as the constant term.
pub(crate) struct Polynomial {
    coefficients: Vec<BigUint>,
    prime: BigUint,
}

impl Polynomial {
    /// Hides `secret` as the constant term and draws the remaining
    /// `threshold - 1` coefficients uniformly from `[0, p)`.
    pub(crate) fn random<R: Rng>(
        secret: &BigUint,
        threshold: usize,
        prime: &BigUint,
        rng: &mut R,
    ) -> Self {
        let mut coefficients = Vec::with_capacity(threshold);
        coefficients.push(secret.clone());
        for _ in 1..threshold {
            coefficients.push(rng.gen_biguint_below(prime));
        }

        Polynomial {
            coefficients,
            prime: prime.clone(),
        }
    }

    /// Fixed-coefficient construction, lowest degree first.
    pub(crate) fn from_coefficients(coefficients: Vec<BigUint>, prime: BigUint) -> Self {
        Polynomial {
            coefficients,
            prime,
        }
    }

    /// Evaluates the polynomial at `x` in the field.
    ///
    /// The running power of `x` is reduced after every multiplication so
    /// intermediate values never outgrow the modulus.
    pub(crate) fn evaluate(&self, x: u32) -> BigUint {
        let x = BigUint::from(x);
        let mut sum = BigUint::zero();
        let mut power = BigUint::one();

        for coefficient in &self.coefficients {
            sum = (sum + coefficient * &power) % &self.prime;
            power = (&power * &x) % &self.prime;
        }

        sum
    }
}
