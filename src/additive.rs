//! Additive secret splitting, the full-quorum baseline.
//!
//! Structurally different contract from the threshold scheme: every share is
//! required for reconstruction, and any proper subset is a uniformly random
//! value carrying no information about the secret. The modulus is any value
//! larger than the secret's range; no prime is needed.

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::Zero;
use rand::Rng;

use crate::SharingError;
use crate::field::normalize;

/// Parameters of an additive split: the working modulus `k` and how many
/// shares to produce.
#[derive(Debug)]
pub struct AdditiveScheme {
    modulus: BigUint,
    total_shares: usize,
}

impl AdditiveScheme {
    /// Creates an additive scheme over `modulus` producing `total_shares`
    /// shares.
    ///
    /// # Errors
    /// [`SharingError::InvalidShareCount`] when `total_shares` is zero and
    /// [`SharingError::ModulusTooSmall`] for a zero modulus.
    pub fn new(modulus: BigUint, total_shares: usize) -> Result<Self, SharingError> {
        if total_shares == 0 {
            return Err(SharingError::InvalidShareCount);
        }
        if modulus.is_zero() {
            return Err(SharingError::ModulusTooSmall);
        }

        Ok(AdditiveScheme {
            modulus,
            total_shares,
        })
    }

    /// Splits `secret` into shares that sum to it modulo `k`.
    ///
    /// The first `n - 1` shares are uniform draws from `[0, k)`; the closing
    /// share is whatever brings the sum back to the secret. Secrets at or
    /// above the modulus are reduced into `[0, k)` first.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigUint;
    /// use secret_split::AdditiveScheme;
    ///
    /// let scheme = AdditiveScheme::new(BigUint::from(1000u32), 4).unwrap();
    /// let shares = scheme.split(&BigUint::from(954u32), &mut rand::thread_rng());
    /// assert_eq!(shares.len(), 4);
    /// assert_eq!(scheme.merge(&shares), BigUint::from(954u32));
    /// ```
    pub fn split<R: Rng>(&self, secret: &BigUint, rng: &mut R) -> Vec<BigUint> {
        let mut shares: Vec<BigUint> = (1..self.total_shares)
            .map(|_| rng.gen_biguint_below(&self.modulus))
            .collect();

        let drawn: BigUint = shares.iter().sum();
        let closing = BigInt::from(secret % &self.modulus) - BigInt::from(drawn);
        shares.push(normalize(&closing, &self.modulus));

        shares
    }

    /// Sums the shares back into the secret.
    ///
    /// Requires every share from the split; a partial sum is just a random
    /// field element, not an approximation of the secret.
    pub fn merge(&self, shares: &[BigUint]) -> BigUint {
        shares
            .iter()
            .fold(BigUint::zero(), |sum, share| (sum + share) % &self.modulus)
    }
}
