//! Threshold secret sharing over a prime field.
//!
//! A secret is split into n shares such that any t of them reconstruct it
//! exactly, but fewer reveal nothing. Splitting hides the secret as the
//! constant term of a random polynomial of degree t-1 over ℤ/pℤ;
//! reconstruction is exact Lagrange interpolation at x = 0, with division
//! done by modular inverse rather than floating point. Based on Adi Shamir's
//! paper "How to Share a Secret" (Communications of the ACM, 1979).
//!
//! [`additive::AdditiveScheme`] is the full-quorum baseline: all shares
//! required, no prime involved.
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand::Rng;
use thiserror::Error;

pub mod additive;
pub mod field;
mod poly;
pub mod source;

pub use additive::AdditiveScheme;
pub use source::PrimeSource;

use poly::Polynomial;

/// These are errors that can occur during secret sharing operations
#[derive(Error, Debug)]
pub enum SharingError {
    #[error("threshold t must be in this range: 0 < t ≤ n")]
    InvalidThreshold,
    #[error("at least one share must be produced")]
    InvalidShareCount,
    #[error("secret must be smaller than the prime modulus")]
    SecretTooLarge,
    #[error("modulus must exceed the number of shares")]
    ModulusTooSmall,

    /// Duplicate share indices found during reconstruction
    #[error("duplicate share indices found")]
    DuplicateIndex,

    /// A required modular inverse does not exist. Unreachable from
    /// reconstruction once duplicate indices are ruled out, unless the
    /// modulus was not prime after all.
    #[error("no modular inverse for {value} mod {modulus}")]
    NoInverse { value: BigUint, modulus: BigUint },
}

/// A single share of a split secret, representing a point on the polynomial
#[derive(Clone, Debug, PartialEq)]
pub struct Share {
    /// The x-coordinate of the polynomial point (share index, 1-based)
    pub index: u32,
    /// The y-coordinate of the polynomial point (share value, in `[0, p)`)
    pub value: BigUint,
}

/// Split-side parameters of a threshold scheme: how many shares exist and
/// how many are needed to reconstruct.
///
/// The prime modulus is chosen per split, not per scheme, so that a caller
/// may either bring one or have one generated to fit the secret.
#[derive(Debug)]
pub struct ThresholdScheme {
    threshold: usize,
    total_shares: usize,
}

impl ThresholdScheme {
    /// Creates a threshold scheme issuing `total_shares` shares of which any
    /// `threshold` reconstruct the secret.
    ///
    /// # Errors
    /// [`SharingError::InvalidThreshold`] unless `1 <= threshold <= total_shares`.
    ///
    /// # Example
    /// ```
    /// use secret_split::ThresholdScheme;
    ///
    /// let scheme = ThresholdScheme::new(3, 5).unwrap();
    /// assert!(ThresholdScheme::new(6, 5).is_err());
    /// ```
    pub fn new(threshold: usize, total_shares: usize) -> Result<Self, SharingError> {
        if threshold == 0 || threshold > total_shares {
            return Err(SharingError::InvalidThreshold);
        }

        Ok(ThresholdScheme {
            threshold,
            total_shares,
        })
    }

    /// Splits a secret into `total_shares` shares, indices `1..=n`.
    ///
    /// When `prime` is `None`, one strictly greater than both the secret and
    /// the share count is requested from the [`PrimeSource`] backed by `rng`.
    /// The prime actually used is returned alongside the shares and is
    /// required for reconstruction; it cannot be recovered from the shares
    /// alone.
    ///
    /// A supplied modulus is trusted to be prime; that contract stays with
    /// the caller.
    ///
    /// # Errors
    /// With a supplied prime, [`SharingError::SecretTooLarge`] when
    /// `secret >= p` and [`SharingError::ModulusTooSmall`] when `p <= n`.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigUint;
    /// use secret_split::ThresholdScheme;
    ///
    /// let scheme = ThresholdScheme::new(3, 5).unwrap();
    /// let secret = BigUint::from(123u32);
    /// let (shares, prime) = scheme
    ///     .split(&secret, Some(BigUint::from(257u32)), &mut rand::thread_rng())
    ///     .unwrap();
    ///
    /// assert_eq!(shares.len(), 5);
    /// assert_eq!(ThresholdScheme::merge(&shares[0..3], &prime).unwrap(), secret);
    /// ```
    pub fn split<R: Rng>(
        &self,
        secret: &BigUint,
        prime: Option<BigUint>,
        rng: &mut R,
    ) -> Result<(Vec<Share>, BigUint), SharingError> {
        let count = BigUint::from(self.total_shares);
        let prime = match prime {
            Some(prime) => {
                if *secret >= prime {
                    return Err(SharingError::SecretTooLarge);
                }
                if prime <= count {
                    return Err(SharingError::ModulusTooSmall);
                }
                prime
            }
            None => rng.prime_above(secret.max(&count)),
        };

        let polynomial = Polynomial::random(secret, self.threshold, &prime, rng);
        let shares = (1..=self.total_shares)
            .map(|x| Share {
                index: x as u32,
                value: polynomial.evaluate(x as u32),
            })
            .collect();

        Ok((shares, prime))
    }

    /// Reconstructs the secret from shares of one split via Lagrange
    /// interpolation at x = 0.
    ///
    /// Every supplied share participates; neither their order nor which
    /// sufficient subset was chosen affects the result. This function does
    /// not know the threshold the shares were split with and cannot check
    /// sufficiency: fewer than `threshold` shares yield a determinate but
    /// incorrect integer, not an error. Supplying enough shares is the
    /// caller's responsibility.
    ///
    /// # Errors
    /// [`SharingError::DuplicateIndex`] when two shares carry the same index.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigUint;
    /// use secret_split::{Share, ThresholdScheme};
    ///
    /// let prime = BigUint::from(1523u32);
    /// let shares = vec![
    ///     Share { index: 2, value: BigUint::from(383u32) },
    ///     Share { index: 3, value: BigUint::from(1045u32) },
    ///     Share { index: 4, value: BigUint::from(308u32) },
    /// ];
    ///
    /// assert_eq!(ThresholdScheme::merge(&shares, &prime).unwrap(), BigUint::from(954u32));
    /// ```
    pub fn merge(shares: &[Share], prime: &BigUint) -> Result<BigUint, SharingError> {
        let mut seen_indices = std::collections::HashSet::new();
        for share in shares {
            if !seen_indices.insert(share.index) {
                return Err(SharingError::DuplicateIndex);
            }
        }

        let mut secret = BigUint::zero();
        for this in shares {
            // lagrange basis at zero: ∏(i≠j) xi / (xi - xj)
            let mut top = BigUint::one();
            let mut bottom = BigUint::one();
            for other in shares {
                if other.index == this.index {
                    continue;
                }

                top = (top * BigUint::from(other.index)) % prime;

                let difference = BigInt::from(other.index) - BigInt::from(this.index);
                bottom = (bottom * field::normalize(&difference, prime)) % prime;
            }

            let basis = (top * field::mod_inverse(&bottom, prime)?) % prime;
            secret = (secret + &this.value * basis) % prime;
        }

        Ok(secret)
    }
}
