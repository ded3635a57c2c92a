//! The prime-source collaborator.
//!
//! A split that is not handed a modulus asks a [`PrimeSource`] for one. Any
//! `rand::Rng` qualifies: candidates are rejection-sampled from `(min, 2·min)`
//! (Bertrand's postulate guarantees a prime in that range) and screened with
//! Miller–Rabin. Retry behavior lives entirely here, outside the scheme core.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

/// Rounds of Miller–Rabin witnessing; error probability at most 4^-40.
const MILLER_RABIN_ROUNDS: usize = 40;

/// Hands out primes for splits that do not bring their own modulus.
pub trait PrimeSource {
    /// Returns a prime strictly greater than `min`.
    fn prime_above(&mut self, min: &BigUint) -> BigUint;
}

impl<R: Rng> PrimeSource for R {
    fn prime_above(&mut self, min: &BigUint) -> BigUint {
        let two = BigUint::from(2u32);
        if *min < two {
            return two;
        }

        let low = min + BigUint::one();
        let high = min * 2u32;
        loop {
            let candidate = self.gen_biguint_range(&low, &high);
            if is_probable_prime(&candidate, self, MILLER_RABIN_ROUNDS) {
                return candidate;
            }
        }
    }
}

/// Miller–Rabin with uniformly random bases.
///
/// Deterministic for `candidate < 4`; probabilistic above, with error
/// probability at most `4^-rounds` for composite input.
pub fn is_probable_prime<R: Rng>(candidate: &BigUint, rng: &mut R, rounds: usize) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);

    if *candidate < two {
        return false;
    }
    if *candidate == two || *candidate == three {
        return true;
    }
    if (candidate % &two).is_zero() {
        return false;
    }

    // candidate - 1 = odd_part * 2^doublings
    let candidate_minus_one = candidate - &one;
    let doublings = candidate_minus_one
        .trailing_zeros()
        .expect("an even value has trailing zeros");
    let odd_part = &candidate_minus_one >> doublings;

    'witnesses: for _ in 0..rounds {
        let base = rng.gen_biguint_range(&two, &candidate_minus_one);
        let mut acc = base.modpow(&odd_part, candidate);
        if acc == one || acc == candidate_minus_one {
            continue;
        }
        for _ in 1..doublings {
            acc = (&acc * &acc) % candidate;
            if acc == candidate_minus_one {
                continue 'witnesses;
            }
        }
        return false;
    }

    true
}
