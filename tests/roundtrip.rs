//! Property-based tests for secret-split
//!
//! This test suite uses quickcheck to verify the split/merge round trips
//! across random secrets, quorum shapes, and share selections.
//!
//! Run with: cargo test --test roundtrip

use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::thread_rng;
use secret_split::{AdditiveScheme, ThresholdScheme};

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
struct ValidQuorum {
    threshold: usize,
    total_shares: usize,
}

impl Arbitrary for ValidQuorum {
    fn arbitrary(g: &mut Gen) -> Self {
        // keep share counts small enough that splits stay cheap
        let total_shares = (usize::arbitrary(g) % 9) + 2; // 2..=10
        let threshold = (usize::arbitrary(g) % total_shares) + 1; // 1..=total_shares

        ValidQuorum {
            threshold,
            total_shares,
        }
    }
}

#[quickcheck]
fn prop_any_sufficient_quorum_recovers_the_secret(secret: u64, quorum: ValidQuorum) -> bool {
    let secret = BigUint::from(secret);
    let scheme = ThresholdScheme::new(quorum.threshold, quorum.total_shares).unwrap();

    let (shares, prime) = scheme.split(&secret, None, &mut thread_rng()).unwrap();

    let tail = &shares[shares.len() - quorum.threshold..];
    ThresholdScheme::merge(tail, &prime).unwrap() == secret
        && ThresholdScheme::merge(&shares, &prime).unwrap() == secret
}

#[quickcheck]
fn prop_distinct_quorums_agree(secret: u64, quorum: ValidQuorum) -> bool {
    let secret = BigUint::from(secret);
    let scheme = ThresholdScheme::new(quorum.threshold, quorum.total_shares).unwrap();

    let (shares, prime) = scheme.split(&secret, None, &mut thread_rng()).unwrap();

    let head = &shares[..quorum.threshold];
    let tail = &shares[shares.len() - quorum.threshold..];
    ThresholdScheme::merge(head, &prime).unwrap() == ThresholdScheme::merge(tail, &prime).unwrap()
}

#[quickcheck]
fn prop_generated_prime_dominates_secret_and_count(secret: u64, quorum: ValidQuorum) -> bool {
    let secret = BigUint::from(secret);
    let scheme = ThresholdScheme::new(quorum.threshold, quorum.total_shares).unwrap();

    let (shares, prime) = scheme.split(&secret, None, &mut thread_rng()).unwrap();

    prime > secret
        && prime > BigUint::from(quorum.total_shares)
        && shares.iter().all(|share| share.value < prime)
}

#[quickcheck]
fn prop_additive_full_quorum_round_trips(secret: u64, headroom: u64, holders: u8) -> bool {
    let holders = usize::from(holders % 12) + 1; // 1..=12
    let secret = BigUint::from(secret);
    // any modulus strictly above the secret works; no prime required
    let modulus = &secret + BigUint::from(headroom) + BigUint::from(1u32);

    let scheme = AdditiveScheme::new(modulus, holders).unwrap();
    let shares = scheme.split(&secret, &mut thread_rng());

    shares.len() == holders && scheme.merge(&shares) == secret
}
