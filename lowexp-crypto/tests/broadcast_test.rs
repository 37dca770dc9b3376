use lowexp_crypto::attack::{Sample, solve_broadcast};
use lowexp_crypto::errors::LowExpCryptoError;

use num_bigint::BigUint;

/// Three pairwise-coprime 127-bit moduli, each the product of two
/// independent 64-bit primes.
const COPRIME_MODULI: [&str; 3] = [
    "154261180997884220270998659804787494067",
    "162105957104978014461825844914186087787",
    "151850577368097538101019041325367103059",
];

/// These two share a 64-bit prime factor.
const SHARED_FACTOR_MODULI: [&str; 2] = [
    "113449975111694514133581952739667659383",
    "122837314101369865492605672084201660901",
];

fn modulus(text: &str) -> BigUint {
    BigUint::parse_bytes(text.as_bytes(), 10).expect("valid decimal literal")
}

fn capture(message: &BigUint, exponent: u32, modulus: BigUint) -> Sample {
    let ciphertext = message.modpow(&BigUint::from(exponent), &modulus);
    Sample::new(modulus, ciphertext)
}

#[test]
fn broadcast_attack_recovers_the_message() -> Result<(), LowExpCryptoError> {
    let message = BigUint::from_bytes_be(b"hastad reads it");
    let samples: Vec<Sample> = COPRIME_MODULI
        .iter()
        .map(|text| capture(&message, 3, modulus(text)))
        .collect();

    let recovered = solve_broadcast(&samples, 3)?;

    assert_eq!(recovered, b"hastad reads it");
    Ok(())
}

#[test]
fn surplus_samples_are_ignored() -> Result<(), LowExpCryptoError> {
    let message = BigUint::from_bytes_be(b"hastad reads it");
    let mut samples: Vec<Sample> = COPRIME_MODULI
        .iter()
        .map(|text| capture(&message, 3, modulus(text)))
        .collect();
    // a fourth sample never enters the combination, so it may even share
    // factors with the others without breaking the attack
    samples.push(capture(&message, 3, modulus(SHARED_FACTOR_MODULI[0])));

    let recovered = solve_broadcast(&samples, 3)?;

    assert_eq!(recovered, b"hastad reads it");
    Ok(())
}

#[test]
fn too_few_samples_abort_before_combination() {
    let message = BigUint::from_bytes_be(b"hastad reads it");
    let samples: Vec<Sample> = COPRIME_MODULI[..2]
        .iter()
        .map(|text| capture(&message, 3, modulus(text)))
        .collect();

    let err = solve_broadcast(&samples, 3).unwrap_err();

    assert!(matches!(
        err,
        LowExpCryptoError::InsufficientSamples { needed: 3, got: 2 }
    ));
}

#[test]
fn shared_factor_moduli_are_rejected() {
    let message = BigUint::from_bytes_be(b"hastad reads it");
    let samples = vec![
        capture(&message, 3, modulus(SHARED_FACTOR_MODULI[0])),
        capture(&message, 3, modulus(SHARED_FACTOR_MODULI[1])),
        capture(&message, 3, modulus(COPRIME_MODULI[0])),
    ];

    let err = solve_broadcast(&samples, 3).unwrap_err();

    assert!(matches!(err, LowExpCryptoError::InverseNotFound(0)));
}

#[test]
fn mismatched_messages_leave_no_exact_root() {
    // the combination itself succeeds, but the combined value is not m^3
    // for any single m, so the root comes back inexact
    let messages = [
        BigUint::from_bytes_be(b"first secret"),
        BigUint::from_bytes_be(b"second secret"),
        BigUint::from_bytes_be(b"third secret"),
    ];
    let samples: Vec<Sample> = messages
        .iter()
        .zip(COPRIME_MODULI.iter())
        .map(|(message, text)| capture(message, 3, modulus(text)))
        .collect();

    let err = solve_broadcast(&samples, 3).unwrap_err();

    assert!(matches!(err, LowExpCryptoError::NoExactRoot(3)));
}
