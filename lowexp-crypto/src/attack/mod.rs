//! # Attack Module
//!
//! Small-public-exponent attacks against textbook RSA: the direct e-th
//! root attack and the Hastad broadcast attack.

use crate::errors::LowExpCryptoError;
use crate::numeric::{crt_combine, integer_root};

use num_bigint::BigUint;
use num_traits::Zero;

/// One captured ciphertext together with the public modulus it was
/// produced under.
#[derive(Debug, Clone)]
pub struct Sample {
    pub modulus: BigUint,
    pub ciphertext: BigUint,
}

impl Sample {
    pub fn new(modulus: BigUint, ciphertext: BigUint) -> Self {
        Self { modulus, ciphertext }
    }
}

/// Direct integer root attack.
///
/// When the message is small enough that `m^e < n`, encryption never wraps
/// the modulus, so the ciphertext is `m^e` over the plain integers and the
/// message is recovered as its exact e-th root.
///
/// # Errors
///
/// `NoExactRoot` when the ciphertext is not a perfect e-th power, the
/// expected outcome for messages large enough to wrap. Diagnostics and
/// printing are the caller's concern.
pub fn solve_direct(sample: &Sample, exponent: u32) -> Result<Vec<u8>, LowExpCryptoError> {
    let (root, exact) = integer_root(&sample.ciphertext, exponent)?;
    if !exact {
        return Err(LowExpCryptoError::NoExactRoot(exponent));
    }
    Ok(plaintext_bytes(&root))
}

/// Hastad broadcast attack.
///
/// Given the same message encrypted under `exponent` distinct
/// pairwise-coprime moduli, reconstructs `m^e` over the integers via the
/// Chinese Remainder Theorem and takes its exact e-th root. Samples beyond
/// the first `exponent` are ignored.
///
/// # Errors
///
/// * `InsufficientSamples` when fewer than `exponent` samples are supplied;
///   no combination is attempted.
/// * `InverseNotFound` when the moduli are not pairwise coprime.
/// * `NoExactRoot` when the combined value is not a perfect e-th power,
///   which points at mismatched or invalid input samples.
pub fn solve_broadcast(samples: &[Sample], exponent: u32) -> Result<Vec<u8>, LowExpCryptoError> {
    let needed = exponent as usize;
    if samples.len() < needed {
        return Err(LowExpCryptoError::InsufficientSamples {
            needed,
            got: samples.len(),
        });
    }

    let pairs: Vec<(BigUint, BigUint)> = samples[..needed]
        .iter()
        .map(|sample| (sample.modulus.clone(), sample.ciphertext.clone()))
        .collect();
    let combined = crt_combine(&pairs)?;

    let (root, exact) = integer_root(&combined, exponent)?;
    if !exact {
        return Err(LowExpCryptoError::NoExactRoot(exponent));
    }
    Ok(plaintext_bytes(&root))
}

/// Minimal big-endian encoding of a recovered message.
///
/// Zero encodes to an empty byte string; any positive value encodes to its
/// big-endian bytes with no leading zero byte.
pub fn plaintext_bytes(message: &BigUint) -> Vec<u8> {
    if message.is_zero() {
        return Vec::new();
    }
    message.to_bytes_be()
}
