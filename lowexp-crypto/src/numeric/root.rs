use crate::errors::LowExpCryptoError;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Computes `floor(value^(1/degree))` together with an exactness flag.
///
/// Runs Newton iteration on plain integers, so the result stays correct
/// for values far beyond `f64` mantissa precision. The flag is `true` iff
/// `root^degree == value` exactly.
///
/// # Errors
///
/// Returns `LowExpCryptoError::InvalidInput` if `degree` is zero.
///
/// # Example
///
/// ```
/// # use lowexp_crypto::numeric::integer_root;
/// # use num_bigint::BigUint;
/// let (root, exact) = integer_root(&BigUint::from(27u8), 3).unwrap();
/// assert_eq!(root, BigUint::from(3u8));
/// assert!(exact);
///
/// let (root, exact) = integer_root(&BigUint::from(28u8), 3).unwrap();
/// assert_eq!(root, BigUint::from(3u8));
/// assert!(!exact);
/// ```
pub fn integer_root(value: &BigUint, degree: u32) -> Result<(BigUint, bool), LowExpCryptoError> {
    if degree == 0 {
        return Err(LowExpCryptoError::InvalidInput(
            "root degree must be positive".to_string(),
        ));
    }
    if degree == 1 || value.is_zero() || value.is_one() {
        return Ok((value.clone(), true));
    }

    // The seed 2^ceil(bits/degree) is at or above the true root, and every
    // Newton step moves strictly downward until the iterate stabilizes at
    // floor(value^(1/degree)).
    let degree_m1 = degree - 1;
    let seed_bits = value.bits().div_ceil(u64::from(degree));
    let mut root = BigUint::one() << seed_bits;
    loop {
        let next = (&root * degree_m1 + value / root.pow(degree_m1)) / degree;
        if next >= root {
            break;
        }
        root = next;
    }

    let exact = root.pow(degree) == *value;
    Ok((root, exact))
}
