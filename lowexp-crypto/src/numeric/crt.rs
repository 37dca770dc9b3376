use crate::errors::LowExpCryptoError;
use crate::numeric::helper::modinv;

use num_bigint::BigUint;
use num_traits::Zero;

/// Combines ordered `(modulus, residue)` pairs into the unique residue
/// modulo the product of all moduli, by the Chinese Remainder Theorem.
///
/// The reconstruction is only meaningful when the moduli are pairwise
/// coprime. A shared factor surfaces as a missing modular inverse and is
/// reported as `InverseNotFound` carrying the offending pair index.
pub fn crt_combine(pairs: &[(BigUint, BigUint)]) -> Result<BigUint, LowExpCryptoError> {
    let product: BigUint = pairs.iter().map(|(modulus, _)| modulus).product();

    let mut combined = BigUint::zero();
    for (index, (modulus, residue)) in pairs.iter().enumerate() {
        // exact division: modulus divides the product by construction
        let partial = &product / modulus;
        let inverse =
            modinv(&partial, modulus).ok_or(LowExpCryptoError::InverseNotFound(index))?;
        combined += residue * &partial * inverse;
    }

    Ok(combined % product)
}
