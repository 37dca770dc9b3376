use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use std::mem;

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut r, mut rn) = (a.clone(), b.clone());
    let (mut x, mut xn) = (BigInt::one(), BigInt::zero());
    let (mut y, mut yn) = (BigInt::zero(), BigInt::one());
    while !rn.is_zero() {
        let quo = &r / &rn;
        mem::swap(&mut r, &mut rn);
        mem::swap(&mut x, &mut xn);
        mem::swap(&mut y, &mut yn);
        rn -= &quo * &r;
        xn -= &quo * &x;
        yn -= &quo * &y;
    }
    (r, x, y)
}

/// Modular inverse of `a` mod `modulus`, if it exists.
///
/// The inverse exists iff `gcd(a, modulus) == 1`; the returned value is
/// normalized into `[0, modulus)`.
pub fn modinv(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    let m = BigInt::from(modulus.clone());
    let (g, x, _) = extended_gcd(&BigInt::from(a.clone()), &m);
    if !g.is_one() {
        return None;
    }
    // x may be negative; mod_floor maps it into [0, m)
    x.mod_floor(&m).to_biguint()
}
