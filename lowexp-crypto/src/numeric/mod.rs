//! # Numeric Module
//!
//! Arbitrary-precision number theory behind the attacks: exact integer
//! roots, modular inverses and Chinese Remainder reconstruction.

pub mod crt;
pub mod helper;
pub mod root;

pub use crt::crt_combine;
pub use helper::{extended_gcd, modinv};
pub use root::integer_root;
