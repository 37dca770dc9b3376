#[derive(thiserror::Error, Debug)]
pub enum LowExpCryptoError {
    /// Error when the root extractor is called with a zero degree.
    #[error("InvalidInput: {0}")]
    InvalidInput(String),
    /// Error when fewer ciphertext samples are supplied than the exponent requires.
    #[error("Need at least {needed} samples for the broadcast attack, got {got}")]
    InsufficientSamples { needed: usize, got: usize },
    /// Error when a modulus shares a factor with the rest of the sample set.
    #[error("Modular inverse does not exist for sample {0}; moduli are not pairwise coprime")]
    InverseNotFound(usize),
    #[error("Recovered value is not an exact degree-{0} power")]
    NoExactRoot(u32),
}
