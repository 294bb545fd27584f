use btl_ternary::TernaryError;
use thiserror::Error;

/// Errors produced by the cryptographic core.
///
/// All variants describe malformed caller input and are recoverable;
/// callers should reject bad input before it reaches the signature engine.
/// A signature that merely fails to verify is not an error — `verify`
/// returns `false` for that.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("empty seed")]
    EmptySeed,

    #[error("invalid trit width: expected {expected}, got {actual}")]
    InvalidWidth { expected: usize, actual: usize },

    #[error("invalid address length: expected {expected} trytes, got {actual}")]
    InvalidAddressLength { expected: usize, actual: usize },

    #[error(transparent)]
    Ternary(#[from] TernaryError),
}
