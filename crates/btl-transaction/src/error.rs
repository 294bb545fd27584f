use btl_crypto::CryptoError;
use btl_ternary::TernaryError;
use thiserror::Error;

/// Errors produced by transaction encoding and assembly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("invalid transaction length: expected {expected} trytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid {field} length: expected {expected} trytes, got {actual}")]
    InvalidFieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("value does not fit the 81-trit value field")]
    ValueOutOfRange,

    #[error("signature fragment count {fragments} exceeds transaction count {transactions}")]
    TooManyFragments {
        fragments: usize,
        transactions: usize,
    },

    #[error("character '{0}' is not representable as a tryte pair")]
    UnrepresentableChar(char),

    #[error("tryte pair '{0}' decodes outside the byte range")]
    InvalidTrytePair(String),

    #[error("ascii trytes length {0} is odd")]
    OddTrytesLength(usize),

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error(transparent)]
    Ternary(#[from] TernaryError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
