use thiserror::Error;

/// Errors produced by ternary conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TernaryError {
    #[error("invalid tryte symbol '{0}'")]
    InvalidSymbol(char),

    #[error("trit sequence length {actual} is not a multiple of 3")]
    InvalidLength { actual: usize },

    #[error("trit value {0} is outside {{-1, 0, 1}}")]
    InvalidTritValue(i8),
}
