//! Balanced-ternary foundation for the BTL ledger.
//!
//! Everything on the ledger is expressed in balanced ternary: digits
//! ("trits") take values in {-1, 0, 1}, and groups of three trits render as
//! one of 27 tryte symbols. This crate owns the numeral system — the
//! alphabet table, lossless trytes↔trits conversion, and conversion between
//! trit sequences and arbitrary-precision signed integers. Every other BTL
//! crate depends on `btl-ternary`.
//!
//! # Key items
//!
//! - [`TRYTE_ALPHABET`] / [`TRYTE_TRITS`] — the fixed 27-symbol alphabet and
//!   its bijective trit-triplet table
//! - [`trits_from_trytes`] / [`trytes_from_trits`] — symbol conversion
//! - [`value_from_trits`] / [`trits_from_value`] — positional numeral
//!   conversion with arbitrary-precision arithmetic
//! - [`increment`] — in-place balanced-ternary increment with carry

pub mod constants;
pub mod error;
pub mod trits;
pub mod value;

pub use constants::{
    MAX_TRYTE_VALUE, MIN_TRYTE_VALUE, TRITS_PER_TRYTE, TRYTE_ALPHABET, TRYTE_TRITS,
};
pub use error::TernaryError;
pub use trits::{increment, trits_from_trytes, trytes_from_trits, validate_trits};
pub use value::{trits_from_value, value_from_trits};
