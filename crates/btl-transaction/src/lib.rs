//! Transaction objects and bundle assembly for the BTL ledger.
//!
//! Structural glue over `btl-crypto`: the fixed-offset 7047-tryte wire
//! encoding of a transaction, the builder that spreads transfers over
//! signature fragments, token unit conversion, and the ASCII⇄trytes
//! convenience encoding. This crate owns the field-offset constants; the
//! cryptographic core only ever sees raw trits and tryte strings.

pub mod ascii;
pub mod builder;
pub mod error;
pub mod transaction;
pub mod units;

pub use builder::BundleBuilder;
pub use error::TransactionError;
pub use transaction::{Transaction, SIGNATURE_MESSAGE_TRYTES, TRANSACTION_TRYTES};
pub use units::{convert, Unit};
