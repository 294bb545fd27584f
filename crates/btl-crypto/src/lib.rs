//! Cryptographic core of the BTL ledger.
//!
//! Provides the Curl ternary sponge, the one-time hash-chain signature
//! scheme (key derivation, digests, addresses, signing, verification),
//! bundle hashing, and address checksum helpers.
//!
//! The signature scheme is a ternary Winternitz construction: a private key
//! of 82 × 243-trit fragments signs exactly one 243-trit bundle hash by
//! partially walking each fragment's hash chain, and verification completes
//! the chains to recover the public digest. Key reuse across two distinct
//! bundle hashes leaks enough chain material to forge signatures, so every
//! `(seed, index)` pair must sign at most once — the caller owns that
//! bookkeeping.

pub mod bundle;
pub mod checksum;
pub mod curl;
pub mod error;
pub mod signing;

pub use bundle::{bundle_hash, BundleEntry, BundleHash};
pub use checksum::{
    add_checksum, add_checksum_to_all, is_valid_checksum, no_checksum, no_checksum_from_all,
};
pub use curl::{Curl, HASH_LENGTH, STATE_LENGTH};
pub use error::CryptoError;
pub use signing::{
    recover_digest, verify, Address, Digest, PrivateKey, Signature, CHAIN_ROUNDS,
    CHECKSUM_BUDGET, KEY_FRAGMENTS, KEY_LENGTH, MESSAGE_FRAGMENTS,
};
