use std::fmt;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use btl_ternary::{trits_from_trytes, trits_from_value, trytes_from_trits};

use crate::checksum::ADDRESS_TRYTES;
use crate::curl::{Curl, HASH_LENGTH};
use crate::error::CryptoError;

/// Trit width of the value field inside a bundle entry.
pub const VALUE_TRITS: usize = 81;

/// Trits of each entry absorbed into the bundle sponge: the joint
/// address+value prefix of the entry layout.
pub const ENTRY_PREFIX_TRITS: usize = 162;

/// The signed fields of one transaction, as supplied by bundle assembly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleEntry {
    /// 81-tryte address.
    pub address: String,
    /// Signed transfer value.
    pub value: BigInt,
    /// 27-tryte tag.
    pub tag: String,
    /// 27-tryte bundle nonce.
    pub bundle_nonce: String,
}

/// The 243-trit hash binding a signature to an exact ordered transaction
/// set.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BundleHash {
    trits: [i8; HASH_LENGTH],
}

impl BundleHash {
    /// Raw trit view, as consumed by signing and verification.
    pub fn as_trits(&self) -> &[i8; HASH_LENGTH] {
        &self.trits
    }

    /// Trytes rendering (81 symbols).
    pub fn to_trytes(&self) -> String {
        trytes_from_trits(&self.trits).expect("sponge output is well-formed balanced ternary")
    }

    /// Parse an 81-tryte bundle hash string.
    pub fn from_trytes(trytes: &str) -> Result<Self, CryptoError> {
        if trytes.len() != HASH_LENGTH / 3 {
            return Err(CryptoError::InvalidWidth {
                expected: HASH_LENGTH,
                actual: trytes.len() * 3,
            });
        }
        let raw = trits_from_trytes(trytes)?;
        let mut trits = [0i8; HASH_LENGTH];
        trits.copy_from_slice(&raw);
        Ok(Self { trits })
    }
}

impl fmt::Debug for BundleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BundleHash({})", self.to_trytes())
    }
}

/// Reduce an ordered sequence of bundle entries to a single bundle hash.
///
/// Each entry is rendered as `address ‖ trytes(value, 81 trits) ‖ tag ‖
/// bundle_nonce` and the first [`ENTRY_PREFIX_TRITS`] trits of that layout
/// are absorbed, in entry order, into one sponge. Order is load-bearing:
/// permuting entries changes the hash, which is the integrity property the
/// signature ultimately protects.
pub fn bundle_hash(entries: &[BundleEntry]) -> Result<BundleHash, CryptoError> {
    let mut curl = Curl::new();

    for entry in entries {
        if entry.address.len() != ADDRESS_TRYTES {
            return Err(CryptoError::InvalidAddressLength {
                expected: ADDRESS_TRYTES,
                actual: entry.address.len(),
            });
        }
        let value_trytes = trytes_from_trits(&trits_from_value(&entry.value, VALUE_TRITS))?;
        let layout = format!(
            "{}{}{}{}",
            entry.address, value_trytes, entry.tag, entry.bundle_nonce
        );
        let trits = trits_from_trytes(&layout)?;
        curl.absorb(&trits[..ENTRY_PREFIX_TRITS]);
    }

    let mut trits = [0i8; HASH_LENGTH];
    curl.squeeze(&mut trits);
    Ok(BundleHash { trits })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(address_fill: char, value: i64) -> BundleEntry {
        BundleEntry {
            address: address_fill.to_string().repeat(ADDRESS_TRYTES),
            value: BigInt::from(value),
            tag: "9".repeat(27),
            bundle_nonce: "9".repeat(27),
        }
    }

    #[test]
    fn hash_is_deterministic() {
        let entries = vec![entry('A', 100), entry('B', -100)];
        assert_eq!(
            bundle_hash(&entries).unwrap(),
            bundle_hash(&entries).unwrap()
        );
    }

    #[test]
    fn hash_renders_as_81_trytes() {
        let hash = bundle_hash(&[entry('C', 7)]).unwrap();
        assert_eq!(hash.to_trytes().len(), 81);
    }

    #[test]
    fn entry_order_changes_hash() {
        let forward = bundle_hash(&[entry('A', 1), entry('B', 2)]).unwrap();
        let swapped = bundle_hash(&[entry('B', 2), entry('A', 1)]).unwrap();
        assert_ne!(forward, swapped);
    }

    #[test]
    fn different_addresses_change_hash() {
        assert_ne!(
            bundle_hash(&[entry('A', 1)]).unwrap(),
            bundle_hash(&[entry('B', 1)]).unwrap()
        );
    }

    #[test]
    fn short_address_rejected() {
        let mut bad = entry('A', 1);
        bad.address.truncate(30);
        assert_eq!(
            bundle_hash(&[bad]),
            Err(CryptoError::InvalidAddressLength {
                expected: 81,
                actual: 30
            })
        );
    }

    #[test]
    fn invalid_address_symbol_rejected() {
        let mut bad = entry('A', 1);
        bad.address.replace_range(0..1, "a");
        assert!(bundle_hash(&[bad]).is_err());
    }

    #[test]
    fn trytes_round_trip() {
        let hash = bundle_hash(&[entry('D', 42)]).unwrap();
        let parsed = BundleHash::from_trytes(&hash.to_trytes()).unwrap();
        assert_eq!(hash, parsed);
    }
}
