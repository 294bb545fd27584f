use btl_ternary::{trits_from_trytes, trytes_from_trits, TRITS_PER_TRYTE};

use crate::curl::{Curl, HASH_LENGTH};
use crate::error::CryptoError;

/// Trytes in a bare address.
pub const ADDRESS_TRYTES: usize = 81;

/// Trytes appended by the checksum.
pub const CHECKSUM_TRYTES: usize = 9;

/// Append the 9-tryte checksum to an 81-tryte address.
///
/// The address trits are written directly into a fresh sponge state and a
/// single raw permutation is applied; the checksum is the first 9 trytes of
/// the resulting state.
pub fn add_checksum(address: &str) -> Result<String, CryptoError> {
    if address.len() != ADDRESS_TRYTES {
        return Err(CryptoError::InvalidAddressLength {
            expected: ADDRESS_TRYTES,
            actual: address.len(),
        });
    }
    let trits = trits_from_trytes(address)?;

    let mut curl = Curl::new();
    curl.state[..HASH_LENGTH].copy_from_slice(&trits);
    curl.transform();

    let checksum = trytes_from_trits(&curl.state[..CHECKSUM_TRYTES * TRITS_PER_TRYTE])?;
    Ok(format!("{address}{checksum}"))
}

/// Collection form of [`add_checksum`].
pub fn add_checksum_to_all(addresses: &[String]) -> Result<Vec<String>, CryptoError> {
    addresses.iter().map(|a| add_checksum(a)).collect()
}

/// Strip the checksum from an address, returning the bare 81 trytes.
///
/// Accepts either a bare address or one carrying a checksum.
pub fn no_checksum(address: &str) -> Result<String, CryptoError> {
    if address.len() != ADDRESS_TRYTES && address.len() != ADDRESS_TRYTES + CHECKSUM_TRYTES {
        return Err(CryptoError::InvalidAddressLength {
            expected: ADDRESS_TRYTES + CHECKSUM_TRYTES,
            actual: address.len(),
        });
    }
    Ok(address[..ADDRESS_TRYTES].to_string())
}

/// Collection form of [`no_checksum`].
pub fn no_checksum_from_all(addresses: &[String]) -> Result<Vec<String>, CryptoError> {
    addresses.iter().map(|a| no_checksum(a)).collect()
}

/// Check that a 90-tryte address carries the checksum of its first 81
/// trytes.
pub fn is_valid_checksum(address: &str) -> Result<bool, CryptoError> {
    let bare = no_checksum(address)?;
    Ok(add_checksum(&bare)? == address)
}
