use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use btl_crypto::{Curl, HASH_LENGTH};
use btl_ternary::{trits_from_trytes, trits_from_value, trytes_from_trits, value_from_trits};

use crate::error::TransactionError;

/// Fixed on-wire width of a transaction.
pub const TRANSACTION_TRYTES: usize = 7047;

/// Trytes in a signature message fragment field.
pub const SIGNATURE_MESSAGE_TRYTES: usize = 6561;

/// Trit width of the value field.
pub const VALUE_TRITS: usize = 81;

// Field boundaries (tryte offsets) of the wire layout.
const CHECKSUM_END: usize = 6642;
const ADDRESS_END: usize = 6723;
const VALUE_END: usize = 6750;
const TAG_END: usize = 6777;
const BUNDLE_NONCE_END: usize = 6804;
const TRUNK_END: usize = 6885;
const BRANCH_END: usize = 6966;

/// A ledger transaction, decoded from its fixed-width trytes representation.
///
/// The wire layout is positional: signature message, checksum, address,
/// value, tag, bundle nonce, then the trunk/branch references and the
/// transaction nonce. `hash` is derived, not stored on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Curl hash of the full transaction trits (81 trytes).
    pub hash: String,
    /// 6561-tryte signature message fragment.
    pub signature_message: String,
    /// 81-tryte checksum field.
    pub checksum: String,
    /// 81-tryte address.
    pub address: String,
    /// Signed transfer value, decoded from the 81-trit value field.
    pub value: BigInt,
    /// 27-tryte tag.
    pub tag: String,
    /// 27-tryte bundle nonce.
    pub bundle_nonce: String,
    /// 81-tryte trunk reference.
    pub trunk_transaction: String,
    /// 81-tryte branch reference.
    pub branch_transaction: String,
    /// 81-tryte transaction nonce.
    pub transaction_nonce: String,
}

impl Transaction {
    /// Decode a transaction from its 7047-tryte wire representation.
    pub fn from_trytes(trytes: &str) -> Result<Self, TransactionError> {
        if trytes.len() != TRANSACTION_TRYTES {
            return Err(TransactionError::InvalidLength {
                expected: TRANSACTION_TRYTES,
                actual: trytes.len(),
            });
        }
        let trits = trits_from_trytes(trytes)?;

        let mut curl = Curl::new();
        curl.absorb(&trits);
        let mut hash_trits = [0i8; HASH_LENGTH];
        curl.squeeze(&mut hash_trits);

        Ok(Self {
            hash: trytes_from_trits(&hash_trits)?,
            signature_message: trytes[..SIGNATURE_MESSAGE_TRYTES].to_string(),
            checksum: trytes[SIGNATURE_MESSAGE_TRYTES..CHECKSUM_END].to_string(),
            address: trytes[CHECKSUM_END..ADDRESS_END].to_string(),
            value: value_from_trits(&trits[ADDRESS_END * 3..VALUE_END * 3]),
            tag: trytes[VALUE_END..TAG_END].to_string(),
            bundle_nonce: trytes[TAG_END..BUNDLE_NONCE_END].to_string(),
            trunk_transaction: trytes[BUNDLE_NONCE_END..TRUNK_END].to_string(),
            branch_transaction: trytes[TRUNK_END..BRANCH_END].to_string(),
            transaction_nonce: trytes[BRANCH_END..].to_string(),
        })
    }

    /// Encode the transaction into its 7047-tryte wire representation.
    ///
    /// Fails when a field does not match its fixed width or the value
    /// exceeds the 81-trit field.
    pub fn to_trytes(&self) -> Result<String, TransactionError> {
        check_field("signature message", &self.signature_message, SIGNATURE_MESSAGE_TRYTES)?;
        check_field("checksum", &self.checksum, 81)?;
        check_field("address", &self.address, 81)?;
        check_field("tag", &self.tag, 27)?;
        check_field("bundle nonce", &self.bundle_nonce, 27)?;
        check_field("trunk transaction", &self.trunk_transaction, 81)?;
        check_field("branch transaction", &self.branch_transaction, 81)?;
        check_field("transaction nonce", &self.transaction_nonce, 81)?;

        let value_trits = trits_from_value(&self.value, VALUE_TRITS);
        if value_trits.len() != VALUE_TRITS {
            return Err(TransactionError::ValueOutOfRange);
        }
        let value_trytes = trytes_from_trits(&value_trits)?;

        Ok(format!(
            "{}{}{}{}{}{}{}{}{}",
            self.signature_message,
            self.checksum,
            self.address,
            value_trytes,
            self.tag,
            self.bundle_nonce,
            self.trunk_transaction,
            self.branch_transaction,
            self.transaction_nonce,
        ))
    }
}

fn check_field(
    field: &'static str,
    trytes: &str,
    expected: usize,
) -> Result<(), TransactionError> {
    if trytes.len() != expected {
        return Err(TransactionError::InvalidFieldLength {
            field,
            expected,
            actual: trytes.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            hash: String::new(),
            signature_message: "9".repeat(SIGNATURE_MESSAGE_TRYTES),
            checksum: "9".repeat(81),
            address: "ADDRESS99".repeat(9),
            value: BigInt::from(-42),
            tag: "TAG".to_string() + &"9".repeat(24),
            bundle_nonce: "9".repeat(27),
            trunk_transaction: "T".repeat(81),
            branch_transaction: "B".repeat(81),
            transaction_nonce: "9".repeat(81),
        }
    }

    #[test]
    fn wire_round_trip() {
        let trytes = sample().to_trytes().unwrap();
        assert_eq!(trytes.len(), TRANSACTION_TRYTES);

        let decoded = Transaction::from_trytes(&trytes).unwrap();
        assert_eq!(decoded.address, sample().address);
        assert_eq!(decoded.value, sample().value);
        assert_eq!(decoded.tag, sample().tag);
        assert_eq!(decoded.to_trytes().unwrap(), trytes);
    }

    #[test]
    fn hash_is_derived_and_stable() {
        let trytes = sample().to_trytes().unwrap();
        let a = Transaction::from_trytes(&trytes).unwrap();
        let b = Transaction::from_trytes(&trytes).unwrap();
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.hash.len(), 81);
    }

    #[test]
    fn different_trytes_different_hash() {
        let mut tx = sample();
        let first = Transaction::from_trytes(&tx.to_trytes().unwrap()).unwrap();
        tx.value = BigInt::from(7);
        let second = Transaction::from_trytes(&tx.to_trytes().unwrap()).unwrap();
        assert_ne!(first.hash, second.hash);
    }

    #[test]
    fn wrong_length_rejected() {
        let err = Transaction::from_trytes("ABC").unwrap_err();
        assert_eq!(
            err,
            TransactionError::InvalidLength {
                expected: TRANSACTION_TRYTES,
                actual: 3
            }
        );
    }

    #[test]
    fn invalid_symbol_rejected() {
        let mut trytes = sample().to_trytes().unwrap();
        trytes.replace_range(0..1, "x");
        assert!(Transaction::from_trytes(&trytes).is_err());
    }

    #[test]
    fn bad_field_width_rejected() {
        let mut tx = sample();
        tx.tag = "SHORT".to_string();
        assert_eq!(
            tx.to_trytes().unwrap_err(),
            TransactionError::InvalidFieldLength {
                field: "tag",
                expected: 27,
                actual: 5
            }
        );
    }

    #[test]
    fn oversized_value_rejected() {
        let mut tx = sample();
        tx.value = BigInt::from(3).pow(82);
        assert_eq!(tx.to_trytes().unwrap_err(), TransactionError::ValueOutOfRange);
    }

    #[test]
    fn negative_value_round_trips() {
        let mut tx = sample();
        tx.value = BigInt::from(-1_000_000_000i64);
        let decoded = Transaction::from_trytes(&tx.to_trytes().unwrap()).unwrap();
        assert_eq!(decoded.value, tx.value);
    }

    #[test]
    fn serde_round_trip() {
        let tx = Transaction::from_trytes(&sample().to_trytes().unwrap()).unwrap();
        let json = serde_json::to_string(&tx).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, parsed);
    }
}
