use num_bigint::BigInt;
use num_traits::Zero;

use btl_crypto::{bundle_hash, BundleEntry, BundleHash};

use crate::error::TransactionError;
use crate::transaction::{Transaction, SIGNATURE_MESSAGE_TRYTES};

/// Bundle nonce marking the first transaction of a bundle.
const FIRST_BUNDLE_NONCE: &str = "DOM999999999999999999999999";

/// Assembles the ordered transactions of one bundle.
///
/// Each entry spreads over as many transactions as its signature needs
/// fragments; the transfer value rides on the first of them and the rest
/// carry zero. `finalize` pads the remaining fields and yields wire-ready
/// transactions.
#[derive(Debug, Default)]
pub struct BundleBuilder {
    drafts: Vec<Draft>,
}

#[derive(Debug)]
struct Draft {
    address: String,
    value: BigInt,
    tag: String,
}

impl BundleBuilder {
    pub fn new() -> Self {
        Self { drafts: Vec::new() }
    }

    /// Number of transactions added so far.
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Add one transfer, spread over `fragment_count` transactions.
    pub fn add_entry(
        &mut self,
        fragment_count: usize,
        address: &str,
        value: BigInt,
        tag: &str,
    ) -> Result<(), TransactionError> {
        check_width("address", address, 81)?;
        check_width("tag", tag, 27)?;

        for i in 0..fragment_count {
            self.drafts.push(Draft {
                address: address.to_string(),
                value: if i == 0 { value.clone() } else { BigInt::zero() },
                tag: tag.to_string(),
            });
        }
        Ok(())
    }

    /// The bundle hash over the entries added so far, in order.
    pub fn hash(&self) -> Result<BundleHash, TransactionError> {
        let entries: Vec<BundleEntry> = self
            .drafts
            .iter()
            .enumerate()
            .map(|(i, draft)| BundleEntry {
                address: draft.address.clone(),
                value: draft.value.clone(),
                tag: draft.tag.clone(),
                bundle_nonce: bundle_nonce_for(i),
            })
            .collect();
        Ok(bundle_hash(&entries)?)
    }

    /// Fill the non-entry fields and produce wire-ready transactions.
    ///
    /// `signature_fragments[i]` becomes transaction `i`'s signature message;
    /// transactions beyond the supplied fragments get an all-`9` message.
    /// Trunk, branch, nonce, and checksum fields are `9`-padded — attaching
    /// a bundle to the ledger graph happens outside this crate.
    pub fn finalize(
        &self,
        signature_fragments: &[String],
    ) -> Result<Vec<Transaction>, TransactionError> {
        if signature_fragments.len() > self.drafts.len() {
            return Err(TransactionError::TooManyFragments {
                fragments: signature_fragments.len(),
                transactions: self.drafts.len(),
            });
        }

        let empty_message = "9".repeat(SIGNATURE_MESSAGE_TRYTES);
        let empty_hash = "9".repeat(81);

        self.drafts
            .iter()
            .enumerate()
            .map(|(i, draft)| {
                let draft_tx = Transaction {
                    hash: String::new(),
                    signature_message: signature_fragments
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| empty_message.clone()),
                    checksum: empty_hash.clone(),
                    address: draft.address.clone(),
                    value: draft.value.clone(),
                    tag: draft.tag.clone(),
                    bundle_nonce: bundle_nonce_for(i),
                    trunk_transaction: empty_hash.clone(),
                    branch_transaction: empty_hash.clone(),
                    transaction_nonce: empty_hash.clone(),
                };
                // Round-trip through the wire form to derive the hash.
                Transaction::from_trytes(&draft_tx.to_trytes()?)
            })
            .collect()
    }
}

fn bundle_nonce_for(index: usize) -> String {
    if index == 0 {
        FIRST_BUNDLE_NONCE.to_string()
    } else {
        "9".repeat(27)
    }
}

fn check_width(field: &'static str, trytes: &str, expected: usize) -> Result<(), TransactionError> {
    if trytes.len() != expected {
        return Err(TransactionError::InvalidFieldLength {
            field,
            expected,
            actual: trytes.len(),
        });
    }
    Ok(())
}
