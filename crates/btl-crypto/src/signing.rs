use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use btl_ternary::{increment, trits_from_trytes, trytes_from_trits, validate_trits};

use crate::curl::{Curl, HASH_LENGTH};
use crate::error::CryptoError;

/// Fragments in a private key or signature: 81 message fragments plus one
/// checksum fragment.
pub const KEY_FRAGMENTS: usize = 82;

/// Fragments consumed by the 81 message triplets of a bundle hash.
pub const MESSAGE_FRAGMENTS: usize = 81;

/// Total trit length of a private key or signature.
pub const KEY_LENGTH: usize = KEY_FRAGMENTS * HASH_LENGTH;

/// Full hash-chain length of one message fragment.
pub const CHAIN_ROUNDS: usize = 26;

/// Fixed total chain budget: `(HASH_LENGTH / 3) * (MAX - MIN tryte value)`.
///
/// Signing spends `13 - v` rounds per message fragment and the checksum
/// fragment absorbs the residue, so every signature accounts for exactly
/// this many rounds. The fixed total is what binds a signature to both the
/// message and the complete key.
pub const CHECKSUM_BUDGET: usize = MESSAGE_FRAGMENTS * CHAIN_ROUNDS;

/// A one-time private key: 82 fragments of 243 trits, derived from a seed
/// and index.
///
/// Reuse is fatal: signing two different bundle hashes with one key exposes
/// chain material on both sides of every differing fragment, enough to
/// forge arbitrary signatures for the key's address. The engine cannot
/// detect reuse — callers own that bookkeeping.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    trits: Vec<i8>,
}

/// The fully-chained public commitment to a private key: 243 trits.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest {
    trits: [i8; HASH_LENGTH],
}

/// A 243-trit ledger address, rendered as 81 trytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    trits: [i8; HASH_LENGTH],
}

/// A one-time signature: 82 fragments positionally aligned with the private
/// key fragments that produced them.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    trits: Vec<i8>,
}

impl PrivateKey {
    /// Derive the one-time key for `(seed, index)`.
    ///
    /// The seed is advanced by `index` balanced-ternary increments, hashed
    /// into a subseed, expanded to 82 fragments, and each fragment is then
    /// self-hashed once. Deterministic: the same pair always yields the
    /// same key.
    ///
    /// Advancing costs O(index); callers deriving many sequential indices
    /// should advance a cached seed copy with [`btl_ternary::increment`]
    /// instead of re-deriving from zero each time.
    pub fn derive(seed: &[i8], index: usize) -> Result<Self, CryptoError> {
        if seed.is_empty() {
            return Err(CryptoError::EmptySeed);
        }
        validate_trits(seed)?;

        let mut preimage = seed.to_vec();
        for _ in 0..index {
            increment(&mut preimage);
        }

        let mut curl = Curl::new();
        let mut subseed = [0i8; HASH_LENGTH];
        curl.absorb(&preimage);
        curl.squeeze(&mut subseed);

        let mut key = vec![0i8; KEY_LENGTH];
        curl.reset();
        curl.absorb(&subseed);
        curl.squeeze(&mut key);

        // Self-hash each fragment in place so no fragment reveals the raw
        // squeeze stream of its neighbors.
        for offset in (0..KEY_LENGTH).step_by(HASH_LENGTH) {
            curl.reset();
            curl.absorb(&key[offset..offset + HASH_LENGTH]);
            curl.squeeze(&mut key[offset..offset + HASH_LENGTH]);
        }

        Ok(Self { trits: key })
    }

    /// Derive the public digest committing to this key.
    ///
    /// Each message fragment is chained [`CHAIN_ROUNDS`] times and the
    /// checksum fragment [`CHECKSUM_BUDGET`] times, for a constant 4212
    /// chain rounds regardless of key content; the chained fragments are
    /// folded into one master sponge.
    pub fn digest(&self) -> Digest {
        let mut master = Curl::new();
        let mut chain = Curl::new();
        let mut fragment = [0i8; HASH_LENGTH];

        for i in 0..MESSAGE_FRAGMENTS {
            fragment.copy_from_slice(self.fragment(i));
            for _ in 0..CHAIN_ROUNDS {
                chain_once(&mut chain, &mut fragment);
            }
            master.absorb(&fragment);
        }

        fragment.copy_from_slice(self.fragment(KEY_FRAGMENTS - 1));
        for _ in 0..CHECKSUM_BUDGET {
            chain_once(&mut chain, &mut fragment);
        }
        master.absorb(&fragment);

        let mut trits = [0i8; HASH_LENGTH];
        master.squeeze(&mut trits);
        Digest { trits }
    }

    /// Sign a 243-trit bundle hash.
    ///
    /// Message fragment `i` is chained `13 - v_i` times, where `v_i` is the
    /// signed value of the hash's `i`-th trit triplet; the checksum fragment
    /// absorbs the remaining budget. Works on a copy — the key itself is
    /// never mutated.
    ///
    /// Precondition: a key must sign at most one distinct bundle hash, ever.
    pub fn sign(&self, bundle_hash: &[i8]) -> Result<Signature, CryptoError> {
        check_hash(bundle_hash)?;

        let mut signature = self.trits.clone();
        let mut chain = Curl::new();
        let mut remaining = CHECKSUM_BUDGET as i32;

        for i in 0..MESSAGE_FRAGMENTS {
            let rounds = 13 - triplet_value(bundle_hash, i);
            remaining -= rounds;
            chain_fragment(&mut chain, &mut signature, i, rounds);
        }
        chain_fragment(&mut chain, &mut signature, KEY_FRAGMENTS - 1, remaining);

        Ok(Signature { trits: signature })
    }

    /// Raw trit view, 82 fragments of 243 trits.
    pub fn as_trits(&self) -> &[i8] {
        &self.trits
    }

    fn fragment(&self, index: usize) -> &[i8] {
        &self.trits[index * HASH_LENGTH..(index + 1) * HASH_LENGTH]
    }
}

impl Digest {
    /// The single-digest address for this commitment.
    pub fn address(&self) -> Address {
        Address::from_digests(std::slice::from_ref(self))
    }

    /// Raw trit view.
    pub fn as_trits(&self) -> &[i8; HASH_LENGTH] {
        &self.trits
    }

    /// Trytes rendering (81 symbols).
    pub fn to_trytes(&self) -> String {
        render_trytes(&self.trits)
    }
}

impl Address {
    /// Fold one or more digests into an address.
    ///
    /// Digests are absorbed in order into a fresh sponge; multiple
    /// security-level digests collapse into the same 243-trit address
    /// space as the common single-digest case.
    pub fn from_digests(digests: &[Digest]) -> Self {
        let mut curl = Curl::new();
        for digest in digests {
            curl.absorb(&digest.trits);
        }
        let mut trits = [0i8; HASH_LENGTH];
        curl.squeeze(&mut trits);
        Self { trits }
    }

    /// Parse an 81-tryte address string.
    pub fn from_trytes(trytes: &str) -> Result<Self, CryptoError> {
        if trytes.len() != HASH_LENGTH / 3 {
            return Err(CryptoError::InvalidAddressLength {
                expected: HASH_LENGTH / 3,
                actual: trytes.len(),
            });
        }
        let raw = trits_from_trytes(trytes)?;
        let mut trits = [0i8; HASH_LENGTH];
        trits.copy_from_slice(&raw);
        Ok(Self { trits })
    }

    /// Trytes rendering (81 symbols).
    pub fn to_trytes(&self) -> String {
        render_trytes(&self.trits)
    }

    /// Raw trit view.
    pub fn as_trits(&self) -> &[i8; HASH_LENGTH] {
        &self.trits
    }
}

impl Signature {
    /// Reassemble a signature from its raw trits (82 × 243).
    pub fn from_trits(trits: Vec<i8>) -> Result<Self, CryptoError> {
        if trits.len() != KEY_LENGTH {
            return Err(CryptoError::InvalidWidth {
                expected: KEY_LENGTH,
                actual: trits.len(),
            });
        }
        validate_trits(&trits)?;
        Ok(Self { trits })
    }

    /// Parse a 6642-tryte signature string.
    pub fn from_trytes(trytes: &str) -> Result<Self, CryptoError> {
        Self::from_trits(trits_from_trytes(trytes)?)
    }

    /// Trytes rendering (6642 symbols).
    pub fn to_trytes(&self) -> String {
        render_trytes(&self.trits)
    }

    /// Raw trit view.
    pub fn as_trits(&self) -> &[i8] {
        &self.trits
    }
}

/// Reconstruct the key digest from a bundle hash and its signature.
///
/// Mirrors [`PrivateKey::digest`] from the signature side: message fragment
/// `i` is chained `13 + v_i` times — the complement, within the fixed
/// 26-round budget, of the `13 - v_i` rounds the signer already spent — and
/// the checksum fragment is chained through the residual budget. A valid
/// signature therefore lands every fragment on its fully-chained value and
/// reproduces the signer's digest exactly.
pub fn recover_digest(bundle_hash: &[i8], signature: &Signature) -> Result<Digest, CryptoError> {
    check_hash(bundle_hash)?;

    let mut fragments = signature.trits.clone();
    let mut master = Curl::new();
    let mut chain = Curl::new();
    let mut remaining = CHECKSUM_BUDGET as i32;

    for i in 0..MESSAGE_FRAGMENTS {
        let rounds = 13 + triplet_value(bundle_hash, i);
        remaining -= rounds;
        chain_fragment(&mut chain, &mut fragments, i, rounds);
        master.absorb(&fragments[i * HASH_LENGTH..(i + 1) * HASH_LENGTH]);
    }
    chain_fragment(&mut chain, &mut fragments, KEY_FRAGMENTS - 1, remaining);
    master.absorb(&fragments[KEY_LENGTH - HASH_LENGTH..]);

    let mut trits = [0i8; HASH_LENGTH];
    master.squeeze(&mut trits);
    Ok(Digest { trits })
}

/// Check a signature against a claimed address and bundle hash.
///
/// Recovers the digest, derives its single-digest address, and compares.
/// Malformed input and mismatched signatures both yield `false` — "does not
/// verify" is an expected outcome, never an error. The address comparison
/// does not short-circuit on the first differing trit.
pub fn verify(address: &Address, bundle_hash: &[i8], signature: &Signature) -> bool {
    let digest = match recover_digest(bundle_hash, signature) {
        Ok(digest) => digest,
        Err(_) => return false,
    };
    let candidate = digest.address();

    let mut diff = 0i8;
    for (a, b) in candidate.trits.iter().zip(address.trits.iter()) {
        diff |= a ^ b;
    }
    diff == 0
}

/// Signed value of triplet `i` of a bundle hash, in [-13, 13].
fn triplet_value(hash: &[i8], i: usize) -> i32 {
    i32::from(hash[3 * i]) + 3 * i32::from(hash[3 * i + 1]) + 9 * i32::from(hash[3 * i + 2])
}

/// One absorb+squeeze chain step over a 243-trit fragment.
fn chain_once(chain: &mut Curl, fragment: &mut [i8]) {
    chain.reset();
    chain.absorb(fragment);
    chain.squeeze(fragment);
}

fn chain_fragment(chain: &mut Curl, trits: &mut [i8], index: usize, rounds: i32) {
    let fragment = &mut trits[index * HASH_LENGTH..(index + 1) * HASH_LENGTH];
    for _ in 0..rounds {
        chain_once(chain, fragment);
    }
}

fn check_hash(bundle_hash: &[i8]) -> Result<(), CryptoError> {
    if bundle_hash.len() != HASH_LENGTH {
        return Err(CryptoError::InvalidWidth {
            expected: HASH_LENGTH,
            actual: bundle_hash.len(),
        });
    }
    validate_trits(bundle_hash)?;
    Ok(())
}

fn render_trytes(trits: &[i8]) -> String {
    // Fragment and state trits only ever come from the sponge or validated
    // input; a conversion failure here is a broken internal invariant.
    trytes_from_trits(trits).expect("internal trits are well-formed balanced ternary")
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(<redacted>)")
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}...)", &self.to_trytes()[..9])
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_trytes())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_trytes())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}...)", &self.to_trytes()[..9])
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_trytes())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let trytes = String::deserialize(deserializer)?;
        Self::from_trytes(&trytes).map_err(de::Error::custom)
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_trytes())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let trytes = String::deserialize(deserializer)?;
        Self::from_trytes(&trytes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btl_ternary::TernaryError;

    fn seed() -> Vec<i8> {
        trits_from_trytes(&"TEST9SEED9".repeat(8)).unwrap()
    }

    #[test]
    fn empty_seed_rejected() {
        assert_eq!(PrivateKey::derive(&[], 0), Err(CryptoError::EmptySeed));
    }

    #[test]
    fn malformed_seed_rejected() {
        assert_eq!(
            PrivateKey::derive(&[0, 3, 0], 0),
            Err(CryptoError::Ternary(TernaryError::InvalidTritValue(3)))
        );
    }

    #[test]
    fn key_has_82_fragments() {
        let key = PrivateKey::derive(&seed(), 0).unwrap();
        assert_eq!(key.as_trits().len(), KEY_LENGTH);
        assert_eq!(KEY_LENGTH, 19926);
    }

    #[test]
    fn budget_constants_are_consistent() {
        assert_eq!(CHECKSUM_BUDGET, 2106);
        assert_eq!(MESSAGE_FRAGMENTS * CHAIN_ROUNDS, CHECKSUM_BUDGET);
        assert_eq!(KEY_FRAGMENTS, MESSAGE_FRAGMENTS + 1);
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = PrivateKey::derive(&seed(), 3).unwrap();
        let b = PrivateKey::derive(&seed(), 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn indices_yield_distinct_keys() {
        let a = PrivateKey::derive(&seed(), 0).unwrap();
        let b = PrivateKey::derive(&seed(), 1).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn sign_rejects_wrong_hash_width() {
        let key = PrivateKey::derive(&seed(), 0).unwrap();
        assert_eq!(
            key.sign(&[0; 81]),
            Err(CryptoError::InvalidWidth {
                expected: HASH_LENGTH,
                actual: 81
            })
        );
    }

    #[test]
    fn signature_length_enforced() {
        assert_eq!(
            Signature::from_trits(vec![0; 100]),
            Err(CryptoError::InvalidWidth {
                expected: KEY_LENGTH,
                actual: 100
            })
        );
    }

    #[test]
    fn verify_is_false_on_malformed_hash() {
        let key = PrivateKey::derive(&seed(), 0).unwrap();
        let address = key.digest().address();
        let signature = key.sign(&[0; HASH_LENGTH]).unwrap();
        assert!(!verify(&address, &[0; 81], &signature));
    }

    #[test]
    fn private_key_debug_is_redacted() {
        let key = PrivateKey::derive(&seed(), 0).unwrap();
        assert_eq!(format!("{key:?}"), "PrivateKey(<redacted>)");
    }

    #[test]
    fn address_trytes_round_trip() {
        let address = PrivateKey::derive(&seed(), 0).unwrap().digest().address();
        let parsed = Address::from_trytes(&address.to_trytes()).unwrap();
        assert_eq!(address, parsed);
        assert_eq!(address.to_trytes().len(), 81);
    }

    #[test]
    fn address_serde_round_trip() {
        let address = PrivateKey::derive(&seed(), 0).unwrap().digest().address();
        let json = serde_json::to_string(&address).unwrap();
        let parsed: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(address, parsed);
    }

    #[test]
    fn triplet_values_cover_tryte_range() {
        assert_eq!(triplet_value(&[1, 1, 1], 0), 13);
        assert_eq!(triplet_value(&[-1, -1, -1], 0), -13);
        assert_eq!(triplet_value(&[0, 0, 0], 0), 0);
        assert_eq!(triplet_value(&[0, 0, 0, -1, 1, 1], 1), 11);
    }
}
