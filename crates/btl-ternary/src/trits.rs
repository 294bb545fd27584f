use crate::constants::{TRITS_PER_TRYTE, TRYTE_ALPHABET, TRYTE_TRITS};
use crate::error::TernaryError;

/// Convert a trytes string into its trit sequence.
///
/// Each symbol expands to the three trits of its alphabet table entry,
/// least-significant trit first, so the output has 3× the input length.
pub fn trits_from_trytes(trytes: &str) -> Result<Vec<i8>, TernaryError> {
    let mut trits = Vec::with_capacity(trytes.len() * TRITS_PER_TRYTE);
    for symbol in trytes.chars() {
        let index = TRYTE_ALPHABET
            .find(symbol)
            .ok_or(TernaryError::InvalidSymbol(symbol))?;
        trits.extend_from_slice(&TRYTE_TRITS[index]);
    }
    Ok(trits)
}

/// Convert a trit sequence into its trytes rendering.
///
/// Consumes the input in groups of three. Fails when the length is not a
/// multiple of three, or when a triplet matches no table entry — which can
/// only happen if a trit is outside {-1, 0, 1}, since the table covers all
/// 27 well-formed triplets.
pub fn trytes_from_trits(trits: &[i8]) -> Result<String, TernaryError> {
    if trits.len() % TRITS_PER_TRYTE != 0 {
        return Err(TernaryError::InvalidLength {
            actual: trits.len(),
        });
    }
    let mut trytes = String::with_capacity(trits.len() / TRITS_PER_TRYTE);
    for triplet in trits.chunks_exact(TRITS_PER_TRYTE) {
        let index = TRYTE_TRITS
            .iter()
            .position(|entry| entry[..] == *triplet)
            .ok_or_else(|| first_invalid_trit(triplet))?;
        trytes.push(TRYTE_ALPHABET.as_bytes()[index] as char);
    }
    Ok(trytes)
}

/// Check that every trit in a sequence is in {-1, 0, 1}.
pub fn validate_trits(trits: &[i8]) -> Result<(), TernaryError> {
    match trits.iter().find(|&&t| !(-1..=1).contains(&t)) {
        Some(&bad) => Err(TernaryError::InvalidTritValue(bad)),
        None => Ok(()),
    }
}

/// Add one to a trit sequence in place, balanced-ternary style.
///
/// A trit that overflows past 1 wraps to -1 and carries into the next
/// position. Overflow past the final position is silently discarded, which
/// matches the fixed-width seed-advancement semantics of key derivation.
pub fn increment(trits: &mut [i8]) {
    for trit in trits.iter_mut() {
        *trit += 1;
        if *trit > 1 {
            *trit = -1;
        } else {
            break;
        }
    }
}

fn first_invalid_trit(triplet: &[i8]) -> TernaryError {
    let bad = triplet
        .iter()
        .copied()
        .find(|t| !(-1..=1).contains(t))
        .unwrap_or(triplet[0]);
    TernaryError::InvalidTritValue(bad)
}
