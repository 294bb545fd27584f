/// Trits produced or consumed per absorb/squeeze block.
pub const HASH_LENGTH: usize = 243;

/// Width of the full sponge state: three rate-sized lanes.
pub const STATE_LENGTH: usize = 3 * HASH_LENGTH;

const NUMBER_OF_ROUNDS: usize = 27;

/// The Curl S-box, indexed by `a + 3b + 4` for trit pair `(a, b)`.
///
/// This table is normative: every address and signature on the ledger
/// depends on it, so it is reproduced trit-exact from the published
/// Curl-P-27 definition and must never be altered.
const TRUTH_TABLE: [i8; 9] = [1, 0, -1, 1, -1, 0, -1, 1, 0];

/// The ternary sponge underlying all BTL hashing.
///
/// A `Curl` is a plain value: construct one per computation, never share an
/// instance across concurrent operations. `absorb` and `squeeze` mutate the
/// state in place, so per-call isolation is a correctness requirement, not
/// an optimization.
#[derive(Clone)]
pub struct Curl {
    pub(crate) state: [i8; STATE_LENGTH],
}

impl Curl {
    /// A sponge with an all-zero state.
    pub fn new() -> Self {
        Self {
            state: [0; STATE_LENGTH],
        }
    }

    /// Zero the state in place, making the instance fresh for reuse.
    pub fn reset(&mut self) {
        self.state = [0; STATE_LENGTH];
    }

    /// Absorb trits into the sponge.
    ///
    /// Input is written into the rate portion of the state in blocks of up
    /// to [`HASH_LENGTH`] trits, with one permutation after each block. A
    /// final partial block is written as-is; callers in this crate absorb
    /// exact 243-trit multiples except for the fixed 162-trit bundle-entry
    /// prefix.
    pub fn absorb(&mut self, trits: &[i8]) {
        let mut offset = 0;
        loop {
            let end = (offset + HASH_LENGTH).min(trits.len());
            self.state[..end - offset].copy_from_slice(&trits[offset..end]);
            self.transform();
            offset = end;
            if offset >= trits.len() {
                break;
            }
        }
    }

    /// Squeeze trits out of the sponge.
    ///
    /// Copies the rate portion into `out` in blocks of up to
    /// [`HASH_LENGTH`] trits, with one permutation after each extraction.
    pub fn squeeze(&mut self, out: &mut [i8]) {
        let mut offset = 0;
        loop {
            let end = (offset + HASH_LENGTH).min(out.len());
            out[offset..end].copy_from_slice(&self.state[..end - offset]);
            self.transform();
            offset = end;
            if offset >= out.len() {
                break;
            }
        }
    }

    /// One raw permutation step over the full state.
    ///
    /// Public because the address checksum writes trits straight into the
    /// state and applies a single step, bypassing block absorption.
    pub fn transform(&mut self) {
        let mut index = 0;
        for _ in 0..NUMBER_OF_ROUNDS {
            let previous = self.state;
            for trit in self.state.iter_mut() {
                let a = previous[index];
                index = if index < 365 { index + 364 } else { index - 365 };
                let b = previous[index];
                *trit = TRUTH_TABLE[(a + 3 * b + 4) as usize];
            }
        }
    }

    /// Read-only view of the full state.
    pub fn state(&self) -> &[i8; STATE_LENGTH] {
        &self.state
    }
}

impl Default for Curl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(trits: &[i8]) -> [i8; HASH_LENGTH] {
        let mut curl = Curl::new();
        curl.absorb(trits);
        let mut out = [0; HASH_LENGTH];
        curl.squeeze(&mut out);
        out
    }

    #[test]
    fn new_state_is_zero() {
        assert_eq!(Curl::new().state(), &[0; STATE_LENGTH]);
    }

    #[test]
    fn reset_restores_zero_state() {
        let mut curl = Curl::new();
        curl.absorb(&[1; HASH_LENGTH]);
        assert_ne!(curl.state(), &[0; STATE_LENGTH]);
        curl.reset();
        assert_eq!(curl.state(), &[0; STATE_LENGTH]);
    }

    #[test]
    fn absorb_squeeze_is_deterministic() {
        let input = [1; HASH_LENGTH];
        assert_eq!(hash_of(&input), hash_of(&input));
    }

    #[test]
    fn different_inputs_produce_different_hashes() {
        let mut other = [1i8; HASH_LENGTH];
        other[0] = -1;
        assert_ne!(hash_of(&[1; HASH_LENGTH]), hash_of(&other));
    }

    #[test]
    fn output_trits_are_balanced() {
        for trit in hash_of(&[-1; HASH_LENGTH]) {
            assert!((-1..=1).contains(&trit));
        }
    }

    #[test]
    fn multi_block_absorb_differs_from_single_block() {
        let one = [1i8; HASH_LENGTH];
        let two = [1i8; 2 * HASH_LENGTH];
        assert_ne!(hash_of(&one), hash_of(&two));
    }

    #[test]
    fn squeeze_extends_output_stream() {
        let mut curl = Curl::new();
        curl.absorb(&[1; HASH_LENGTH]);
        let mut long = [0; 2 * HASH_LENGTH];
        curl.squeeze(&mut long);

        let mut curl = Curl::new();
        curl.absorb(&[1; HASH_LENGTH]);
        let mut short = [0; HASH_LENGTH];
        curl.squeeze(&mut short);

        // The first block of a longer squeeze matches a standalone squeeze.
        assert_eq!(&long[..HASH_LENGTH], &short[..]);
        assert_ne!(&long[HASH_LENGTH..], &short[..]);
    }

    #[test]
    fn partial_block_absorb_differs_from_full() {
        let trits = [1i8; HASH_LENGTH];
        assert_ne!(hash_of(&trits[..162]), hash_of(&trits));
    }

    #[test]
    fn instances_are_isolated() {
        let mut a = Curl::new();
        let mut b = Curl::new();
        a.absorb(&[1; HASH_LENGTH]);
        assert_eq!(b.state(), &[0; STATE_LENGTH]);
        b.absorb(&[1; HASH_LENGTH]);
        assert_eq!(a.state(), b.state());
    }
}
